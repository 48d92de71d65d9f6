//! Selector function extraction shared by the shape analyzers.
//!
//! Only function literals with locally-determinable return shapes are
//! followed. Named function references, and bodies with anything other than
//! a direct expression or a single `return <expr>;` statement, cannot be
//! analyzed without non-local reasoning and are declined.

use crate::normalize::skip_wrappers;
use storelint_ast::{FunctionData, NodeArena, NodeIndex, SyntaxKind};

/// The normalized selector argument as a function literal, if it is one.
pub fn selector_function<'a>(
    arena: &'a NodeArena,
    argument: NodeIndex,
) -> Option<(NodeIndex, &'a FunctionData)> {
    let normalized = skip_wrappers(arena, argument);
    if !arena.kind(normalized)?.is_function_literal() {
        return None;
    }
    arena.get_function(normalized).map(|f| (normalized, f))
}

/// Name of the function's sole parameter; `None` unless there is exactly one
/// parameter and it is a plain identifier.
pub fn single_parameter_name<'a>(
    arena: &'a NodeArena,
    function: &FunctionData,
) -> Option<&'a str> {
    let [parameter] = function.parameters.as_slice() else {
        return None;
    };
    arena.identifier_text(*parameter)
}

/// The function's sole return expression.
///
/// An expression body is its own return expression. A block body qualifies
/// only when it holds exactly one statement and that statement is a `return`
/// with an argument; any other block shape returns `None`.
pub fn sole_return_expression(arena: &NodeArena, function: &FunctionData) -> Option<NodeIndex> {
    if arena.kind(function.body)? != SyntaxKind::Block {
        return Some(function.body);
    }
    let block = arena.get_block(function.body)?;
    let [statement] = block.statements.as_slice() else {
        return None;
    };
    let ret = arena.get_return(*statement)?;
    if ret.expression.is_none() {
        return None;
    }
    Some(ret.expression)
}
