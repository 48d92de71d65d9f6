//! Selector literal classification.
//!
//! Drives the `zustand-prefer-use-shallow` rule: a selector that constructs a
//! fresh object or array literal on every call defeats referential-equality
//! re-render avoidance unless wrapped in the shallow-equality adapter.

use crate::normalize::skip_wrappers;
use crate::selector::{selector_function, sole_return_expression};
use storelint_ast::{NodeArena, NodeIndex, SyntaxKind};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LiteralShape {
    /// The selector is already a call to the shallow-equality adapter; the
    /// desired pattern, never reported.
    AlreadyWrapped,
    /// Not a function literal; cannot be analyzed.
    NotAFunction,
    /// Returns an object literal.
    ObjectLiteral,
    /// Returns an array literal.
    ArrayLiteral,
    /// Anything else, including bodies whose return cannot be extracted.
    Other,
}

/// Is `index` (after normalization) a call to the configured adapter?
///
/// Holds even when the adapter call sits behind a type assertion, since both
/// the argument and the callee are normalized first.
pub fn is_shallow_adapter_call(arena: &NodeArena, index: NodeIndex, adapter_name: &str) -> bool {
    let normalized = skip_wrappers(arena, index);
    let Some(call) = arena.get_call_expr(normalized) else {
        return false;
    };
    let callee = skip_wrappers(arena, call.expression);
    arena.identifier_text(callee) == Some(adapter_name)
}

/// Classifies a hook call's selector argument for the shallow-wrapper rule.
pub fn classify_selector_literal(
    arena: &NodeArena,
    argument: NodeIndex,
    adapter_name: &str,
    check_object_literal: bool,
    check_array_literal: bool,
) -> LiteralShape {
    if is_shallow_adapter_call(arena, argument, adapter_name) {
        return LiteralShape::AlreadyWrapped;
    }
    let Some((_, function)) = selector_function(arena, argument) else {
        return LiteralShape::NotAFunction;
    };
    let Some(returned) = sole_return_expression(arena, function) else {
        return LiteralShape::Other;
    };

    match arena.kind(skip_wrappers(arena, returned)) {
        Some(SyntaxKind::ObjectLiteralExpression) if check_object_literal => {
            LiteralShape::ObjectLiteral
        }
        Some(SyntaxKind::ArrayLiteralExpression) if check_array_literal => {
            LiteralShape::ArrayLiteral
        }
        _ => LiteralShape::Other,
    }
}
