//! Pre-order document-order traversal.
//!
//! One linear walk per file drives every analysis; the visitor closure is
//! called on each node before its children, so call expressions arrive in
//! source order.

use crate::arena::{NodeArena, NodeIndex};
use crate::node::SyntaxKind;

/// Recursively walks an expression or statement subtree in pre-order,
/// calling `f` on every node.
pub fn walk_expression<F>(arena: &NodeArena, index: NodeIndex, f: &mut F)
where
    F: FnMut(NodeIndex),
{
    let Some(node) = arena.get(index) else {
        return;
    };
    f(index);

    // Children per kind. Data lookups go through the typed accessors so a
    // malformed arena degrades to skipping the subtree instead of panicking.
    match node.kind {
        SyntaxKind::PropertyAccessExpression | SyntaxKind::ElementAccessExpression => {
            if let Some(access) = arena.get_access_expr(index) {
                walk_expression(arena, access.expression, f);
                walk_expression(arena, access.argument, f);
            }
        }
        SyntaxKind::CallExpression => {
            if let Some(call) = arena.get_call_expr(index) {
                walk_expression(arena, call.expression, f);
                for &argument in &call.arguments {
                    walk_expression(arena, argument, f);
                }
            }
        }
        SyntaxKind::ArrowFunction | SyntaxKind::FunctionExpression => {
            if let Some(function) = arena.get_function(index) {
                for &parameter in &function.parameters {
                    walk_expression(arena, parameter, f);
                }
                walk_expression(arena, function.body, f);
            }
        }
        SyntaxKind::ObjectLiteralExpression => {
            if let Some(literal) = arena.get_object_literal(index) {
                for property in &literal.properties {
                    walk_expression(arena, property.initializer, f);
                }
            }
        }
        SyntaxKind::ArrayLiteralExpression => {
            if let Some(literal) = arena.get_array_literal(index) {
                for &element in &literal.elements {
                    walk_expression(arena, element, f);
                }
            }
        }
        SyntaxKind::ParenthesizedExpression
        | SyntaxKind::AsExpression
        | SyntaxKind::TypeAssertionExpression
        | SyntaxKind::NonNullExpression
        | SyntaxKind::ChainExpression => {
            if let Some(wrapper) = arena.get_wrapper(index) {
                walk_expression(arena, wrapper.expression, f);
            }
        }
        SyntaxKind::Block => {
            if let Some(block) = arena.get_block(index) {
                for &statement in &block.statements {
                    walk_expression(arena, statement, f);
                }
            }
        }
        SyntaxKind::ReturnStatement => {
            if let Some(ret) = arena.get_return(index) {
                walk_expression(arena, ret.expression, f);
            }
        }
        SyntaxKind::ExpressionStatement => {
            if let Some(stmt) = arena.get_expr_stmt(index) {
                walk_expression(arena, stmt.expression, f);
            }
        }
        SyntaxKind::VariableDeclaration => {
            if let Some(variable) = arena.get_variable(index) {
                walk_expression(arena, variable.initializer, f);
            }
        }
        SyntaxKind::SourceFile => {
            if let Some(file) = arena.get_source_file(index) {
                for &statement in &file.statements {
                    walk_expression(arena, statement, f);
                }
            }
        }
        // Leaf nodes.
        SyntaxKind::Identifier
        | SyntaxKind::StringLiteral
        | SyntaxKind::NumericLiteral
        | SyntaxKind::ImportDeclaration => {}
    }
}

/// Walks every statement of a source file in document order.
pub fn walk_source_file<F>(arena: &NodeArena, file: NodeIndex, f: &mut F)
where
    F: FnMut(NodeIndex),
{
    tracing::trace!(file = ?file, nodes = arena.len(), "walk_source_file");
    walk_expression(arena, file, f);
}

/// Calls `f` once per call expression in the subtree, in document order.
pub fn for_each_call_expression<F>(arena: &NodeArena, root: NodeIndex, mut f: F)
where
    F: FnMut(NodeIndex),
{
    walk_expression(arena, root, &mut |index| {
        if arena.kind(index) == Some(SyntaxKind::CallExpression) {
            f(index);
        }
    });
}
