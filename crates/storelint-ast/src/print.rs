//! Minimal expression rendering.
//!
//! Diagnostics sometimes need an expression as text, e.g. the display name of
//! a hook whose callee is not a bare identifier (`store.useStore`). This is a
//! best-effort printer over the closed node set, not an emitter: type
//! assertion syntax is not stored and therefore not reproduced.

use crate::arena::{NodeArena, NodeIndex};
use crate::node::SyntaxKind;

pub fn print_expression(arena: &NodeArena, index: NodeIndex) -> String {
    let Some(node) = arena.get(index) else {
        return String::new();
    };

    match node.kind {
        SyntaxKind::Identifier => arena
            .identifier_text(index)
            .unwrap_or_default()
            .to_string(),
        SyntaxKind::StringLiteral => {
            let text = arena.get_literal(index).map(|l| l.text.as_str()).unwrap_or_default();
            format!("\"{text}\"")
        }
        SyntaxKind::NumericLiteral => arena
            .get_literal(index)
            .map(|l| l.text.clone())
            .unwrap_or_default(),
        SyntaxKind::PropertyAccessExpression => {
            let Some(access) = arena.get_property_access(index) else {
                return String::new();
            };
            let object = print_expression(arena, access.expression);
            let name = print_expression(arena, access.argument);
            let dot = if access.question_dot { "?." } else { "." };
            format!("{object}{dot}{name}")
        }
        SyntaxKind::ElementAccessExpression => {
            let Some(access) = arena.get_element_access(index) else {
                return String::new();
            };
            let object = print_expression(arena, access.expression);
            let argument = print_expression(arena, access.argument);
            format!("{object}[{argument}]")
        }
        SyntaxKind::CallExpression => {
            let Some(call) = arena.get_call_expr(index) else {
                return String::new();
            };
            let callee = print_expression(arena, call.expression);
            let arguments = call
                .arguments
                .iter()
                .map(|&a| print_expression(arena, a))
                .collect::<Vec<_>>()
                .join(", ");
            let dot = if call.question_dot { "?." } else { "" };
            format!("{callee}{dot}({arguments})")
        }
        SyntaxKind::ArrowFunction => {
            let Some(function) = arena.get_function(index) else {
                return String::new();
            };
            let parameters = function
                .parameters
                .iter()
                .map(|&p| print_expression(arena, p))
                .collect::<Vec<_>>()
                .join(", ");
            let body = print_expression(arena, function.body);
            format!("({parameters}) => {body}")
        }
        SyntaxKind::FunctionExpression => {
            let Some(function) = arena.get_function(index) else {
                return String::new();
            };
            let parameters = function
                .parameters
                .iter()
                .map(|&p| print_expression(arena, p))
                .collect::<Vec<_>>()
                .join(", ");
            let body = print_expression(arena, function.body);
            format!("function ({parameters}) {body}")
        }
        SyntaxKind::ObjectLiteralExpression => {
            let Some(literal) = arena.get_object_literal(index) else {
                return String::new();
            };
            let properties = literal
                .properties
                .iter()
                .map(|p| format!("{}: {}", p.name, print_expression(arena, p.initializer)))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{{ {properties} }}")
        }
        SyntaxKind::ArrayLiteralExpression => {
            let Some(literal) = arena.get_array_literal(index) else {
                return String::new();
            };
            let elements = literal
                .elements
                .iter()
                .map(|&e| print_expression(arena, e))
                .collect::<Vec<_>>()
                .join(", ");
            format!("[{elements}]")
        }
        SyntaxKind::ParenthesizedExpression => {
            let inner = arena
                .get_wrapper(index)
                .map(|w| print_expression(arena, w.expression))
                .unwrap_or_default();
            format!("({inner})")
        }
        SyntaxKind::NonNullExpression => {
            let inner = arena
                .get_wrapper(index)
                .map(|w| print_expression(arena, w.expression))
                .unwrap_or_default();
            format!("{inner}!")
        }
        SyntaxKind::AsExpression
        | SyntaxKind::TypeAssertionExpression
        | SyntaxKind::ChainExpression => arena
            .get_wrapper(index)
            .map(|w| print_expression(arena, w.expression))
            .unwrap_or_default(),
        SyntaxKind::Block => {
            let Some(block) = arena.get_block(index) else {
                return String::new();
            };
            let statements = block
                .statements
                .iter()
                .map(|&s| print_expression(arena, s))
                .collect::<Vec<_>>()
                .join(" ");
            format!("{{ {statements} }}")
        }
        SyntaxKind::ReturnStatement => {
            let Some(ret) = arena.get_return(index) else {
                return String::new();
            };
            if ret.expression.is_none() {
                "return;".to_string()
            } else {
                format!("return {};", print_expression(arena, ret.expression))
            }
        }
        SyntaxKind::ExpressionStatement => {
            let inner = arena
                .get_expr_stmt(index)
                .map(|s| print_expression(arena, s.expression))
                .unwrap_or_default();
            format!("{inner};")
        }
        SyntaxKind::VariableDeclaration => {
            let Some(variable) = arena.get_variable(index) else {
                return String::new();
            };
            if variable.initializer.is_none() {
                format!("const {};", variable.name)
            } else {
                format!(
                    "const {} = {};",
                    variable.name,
                    print_expression(arena, variable.initializer)
                )
            }
        }
        SyntaxKind::ImportDeclaration | SyntaxKind::SourceFile => String::new(),
    }
}
