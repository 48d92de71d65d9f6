//! Expression normalization.
//!
//! Type assertions, non-null assertions, parentheses, and the
//! optional-chaining wrapper carry no meaning for shape analysis. Every
//! analysis normalizes through [`skip_wrappers`] before inspecting structure.

use storelint_ast::{NodeArena, NodeIndex};

/// Strips any chain of wrapper nodes, exposing the underlying expression.
///
/// Each step descends exactly one layer, so the loop is bounded by tree
/// depth. Idempotent: normalizing an already-normalized node returns it
/// unchanged.
pub fn skip_wrappers(arena: &NodeArena, index: NodeIndex) -> NodeIndex {
    let mut current = index;
    while let Some(wrapper) = arena.get_wrapper(current) {
        current = wrapper.expression;
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use storelint_ast::NodeArena;

    #[test]
    fn strips_nested_wrappers() {
        let mut arena = NodeArena::new();
        let ident = arena.add_identifier("s");
        let wrapped = arena.add_as_expression(ident);
        let wrapped = arena.add_non_null(wrapped);
        let wrapped = arena.add_parenthesized(wrapped);
        let wrapped = arena.add_chain(wrapped);
        let wrapped = arena.add_type_assertion(wrapped);
        assert_eq!(skip_wrappers(&arena, wrapped), ident);
    }

    #[test]
    fn idempotent_on_normalized_input() {
        let mut arena = NodeArena::new();
        let ident = arena.add_identifier("s");
        let wrapped = arena.add_as_expression(ident);
        let once = skip_wrappers(&arena, wrapped);
        assert_eq!(skip_wrappers(&arena, once), once);
        assert_eq!(once, ident);
    }

    #[test]
    fn non_wrapper_unchanged() {
        let mut arena = NodeArena::new();
        let callee = arena.add_identifier("useStore");
        let call = arena.add_call(callee, vec![]);
        assert_eq!(skip_wrappers(&arena, call), call);
        assert_eq!(skip_wrappers(&arena, NodeIndex::NONE), NodeIndex::NONE);
    }
}
