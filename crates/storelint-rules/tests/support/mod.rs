//! Shared fixtures for the rule tests.
#![allow(dead_code)]

use storelint_ast::{NodeArena, NodeIndex};
use storelint_common::diagnostics::Diagnostic;
use storelint_rules::LintRunner;

pub fn lint_recommended(arena: &NodeArena, file: NodeIndex) -> Vec<Diagnostic> {
    LintRunner::recommended().run_to_vec(arena, file, "test.tsx", None)
}

pub fn codes(diagnostics: &[Diagnostic]) -> Vec<u32> {
    diagnostics.iter().map(|d| d.code).collect()
}

/// `(s) => s`
pub fn identity_selector(arena: &mut NodeArena) -> NodeIndex {
    let param = arena.add_identifier("s");
    let body = arena.add_identifier("s");
    arena.add_arrow_function(vec![param], body)
}

/// `(s) => s.<field>`
pub fn slice_selector(arena: &mut NodeArena, field: &str) -> NodeIndex {
    let param = arena.add_identifier("s");
    let object = arena.add_identifier("s");
    let body = arena.add_property_access(object, field);
    arena.add_arrow_function(vec![param], body)
}

/// `(s) => ({ a: s.a, b: s.b })`
pub fn object_pair_selector(arena: &mut NodeArena) -> NodeIndex {
    let param = arena.add_identifier("s");
    let s1 = arena.add_identifier("s");
    let a = arena.add_property_access(s1, "a");
    let s2 = arena.add_identifier("s");
    let b = arena.add_property_access(s2, "b");
    let object = arena.add_object_literal(vec![("a", a), ("b", b)]);
    let paren = arena.add_parenthesized(object);
    arena.add_arrow_function(vec![param], paren)
}

/// `(s) => [s.a, s.b]`
pub fn array_pair_selector(arena: &mut NodeArena) -> NodeIndex {
    let param = arena.add_identifier("s");
    let s1 = arena.add_identifier("s");
    let a = arena.add_property_access(s1, "a");
    let s2 = arena.add_identifier("s");
    let b = arena.add_property_access(s2, "b");
    let array = arena.add_array_literal(vec![a, b]);
    arena.add_arrow_function(vec![param], array)
}

/// `useStore(<selector>);` as a one-statement file. Pass no selector for a
/// bare `useStore();`.
pub fn file_with_hook_call(
    arena: &mut NodeArena,
    hook: &str,
    selector: Option<NodeIndex>,
) -> NodeIndex {
    let callee = arena.add_identifier(hook);
    let call = arena.add_call(callee, selector.into_iter().collect());
    let statement = arena.add_expression_statement(call);
    arena.add_source_file(vec![statement])
}
