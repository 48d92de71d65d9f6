//! Behavior tests for the `zustand-prefer-use-shallow` rule.

mod support;

use serde_json::json;
use storelint_ast::NodeArena;
use storelint_common::diagnostics::{DiagnosticCategory, diagnostic_codes};
use storelint_rules::rules::PreferUseShallow;
use storelint_rules::LintRunner;
use support::*;

fn prefer_use_shallow_runner(options: serde_json::Value) -> LintRunner {
    LintRunner::new().with_rule(Box::new(PreferUseShallow::from_value(options).unwrap()))
}

#[test]
fn object_literal_selector_is_reported() {
    let mut arena = NodeArena::new();
    let selector = object_pair_selector(&mut arena);
    let file = file_with_hook_call(&mut arena, "useStore", Some(selector));
    let diagnostics = lint_recommended(&arena, file);
    assert_eq!(
        codes(&diagnostics),
        vec![diagnostic_codes::PREFER_USE_SHALLOW]
    );
    assert_eq!(diagnostics[0].category, DiagnosticCategory::Suggestion);
    assert_eq!(
        diagnostics[0].message_text,
        "Selector returns an object literal. Consider wrapping it with useShallow(...) to prevent unnecessary re-renders."
    );
}

#[test]
fn array_literal_selector_is_reported() {
    let mut arena = NodeArena::new();
    let selector = array_pair_selector(&mut arena);
    let file = file_with_hook_call(&mut arena, "useStore", Some(selector));
    let diagnostics = lint_recommended(&arena, file);
    assert_eq!(
        codes(&diagnostics),
        vec![diagnostic_codes::PREFER_USE_SHALLOW]
    );
    assert!(diagnostics[0].message_text.contains("array literal"));
}

#[test]
fn shallow_wrapped_selector_is_silent() {
    let mut arena = NodeArena::new();
    let selector = object_pair_selector(&mut arena);
    let adapter = arena.add_identifier("useShallow");
    let wrapped = arena.add_call(adapter, vec![selector]);
    let file = file_with_hook_call(&mut arena, "useStore", Some(wrapped));
    assert!(lint_recommended(&arena, file).is_empty());
}

#[test]
fn shallow_wrapped_selector_behind_type_assertion_is_silent() {
    let mut arena = NodeArena::new();
    let selector = array_pair_selector(&mut arena);
    let adapter = arena.add_identifier("useShallow");
    let wrapped = arena.add_call(adapter, vec![selector]);
    let asserted = arena.add_as_expression(wrapped);
    let file = file_with_hook_call(&mut arena, "useStore", Some(asserted));
    assert!(lint_recommended(&arena, file).is_empty());
}

#[test]
fn call_without_selector_is_skipped_by_this_rule() {
    let mut arena = NodeArena::new();
    let file = file_with_hook_call(&mut arena, "useStore", None);
    let runner = prefer_use_shallow_runner(json!({}));
    assert!(runner.run_to_vec(&arena, file, "test.tsx", None).is_empty());
}

#[test]
fn field_selector_is_silent() {
    let mut arena = NodeArena::new();
    let selector = slice_selector(&mut arena, "count");
    let file = file_with_hook_call(&mut arena, "useStore", Some(selector));
    let runner = prefer_use_shallow_runner(json!({}));
    assert!(runner.run_to_vec(&arena, file, "test.tsx", None).is_empty());
}

#[test]
fn block_body_returning_object_is_reported() {
    let mut arena = NodeArena::new();
    let param = arena.add_identifier("s");
    let s_ref = arena.add_identifier("s");
    let a = arena.add_property_access(s_ref, "a");
    let object = arena.add_object_literal(vec![("a", a)]);
    let ret = arena.add_return(object);
    let block = arena.add_block(vec![ret]);
    let selector = arena.add_arrow_function(vec![param], block);
    let file = file_with_hook_call(&mut arena, "useStore", Some(selector));
    let diagnostics = lint_recommended(&arena, file);
    assert_eq!(
        codes(&diagnostics),
        vec![diagnostic_codes::PREFER_USE_SHALLOW]
    );
}

#[test]
fn multi_statement_block_is_silent() {
    let mut arena = NodeArena::new();
    let param = arena.add_identifier("s");
    let log = arena.add_identifier("s");
    let stmt = arena.add_expression_statement(log);
    let s_ref = arena.add_identifier("s");
    let a = arena.add_property_access(s_ref, "a");
    let object = arena.add_object_literal(vec![("a", a)]);
    let ret = arena.add_return(object);
    let block = arena.add_block(vec![stmt, ret]);
    let selector = arena.add_arrow_function(vec![param], block);
    let file = file_with_hook_call(&mut arena, "useStore", Some(selector));
    assert!(lint_recommended(&arena, file).is_empty());
}

#[test]
fn object_literal_toggle_disables_only_objects() {
    let mut arena = NodeArena::new();
    let object_selector = object_pair_selector(&mut arena);
    let object_file = file_with_hook_call(&mut arena, "useStore", Some(object_selector));

    let runner = prefer_use_shallow_runner(json!({"checkObjectLiteral": false}));
    assert!(runner
        .run_to_vec(&arena, object_file, "test.tsx", None)
        .is_empty());

    let mut arena = NodeArena::new();
    let array_selector = array_pair_selector(&mut arena);
    let array_file = file_with_hook_call(&mut arena, "useStore", Some(array_selector));
    let diagnostics = runner.run_to_vec(&arena, array_file, "test.tsx", None);
    assert_eq!(
        codes(&diagnostics),
        vec![diagnostic_codes::PREFER_USE_SHALLOW]
    );
}

#[test]
fn array_literal_toggle_disables_only_arrays() {
    let mut arena = NodeArena::new();
    let array_selector = array_pair_selector(&mut arena);
    let array_file = file_with_hook_call(&mut arena, "useStore", Some(array_selector));

    let runner = prefer_use_shallow_runner(json!({"checkArrayLiteral": false}));
    assert!(runner
        .run_to_vec(&arena, array_file, "test.tsx", None)
        .is_empty());
}

#[test]
fn custom_adapter_name_suppresses_and_is_suggested() {
    let runner = prefer_use_shallow_runner(json!({"shallowHookName": "shallowEq"}));

    // Wrapped in the configured adapter: silent.
    let mut arena = NodeArena::new();
    let selector = object_pair_selector(&mut arena);
    let adapter = arena.add_identifier("shallowEq");
    let wrapped = arena.add_call(adapter, vec![selector]);
    let file = file_with_hook_call(&mut arena, "useStore", Some(wrapped));
    assert!(runner.run_to_vec(&arena, file, "test.tsx", None).is_empty());

    // Unwrapped: the suggestion names the configured adapter.
    let mut arena = NodeArena::new();
    let selector = object_pair_selector(&mut arena);
    let file = file_with_hook_call(&mut arena, "useStore", Some(selector));
    let diagnostics = runner.run_to_vec(&arena, file, "test.tsx", None);
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message_text.contains("shallowEq(...)"));
}

#[test]
fn custom_hooks_option_applies() {
    let mut arena = NodeArena::new();
    let selector = array_pair_selector(&mut arena);
    let file = file_with_hook_call(&mut arena, "useZustand", Some(selector));

    assert!(lint_recommended(&arena, file).is_empty());

    let runner = prefer_use_shallow_runner(json!({"hooks": ["useZustand"]}));
    let diagnostics = runner.run_to_vec(&arena, file, "test.tsx", None);
    assert_eq!(
        codes(&diagnostics),
        vec![diagnostic_codes::PREFER_USE_SHALLOW]
    );
}

#[test]
fn recommended_config_reports_object_pair_exactly_once() {
    // useStore((s) => ({ a: s.a, b: s.b })); under both recommended rules:
    // one suggestion, nothing from the selector rule.
    let mut arena = NodeArena::new();
    let selector = object_pair_selector(&mut arena);
    let file = file_with_hook_call(&mut arena, "useStore", Some(selector));
    let diagnostics = lint_recommended(&arena, file);
    assert_eq!(
        codes(&diagnostics),
        vec![diagnostic_codes::PREFER_USE_SHALLOW]
    );
}

#[test]
fn wrapped_identity_selector_yields_nothing_from_either_rule() {
    // useStore(useShallow((s) => s)): the selector rule cannot analyze a call
    // argument, and the shallow rule sees the desired pattern.
    let mut arena = NodeArena::new();
    let selector = identity_selector(&mut arena);
    let adapter = arena.add_identifier("useShallow");
    let wrapped = arena.add_call(adapter, vec![selector]);
    let file = file_with_hook_call(&mut arena, "useStore", Some(wrapped));
    assert!(lint_recommended(&arena, file).is_empty());
}
