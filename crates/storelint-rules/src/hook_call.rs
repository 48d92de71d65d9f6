//! Hook call classification.
//!
//! Three detection strategies, evaluated in order with short-circuiting OR:
//!
//! 1. Structural type match - only when the host supplies a `TypeResolver`;
//!    recognizes store hooks by capability regardless of name, including
//!    re-exported or renamed bindings.
//! 2. Explicit configuration - the normalized callee is a bare name in the
//!    configured hooks set.
//! 3. Local alias inference - syntax-only fallback via the per-file registry;
//!    skipped when a resolver is present, since the structural strategy
//!    subsumes it.
//!
//! The result is a pure function of (node, options, registry, resolver):
//! classifying the same call twice yields the same answer.

use crate::context::LintContext;
use crate::normalize::skip_wrappers;
use crate::options::HookDetection;
use crate::type_api::satisfies_store_capability;
use storelint_ast::{NodeIndex, SyntaxKind, print_expression};

type Strategy = fn(&LintContext<'_>, &HookDetection, NodeIndex) -> bool;

/// Ordered strategy list; add new detection strategies here without touching
/// the existing ones.
const STRATEGIES: [Strategy; 3] = [structural_match, configured_name, aliased_hook];

/// Is this call expression a call to a store-access hook?
pub fn is_hook_call(ctx: &LintContext<'_>, detection: &HookDetection, call: NodeIndex) -> bool {
    let Some(call_data) = ctx.arena.get_call_expr(call) else {
        return false;
    };
    let callee = skip_wrappers(ctx.arena, call_data.expression);
    let matched = STRATEGIES.iter().any(|s| s(ctx, detection, callee));
    if matched {
        tracing::trace!(call = ?call, "classified hook call");
    }
    matched
}

fn structural_match(ctx: &LintContext<'_>, _detection: &HookDetection, callee: NodeIndex) -> bool {
    let Some(resolver) = ctx.resolver else {
        return false;
    };
    // A resolver failure for this node is "no match", never an abort.
    let Some(ty) = resolver.resolve_expression_type(callee) else {
        return false;
    };
    satisfies_store_capability(&ty)
}

fn configured_name(ctx: &LintContext<'_>, detection: &HookDetection, callee: NodeIndex) -> bool {
    ctx.arena
        .identifier_text(callee)
        .is_some_and(|name| detection.hooks.contains(name))
}

fn aliased_hook(ctx: &LintContext<'_>, _detection: &HookDetection, callee: NodeIndex) -> bool {
    if ctx.resolver.is_some() {
        return false;
    }
    ctx.arena
        .identifier_text(callee)
        .is_some_and(|name| ctx.registry.is_hook(name))
}

/// Display name for diagnostics: the bare name when the callee is an
/// identifier, otherwise the rendered callee expression text.
pub fn hook_display_name(ctx: &LintContext<'_>, call: NodeIndex) -> String {
    let Some(call_data) = ctx.arena.get_call_expr(call) else {
        return String::new();
    };
    let callee = skip_wrappers(ctx.arena, call_data.expression);
    if ctx.arena.kind(callee) == Some(SyntaxKind::Identifier) {
        ctx.arena
            .identifier_text(callee)
            .unwrap_or_default()
            .to_string()
    } else {
        print_expression(ctx.arena, callee)
    }
}
