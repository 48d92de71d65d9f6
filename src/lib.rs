//! storelint - lint rules for reactive store selector usage.
//!
//! Flags two anti-patterns around store-access hooks (zustand-style):
//! calls without a narrowing selector (or with a selector returning the whole
//! store or a full slice), and selectors returning fresh object/array
//! literals that should be wrapped in a shallow-equality adapter.
//!
//! This crate is the distributable bundle: the rule registry with recommended
//! severities, plus re-exports of the analysis crates. The analysis itself
//! lives in `storelint-rules`; the syntax tree a host lowers into lives in
//! `storelint-ast`.

use indexmap::IndexMap;
use storelint_rules::rules::{PreferUseShallow, RequireSelector, Rule, RuleCategory};

pub use storelint_ast as ast;
pub use storelint_common as common;
pub use storelint_rules as rules;

pub use storelint_common::diagnostics::{Diagnostic, DiagnosticCategory, DiagnosticSink};
pub use storelint_rules::{LintRunner, TypeResolver};

/// Severity a rule is enabled at in a shipped configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// Registry metadata for one rule.
#[derive(Debug, Clone)]
pub struct RuleInfo {
    pub name: &'static str,
    pub category: RuleCategory,
    pub docs_url: String,
    pub recommended_severity: Severity,
}

/// All rules this bundle ships, in registration order.
pub fn rule_registry() -> IndexMap<&'static str, RuleInfo> {
    let require_selector = RequireSelector::default();
    let prefer_use_shallow = PreferUseShallow::default();
    let mut registry = IndexMap::new();
    registry.insert(
        require_selector.name(),
        RuleInfo {
            name: require_selector.name(),
            category: require_selector.category(),
            docs_url: require_selector.docs_url(),
            recommended_severity: Severity::Error,
        },
    );
    registry.insert(
        prefer_use_shallow.name(),
        RuleInfo {
            name: prefer_use_shallow.name(),
            category: prefer_use_shallow.category(),
            docs_url: prefer_use_shallow.docs_url(),
            recommended_severity: Severity::Warning,
        },
    );
    registry
}

/// A runner with both rules at their default options.
pub fn recommended_runner() -> LintRunner {
    LintRunner::recommended()
}
