//! File-level lint driver.
//!
//! One linear traversal per file collects every call expression in document
//! order; each configured rule then sees each call through a fresh per-file
//! context. Analysis is single-threaded and synchronous, and no state
//! outlives `run`, so hosts are free to parallelize across files.

use crate::context::LintContext;
use crate::registry::HookRegistry;
use crate::rules::Rule;
use crate::type_api::TypeResolver;
use storelint_ast::{NodeArena, NodeIndex, for_each_call_expression};
use storelint_common::diagnostics::{Diagnostic, DiagnosticSink};

pub struct LintRunner {
    rules: Vec<Box<dyn Rule>>,
}

impl LintRunner {
    pub fn new() -> LintRunner {
        LintRunner { rules: Vec::new() }
    }

    /// Both rules with their default options.
    pub fn recommended() -> LintRunner {
        LintRunner::new()
            .with_rule(Box::new(crate::rules::RequireSelector::default()))
            .with_rule(Box::new(crate::rules::PreferUseShallow::default()))
    }

    pub fn with_rule(mut self, rule: Box<dyn Rule>) -> LintRunner {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Lints one file, reporting into `sink`.
    pub fn run(
        &self,
        arena: &NodeArena,
        source_file: NodeIndex,
        file_name: &str,
        resolver: Option<&dyn TypeResolver>,
        sink: &mut dyn DiagnosticSink,
    ) {
        let mut calls = Vec::new();
        for_each_call_expression(arena, source_file, |call| calls.push(call));
        tracing::debug!(file = file_name, calls = calls.len(), "linting file");

        for rule in &self.rules {
            // The alias pre-pass is syntax-only; with a resolver available
            // the structural strategy subsumes it, so skip the build.
            let registry = if resolver.is_some() {
                HookRegistry::default()
            } else {
                HookRegistry::collect(arena, source_file, rule.detection())
            };
            let mut ctx = LintContext::new(arena, file_name, resolver, registry, &mut *sink);
            for &call in &calls {
                rule.check_call(&mut ctx, call);
            }
        }
    }

    /// Convenience for hosts and tests: lint one file and collect the
    /// diagnostics.
    pub fn run_to_vec(
        &self,
        arena: &NodeArena,
        source_file: NodeIndex,
        file_name: &str,
        resolver: Option<&dyn TypeResolver>,
    ) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        self.run(arena, source_file, file_name, resolver, &mut diagnostics);
        diagnostics
    }
}
