//! Per-file lint context.
//!
//! One context is constructed per (file, rule) pair and dropped when the
//! file's traversal ends; the registry it carries never survives the file.

use crate::registry::HookRegistry;
use crate::type_api::TypeResolver;
use storelint_ast::{NodeArena, NodeIndex};
use storelint_common::diagnostics::{Diagnostic, DiagnosticMessage, DiagnosticSink};
use storelint_common::Span;

pub struct LintContext<'a> {
    pub arena: &'a NodeArena,
    pub file_name: &'a str,
    /// Host type-resolution service, when available.
    pub resolver: Option<&'a dyn TypeResolver>,
    pub registry: HookRegistry,
    sink: &'a mut dyn DiagnosticSink,
}

impl<'a> LintContext<'a> {
    pub fn new(
        arena: &'a NodeArena,
        file_name: &'a str,
        resolver: Option<&'a dyn TypeResolver>,
        registry: HookRegistry,
        sink: &'a mut dyn DiagnosticSink,
    ) -> LintContext<'a> {
        LintContext {
            arena,
            file_name,
            resolver,
            registry,
            sink,
        }
    }

    pub fn span(&self, index: NodeIndex) -> Span {
        self.arena.span(index)
    }

    /// Builds a diagnostic anchored at `anchor` and hands it to the sink.
    pub fn report(&mut self, anchor: NodeIndex, message: &DiagnosticMessage, args: &[&str]) {
        let diagnostic =
            Diagnostic::from_message(message, self.file_name, self.span(anchor), args);
        self.sink.report(diagnostic);
    }
}
