//! Diagnostic records and message tables.
//!
//! The analysis core never renders or displays diagnostics; it builds
//! `Diagnostic` records from the static message table and hands them to a
//! [`DiagnosticSink`] owned by the host.

use crate::span::Span;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Suggestion,
    Message,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

pub mod diagnostic_codes {
    pub const MISSING_SELECTOR: u32 = 8301;
    pub const IDENTITY_SELECTOR: u32 = 8302;
    pub const DIRECT_SLICE: u32 = 8303;
    pub const PREFER_USE_SHALLOW: u32 = 8304;
}

pub mod diagnostic_messages {
    use super::{DiagnosticCategory, DiagnosticMessage, diagnostic_codes};

    pub const MISSING_SELECTOR: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::MISSING_SELECTOR,
        category: DiagnosticCategory::Error,
        message: "Do not call {0}() without a selector. Use {0}((s) => s.someField).",
    };

    pub const IDENTITY_SELECTOR: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::IDENTITY_SELECTOR,
        category: DiagnosticCategory::Error,
        message: "Selector must not return the entire store (s => s).",
    };

    pub const DIRECT_SLICE: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::DIRECT_SLICE,
        category: DiagnosticCategory::Error,
        message: "Avoid selecting a full slice (s => s.someSlice). Select specific fields instead.",
    };

    pub const PREFER_USE_SHALLOW: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PREFER_USE_SHALLOW,
        category: DiagnosticCategory::Suggestion,
        message:
            "Selector returns an {0} literal. Consider wrapping it with {1}(...) to prevent unnecessary re-renders.",
    };

    pub const ALL: [DiagnosticMessage; 4] = [
        MISSING_SELECTOR,
        IDENTITY_SELECTOR,
        DIRECT_SLICE,
        PREFER_USE_SHALLOW,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub code: u32,
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
}

impl Diagnostic {
    /// Build a diagnostic from a static message, substituting positional args.
    pub fn from_message(
        message: &DiagnosticMessage,
        file: impl Into<String>,
        span: Span,
        args: &[&str],
    ) -> Self {
        Self {
            category: message.category,
            code: message.code,
            file: file.into(),
            start: span.start,
            length: span.len(),
            message_text: format_message(message.message, args),
        }
    }
}

pub fn get_message_template(code: u32) -> Option<&'static str> {
    diagnostic_messages::ALL
        .iter()
        .find(|m| m.code == code)
        .map(|m| m.message)
}

pub fn format_message(message: &str, args: &[&str]) -> String {
    let mut result = message.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

/// Receives finished diagnostics. Rendering and display are the host's
/// responsibility; the core only decides whether and with what data to report.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_message_substitutes_positional_args() {
        assert_eq!(
            format_message("Do not call {0}() without a selector. Use {0}((s) => s.someField).", &["useStore"]),
            "Do not call useStore() without a selector. Use useStore((s) => s.someField)."
        );
        assert_eq!(
            format_message("a {0} b {1}", &["x", "y"]),
            "a x b y"
        );
    }

    #[test]
    fn message_table_lookup() {
        assert!(get_message_template(diagnostic_codes::IDENTITY_SELECTOR)
            .is_some_and(|m| m.contains("entire store")));
        assert_eq!(get_message_template(9999), None);
    }

    #[test]
    fn from_message_fills_location_and_text() {
        let diag = Diagnostic::from_message(
            &diagnostic_messages::MISSING_SELECTOR,
            "store.ts",
            Span::new(4, 14),
            &["useStore"],
        );
        assert_eq!(diag.code, diagnostic_codes::MISSING_SELECTOR);
        assert_eq!(diag.category, DiagnosticCategory::Error);
        assert_eq!(diag.start, 4);
        assert_eq!(diag.length, 10);
        assert!(diag.message_text.contains("useStore()"));
    }
}
