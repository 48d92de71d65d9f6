//! Common types and utilities for the storelint analysis crates.
//!
//! This crate provides foundational types used across all storelint crates:
//! - Source spans (`Span`)
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`, message tables)
//! - The `DiagnosticSink` boundary the analysis core reports through

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Diagnostics and message tables
pub mod diagnostics;
pub use diagnostics::{
    Diagnostic, DiagnosticCategory, DiagnosticMessage, DiagnosticSink, format_message,
};
