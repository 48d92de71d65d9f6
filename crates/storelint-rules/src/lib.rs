//! Selector-classification engine and lint rules for reactive store hooks.
//!
//! This crate is organized into several submodules:
//! - `normalize` - wrapper-node stripping shared by every analysis
//! - `hook_call` - hook call classification (configured names, local alias
//!   inference, structural type match)
//! - `type_api` - the `TypeResolver` boundary and the store capability check
//! - `registry` - per-file hook alias registry
//! - `selector` - selector function extraction shared by the analyzers
//! - `selector_shape` - return-shape classification for the selector rule
//! - `literal_shape` - literal classification for the shallow-wrapper rule
//! - `options` - rule options deserialized from host-provided JSON
//! - `context` - per-file lint context and reporting
//! - `rules` - the rule adapters exposed to the host
//! - `runner` - file-level driver

pub mod context;
pub mod hook_call;
pub mod literal_shape;
pub mod normalize;
pub mod options;
pub mod registry;
pub mod rules;
pub mod runner;
pub mod selector;
pub mod selector_shape;
pub mod type_api;

pub use context::LintContext;
pub use hook_call::{hook_display_name, is_hook_call};
pub use literal_shape::{LiteralShape, classify_selector_literal};
pub use normalize::skip_wrappers;
pub use options::{HookDetection, PreferUseShallowOptions, RequireSelectorOptions};
pub use registry::HookRegistry;
pub use rules::{PreferUseShallow, RequireSelector, Rule, RuleCategory};
pub use runner::LintRunner;
pub use selector_shape::{SelectorShape, classify_selector};
pub use type_api::{ResolvedType, TypeConstituent, TypeResolver, satisfies_store_capability};

pub mod diagnostics {
    pub use storelint_common::diagnostics::{
        Diagnostic, DiagnosticCategory, DiagnosticSink, diagnostic_codes, diagnostic_messages,
        format_message,
    };
}
