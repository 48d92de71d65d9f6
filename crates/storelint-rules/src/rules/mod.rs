//! Rule adapters over the analysis core.
//!
//! Each rule is a thin shim implementing the host-facing [`Rule`] capability:
//! metadata plus a per-call check. All shape decisions live in the pure
//! analyzer modules so the rules stay host-agnostic and independently
//! testable.

pub mod prefer_use_shallow;
pub mod require_selector;

pub use prefer_use_shallow::PreferUseShallow;
pub use require_selector::RequireSelector;

use crate::context::LintContext;
use crate::options::HookDetection;
use storelint_ast::NodeIndex;

/// Rule category, mirroring the host's problem/suggestion split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    /// Code that is likely to be incorrect.
    Correctness,
    /// Improvements worth suggesting.
    Suggestion,
}

pub trait Rule {
    fn name(&self) -> &'static str;

    fn category(&self) -> RuleCategory;

    fn docs_url(&self) -> String {
        format!(
            "https://github.com/storelint/storelint/blob/main/docs/rules/{}.md",
            self.name()
        )
    }

    /// Diagnostic codes this rule can emit.
    fn message_codes(&self) -> &'static [u32];

    /// Hook detection configuration this rule was constructed with; the
    /// runner uses it to build the per-file alias registry.
    fn detection(&self) -> &HookDetection;

    /// Invoked once per call expression, in document order.
    fn check_call(&self, ctx: &mut LintContext<'_>, call: NodeIndex);
}
