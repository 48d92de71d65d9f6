//! Require granular selectors when using store hooks.

use crate::context::LintContext;
use crate::hook_call::{hook_display_name, is_hook_call};
use crate::options::{HookDetection, RequireSelectorOptions};
use crate::rules::{Rule, RuleCategory};
use crate::selector_shape::{SelectorShape, classify_selector};
use storelint_ast::NodeIndex;
use storelint_common::diagnostics::{diagnostic_codes, diagnostic_messages};

pub struct RequireSelector {
    options: RequireSelectorOptions,
    detection: HookDetection,
}

impl RequireSelector {
    pub fn new(options: RequireSelectorOptions) -> RequireSelector {
        let detection = options.detection();
        RequireSelector { options, detection }
    }

    /// Constructs the rule from host-provided JSON options.
    pub fn from_value(value: serde_json::Value) -> Result<RequireSelector, serde_json::Error> {
        RequireSelectorOptions::from_value(value).map(RequireSelector::new)
    }
}

impl Default for RequireSelector {
    fn default() -> Self {
        RequireSelector::new(RequireSelectorOptions::default())
    }
}

impl Rule for RequireSelector {
    fn name(&self) -> &'static str {
        "zustand-require-selector"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Correctness
    }

    fn message_codes(&self) -> &'static [u32] {
        &[
            diagnostic_codes::MISSING_SELECTOR,
            diagnostic_codes::IDENTITY_SELECTOR,
            diagnostic_codes::DIRECT_SLICE,
        ]
    }

    fn detection(&self) -> &HookDetection {
        &self.detection
    }

    fn check_call(&self, ctx: &mut LintContext<'_>, call: NodeIndex) {
        if !is_hook_call(ctx, &self.detection, call) {
            return;
        }

        match classify_selector(ctx.arena, call) {
            SelectorShape::Missing => {
                let hook = hook_display_name(ctx, call);
                ctx.report(call, &diagnostic_messages::MISSING_SELECTOR, &[&hook]);
            }
            SelectorShape::Identity if self.options.forbid_identity_selector => {
                let anchor = self.selector_anchor(ctx, call);
                ctx.report(anchor, &diagnostic_messages::IDENTITY_SELECTOR, &[]);
            }
            SelectorShape::SingleLevelProperty if self.options.forbid_direct_slice => {
                let anchor = self.selector_anchor(ctx, call);
                ctx.report(anchor, &diagnostic_messages::DIRECT_SLICE, &[]);
            }
            _ => {}
        }
    }
}

impl RequireSelector {
    /// Identity and slice diagnostics anchor at the selector argument.
    fn selector_anchor(&self, ctx: &LintContext<'_>, call: NodeIndex) -> NodeIndex {
        ctx.arena
            .get_call_expr(call)
            .and_then(|c| c.arguments.first().copied())
            .unwrap_or(call)
    }
}
