//! Recommend wrapping object/array-literal selectors with the
//! shallow-equality adapter.

use crate::context::LintContext;
use crate::hook_call::is_hook_call;
use crate::literal_shape::{LiteralShape, classify_selector_literal};
use crate::options::{HookDetection, PreferUseShallowOptions};
use crate::rules::{Rule, RuleCategory};
use storelint_ast::NodeIndex;
use storelint_common::diagnostics::{diagnostic_codes, diagnostic_messages};

pub struct PreferUseShallow {
    options: PreferUseShallowOptions,
    detection: HookDetection,
}

impl PreferUseShallow {
    pub fn new(options: PreferUseShallowOptions) -> PreferUseShallow {
        let detection = options.detection();
        PreferUseShallow { options, detection }
    }

    /// Constructs the rule from host-provided JSON options.
    pub fn from_value(value: serde_json::Value) -> Result<PreferUseShallow, serde_json::Error> {
        PreferUseShallowOptions::from_value(value).map(PreferUseShallow::new)
    }
}

impl Default for PreferUseShallow {
    fn default() -> Self {
        PreferUseShallow::new(PreferUseShallowOptions::default())
    }
}

impl Rule for PreferUseShallow {
    fn name(&self) -> &'static str {
        "zustand-prefer-use-shallow"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Suggestion
    }

    fn message_codes(&self) -> &'static [u32] {
        &[diagnostic_codes::PREFER_USE_SHALLOW]
    }

    fn detection(&self) -> &HookDetection {
        &self.detection
    }

    fn check_call(&self, ctx: &mut LintContext<'_>, call: NodeIndex) {
        if !is_hook_call(ctx, &self.detection, call) {
            return;
        }
        // Unlike the selector rule, a call with no argument is skipped:
        // there is nothing to wrap.
        let Some(&argument) = ctx
            .arena
            .get_call_expr(call)
            .and_then(|c| c.arguments.first())
        else {
            return;
        };

        let shape = classify_selector_literal(
            ctx.arena,
            argument,
            &self.options.shallow_hook_name,
            self.options.check_object_literal,
            self.options.check_array_literal,
        );
        let kind = match shape {
            LiteralShape::ObjectLiteral => "object",
            LiteralShape::ArrayLiteral => "array",
            _ => return,
        };
        ctx.report(
            argument,
            &diagnostic_messages::PREFER_USE_SHALLOW,
            &[kind, &self.options.shallow_hook_name],
        );
    }
}
