//! Rule options.
//!
//! Hosts hand options over as JSON, so option structs are serde records with
//! camelCase keys and the documented defaults. Unknown fields are rejected so
//! a misspelled option surfaces as a configuration error at rule
//! construction, before any analysis runs.

use rustc_hash::FxHashSet;
use serde::Deserialize;

fn default_hooks() -> Vec<String> {
    vec!["useStore".to_string()]
}

fn default_store_factories() -> Vec<String> {
    vec!["create".to_string(), "createStore".to_string()]
}

fn default_store_modules() -> Vec<String> {
    vec!["zustand".to_string(), "zustand/vanilla".to_string()]
}

/// Name sets the hook call classifier works from, shared by both rules.
#[derive(Clone, Debug)]
pub struct HookDetection {
    /// Names always treated as store hooks.
    pub hooks: FxHashSet<String>,
    /// Store factory function names (`create`) for alias inference.
    pub store_factories: FxHashSet<String>,
    /// Module specifiers the factories are imported from.
    pub store_modules: FxHashSet<String>,
}

fn to_set(names: &[String]) -> FxHashSet<String> {
    names.iter().cloned().collect()
}

/// Options for the `zustand-require-selector` rule.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RequireSelectorOptions {
    pub hooks: Vec<String>,
    pub store_factories: Vec<String>,
    pub store_modules: Vec<String>,
    pub forbid_identity_selector: bool,
    pub forbid_direct_slice: bool,
}

impl Default for RequireSelectorOptions {
    fn default() -> Self {
        RequireSelectorOptions {
            hooks: default_hooks(),
            store_factories: default_store_factories(),
            store_modules: default_store_modules(),
            forbid_identity_selector: true,
            forbid_direct_slice: false,
        }
    }
}

impl RequireSelectorOptions {
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    pub fn detection(&self) -> HookDetection {
        HookDetection {
            hooks: to_set(&self.hooks),
            store_factories: to_set(&self.store_factories),
            store_modules: to_set(&self.store_modules),
        }
    }
}

/// Options for the `zustand-prefer-use-shallow` rule.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PreferUseShallowOptions {
    pub hooks: Vec<String>,
    pub store_factories: Vec<String>,
    pub store_modules: Vec<String>,
    pub shallow_hook_name: String,
    pub check_object_literal: bool,
    pub check_array_literal: bool,
}

impl Default for PreferUseShallowOptions {
    fn default() -> Self {
        PreferUseShallowOptions {
            hooks: default_hooks(),
            store_factories: default_store_factories(),
            store_modules: default_store_modules(),
            shallow_hook_name: "useShallow".to_string(),
            check_object_literal: true,
            check_array_literal: true,
        }
    }
}

impl PreferUseShallowOptions {
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    pub fn detection(&self) -> HookDetection {
        HookDetection {
            hooks: to_set(&self.hooks),
            store_factories: to_set(&self.store_factories),
            store_modules: to_set(&self.store_modules),
        }
    }
}
