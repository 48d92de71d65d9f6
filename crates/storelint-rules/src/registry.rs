//! Per-file hook alias registry.
//!
//! When no type information is available, hooks are inferred syntactically: a
//! declaration like `const useAppStore = create(() => ...)` marks
//! `useAppStore` as a store hook for the rest of the file, provided `create`
//! is a tracked store factory. The registry is built in one pre-pass over the
//! file's top-level statements, lives for exactly one file, and is discarded
//! afterwards; identifiers never leak across files.

use crate::normalize::skip_wrappers;
use crate::options::HookDetection;
use rustc_hash::FxHashSet;
use storelint_ast::{NodeArena, NodeIndex, SyntaxKind};

#[derive(Clone, Debug, Default)]
pub struct HookRegistry {
    /// Local bindings known to be store factories (`create`).
    factories: FxHashSet<String>,
    /// Local bindings known to be store hooks (`useAppStore`).
    hooks: FxHashSet<String>,
}

impl HookRegistry {
    pub fn is_hook(&self, name: &str) -> bool {
        self.hooks.contains(name)
    }

    pub fn is_factory(&self, name: &str) -> bool {
        self.factories.contains(name)
    }

    /// Builds the registry from a file's top-level statements.
    pub fn collect(
        arena: &NodeArena,
        source_file: NodeIndex,
        detection: &HookDetection,
    ) -> HookRegistry {
        let mut registry = HookRegistry::default();
        let Some(file) = arena.get_source_file(source_file) else {
            return registry;
        };

        for &statement in &file.statements {
            match arena.kind(statement) {
                Some(SyntaxKind::ImportDeclaration) => {
                    registry.collect_import(arena, statement, detection);
                }
                Some(SyntaxKind::VariableDeclaration) => {
                    registry.collect_declaration(arena, statement, detection);
                }
                _ => {}
            }
        }
        registry
    }

    fn collect_import(&mut self, arena: &NodeArena, statement: NodeIndex, detection: &HookDetection) {
        let Some(import) = arena.get_import(statement) else {
            return;
        };
        if !detection.store_modules.contains(&import.module_specifier) {
            return;
        }
        // The default export of a store module is its factory, whatever the
        // local binding is called.
        if let Some(default_binding) = &import.default_binding {
            tracing::debug!(factory = %default_binding, module = %import.module_specifier, "registered default-import factory");
            self.factories.insert(default_binding.clone());
        }
        for specifier in &import.named_bindings {
            if detection.store_factories.contains(&specifier.imported) {
                tracing::debug!(factory = %specifier.local, imported = %specifier.imported, "registered named-import factory");
                self.factories.insert(specifier.local.clone());
            }
        }
    }

    fn collect_declaration(
        &mut self,
        arena: &NodeArena,
        statement: NodeIndex,
        detection: &HookDetection,
    ) {
        let Some(variable) = arena.get_variable(statement) else {
            return;
        };
        let initializer = skip_wrappers(arena, variable.initializer);

        // `const mk = create;` re-binds the factory itself.
        if self.is_factory_reference(arena, initializer, detection) {
            self.factories.insert(variable.name.clone());
            return;
        }

        // `const useAppStore = create(...)`, including curried chains like
        // `create()(...)`: unwrap nested calls down to the innermost callee.
        if let Some(root_callee) = innermost_callee(arena, initializer) {
            if self.is_factory_reference(arena, root_callee, detection) {
                tracing::debug!(hook = %variable.name, "registered inferred hook alias");
                self.hooks.insert(variable.name.clone());
            }
        }
    }

    /// A bare name tracked as a factory, or a non-computed property access
    /// whose name is a configured factory (`zustand.create`).
    fn is_factory_reference(
        &self,
        arena: &NodeArena,
        index: NodeIndex,
        detection: &HookDetection,
    ) -> bool {
        if let Some(name) = arena.identifier_text(index) {
            return self.factories.contains(name);
        }
        if let Some(access) = arena.get_property_access(index) {
            if let Some(name) = arena.identifier_text(access.argument) {
                return detection.store_factories.contains(name);
            }
        }
        false
    }
}

/// Root callee of a (possibly nested) call chain: for `create()(init)` the
/// outer callee is itself a call, so keep descending until the callee is not
/// a call expression. `None` when `index` is not a call at all.
fn innermost_callee(arena: &NodeArena, index: NodeIndex) -> Option<NodeIndex> {
    let mut callee = skip_wrappers(arena, arena.get_call_expr(index)?.expression);
    while let Some(call) = arena.get_call_expr(callee) {
        callee = skip_wrappers(arena, call.expression);
    }
    Some(callee)
}
