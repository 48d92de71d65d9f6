//! Selector return-shape classification.
//!
//! Drives the `zustand-require-selector` rule: given a hook call, decide
//! whether its selector argument is missing, returns the whole store, or
//! returns a single unfiltered slice.

use crate::normalize::skip_wrappers;
use crate::selector::{selector_function, single_parameter_name, sole_return_expression};
use storelint_ast::{NodeArena, NodeIndex};

/// Outcome of analyzing one hook call's selector argument. Exactly one tag
/// applies per call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectorShape {
    /// No selector argument at all.
    Missing,
    /// The argument is not a single-parameter function literal, or its body
    /// shape cannot be determined locally.
    Unanalyzable,
    /// `(s) => s` - returns the entire store.
    Identity,
    /// `(s) => s.slice` - a non-computed single-level property access on the
    /// parameter.
    SingleLevelProperty,
    /// Any other return shape; not flagged.
    Other,
}

/// Classifies the selector argument of `call`. `Missing` short-circuits:
/// with no selector there is nothing further to analyze.
pub fn classify_selector(arena: &NodeArena, call: NodeIndex) -> SelectorShape {
    let Some(call_data) = arena.get_call_expr(call) else {
        return SelectorShape::Unanalyzable;
    };
    let Some(&argument) = call_data.arguments.first() else {
        return SelectorShape::Missing;
    };
    let Some((_, function)) = selector_function(arena, argument) else {
        return SelectorShape::Unanalyzable;
    };
    let Some(parameter) = single_parameter_name(arena, function) else {
        return SelectorShape::Unanalyzable;
    };
    let Some(returned) = sole_return_expression(arena, function) else {
        return SelectorShape::Unanalyzable;
    };

    let returned = skip_wrappers(arena, returned);
    if arena.identifier_text(returned) == Some(parameter) {
        return SelectorShape::Identity;
    }
    if let Some(access) = arena.get_property_access(returned) {
        let object = skip_wrappers(arena, access.expression);
        if arena.identifier_text(object) == Some(parameter) {
            return SelectorShape::SingleLevelProperty;
        }
    }
    SelectorShape::Other
}
