//! Structural hook detection over resolved types.
//!
//! When the host supplies a type-resolution service, a call is recognized as
//! a store hook call from the callee's type alone: any constituent of the
//! (possibly union/intersection) type that is callable and exposes the store
//! API surface qualifies, regardless of the binding's name. The service is a
//! black box; `None` means "no information" and is never an error.

use rustc_hash::FxHashSet;
use storelint_ast::NodeIndex;

/// The member surface a store-access hook exposes.
pub const STORE_API_MEMBERS: [&str; 3] = ["getState", "setState", "subscribe"];

/// One constituent of a resolved type.
#[derive(Clone, Debug, Default)]
pub struct TypeConstituent {
    /// Whether the constituent has at least one call signature.
    pub callable: bool,
    /// Named members the constituent exposes.
    pub members: FxHashSet<String>,
}

impl TypeConstituent {
    pub fn new<I, S>(callable: bool, members: I) -> TypeConstituent
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TypeConstituent {
            callable,
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_member(&self, name: &str) -> bool {
        self.members.contains(name)
    }
}

/// A resolved expression type with union/intersection constituents flattened
/// into one candidate list.
#[derive(Clone, Debug, Default)]
pub struct ResolvedType {
    pub constituents: Vec<TypeConstituent>,
}

impl ResolvedType {
    pub fn single(constituent: TypeConstituent) -> ResolvedType {
        ResolvedType {
            constituents: vec![constituent],
        }
    }

    pub fn from_constituents(constituents: Vec<TypeConstituent>) -> ResolvedType {
        ResolvedType { constituents }
    }
}

/// Does any constituent satisfy the store capability: callable and exposing
/// all of `getState`, `setState`, `subscribe`?
pub fn satisfies_store_capability(ty: &ResolvedType) -> bool {
    ty.constituents
        .iter()
        .any(|c| c.callable && STORE_API_MEMBERS.iter().all(|m| c.has_member(m)))
}

/// Host-supplied type-resolution service.
///
/// Returning `None` for a node (unknown type, resolution failure) makes the
/// classifier fall through to its syntactic strategies for that call.
pub trait TypeResolver {
    fn resolve_expression_type(&self, node: NodeIndex) -> Option<ResolvedType>;
}
