//! Closed-variant syntax tree for the storelint analyses.
//!
//! This crate models only the finite set of node shapes the analyses inspect
//! (calls, identifiers, member access, function and object/array literals,
//! wrapper nodes, and the handful of statement forms the per-file pre-pass
//! reads). A host front end lowers its own tree into this one; anything the
//! host has that this set cannot express simply is not constructible here and
//! is therefore skipped by every analysis.
//!
//! Modules:
//! - `node` - `SyntaxKind` and per-kind node payloads
//! - `arena` - `NodeArena` / `NodeIndex` storage and accessors
//! - `walk` - pre-order document-order traversal
//! - `print` - minimal expression rendering for diagnostic display names

pub mod arena;
pub mod node;
pub mod print;
pub mod walk;

pub use arena::{NodeArena, NodeIndex};
pub use node::{
    AccessExprData, ArrayLiteralData, BlockData, CallExprData, ExprStmtData, FunctionData,
    IdentifierData, ImportData, ImportSpecifier, LiteralData, Node, NodeData, ObjectLiteralData,
    PropertyAssignment, ReturnData, SourceFileData, SyntaxKind, VariableData, WrapperData,
};
pub use print::print_expression;
pub use walk::{for_each_call_expression, walk_expression, walk_source_file};
