//! Node kinds and per-kind payloads.

use crate::arena::NodeIndex;
use smallvec::SmallVec;
use storelint_common::Span;

/// The closed set of node shapes the analyses inspect.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    Identifier,
    StringLiteral,
    NumericLiteral,
    /// Non-computed member access (`a.b`).
    PropertyAccessExpression,
    /// Computed member access (`a[b]`).
    ElementAccessExpression,
    CallExpression,
    ArrowFunction,
    FunctionExpression,
    ObjectLiteralExpression,
    ArrayLiteralExpression,
    ParenthesizedExpression,
    /// `expr as T`.
    AsExpression,
    /// `<T>expr`.
    TypeAssertionExpression,
    /// `expr!`.
    NonNullExpression,
    /// Optional-chaining wrapper around the outermost chain link.
    ChainExpression,
    Block,
    ReturnStatement,
    ExpressionStatement,
    VariableDeclaration,
    ImportDeclaration,
    SourceFile,
}

impl SyntaxKind {
    /// Wrapper nodes are semantically transparent for the analyses; the
    /// normalizer strips them to reach the underlying expression.
    pub fn is_wrapper(self) -> bool {
        matches!(
            self,
            SyntaxKind::ParenthesizedExpression
                | SyntaxKind::AsExpression
                | SyntaxKind::TypeAssertionExpression
                | SyntaxKind::NonNullExpression
                | SyntaxKind::ChainExpression
        )
    }

    pub fn is_function_literal(self) -> bool {
        matches!(
            self,
            SyntaxKind::ArrowFunction | SyntaxKind::FunctionExpression
        )
    }
}

/// Thin node header; payloads live alongside in the arena.
#[derive(Copy, Clone, Debug)]
pub struct Node {
    pub kind: SyntaxKind,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct IdentifierData {
    pub text: String,
}

/// String/numeric literal payload; the analyses only need the raw text.
#[derive(Clone, Debug)]
pub struct LiteralData {
    pub text: String,
}

/// Member access payload, shared by property and element access.
#[derive(Clone, Debug)]
pub struct AccessExprData {
    pub expression: NodeIndex,
    /// Property name identifier for non-computed access; the index expression
    /// for computed access.
    pub argument: NodeIndex,
    pub question_dot: bool,
}

#[derive(Clone, Debug)]
pub struct CallExprData {
    pub expression: NodeIndex,
    pub arguments: Vec<NodeIndex>,
    pub question_dot: bool,
}

/// Arrow function or ordinary function expression.
#[derive(Clone, Debug)]
pub struct FunctionData {
    /// Parameter nodes. Identifiers for plain parameters; binding patterns
    /// are not modeled and therefore never appear here.
    pub parameters: SmallVec<[NodeIndex; 2]>,
    /// Expression body, or a `Block`.
    pub body: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct PropertyAssignment {
    pub name: String,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ObjectLiteralData {
    pub properties: Vec<PropertyAssignment>,
}

#[derive(Clone, Debug)]
pub struct ArrayLiteralData {
    pub elements: Vec<NodeIndex>,
}

/// Payload for all wrapper kinds; only the wrapped expression matters.
#[derive(Clone, Debug)]
pub struct WrapperData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct BlockData {
    pub statements: Vec<NodeIndex>,
}

#[derive(Clone, Debug)]
pub struct ReturnData {
    /// `NodeIndex::NONE` for a bare `return;`.
    pub expression: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ExprStmtData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct VariableData {
    pub name: String,
    /// `NodeIndex::NONE` when the declaration has no initializer.
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ImportSpecifier {
    /// Name as exported by the module.
    pub imported: String,
    /// Local binding (differs from `imported` for `import { a as b }`).
    pub local: String,
}

#[derive(Clone, Debug)]
pub struct ImportData {
    pub module_specifier: String,
    pub default_binding: Option<String>,
    pub named_bindings: Vec<ImportSpecifier>,
}

#[derive(Clone, Debug)]
pub struct SourceFileData {
    pub statements: Vec<NodeIndex>,
}

/// Per-kind payload stored next to the thin node header.
#[derive(Clone, Debug)]
pub enum NodeData {
    Identifier(IdentifierData),
    Literal(LiteralData),
    Access(AccessExprData),
    Call(CallExprData),
    Function(FunctionData),
    ObjectLiteral(ObjectLiteralData),
    ArrayLiteral(ArrayLiteralData),
    Wrapper(WrapperData),
    Block(BlockData),
    Return(ReturnData),
    ExprStmt(ExprStmtData),
    Variable(VariableData),
    Import(ImportData),
    SourceFile(SourceFileData),
}
