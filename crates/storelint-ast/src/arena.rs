//! Node storage and typed accessors.
//!
//! The arena owns every node of one syntax tree. Consumers hold `NodeIndex`
//! handles and read structure through the typed `get_*` accessors, which
//! return `None` on a kind mismatch instead of panicking. Nodes are never
//! mutated after construction apart from span assignment.

use crate::node::*;
use storelint_common::Span;

/// Opaque handle into a [`NodeArena`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    pub fn is_none(self) -> bool {
        self == NodeIndex::NONE
    }

    pub fn is_some(self) -> bool {
        self != NodeIndex::NONE
    }
}

#[derive(Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
    data: Vec<NodeData>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    pub fn with_capacity(capacity: usize) -> NodeArena {
        NodeArena {
            nodes: Vec::with_capacity(capacity),
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, kind: SyntaxKind, data: NodeData) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(Node {
            kind,
            span: Span::ZERO,
        });
        self.data.push(data);
        index
    }

    /// Get a thin node by index.
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    /// Kind of the node at `index`, if any.
    #[inline]
    pub fn kind(&self, index: NodeIndex) -> Option<SyntaxKind> {
        self.get(index).map(|n| n.kind)
    }

    /// Span of the node at `index`; `Span::ZERO` for absent nodes.
    pub fn span(&self, index: NodeIndex) -> Span {
        self.get(index).map(|n| n.span).unwrap_or(Span::ZERO)
    }

    pub fn set_span(&mut self, index: NodeIndex, span: Span) {
        if let Some(node) = self.nodes.get_mut(index.0 as usize) {
            node.span = span;
        }
    }

    #[inline]
    fn data(&self, index: NodeIndex) -> Option<&NodeData> {
        if index.is_none() {
            None
        } else {
            self.data.get(index.0 as usize)
        }
    }

    // Typed accessors. Each returns `None` unless the node exists and has the
    // expected kind.

    pub fn get_identifier(&self, index: NodeIndex) -> Option<&IdentifierData> {
        match self.data(index)? {
            NodeData::Identifier(data) => Some(data),
            _ => None,
        }
    }

    /// Identifier text, the most common single lookup in the analyses.
    pub fn identifier_text(&self, index: NodeIndex) -> Option<&str> {
        self.get_identifier(index).map(|data| data.text.as_str())
    }

    pub fn get_literal(&self, index: NodeIndex) -> Option<&LiteralData> {
        match self.data(index)? {
            NodeData::Literal(data) => Some(data),
            _ => None,
        }
    }

    /// Non-computed member access only (`a.b`).
    pub fn get_property_access(&self, index: NodeIndex) -> Option<&AccessExprData> {
        if self.kind(index)? != SyntaxKind::PropertyAccessExpression {
            return None;
        }
        match self.data(index)? {
            NodeData::Access(data) => Some(data),
            _ => None,
        }
    }

    /// Computed member access only (`a[b]`).
    pub fn get_element_access(&self, index: NodeIndex) -> Option<&AccessExprData> {
        if self.kind(index)? != SyntaxKind::ElementAccessExpression {
            return None;
        }
        match self.data(index)? {
            NodeData::Access(data) => Some(data),
            _ => None,
        }
    }

    /// Either access form.
    pub fn get_access_expr(&self, index: NodeIndex) -> Option<&AccessExprData> {
        match self.data(index)? {
            NodeData::Access(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_call_expr(&self, index: NodeIndex) -> Option<&CallExprData> {
        match self.data(index)? {
            NodeData::Call(data) => Some(data),
            _ => None,
        }
    }

    /// Function payload for arrow functions and function expressions.
    pub fn get_function(&self, index: NodeIndex) -> Option<&FunctionData> {
        match self.data(index)? {
            NodeData::Function(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_object_literal(&self, index: NodeIndex) -> Option<&ObjectLiteralData> {
        match self.data(index)? {
            NodeData::ObjectLiteral(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_array_literal(&self, index: NodeIndex) -> Option<&ArrayLiteralData> {
        match self.data(index)? {
            NodeData::ArrayLiteral(data) => Some(data),
            _ => None,
        }
    }

    /// Payload for any of the wrapper kinds; `None` for non-wrappers.
    pub fn get_wrapper(&self, index: NodeIndex) -> Option<&WrapperData> {
        match self.data(index)? {
            NodeData::Wrapper(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_block(&self, index: NodeIndex) -> Option<&BlockData> {
        match self.data(index)? {
            NodeData::Block(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_return(&self, index: NodeIndex) -> Option<&ReturnData> {
        match self.data(index)? {
            NodeData::Return(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_expr_stmt(&self, index: NodeIndex) -> Option<&ExprStmtData> {
        match self.data(index)? {
            NodeData::ExprStmt(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_variable(&self, index: NodeIndex) -> Option<&VariableData> {
        match self.data(index)? {
            NodeData::Variable(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_import(&self, index: NodeIndex) -> Option<&ImportData> {
        match self.data(index)? {
            NodeData::Import(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_source_file(&self, index: NodeIndex) -> Option<&SourceFileData> {
        match self.data(index)? {
            NodeData::SourceFile(data) => Some(data),
            _ => None,
        }
    }

    // Constructors.

    pub fn add_identifier(&mut self, text: impl Into<String>) -> NodeIndex {
        self.push(
            SyntaxKind::Identifier,
            NodeData::Identifier(IdentifierData { text: text.into() }),
        )
    }

    pub fn add_string_literal(&mut self, text: impl Into<String>) -> NodeIndex {
        self.push(
            SyntaxKind::StringLiteral,
            NodeData::Literal(LiteralData { text: text.into() }),
        )
    }

    pub fn add_numeric_literal(&mut self, text: impl Into<String>) -> NodeIndex {
        self.push(
            SyntaxKind::NumericLiteral,
            NodeData::Literal(LiteralData { text: text.into() }),
        )
    }

    pub fn add_property_access(&mut self, expression: NodeIndex, name: &str) -> NodeIndex {
        let argument = self.add_identifier(name);
        self.push(
            SyntaxKind::PropertyAccessExpression,
            NodeData::Access(AccessExprData {
                expression,
                argument,
                question_dot: false,
            }),
        )
    }

    /// `a?.b`.
    pub fn add_optional_property_access(&mut self, expression: NodeIndex, name: &str) -> NodeIndex {
        let argument = self.add_identifier(name);
        self.push(
            SyntaxKind::PropertyAccessExpression,
            NodeData::Access(AccessExprData {
                expression,
                argument,
                question_dot: true,
            }),
        )
    }

    pub fn add_element_access(&mut self, expression: NodeIndex, argument: NodeIndex) -> NodeIndex {
        self.push(
            SyntaxKind::ElementAccessExpression,
            NodeData::Access(AccessExprData {
                expression,
                argument,
                question_dot: false,
            }),
        )
    }

    pub fn add_call(&mut self, expression: NodeIndex, arguments: Vec<NodeIndex>) -> NodeIndex {
        self.push(
            SyntaxKind::CallExpression,
            NodeData::Call(CallExprData {
                expression,
                arguments,
                question_dot: false,
            }),
        )
    }

    /// `f?.()`.
    pub fn add_optional_call(
        &mut self,
        expression: NodeIndex,
        arguments: Vec<NodeIndex>,
    ) -> NodeIndex {
        self.push(
            SyntaxKind::CallExpression,
            NodeData::Call(CallExprData {
                expression,
                arguments,
                question_dot: true,
            }),
        )
    }

    pub fn add_arrow_function(&mut self, parameters: Vec<NodeIndex>, body: NodeIndex) -> NodeIndex {
        self.push(
            SyntaxKind::ArrowFunction,
            NodeData::Function(FunctionData {
                parameters: parameters.into(),
                body,
            }),
        )
    }

    pub fn add_function_expression(
        &mut self,
        parameters: Vec<NodeIndex>,
        body: NodeIndex,
    ) -> NodeIndex {
        self.push(
            SyntaxKind::FunctionExpression,
            NodeData::Function(FunctionData {
                parameters: parameters.into(),
                body,
            }),
        )
    }

    pub fn add_object_literal<N: Into<String>>(
        &mut self,
        properties: Vec<(N, NodeIndex)>,
    ) -> NodeIndex {
        let properties = properties
            .into_iter()
            .map(|(name, initializer)| PropertyAssignment {
                name: name.into(),
                initializer,
            })
            .collect();
        self.push(
            SyntaxKind::ObjectLiteralExpression,
            NodeData::ObjectLiteral(ObjectLiteralData { properties }),
        )
    }

    pub fn add_array_literal(&mut self, elements: Vec<NodeIndex>) -> NodeIndex {
        self.push(
            SyntaxKind::ArrayLiteralExpression,
            NodeData::ArrayLiteral(ArrayLiteralData { elements }),
        )
    }

    pub fn add_parenthesized(&mut self, expression: NodeIndex) -> NodeIndex {
        self.push(
            SyntaxKind::ParenthesizedExpression,
            NodeData::Wrapper(WrapperData { expression }),
        )
    }

    pub fn add_as_expression(&mut self, expression: NodeIndex) -> NodeIndex {
        self.push(
            SyntaxKind::AsExpression,
            NodeData::Wrapper(WrapperData { expression }),
        )
    }

    pub fn add_type_assertion(&mut self, expression: NodeIndex) -> NodeIndex {
        self.push(
            SyntaxKind::TypeAssertionExpression,
            NodeData::Wrapper(WrapperData { expression }),
        )
    }

    pub fn add_non_null(&mut self, expression: NodeIndex) -> NodeIndex {
        self.push(
            SyntaxKind::NonNullExpression,
            NodeData::Wrapper(WrapperData { expression }),
        )
    }

    pub fn add_chain(&mut self, expression: NodeIndex) -> NodeIndex {
        self.push(
            SyntaxKind::ChainExpression,
            NodeData::Wrapper(WrapperData { expression }),
        )
    }

    pub fn add_block(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        self.push(SyntaxKind::Block, NodeData::Block(BlockData { statements }))
    }

    /// Pass `NodeIndex::NONE` for a bare `return;`.
    pub fn add_return(&mut self, expression: NodeIndex) -> NodeIndex {
        self.push(
            SyntaxKind::ReturnStatement,
            NodeData::Return(ReturnData { expression }),
        )
    }

    pub fn add_expression_statement(&mut self, expression: NodeIndex) -> NodeIndex {
        self.push(
            SyntaxKind::ExpressionStatement,
            NodeData::ExprStmt(ExprStmtData { expression }),
        )
    }

    pub fn add_variable_declaration(
        &mut self,
        name: impl Into<String>,
        initializer: NodeIndex,
    ) -> NodeIndex {
        self.push(
            SyntaxKind::VariableDeclaration,
            NodeData::Variable(VariableData {
                name: name.into(),
                initializer,
            }),
        )
    }

    pub fn add_import(
        &mut self,
        module_specifier: impl Into<String>,
        default_binding: Option<&str>,
        named_bindings: Vec<(&str, &str)>,
    ) -> NodeIndex {
        let named_bindings = named_bindings
            .into_iter()
            .map(|(imported, local)| ImportSpecifier {
                imported: imported.to_string(),
                local: local.to_string(),
            })
            .collect();
        self.push(
            SyntaxKind::ImportDeclaration,
            NodeData::Import(ImportData {
                module_specifier: module_specifier.into(),
                default_binding: default_binding.map(str::to_string),
                named_bindings,
            }),
        )
    }

    pub fn add_source_file(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        self.push(
            SyntaxKind::SourceFile,
            NodeData::SourceFile(SourceFileData { statements }),
        )
    }
}
