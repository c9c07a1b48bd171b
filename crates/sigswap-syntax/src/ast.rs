//! Arena-backed syntax tree.
//!
//! Nodes live in a flat [`crate::arena::NodeArena`] and point at each other
//! through [`NodeIndex`]. Every payload struct embeds a [`NodeBase`] with the
//! kind, the tight source span, and the parent link (assigned by a fix-up
//! pass after parsing).

use bitflags::bitflags;

use crate::syntax_kind::SyntaxKind;

/// Index of a node in its arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(pub u32);

/// An ordered list of child nodes.
pub type NodeList = Vec<NodeIndex>;

bitflags! {
    /// Declaration modifiers. Only `export` matters to this engine.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ModifierFlags: u8 {
        const EXPORT = 1 << 0;
    }
}

/// Fields shared by every node.
///
/// `pos` is the tight start (after leading trivia) and `end` is exclusive,
/// so `&text[pos..end]` is exactly the node's source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeBase {
    pub kind: SyntaxKind,
    pub pos: u32,
    pub end: u32,
    pub parent: Option<NodeIndex>,
    pub modifier_flags: ModifierFlags,
}

impl NodeBase {
    pub fn new(kind: SyntaxKind, pos: u32, end: u32) -> NodeBase {
        NodeBase { kind, pos, end, parent: None, modifier_flags: ModifierFlags::empty() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFileData {
    pub base: NodeBase,
    pub statements: NodeList,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierData {
    pub base: NodeBase,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralData {
    pub base: NodeBase,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDeclarationData {
    pub base: NodeBase,
    pub bindings: NodeList,
    pub module_specifier: Option<NodeIndex>,
}

/// Shared payload for the three function-like forms. `name` is `None` for
/// anonymous function expressions and all arrow functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionLikeData {
    pub base: NodeBase,
    pub name: Option<NodeIndex>,
    pub parameters: NodeList,
    pub type_annotation: Option<NodeIndex>,
    pub body: Option<NodeIndex>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterData {
    pub base: NodeBase,
    pub dot_dot_dot: bool,
    pub name: NodeIndex,
    pub question: bool,
    pub type_annotation: Option<NodeIndex>,
    pub initializer: Option<NodeIndex>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockData {
    pub base: NodeBase,
    pub statements: NodeList,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableStatementData {
    pub base: NodeBase,
    pub declaration_list: NodeIndex,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclarationListData {
    pub base: NodeBase,
    pub declarations: NodeList,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclarationData {
    pub base: NodeBase,
    pub name: NodeIndex,
    pub type_annotation: Option<NodeIndex>,
    pub initializer: Option<NodeIndex>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionStatementData {
    pub base: NodeBase,
    pub expression: NodeIndex,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStatementData {
    pub base: NodeBase,
    pub expression: Option<NodeIndex>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpressionData {
    pub base: NodeBase,
    pub expression: NodeIndex,
    pub arguments: NodeList,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyAccessData {
    pub base: NodeBase,
    pub expression: NodeIndex,
    pub name: NodeIndex,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLiteralData {
    pub base: NodeBase,
    pub properties: NodeList,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayLiteralData {
    pub base: NodeBase,
    pub elements: NodeList,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyAssignmentData {
    pub base: NodeBase,
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShorthandPropertyAssignmentData {
    pub base: NodeBase,
    pub name: NodeIndex,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpreadElementData {
    pub base: NodeBase,
    pub expression: NodeIndex,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParenthesizedData {
    pub base: NodeBase,
    pub expression: NodeIndex,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryExpressionData {
    pub base: NodeBase,
    pub left: NodeIndex,
    pub operator: SyntaxKind,
    pub right: NodeIndex,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixUnaryData {
    pub base: NodeBase,
    pub operator: SyntaxKind,
    pub operand: NodeIndex,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsExpressionData {
    pub base: NodeBase,
    pub expression: NodeIndex,
    pub type_node: NodeIndex,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeReferenceData {
    pub base: NodeBase,
    pub type_name: NodeIndex,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayTypeData {
    pub base: NodeBase,
    pub element_type: NodeIndex,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeLiteralData {
    pub base: NodeBase,
    pub members: NodeList,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySignatureData {
    pub base: NodeBase,
    pub name: NodeIndex,
    pub type_annotation: Option<NodeIndex>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeQueryData {
    pub base: NodeBase,
    pub expr_name: NodeIndex,
}

/// A syntax tree node. The enum is fat: each variant owns its payload, and
/// structural queries go through [`crate::arena::NodeArena::get_children`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    SourceFile(SourceFileData),
    Identifier(IdentifierData),
    NumericLiteral(LiteralData),
    StringLiteral(LiteralData),
    ImportDeclaration(ImportDeclarationData),
    FunctionDeclaration(FunctionLikeData),
    FunctionExpression(FunctionLikeData),
    ArrowFunction(FunctionLikeData),
    Parameter(ParameterData),
    Block(BlockData),
    VariableStatement(VariableStatementData),
    VariableDeclarationList(VariableDeclarationListData),
    VariableDeclaration(VariableDeclarationData),
    ExpressionStatement(ExpressionStatementData),
    ReturnStatement(ReturnStatementData),
    CallExpression(CallExpressionData),
    PropertyAccessExpression(PropertyAccessData),
    ObjectLiteralExpression(ObjectLiteralData),
    ArrayLiteralExpression(ArrayLiteralData),
    PropertyAssignment(PropertyAssignmentData),
    ShorthandPropertyAssignment(ShorthandPropertyAssignmentData),
    SpreadElement(SpreadElementData),
    ParenthesizedExpression(ParenthesizedData),
    BinaryExpression(BinaryExpressionData),
    PrefixUnaryExpression(PrefixUnaryData),
    AsExpression(AsExpressionData),
    TypeReference(TypeReferenceData),
    ArrayType(ArrayTypeData),
    TypeLiteral(TypeLiteralData),
    PropertySignature(PropertySignatureData),
    TypeQuery(TypeQueryData),
}

impl Node {
    pub fn base(&self) -> &NodeBase {
        match self {
            Node::SourceFile(d) => &d.base,
            Node::Identifier(d) => &d.base,
            Node::NumericLiteral(d) => &d.base,
            Node::StringLiteral(d) => &d.base,
            Node::ImportDeclaration(d) => &d.base,
            Node::FunctionDeclaration(d) => &d.base,
            Node::FunctionExpression(d) => &d.base,
            Node::ArrowFunction(d) => &d.base,
            Node::Parameter(d) => &d.base,
            Node::Block(d) => &d.base,
            Node::VariableStatement(d) => &d.base,
            Node::VariableDeclarationList(d) => &d.base,
            Node::VariableDeclaration(d) => &d.base,
            Node::ExpressionStatement(d) => &d.base,
            Node::ReturnStatement(d) => &d.base,
            Node::CallExpression(d) => &d.base,
            Node::PropertyAccessExpression(d) => &d.base,
            Node::ObjectLiteralExpression(d) => &d.base,
            Node::ArrayLiteralExpression(d) => &d.base,
            Node::PropertyAssignment(d) => &d.base,
            Node::ShorthandPropertyAssignment(d) => &d.base,
            Node::SpreadElement(d) => &d.base,
            Node::ParenthesizedExpression(d) => &d.base,
            Node::BinaryExpression(d) => &d.base,
            Node::PrefixUnaryExpression(d) => &d.base,
            Node::AsExpression(d) => &d.base,
            Node::TypeReference(d) => &d.base,
            Node::ArrayType(d) => &d.base,
            Node::TypeLiteral(d) => &d.base,
            Node::PropertySignature(d) => &d.base,
            Node::TypeQuery(d) => &d.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut NodeBase {
        match self {
            Node::SourceFile(d) => &mut d.base,
            Node::Identifier(d) => &mut d.base,
            Node::NumericLiteral(d) => &mut d.base,
            Node::StringLiteral(d) => &mut d.base,
            Node::ImportDeclaration(d) => &mut d.base,
            Node::FunctionDeclaration(d) => &mut d.base,
            Node::FunctionExpression(d) => &mut d.base,
            Node::ArrowFunction(d) => &mut d.base,
            Node::Parameter(d) => &mut d.base,
            Node::Block(d) => &mut d.base,
            Node::VariableStatement(d) => &mut d.base,
            Node::VariableDeclarationList(d) => &mut d.base,
            Node::VariableDeclaration(d) => &mut d.base,
            Node::ExpressionStatement(d) => &mut d.base,
            Node::ReturnStatement(d) => &mut d.base,
            Node::CallExpression(d) => &mut d.base,
            Node::PropertyAccessExpression(d) => &mut d.base,
            Node::ObjectLiteralExpression(d) => &mut d.base,
            Node::ArrayLiteralExpression(d) => &mut d.base,
            Node::PropertyAssignment(d) => &mut d.base,
            Node::ShorthandPropertyAssignment(d) => &mut d.base,
            Node::SpreadElement(d) => &mut d.base,
            Node::ParenthesizedExpression(d) => &mut d.base,
            Node::BinaryExpression(d) => &mut d.base,
            Node::PrefixUnaryExpression(d) => &mut d.base,
            Node::AsExpression(d) => &mut d.base,
            Node::TypeReference(d) => &mut d.base,
            Node::ArrayType(d) => &mut d.base,
            Node::TypeLiteral(d) => &mut d.base,
            Node::PropertySignature(d) => &mut d.base,
            Node::TypeQuery(d) => &mut d.base,
        }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.base().kind
    }

    /// The function-like payload, for the three variants that carry one.
    pub fn as_function_like(&self) -> Option<&FunctionLikeData> {
        match self {
            Node::FunctionDeclaration(d) | Node::FunctionExpression(d) | Node::ArrowFunction(d) => {
                Some(d)
            }
            _ => None,
        }
    }
}
