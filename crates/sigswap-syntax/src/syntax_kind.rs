//! Token and node kinds for the supported TypeScript subset.

/// Every token and tree node carries one of these kinds.
///
/// The split mirrors the layout of the token stream: trivia never gets a
/// kind because the scanner swallows it, and contextual keywords (`from` in
/// import declarations, `undefined`) stay plain identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    Unknown,
    EndOfFile,

    // Literals and names
    Identifier,
    NumericLiteral,
    StringLiteral,

    // Keywords
    AsKeyword,
    ConstKeyword,
    ExportKeyword,
    FunctionKeyword,
    ImportKeyword,
    LetKeyword,
    ReturnKeyword,
    ThisKeyword,
    TypeofKeyword,
    VarKeyword,

    // Punctuation
    OpenBrace,
    CloseBrace,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    Dot,
    DotDotDot,
    Semicolon,
    Comma,
    LessThan,
    GreaterThan,
    LessThanEquals,
    GreaterThanEquals,
    EqualsEquals,
    ExclamationEquals,
    EqualsEqualsEquals,
    ExclamationEqualsEquals,
    EqualsGreaterThan,
    Plus,
    Minus,
    Asterisk,
    Slash,
    Percent,
    AmpersandAmpersand,
    BarBar,
    QuestionQuestion,
    Exclamation,
    Question,
    Colon,
    Equals,

    // Nodes
    SourceFile,
    ImportDeclaration,
    FunctionDeclaration,
    Parameter,
    Block,
    VariableStatement,
    VariableDeclarationList,
    VariableDeclaration,
    ExpressionStatement,
    ReturnStatement,
    CallExpression,
    PropertyAccessExpression,
    ObjectLiteralExpression,
    ArrayLiteralExpression,
    PropertyAssignment,
    ShorthandPropertyAssignment,
    SpreadElement,
    ParenthesizedExpression,
    BinaryExpression,
    PrefixUnaryExpression,
    ArrowFunction,
    FunctionExpression,
    AsExpression,
    TypeReference,
    ArrayType,
    TypeLiteral,
    PropertySignature,
    TypeQuery,
}

impl SyntaxKind {
    /// Function declarations, function expressions, and arrow functions all
    /// carry a parameter list the engine can rewrite.
    pub fn is_function_like(self) -> bool {
        matches!(
            self,
            SyntaxKind::FunctionDeclaration
                | SyntaxKind::FunctionExpression
                | SyntaxKind::ArrowFunction
        )
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            SyntaxKind::AsKeyword
                | SyntaxKind::ConstKeyword
                | SyntaxKind::ExportKeyword
                | SyntaxKind::FunctionKeyword
                | SyntaxKind::ImportKeyword
                | SyntaxKind::LetKeyword
                | SyntaxKind::ReturnKeyword
                | SyntaxKind::ThisKeyword
                | SyntaxKind::TypeofKeyword
                | SyntaxKind::VarKeyword
        )
    }
}

/// Maps reserved words to their token kinds. Contextual keywords are not
/// listed; they scan as identifiers.
pub fn keyword_kind(text: &str) -> Option<SyntaxKind> {
    let kind = match text {
        "as" => SyntaxKind::AsKeyword,
        "const" => SyntaxKind::ConstKeyword,
        "export" => SyntaxKind::ExportKeyword,
        "function" => SyntaxKind::FunctionKeyword,
        "import" => SyntaxKind::ImportKeyword,
        "let" => SyntaxKind::LetKeyword,
        "return" => SyntaxKind::ReturnKeyword,
        "this" => SyntaxKind::ThisKeyword,
        "typeof" => SyntaxKind::TypeofKeyword,
        "var" => SyntaxKind::VarKeyword,
        _ => return None,
    };
    Some(kind)
}
