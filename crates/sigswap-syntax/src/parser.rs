//! Recursive-descent parser for the supported TypeScript subset.
//!
//! The parser never fails: problems are recorded as [`ParseDiagnostic`]
//! values and recovery skips just enough tokens to keep making progress.
//! Every list-shaped production carries a progress guard so malformed input
//! cannot loop.

use serde::Serialize;
use sigswap_common::TextSpan;

use crate::arena::NodeArena;
use crate::ast::{
    ArrayLiteralData, ArrayTypeData, AsExpressionData, BinaryExpressionData, BlockData,
    CallExpressionData, ExpressionStatementData, FunctionLikeData, IdentifierData,
    ImportDeclarationData, LiteralData, ModifierFlags, Node, NodeBase, NodeIndex, NodeList,
    ObjectLiteralData, ParameterData, ParenthesizedData, PrefixUnaryData, PropertyAccessData,
    PropertyAssignmentData, PropertySignatureData, ReturnStatementData,
    ShorthandPropertyAssignmentData, SourceFileData, SpreadElementData, TypeLiteralData,
    TypeQueryData, TypeReferenceData, VariableDeclarationData, VariableDeclarationListData,
    VariableStatementData,
};
use crate::scanner::{Token, tokenize};
use crate::syntax_kind::SyntaxKind;

/// A recoverable parse problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseDiagnostic {
    pub message: String,
    pub span: TextSpan,
}

/// Everything `parse_source_file` produces.
pub struct ParseResult {
    pub arena: NodeArena,
    pub root: NodeIndex,
    pub diagnostics: Vec<ParseDiagnostic>,
}

/// Parses one file. Always returns a tree; see [`ParseResult::diagnostics`]
/// for anything the parser had to recover from.
pub fn parse_source_file(text: &str) -> ParseResult {
    let mut parser = ParserState::new(text);
    let mut statements = Vec::new();
    while !parser.at(SyntaxKind::EndOfFile) {
        if parser.eat(SyntaxKind::Semicolon) {
            continue;
        }
        let before = parser.pos;
        if let Some(statement) = parser.parse_statement() {
            statements.push(statement);
        }
        if parser.pos == before {
            parser.skip_token("unexpected token");
        }
    }
    let end = text.len() as u32;
    let root = parser.add(Node::SourceFile(SourceFileData {
        base: NodeBase::new(SyntaxKind::SourceFile, 0, end),
        statements,
    }));
    parser.arena.set_parents(root);
    ParseResult { arena: parser.arena, root, diagnostics: parser.diagnostics }
}

struct ParserState<'a> {
    text: &'a str,
    tokens: Vec<Token>,
    pos: usize,
    arena: NodeArena,
    diagnostics: Vec<ParseDiagnostic>,
}

impl<'a> ParserState<'a> {
    fn new(text: &'a str) -> ParserState<'a> {
        ParserState {
            text,
            tokens: tokenize(text),
            pos: 0,
            arena: NodeArena::new(),
            diagnostics: Vec::new(),
        }
    }

    fn token(&self) -> Token {
        self.tokens[self.pos]
    }

    fn kind(&self) -> SyntaxKind {
        self.token().kind
    }

    fn peek_kind(&self, offset: usize) -> SyntaxKind {
        self.tokens.get(self.pos + offset).map_or(SyntaxKind::EndOfFile, |t| t.kind)
    }

    fn token_text(&self) -> &str {
        let token = self.token();
        &self.text[token.pos as usize..token.end as usize]
    }

    /// Start of the current token; the `pos` for any node beginning here.
    fn start(&self) -> u32 {
        self.token().pos
    }

    /// End of the last consumed token; the `end` for any node finished here.
    fn prev_end(&self) -> u32 {
        if self.pos == 0 { 0 } else { self.tokens[self.pos - 1].end }
    }

    fn next(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.kind() == kind
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.next();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: SyntaxKind, what: &str) {
        if !self.eat(kind) {
            self.error_at_current(&format!("expected {what}"));
        }
    }

    fn error_at_current(&mut self, message: &str) {
        let token = self.token();
        self.diagnostics.push(ParseDiagnostic {
            message: message.to_string(),
            span: TextSpan::from_bounds(token.pos, token.end),
        });
    }

    fn skip_token(&mut self, message: &str) {
        self.error_at_current(message);
        self.next();
    }

    fn add(&mut self, node: Node) -> NodeIndex {
        self.arena.add(node)
    }

    // ----- statements -----

    fn parse_statement(&mut self) -> Option<NodeIndex> {
        let flags = if self.at(SyntaxKind::ExportKeyword) {
            self.next();
            ModifierFlags::EXPORT
        } else {
            ModifierFlags::empty()
        };
        if !flags.is_empty()
            && !matches!(
                self.kind(),
                SyntaxKind::FunctionKeyword
                    | SyntaxKind::ConstKeyword
                    | SyntaxKind::LetKeyword
                    | SyntaxKind::VarKeyword
            )
        {
            self.error_at_current("expected a declaration after 'export'");
        }
        match self.kind() {
            SyntaxKind::ImportKeyword => Some(self.parse_import_declaration()),
            SyntaxKind::FunctionKeyword => Some(self.parse_function_declaration(flags)),
            SyntaxKind::ConstKeyword | SyntaxKind::LetKeyword | SyntaxKind::VarKeyword => {
                Some(self.parse_variable_statement(flags))
            }
            SyntaxKind::ReturnKeyword => Some(self.parse_return_statement()),
            SyntaxKind::OpenBrace => Some(self.parse_block()),
            SyntaxKind::EndOfFile | SyntaxKind::CloseBrace => None,
            _ => Some(self.parse_expression_statement()),
        }
    }

    fn parse_import_declaration(&mut self) -> NodeIndex {
        let pos = self.start();
        self.next();
        let mut bindings = NodeList::new();
        let mut module_specifier = None;
        if self.at(SyntaxKind::StringLiteral) {
            // Side-effect import: `import "./mod";`
            module_specifier = Some(self.parse_literal(SyntaxKind::StringLiteral));
        } else {
            if self.eat(SyntaxKind::OpenBrace) {
                while !self.at(SyntaxKind::CloseBrace) && !self.at(SyntaxKind::EndOfFile) {
                    if self.at(SyntaxKind::Identifier) {
                        bindings.push(self.parse_identifier_name());
                    } else {
                        self.skip_token("expected import binding");
                    }
                    if !self.eat(SyntaxKind::Comma) {
                        break;
                    }
                }
                self.expect(SyntaxKind::CloseBrace, "'}'");
            } else if self.at(SyntaxKind::Identifier) {
                bindings.push(self.parse_identifier_name());
            } else {
                self.error_at_current("expected import clause");
            }
            if self.at(SyntaxKind::Identifier) && self.token_text() == "from" {
                self.next();
            } else {
                self.error_at_current("expected 'from'");
            }
            if self.at(SyntaxKind::StringLiteral) {
                module_specifier = Some(self.parse_literal(SyntaxKind::StringLiteral));
            } else {
                self.error_at_current("expected module specifier");
            }
        }
        self.eat(SyntaxKind::Semicolon);
        self.add(Node::ImportDeclaration(ImportDeclarationData {
            base: NodeBase::new(SyntaxKind::ImportDeclaration, pos, self.prev_end()),
            bindings,
            module_specifier,
        }))
    }

    fn parse_function_declaration(&mut self, flags: ModifierFlags) -> NodeIndex {
        let pos = self.start();
        self.next();
        let name = if self.at(SyntaxKind::Identifier) {
            Some(self.parse_identifier_name())
        } else {
            self.error_at_current("expected function name");
            None
        };
        let parameters = self.parse_parameter_list();
        let type_annotation =
            if self.eat(SyntaxKind::Colon) { Some(self.parse_type()) } else { None };
        let body = Some(self.parse_block());
        let mut base = NodeBase::new(SyntaxKind::FunctionDeclaration, pos, self.prev_end());
        base.modifier_flags = flags;
        self.add(Node::FunctionDeclaration(FunctionLikeData {
            base,
            name,
            parameters,
            type_annotation,
            body,
        }))
    }

    fn parse_variable_statement(&mut self, flags: ModifierFlags) -> NodeIndex {
        let pos = self.start();
        self.next();
        let list_pos = self.start();
        let mut declarations = NodeList::new();
        while !self.at(SyntaxKind::EndOfFile) {
            let before = self.pos;
            let declaration = self.parse_variable_declaration();
            if self.pos == before {
                self.skip_token("expected variable declaration");
            } else {
                declarations.push(declaration);
            }
            if !self.eat(SyntaxKind::Comma) {
                break;
            }
        }
        let declaration_list = self.add(Node::VariableDeclarationList(VariableDeclarationListData {
            base: NodeBase::new(SyntaxKind::VariableDeclarationList, list_pos, self.prev_end()),
            declarations,
        }));
        self.eat(SyntaxKind::Semicolon);
        let mut base = NodeBase::new(SyntaxKind::VariableStatement, pos, self.prev_end());
        base.modifier_flags = flags;
        self.add(Node::VariableStatement(VariableStatementData { base, declaration_list }))
    }

    fn parse_variable_declaration(&mut self) -> NodeIndex {
        let pos = self.start();
        let name = self.parse_identifier_name();
        let type_annotation =
            if self.eat(SyntaxKind::Colon) { Some(self.parse_type()) } else { None };
        let initializer =
            if self.eat(SyntaxKind::Equals) { Some(self.parse_expression()) } else { None };
        self.add(Node::VariableDeclaration(VariableDeclarationData {
            base: NodeBase::new(SyntaxKind::VariableDeclaration, pos, self.prev_end()),
            name,
            type_annotation,
            initializer,
        }))
    }

    fn parse_return_statement(&mut self) -> NodeIndex {
        let pos = self.start();
        self.next();
        let expression = if matches!(
            self.kind(),
            SyntaxKind::Semicolon | SyntaxKind::CloseBrace | SyntaxKind::EndOfFile
        ) {
            None
        } else {
            Some(self.parse_expression())
        };
        self.eat(SyntaxKind::Semicolon);
        self.add(Node::ReturnStatement(ReturnStatementData {
            base: NodeBase::new(SyntaxKind::ReturnStatement, pos, self.prev_end()),
            expression,
        }))
    }

    fn parse_expression_statement(&mut self) -> NodeIndex {
        let pos = self.start();
        let expression = self.parse_expression();
        self.eat(SyntaxKind::Semicolon);
        self.add(Node::ExpressionStatement(ExpressionStatementData {
            base: NodeBase::new(SyntaxKind::ExpressionStatement, pos, self.prev_end()),
            expression,
        }))
    }

    fn parse_block(&mut self) -> NodeIndex {
        let pos = self.start();
        self.expect(SyntaxKind::OpenBrace, "'{'");
        let mut statements = NodeList::new();
        while !self.at(SyntaxKind::CloseBrace) && !self.at(SyntaxKind::EndOfFile) {
            if self.eat(SyntaxKind::Semicolon) {
                continue;
            }
            let before = self.pos;
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            if self.pos == before {
                self.skip_token("unexpected token");
            }
        }
        self.expect(SyntaxKind::CloseBrace, "'}'");
        self.add(Node::Block(BlockData {
            base: NodeBase::new(SyntaxKind::Block, pos, self.prev_end()),
            statements,
        }))
    }

    // ----- expressions -----

    fn parse_expression(&mut self) -> NodeIndex {
        self.parse_binary_expression(1)
    }

    fn parse_binary_expression(&mut self, min_precedence: u8) -> NodeIndex {
        let pos = self.start();
        let mut left = self.parse_unary_expression();
        loop {
            let Some(precedence) = binary_precedence(self.kind()) else { break };
            if precedence < min_precedence {
                break;
            }
            let operator = self.kind();
            self.next();
            // Assignment is right-associative; everything else climbs left.
            let next_min =
                if operator == SyntaxKind::Equals { precedence } else { precedence + 1 };
            let right = self.parse_binary_expression(next_min);
            left = self.add(Node::BinaryExpression(BinaryExpressionData {
                base: NodeBase::new(SyntaxKind::BinaryExpression, pos, self.prev_end()),
                left,
                operator,
                right,
            }));
        }
        left
    }

    fn parse_unary_expression(&mut self) -> NodeIndex {
        let pos = self.start();
        match self.kind() {
            SyntaxKind::TypeofKeyword
            | SyntaxKind::Exclamation
            | SyntaxKind::Minus
            | SyntaxKind::Plus => {
                let operator = self.kind();
                self.next();
                let operand = self.parse_unary_expression();
                self.add(Node::PrefixUnaryExpression(PrefixUnaryData {
                    base: NodeBase::new(SyntaxKind::PrefixUnaryExpression, pos, self.prev_end()),
                    operator,
                    operand,
                }))
            }
            _ => self.parse_postfix_expression(),
        }
    }

    fn parse_postfix_expression(&mut self) -> NodeIndex {
        let pos = self.start();
        let mut expression = self.parse_primary_expression();
        loop {
            match self.kind() {
                SyntaxKind::Dot => {
                    self.next();
                    let name = self.parse_identifier_name();
                    expression = self.add(Node::PropertyAccessExpression(PropertyAccessData {
                        base: NodeBase::new(
                            SyntaxKind::PropertyAccessExpression,
                            pos,
                            self.prev_end(),
                        ),
                        expression,
                        name,
                    }));
                }
                SyntaxKind::OpenParen => {
                    let arguments = self.parse_arguments();
                    expression = self.add(Node::CallExpression(CallExpressionData {
                        base: NodeBase::new(SyntaxKind::CallExpression, pos, self.prev_end()),
                        expression,
                        arguments,
                    }));
                }
                SyntaxKind::AsKeyword => {
                    self.next();
                    let type_node = self.parse_type();
                    expression = self.add(Node::AsExpression(AsExpressionData {
                        base: NodeBase::new(SyntaxKind::AsExpression, pos, self.prev_end()),
                        expression,
                        type_node,
                    }));
                }
                _ => break,
            }
        }
        expression
    }

    fn parse_primary_expression(&mut self) -> NodeIndex {
        match self.kind() {
            SyntaxKind::Identifier => {
                if self.peek_kind(1) == SyntaxKind::EqualsGreaterThan {
                    self.parse_arrow_function()
                } else {
                    self.parse_identifier_name()
                }
            }
            SyntaxKind::ThisKeyword => self.parse_identifier_name(),
            SyntaxKind::NumericLiteral => self.parse_literal(SyntaxKind::NumericLiteral),
            SyntaxKind::StringLiteral => self.parse_literal(SyntaxKind::StringLiteral),
            SyntaxKind::OpenParen => {
                if self.is_parenthesized_arrow_ahead() {
                    self.parse_arrow_function()
                } else {
                    let pos = self.start();
                    self.next();
                    let expression = self.parse_expression();
                    self.expect(SyntaxKind::CloseParen, "')'");
                    self.add(Node::ParenthesizedExpression(ParenthesizedData {
                        base: NodeBase::new(
                            SyntaxKind::ParenthesizedExpression,
                            pos,
                            self.prev_end(),
                        ),
                        expression,
                    }))
                }
            }
            SyntaxKind::OpenBrace => self.parse_object_literal(),
            SyntaxKind::OpenBracket => self.parse_array_literal(),
            SyntaxKind::FunctionKeyword => self.parse_function_expression(),
            _ => {
                self.error_at_current("expected expression");
                let pos = self.start();
                // Leave closers for the enclosing production to consume.
                if !matches!(
                    self.kind(),
                    SyntaxKind::CloseParen
                        | SyntaxKind::CloseBrace
                        | SyntaxKind::CloseBracket
                        | SyntaxKind::Comma
                        | SyntaxKind::Semicolon
                        | SyntaxKind::EndOfFile
                ) {
                    self.next();
                }
                self.add(Node::Identifier(IdentifierData {
                    base: NodeBase::new(SyntaxKind::Identifier, pos, pos),
                    text: String::new(),
                }))
            }
        }
    }

    /// Accepts an identifier or the `this` keyword (used in receiver
    /// parameter position and as an expression) and produces an identifier
    /// node carrying the token text.
    fn parse_identifier_name(&mut self) -> NodeIndex {
        if matches!(self.kind(), SyntaxKind::Identifier | SyntaxKind::ThisKeyword) {
            let token = self.token();
            let text = self.token_text().to_string();
            self.next();
            self.add(Node::Identifier(IdentifierData {
                base: NodeBase::new(SyntaxKind::Identifier, token.pos, token.end),
                text,
            }))
        } else {
            self.error_at_current("expected identifier");
            let pos = self.start();
            self.add(Node::Identifier(IdentifierData {
                base: NodeBase::new(SyntaxKind::Identifier, pos, pos),
                text: String::new(),
            }))
        }
    }

    fn parse_literal(&mut self, kind: SyntaxKind) -> NodeIndex {
        let token = self.token();
        let text = self.token_text().to_string();
        self.next();
        let data = LiteralData { base: NodeBase::new(kind, token.pos, token.end), text };
        match kind {
            SyntaxKind::StringLiteral => self.add(Node::StringLiteral(data)),
            _ => self.add(Node::NumericLiteral(data)),
        }
    }

    fn parse_arguments(&mut self) -> NodeList {
        self.expect(SyntaxKind::OpenParen, "'('");
        let mut arguments = NodeList::new();
        while !self.at(SyntaxKind::CloseParen) && !self.at(SyntaxKind::EndOfFile) {
            let before = self.pos;
            let argument = if self.at(SyntaxKind::DotDotDot) {
                let pos = self.start();
                self.next();
                let expression = self.parse_expression();
                self.add(Node::SpreadElement(SpreadElementData {
                    base: NodeBase::new(SyntaxKind::SpreadElement, pos, self.prev_end()),
                    expression,
                }))
            } else {
                self.parse_expression()
            };
            if self.pos == before {
                self.skip_token("expected argument");
                continue;
            }
            arguments.push(argument);
            if !self.eat(SyntaxKind::Comma) {
                break;
            }
        }
        self.expect(SyntaxKind::CloseParen, "')'");
        arguments
    }

    fn parse_object_literal(&mut self) -> NodeIndex {
        let pos = self.start();
        self.next();
        let mut properties = NodeList::new();
        while !self.at(SyntaxKind::CloseBrace) && !self.at(SyntaxKind::EndOfFile) {
            let before = self.pos;
            if self.at(SyntaxKind::DotDotDot) {
                let spread_pos = self.start();
                self.next();
                let expression = self.parse_expression();
                properties.push(self.add(Node::SpreadElement(SpreadElementData {
                    base: NodeBase::new(SyntaxKind::SpreadElement, spread_pos, self.prev_end()),
                    expression,
                })));
            } else if self.at(SyntaxKind::Identifier) {
                properties.push(self.parse_object_literal_member());
            } else {
                self.skip_token("expected property");
            }
            if self.pos == before {
                self.skip_token("expected property");
                continue;
            }
            if !self.eat(SyntaxKind::Comma) {
                break;
            }
        }
        self.expect(SyntaxKind::CloseBrace, "'}'");
        self.add(Node::ObjectLiteralExpression(ObjectLiteralData {
            base: NodeBase::new(SyntaxKind::ObjectLiteralExpression, pos, self.prev_end()),
            properties,
        }))
    }

    fn parse_object_literal_member(&mut self) -> NodeIndex {
        let pos = self.start();
        let name = self.parse_identifier_name();
        match self.kind() {
            SyntaxKind::Colon => {
                self.next();
                let initializer = self.parse_expression();
                self.add(Node::PropertyAssignment(PropertyAssignmentData {
                    base: NodeBase::new(SyntaxKind::PropertyAssignment, pos, self.prev_end()),
                    name,
                    initializer,
                }))
            }
            SyntaxKind::OpenParen => {
                // Method shorthand: `{ m(a, b) { ... } }` becomes a property
                // whose value is an anonymous function expression.
                let fn_pos = self.start();
                let parameters = self.parse_parameter_list();
                let type_annotation =
                    if self.eat(SyntaxKind::Colon) { Some(self.parse_type()) } else { None };
                let body = Some(self.parse_block());
                let initializer = self.add(Node::FunctionExpression(FunctionLikeData {
                    base: NodeBase::new(SyntaxKind::FunctionExpression, fn_pos, self.prev_end()),
                    name: None,
                    parameters,
                    type_annotation,
                    body,
                }));
                self.add(Node::PropertyAssignment(PropertyAssignmentData {
                    base: NodeBase::new(SyntaxKind::PropertyAssignment, pos, self.prev_end()),
                    name,
                    initializer,
                }))
            }
            _ => self.add(Node::ShorthandPropertyAssignment(ShorthandPropertyAssignmentData {
                base: NodeBase::new(SyntaxKind::ShorthandPropertyAssignment, pos, self.prev_end()),
                name,
            })),
        }
    }

    fn parse_array_literal(&mut self) -> NodeIndex {
        let pos = self.start();
        self.next();
        let mut elements = NodeList::new();
        while !self.at(SyntaxKind::CloseBracket) && !self.at(SyntaxKind::EndOfFile) {
            let before = self.pos;
            let element = if self.at(SyntaxKind::DotDotDot) {
                let spread_pos = self.start();
                self.next();
                let expression = self.parse_expression();
                self.add(Node::SpreadElement(SpreadElementData {
                    base: NodeBase::new(SyntaxKind::SpreadElement, spread_pos, self.prev_end()),
                    expression,
                }))
            } else {
                self.parse_expression()
            };
            if self.pos == before {
                self.skip_token("expected element");
                continue;
            }
            elements.push(element);
            if !self.eat(SyntaxKind::Comma) {
                break;
            }
        }
        self.expect(SyntaxKind::CloseBracket, "']'");
        self.add(Node::ArrayLiteralExpression(ArrayLiteralData {
            base: NodeBase::new(SyntaxKind::ArrayLiteralExpression, pos, self.prev_end()),
            elements,
        }))
    }

    fn parse_function_expression(&mut self) -> NodeIndex {
        let pos = self.start();
        self.next();
        let name =
            if self.at(SyntaxKind::Identifier) { Some(self.parse_identifier_name()) } else { None };
        let parameters = self.parse_parameter_list();
        let type_annotation =
            if self.eat(SyntaxKind::Colon) { Some(self.parse_type()) } else { None };
        let body = Some(self.parse_block());
        self.add(Node::FunctionExpression(FunctionLikeData {
            base: NodeBase::new(SyntaxKind::FunctionExpression, pos, self.prev_end()),
            name,
            parameters,
            type_annotation,
            body,
        }))
    }

    fn parse_arrow_function(&mut self) -> NodeIndex {
        let pos = self.start();
        let parameters = if self.at(SyntaxKind::OpenParen) {
            self.parse_parameter_list()
        } else {
            // Single-parameter shorthand: `x => ...`
            let param_pos = self.start();
            let name = self.parse_identifier_name();
            vec![self.add(Node::Parameter(ParameterData {
                base: NodeBase::new(SyntaxKind::Parameter, param_pos, self.prev_end()),
                dot_dot_dot: false,
                name,
                question: false,
                type_annotation: None,
                initializer: None,
            }))]
        };
        self.expect(SyntaxKind::EqualsGreaterThan, "'=>'");
        let body =
            if self.at(SyntaxKind::OpenBrace) { self.parse_block() } else { self.parse_expression() };
        self.add(Node::ArrowFunction(FunctionLikeData {
            base: NodeBase::new(SyntaxKind::ArrowFunction, pos, self.prev_end()),
            name: None,
            parameters,
            type_annotation: None,
            body: Some(body),
        }))
    }

    /// At an `(`: decide whether it opens an arrow function's parameter list
    /// by finding the matching `)` and checking for `=>` right after it.
    fn is_parenthesized_arrow_ahead(&self) -> bool {
        let mut depth = 0usize;
        let mut i = self.pos;
        while let Some(token) = self.tokens.get(i) {
            match token.kind {
                SyntaxKind::OpenParen => depth += 1,
                SyntaxKind::CloseParen => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return self
                            .tokens
                            .get(i + 1)
                            .is_some_and(|t| t.kind == SyntaxKind::EqualsGreaterThan);
                    }
                }
                SyntaxKind::EndOfFile => return false,
                _ => {}
            }
            i += 1;
        }
        false
    }

    fn parse_parameter_list(&mut self) -> NodeList {
        self.expect(SyntaxKind::OpenParen, "'('");
        let mut parameters = NodeList::new();
        while !self.at(SyntaxKind::CloseParen) && !self.at(SyntaxKind::EndOfFile) {
            let before = self.pos;
            let parameter = self.parse_parameter();
            if self.pos == before {
                self.skip_token("expected parameter");
                continue;
            }
            parameters.push(parameter);
            if !self.eat(SyntaxKind::Comma) {
                break;
            }
        }
        self.expect(SyntaxKind::CloseParen, "')'");
        parameters
    }

    fn parse_parameter(&mut self) -> NodeIndex {
        let pos = self.start();
        let dot_dot_dot = self.eat(SyntaxKind::DotDotDot);
        let name = self.parse_identifier_name();
        let question = self.eat(SyntaxKind::Question);
        let type_annotation =
            if self.eat(SyntaxKind::Colon) { Some(self.parse_type()) } else { None };
        let initializer =
            if self.eat(SyntaxKind::Equals) { Some(self.parse_expression()) } else { None };
        self.add(Node::Parameter(ParameterData {
            base: NodeBase::new(SyntaxKind::Parameter, pos, self.prev_end()),
            dot_dot_dot,
            name,
            question,
            type_annotation,
            initializer,
        }))
    }

    // ----- types -----

    fn parse_type(&mut self) -> NodeIndex {
        let pos = self.start();
        let mut ty = self.parse_primary_type();
        while self.at(SyntaxKind::OpenBracket) && self.peek_kind(1) == SyntaxKind::CloseBracket {
            self.next();
            self.next();
            ty = self.add(Node::ArrayType(ArrayTypeData {
                base: NodeBase::new(SyntaxKind::ArrayType, pos, self.prev_end()),
                element_type: ty,
            }));
        }
        ty
    }

    fn parse_primary_type(&mut self) -> NodeIndex {
        let pos = self.start();
        match self.kind() {
            SyntaxKind::TypeofKeyword => {
                self.next();
                let expr_name = self.parse_identifier_name();
                self.add(Node::TypeQuery(TypeQueryData {
                    base: NodeBase::new(SyntaxKind::TypeQuery, pos, self.prev_end()),
                    expr_name,
                }))
            }
            SyntaxKind::OpenBrace => self.parse_type_literal(),
            SyntaxKind::Identifier => {
                let type_name = self.parse_identifier_name();
                self.add(Node::TypeReference(TypeReferenceData {
                    base: NodeBase::new(SyntaxKind::TypeReference, pos, self.prev_end()),
                    type_name,
                }))
            }
            _ => {
                self.error_at_current("expected type");
                let name = self.add(Node::Identifier(IdentifierData {
                    base: NodeBase::new(SyntaxKind::Identifier, pos, pos),
                    text: String::new(),
                }));
                self.add(Node::TypeReference(TypeReferenceData {
                    base: NodeBase::new(SyntaxKind::TypeReference, pos, pos),
                    type_name: name,
                }))
            }
        }
    }

    fn parse_type_literal(&mut self) -> NodeIndex {
        let pos = self.start();
        self.next();
        let mut members = NodeList::new();
        while !self.at(SyntaxKind::CloseBrace) && !self.at(SyntaxKind::EndOfFile) {
            if self.eat(SyntaxKind::Semicolon) || self.eat(SyntaxKind::Comma) {
                continue;
            }
            let before = self.pos;
            let member = self.parse_property_signature();
            if self.pos == before {
                self.skip_token("expected property signature");
                continue;
            }
            members.push(member);
        }
        self.expect(SyntaxKind::CloseBrace, "'}'");
        self.add(Node::TypeLiteral(TypeLiteralData {
            base: NodeBase::new(SyntaxKind::TypeLiteral, pos, self.prev_end()),
            members,
        }))
    }

    fn parse_property_signature(&mut self) -> NodeIndex {
        let pos = self.start();
        let name = self.parse_identifier_name();
        self.eat(SyntaxKind::Question);
        let type_annotation =
            if self.eat(SyntaxKind::Colon) { Some(self.parse_type()) } else { None };
        self.add(Node::PropertySignature(PropertySignatureData {
            base: NodeBase::new(SyntaxKind::PropertySignature, pos, self.prev_end()),
            name,
            type_annotation,
        }))
    }
}

fn binary_precedence(kind: SyntaxKind) -> Option<u8> {
    let precedence = match kind {
        SyntaxKind::Equals => 1,
        SyntaxKind::BarBar | SyntaxKind::QuestionQuestion => 2,
        SyntaxKind::AmpersandAmpersand => 3,
        SyntaxKind::EqualsEquals
        | SyntaxKind::ExclamationEquals
        | SyntaxKind::EqualsEqualsEquals
        | SyntaxKind::ExclamationEqualsEquals => 4,
        SyntaxKind::LessThan
        | SyntaxKind::GreaterThan
        | SyntaxKind::LessThanEquals
        | SyntaxKind::GreaterThanEquals => 5,
        SyntaxKind::Plus | SyntaxKind::Minus => 6,
        SyntaxKind::Asterisk | SyntaxKind::Slash | SyntaxKind::Percent => 7,
        _ => return None,
    };
    Some(precedence)
}
