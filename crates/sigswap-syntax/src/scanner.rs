//! Hand-rolled tokenizer.
//!
//! The scanner skips trivia (whitespace and comments) between tokens, so a
//! token's `pos` is always the tight start of its text. Downstream code
//! relies on this: argument separators are recovered by slicing the text
//! between one node's `end` and the next node's `pos`.

use crate::syntax_kind::{SyntaxKind, keyword_kind};

/// A single token. `pos..end` is the byte range of the token text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub pos: u32,
    pub end: u32,
}

pub struct ScannerState<'a> {
    text: &'a [u8],
    pos: usize,
}

impl<'a> ScannerState<'a> {
    pub fn new(text: &'a str) -> ScannerState<'a> {
        ScannerState { text: text.as_bytes(), pos: 0 }
    }

    /// Scans the next token, skipping any leading trivia. Returns an
    /// `EndOfFile` token once the input is exhausted.
    pub fn scan(&mut self) -> Token {
        self.skip_trivia();
        let start = self.pos;
        let Some(&ch) = self.text.get(self.pos) else {
            return self.token(SyntaxKind::EndOfFile, start);
        };
        match ch {
            b'(' => self.single(SyntaxKind::OpenParen, start),
            b')' => self.single(SyntaxKind::CloseParen, start),
            b'{' => self.single(SyntaxKind::OpenBrace, start),
            b'}' => self.single(SyntaxKind::CloseBrace, start),
            b'[' => self.single(SyntaxKind::OpenBracket, start),
            b']' => self.single(SyntaxKind::CloseBracket, start),
            b',' => self.single(SyntaxKind::Comma, start),
            b';' => self.single(SyntaxKind::Semicolon, start),
            b':' => self.single(SyntaxKind::Colon, start),
            b'%' => self.single(SyntaxKind::Percent, start),
            b'+' => self.single(SyntaxKind::Plus, start),
            b'-' => self.single(SyntaxKind::Minus, start),
            b'*' => self.single(SyntaxKind::Asterisk, start),
            b'/' => self.single(SyntaxKind::Slash, start),
            b'.' => {
                if self.text[self.pos..].starts_with(b"...") {
                    self.pos += 3;
                    self.token(SyntaxKind::DotDotDot, start)
                } else {
                    self.single(SyntaxKind::Dot, start)
                }
            }
            b'=' => {
                if self.text[self.pos..].starts_with(b"===") {
                    self.pos += 3;
                    self.token(SyntaxKind::EqualsEqualsEquals, start)
                } else if self.text[self.pos..].starts_with(b"==") {
                    self.pos += 2;
                    self.token(SyntaxKind::EqualsEquals, start)
                } else if self.text[self.pos..].starts_with(b"=>") {
                    self.pos += 2;
                    self.token(SyntaxKind::EqualsGreaterThan, start)
                } else {
                    self.single(SyntaxKind::Equals, start)
                }
            }
            b'!' => {
                if self.text[self.pos..].starts_with(b"!==") {
                    self.pos += 3;
                    self.token(SyntaxKind::ExclamationEqualsEquals, start)
                } else if self.text[self.pos..].starts_with(b"!=") {
                    self.pos += 2;
                    self.token(SyntaxKind::ExclamationEquals, start)
                } else {
                    self.single(SyntaxKind::Exclamation, start)
                }
            }
            b'<' => {
                if self.text[self.pos..].starts_with(b"<=") {
                    self.pos += 2;
                    self.token(SyntaxKind::LessThanEquals, start)
                } else {
                    self.single(SyntaxKind::LessThan, start)
                }
            }
            b'>' => {
                if self.text[self.pos..].starts_with(b">=") {
                    self.pos += 2;
                    self.token(SyntaxKind::GreaterThanEquals, start)
                } else {
                    self.single(SyntaxKind::GreaterThan, start)
                }
            }
            b'&' => {
                if self.text[self.pos..].starts_with(b"&&") {
                    self.pos += 2;
                    self.token(SyntaxKind::AmpersandAmpersand, start)
                } else {
                    self.single(SyntaxKind::Unknown, start)
                }
            }
            b'|' => {
                if self.text[self.pos..].starts_with(b"||") {
                    self.pos += 2;
                    self.token(SyntaxKind::BarBar, start)
                } else {
                    self.single(SyntaxKind::Unknown, start)
                }
            }
            b'?' => {
                if self.text[self.pos..].starts_with(b"??") {
                    self.pos += 2;
                    self.token(SyntaxKind::QuestionQuestion, start)
                } else {
                    self.single(SyntaxKind::Question, start)
                }
            }
            b'"' | b'\'' => self.scan_string(ch, start),
            b'0'..=b'9' => self.scan_number(start),
            ch if is_identifier_start(ch) => self.scan_identifier(start),
            _ => self.single(SyntaxKind::Unknown, start),
        }
    }

    fn skip_trivia(&mut self) {
        loop {
            match self.text.get(self.pos) {
                Some(b' ' | b'\t' | b'\r' | b'\n') => self.pos += 1,
                Some(b'/') if self.text[self.pos..].starts_with(b"//") => {
                    while let Some(&ch) = self.text.get(self.pos) {
                        if ch == b'\n' {
                            break;
                        }
                        self.pos += 1;
                    }
                }
                Some(b'/') if self.text[self.pos..].starts_with(b"/*") => {
                    self.pos += 2;
                    while self.pos < self.text.len() {
                        if self.text[self.pos..].starts_with(b"*/") {
                            self.pos += 2;
                            break;
                        }
                        self.pos += 1;
                    }
                }
                _ => break,
            }
        }
    }

    fn scan_identifier(&mut self, start: usize) -> Token {
        while let Some(&ch) = self.text.get(self.pos) {
            if !is_identifier_part(ch) {
                break;
            }
            self.pos += 1;
        }
        // Safe slice: identifier characters are never in the middle of a
        // multi-byte sequence we started outside of.
        let text = std::str::from_utf8(&self.text[start..self.pos]).unwrap_or("");
        let kind = keyword_kind(text).unwrap_or(SyntaxKind::Identifier);
        self.token(kind, start)
    }

    fn scan_number(&mut self, start: usize) -> Token {
        while matches!(self.text.get(self.pos), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        if self.text.get(self.pos) == Some(&b'.')
            && matches!(self.text.get(self.pos + 1), Some(b'0'..=b'9'))
        {
            self.pos += 1;
            while matches!(self.text.get(self.pos), Some(b'0'..=b'9')) {
                self.pos += 1;
            }
        }
        self.token(SyntaxKind::NumericLiteral, start)
    }

    fn scan_string(&mut self, quote: u8, start: usize) -> Token {
        self.pos += 1;
        while let Some(&ch) = self.text.get(self.pos) {
            if ch == b'\\' {
                self.pos += 2;
                continue;
            }
            if ch == quote {
                self.pos += 1;
                break;
            }
            if ch == b'\n' {
                // Unterminated string: end the token at the line break and
                // let the parser report the surrounding construct.
                break;
            }
            self.pos += 1;
        }
        self.token(SyntaxKind::StringLiteral, start)
    }

    fn single(&mut self, kind: SyntaxKind, start: usize) -> Token {
        self.pos += 1;
        self.token(kind, start)
    }

    fn token(&self, kind: SyntaxKind, start: usize) -> Token {
        Token { kind, pos: start as u32, end: self.pos as u32 }
    }
}

fn is_identifier_start(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_' || ch == b'$' || ch >= 0x80
}

fn is_identifier_part(ch: u8) -> bool {
    is_identifier_start(ch) || ch.is_ascii_digit()
}

/// Tokenizes the whole input. The returned vector always ends with an
/// `EndOfFile` token, which keeps parser lookahead bounds-free.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut scanner = ScannerState::new(text);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.scan();
        let done = token.kind == SyntaxKind::EndOfFile;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
