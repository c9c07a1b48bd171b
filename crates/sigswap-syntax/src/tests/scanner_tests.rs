use crate::scanner::tokenize;
use crate::syntax_kind::SyntaxKind;

fn kinds(text: &str) -> Vec<SyntaxKind> {
    tokenize(text).into_iter().map(|t| t.kind).collect()
}

#[test]
fn scans_a_function_header() {
    assert_eq!(
        kinds("function f(a, b) {}"),
        vec![
            SyntaxKind::FunctionKeyword,
            SyntaxKind::Identifier,
            SyntaxKind::OpenParen,
            SyntaxKind::Identifier,
            SyntaxKind::Comma,
            SyntaxKind::Identifier,
            SyntaxKind::CloseParen,
            SyntaxKind::OpenBrace,
            SyntaxKind::CloseBrace,
            SyntaxKind::EndOfFile,
        ]
    );
}

#[test]
fn token_positions_are_tight() {
    let tokens = tokenize("// lead\nf(1)");
    assert_eq!(tokens[0].kind, SyntaxKind::Identifier);
    assert_eq!(tokens[0].pos, 8);
    assert_eq!(tokens[0].end, 9);

    let tokens = tokenize("/* x */ swap");
    assert_eq!(tokens[0].kind, SyntaxKind::Identifier);
    assert_eq!(tokens[0].pos, 8);
    assert_eq!(tokens[0].end, 12);
}

#[test]
fn multi_char_punctuation() {
    assert_eq!(
        kinds("... => === == !== <="),
        vec![
            SyntaxKind::DotDotDot,
            SyntaxKind::EqualsGreaterThan,
            SyntaxKind::EqualsEqualsEquals,
            SyntaxKind::EqualsEquals,
            SyntaxKind::ExclamationEqualsEquals,
            SyntaxKind::LessThanEquals,
            SyntaxKind::EndOfFile,
        ]
    );
}

#[test]
fn keywords_and_contextual_names() {
    assert_eq!(
        kinds("typeof undefined from as"),
        vec![
            SyntaxKind::TypeofKeyword,
            SyntaxKind::Identifier,
            SyntaxKind::Identifier,
            SyntaxKind::AsKeyword,
            SyntaxKind::EndOfFile,
        ]
    );
}

#[test]
fn string_with_escaped_quote() {
    let text = r"'it\'s'";
    let tokens = tokenize(text);
    assert_eq!(tokens[0].kind, SyntaxKind::StringLiteral);
    assert_eq!(tokens[0].pos, 0);
    assert_eq!(tokens[0].end, text.len() as u32);
    assert_eq!(tokens[1].kind, SyntaxKind::EndOfFile);
}

#[test]
fn numbers_with_fractions() {
    let tokens = tokenize("3.14 12");
    assert_eq!(tokens[0].kind, SyntaxKind::NumericLiteral);
    assert_eq!((tokens[0].pos, tokens[0].end), (0, 4));
    assert_eq!(tokens[1].kind, SyntaxKind::NumericLiteral);
    assert_eq!((tokens[1].pos, tokens[1].end), (5, 7));
}

#[test]
fn empty_input_is_just_eof() {
    assert_eq!(kinds(""), vec![SyntaxKind::EndOfFile]);
}

#[test]
fn unknown_bytes_become_unknown_tokens() {
    let tokens = tokenize("f # g");
    assert_eq!(tokens[1].kind, SyntaxKind::Unknown);
    assert_eq!(tokens[2].kind, SyntaxKind::Identifier);
}
