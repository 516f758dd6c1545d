//! Lexer for body templates using logos

use logos::Logos;

/// Byte range in template text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    /// `{NAME}` with the braces stripped
    #[regex(r"\{[A-Za-z_][A-Za-z0-9_]*\}", |lex| {
        let s = lex.slice();
        s[1..s.len() - 1].to_string()
    })]
    FieldRef(String),

    #[regex(r"[^{}]+", |lex| lex.slice().to_string())]
    Text(String),

    // Braces that do not form a reference are kept as literal text
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
}

/// Tokenize a body template
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input).spanned().map(|(tok, span)| match tok {
        Ok(t) => (t, span),
        Err(()) => (Token::Text(input[span.clone()].to_string()), span),
    })
}
