//! Token definition for the surface λ-calculus syntax.

use crate::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    LeftParen,
    RightParen,
    /// `λ` or `\`.
    Lambda,
    /// `.` or `:`, separating a lambda's head from its body.
    Dot,
    Ident,
    EOF,
}

#[derive(Debug, Clone, Copy)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// The source text this token was scanned from.
    pub fn fragment<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.as_range()]
    }
}
