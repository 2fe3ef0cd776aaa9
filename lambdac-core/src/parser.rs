//! Recursive-descent parser for the surface λ-calculus syntax (§6).
//!
//! ```text
//! TERM  ::= LAM | APP
//! LAM   ::= ('λ' | '\\') VAR ('.' | ':') TERM
//! APP   ::= ATOM { ATOM }
//! ATOM  ::= VAR | '(' TERM ')'
//! VAR    ~  [a-z_][a-zA-Z0-9']*
//! ```

use crate::{
    error::{Error, Result},
    lexer::Lexer,
    term::Term,
    token::{Token, TokenKind},
};

/// Parse a single term from `source`. Single-shot: the caller is
/// responsible for assembling multi-line input before calling this
/// (see the REPL's continuation reader).
pub fn parse(source: &str) -> Result<Term> {
    log::trace!("parse({source:?})");

    let mut lexer = Lexer::new(source);
    let mut current = lexer.next_token();

    let term = parse_term(&mut lexer, &mut current, source)?;

    if current.kind != TokenKind::EOF {
        return Err(Error::Parse(format!(
            "extraneous symbols at byte {}",
            current.span.low()
        )));
    }

    Ok(term)
}

fn advance(lexer: &mut Lexer, current: &mut Token) {
    *current = lexer.next_token();
}

fn parse_term(lexer: &mut Lexer, current: &mut Token, source: &str) -> Result<Term> {
    log::trace!("parse_term({:?})", lexer.rest());

    match current.kind {
        TokenKind::Lambda => parse_lambda(lexer, current, source),
        _ => parse_app(lexer, current, source),
    }
}

fn parse_lambda(lexer: &mut Lexer, current: &mut Token, source: &str) -> Result<Term> {
    log::trace!("parse_lambda({:?})", lexer.rest());

    advance(lexer, current); // consume 'λ' / '\'

    if current.kind != TokenKind::Ident {
        return Err(Error::Parse(format!(
            "expected a variable after start of lambda but found {:?} at byte {}",
            current.fragment(source),
            current.span.low()
        )));
    }
    let param = current.fragment(source).to_string();
    advance(lexer, current);

    if current.kind != TokenKind::Dot {
        return Err(Error::Parse(format!(
            "expected \".\" or \":\" after lambda head but found {:?} at byte {}",
            current.fragment(source),
            current.span.low()
        )));
    }
    advance(lexer, current); // consume '.' / ':'

    let body = parse_term(lexer, current, source)?;
    Ok(Term::lam(param, body))
}

fn parse_app(lexer: &mut Lexer, current: &mut Token, source: &str) -> Result<Term> {
    log::trace!("parse_app({:?})", lexer.rest());

    let mut result = parse_atom(lexer, current, source)?;

    while matches!(current.kind, TokenKind::Ident | TokenKind::LeftParen) {
        let arg = parse_atom(lexer, current, source)?;
        result = Term::app(result, arg);
    }

    Ok(result)
}

fn parse_atom(lexer: &mut Lexer, current: &mut Token, source: &str) -> Result<Term> {
    log::trace!("parse_atom({:?})", lexer.rest());

    match current.kind {
        TokenKind::LeftParen => {
            advance(lexer, current);
            let inner = parse_term(lexer, current, source)?;
            if current.kind != TokenKind::RightParen {
                return Err(Error::Parse(format!(
                    "expected \")\" after parenthesized expression but found {:?} at byte {}",
                    current.fragment(source),
                    current.span.low()
                )));
            }
            advance(lexer, current);
            Ok(inner)
        }
        TokenKind::Ident => {
            let name = current.fragment(source).to_string();
            advance(lexer, current);
            Ok(Term::var(name))
        }
        _ => Err(Error::Parse(format!(
            "expected \"(\" or a variable but found {:?} at byte {}",
            current.fragment(source),
            current.span.low()
        ))),
    }
}

/// True if `s` could be a valid identifier per the surface grammar.
/// Used by the REPL to validate `:s NAME` before parsing its body.
pub fn is_var(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_lowercase() => {
            chars.all(|c| c == '\'' || c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}
