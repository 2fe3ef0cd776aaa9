use crate::token::TokenKind;

pub type Result<T> = std::result::Result<T, self::Error>;

#[derive(Debug)]
pub enum Error {
    /// An AST node was neither `Var`, `Lam`, nor `App`.
    ///
    /// `Term` is an exhaustively matched three-variant enum, so this
    /// can never actually be constructed from safe code. Kept so the
    /// error surface matches the documented contract of the printer
    /// and translator.
    MalformedTerm,
    /// The term handed to the translator is not closed.
    UnboundVariable(Vec<String>),
    /// An internal emission invariant was violated. Must never fire
    /// in a released build; reserved for debug assertions.
    EmissionInvariant(String),
    TokenError {
        expected: TokenKind,
        actual: TokenKind,
    },
    UnexpectedEOF,
    Parse(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedTerm => write!(f, "malformed term"),
            Self::UnboundVariable(names) => {
                write!(f, "unbound variable(s): {}", names.join(", "))
            }
            Self::EmissionInvariant(message) => write!(f, "emission invariant violated: {message}"),
            Self::TokenError { expected, actual } => {
                write!(f, "token error: expected {:?} found {:?}", expected, actual)
            }
            Self::UnexpectedEOF => write!(f, "unexpected end-of-file"),
            Self::Parse(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for Error {}
