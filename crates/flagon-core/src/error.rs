use crate::token::{Position, TokenKind};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Semantic(#[from] SemanticError),
}

impl Error {
    /// Primary source position of the error, for diagnostics.
    pub fn position(&self) -> Position {
        match self {
            Error::Lex(err) => err.position,
            Error::Syntax(err) => err.position(),
            Error::Semantic(err) => err.position(),
        }
    }
}

/// An unrecognized character. Lexing stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unexpected character at {position}: {character:?}")]
pub struct LexError {
    pub position: Position,
    pub character: char,
}

/// A grammar violation while recognizing a node or edge shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("Unterminated node at {position}: expected `]` to close node")]
    UnterminatedNode { position: Position },

    #[error("Expected dash after label {label:?} at {position}")]
    ExpectedDashAfterLabel { position: Position, label: String },

    #[error("Expected pipe after label {label:?} at {position}")]
    ExpectedPipeAfterLabel { position: Position, label: String },

    #[error("Unexpected token {kind} at {position}")]
    UnexpectedToken { position: Position, kind: TokenKind },
}

impl SyntaxError {
    pub fn position(&self) -> Position {
        match self {
            SyntaxError::UnterminatedNode { position }
            | SyntaxError::ExpectedDashAfterLabel { position, .. }
            | SyntaxError::ExpectedPipeAfterLabel { position, .. }
            | SyntaxError::UnexpectedToken { position, .. } => *position,
        }
    }
}

/// A graph-level invariant violation found after all shapes are known.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SemanticError {
    #[error("Duplicate node label {label:?} at {second} (first defined at {first})")]
    DuplicateNodeLabel {
        label: String,
        first: Position,
        second: Position,
    },

    #[error("Duplicate edge label {label:?} at {second} (first defined at {first})")]
    DuplicateEdgeLabel {
        label: String,
        first: Position,
        second: Position,
    },

    #[error("Edge at {position} connects to nothing")]
    DanglingEdge { position: Position },
}

impl SemanticError {
    pub fn position(&self) -> Position {
        match self {
            SemanticError::DuplicateNodeLabel { second, .. }
            | SemanticError::DuplicateEdgeLabel { second, .. } => *second,
            SemanticError::DanglingEdge { position } => *position,
        }
    }
}
