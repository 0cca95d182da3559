//! Positioned tokens produced by the [`Lexer`](crate::Lexer).

use serde::Serialize;
use std::fmt;

/// A 1-based `(line, column)` source position.
///
/// Columns count characters, so a tab or a non-ASCII letter occupies a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    OpenBracket,
    CloseBracket,
    Dash,
    Pipe,
    Label,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OpenBracket => "OpenBracket",
            Self::CloseBracket => "CloseBracket",
            Self::Dash => "Dash",
            Self::Pipe => "Pipe",
            Self::Label => "Label",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    kind: TokenKind,
    text: String,
    line: usize,
    column: usize,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact source text. For labels this keeps any trailing spaces captured by the run.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Column of the token's last character.
    pub fn end_column(&self) -> usize {
        self.column + self.text.chars().count().saturating_sub(1)
    }
}
