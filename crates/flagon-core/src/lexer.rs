//! Position-aware lexer.
//!
//! The lexer walks the input one `char` at a time, tracking a 1-based line and column. Newlines
//! and other whitespace produce no tokens; `[`, `]`, `-` and `|` are single-character tokens; a
//! letter starts a label run that continues over letters and spaces.

use std::iter::{FusedIterator, Peekable};
use std::str::Chars;

use crate::error::LexError;
use crate::options::{LabelChars, ParseOptions};
use crate::token::{Position, Token, TokenKind};

pub struct Lexer<'input> {
    chars: Peekable<Chars<'input>>,
    line: usize,
    column: usize,
    label_chars: LabelChars,
    done: bool,
}

impl<'input> Lexer<'input> {
    pub fn new(input: &'input str) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    pub fn with_options(input: &'input str, options: ParseOptions) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
            column: 0,
            label_chars: options.label_chars,
            done: false,
        }
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        self.column += 1;
        Some(ch)
    }

    fn lex_label(&mut self, first: char, line: usize, column: usize) -> Token {
        let mut text = String::new();
        text.push(first);
        while let Some(&ch) = self.chars.peek() {
            if ch != ' ' && !self.label_chars.is_letter(ch) {
                break;
            }
            text.push(ch);
            self.bump();
        }
        Token::new(TokenKind::Label, text, line, column)
    }
}

impl Iterator for Lexer<'_> {
    type Item = std::result::Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let Some(ch) = self.bump() else {
                self.done = true;
                return None;
            };
            if ch == '\n' {
                self.line += 1;
                self.column = 0;
                continue;
            }
            if ch.is_whitespace() {
                continue;
            }

            let (line, column) = (self.line, self.column);
            let kind = match ch {
                '[' => TokenKind::OpenBracket,
                ']' => TokenKind::CloseBracket,
                '-' => TokenKind::Dash,
                '|' => TokenKind::Pipe,
                c if self.label_chars.is_letter(c) => {
                    return Some(Ok(self.lex_label(c, line, column)));
                }
                other => {
                    self.done = true;
                    return Some(Err(LexError {
                        position: Position::new(line, column),
                        character: other,
                    }));
                }
            };
            return Some(Ok(Token::new(kind, ch.to_string(), line, column)));
        }
    }
}

impl FusedIterator for Lexer<'_> {}

/// Lexes `text` into tokens in reading order, stopping at the first unrecognized character.
pub fn tokenize(text: &str) -> std::result::Result<Vec<Token>, LexError> {
    tokenize_with_options(text, ParseOptions::default())
}

pub fn tokenize_with_options(
    text: &str,
    options: ParseOptions,
) -> std::result::Result<Vec<Token>, LexError> {
    let tokens = Lexer::with_options(text, options).collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(tokens = tokens.len(), "lexed diagram");
    Ok(tokens)
}
