/// Which characters may start and continue a label run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelChars {
    /// `[A-Za-z]` only. Any other non-whitespace character is a lex error.
    #[default]
    Ascii,
    /// Anything `char::is_alphabetic` accepts.
    Unicode,
}

impl LabelChars {
    pub(crate) fn is_letter(self, ch: char) -> bool {
        match self {
            Self::Ascii => ch.is_ascii_alphabetic(),
            Self::Unicode => ch.is_alphabetic(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    pub label_chars: LabelChars,
}

impl ParseOptions {
    /// ASCII-only labels (the default).
    pub fn ascii() -> Self {
        Self {
            label_chars: LabelChars::Ascii,
        }
    }

    /// Accept any alphabetic character in labels, e.g. `[Überweg]`.
    pub fn unicode() -> Self {
        Self {
            label_chars: LabelChars::Unicode,
        }
    }
}
