//! Tokenizer for expression text.
//!
//! Recognized tokens:
//!
//! - `(` and `NOT(` open a group,
//! - `)` closes a group,
//! - `AND`, `OR`, `XOR` are operators (whole words only),
//! - a positive integer literal without leading zeros is a variable.
//!
//! Whitespace separates tokens. Any other run of non-whitespace characters is
//! rejected as a whole, e.g. `2x` or `NOT (`.

use log::debug;

use crate::error::{LogicError, Result};
use crate::types::{Grammar, Operator};

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TokenKind {
    GroupOpen { negate: bool },
    GroupClose,
    Operator(Operator),
    /// Literal value, saturated at `u64::MAX`.
    Variable(u64),
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// 1-based character position of the first character.
    pub position: usize,
}

impl Token {
    pub fn grammar(&self) -> Grammar {
        match self.kind {
            TokenKind::GroupOpen { .. } => Grammar::GroupOpen,
            TokenKind::GroupClose => Grammar::GroupClose,
            TokenKind::Operator(_) => Grammar::Operator,
            TokenKind::Variable(_) => Grammar::Variable,
        }
    }
}

/// Iterator over the tokens of an expression.
///
/// Yields `Err` for an unrecognized run of characters; the caller is expected
/// to stop at the first error.
pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
}

impl Lexer {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    fn is_word(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_'
    }

    fn starts_with(&self, pattern: &str) -> bool {
        let mut i = self.pos;
        for p in pattern.chars() {
            if self.chars.get(i) != Some(&p) {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Length of the run of word characters starting at the cursor.
    fn word_len(&self) -> usize {
        self.chars[self.pos..].iter().take_while(|&&c| Self::is_word(c)).count()
    }

    /// Length of the run of non-whitespace characters starting at the cursor.
    fn junk_len(&self) -> usize {
        self.chars[self.pos..].iter().take_while(|c| !c.is_whitespace()).count()
    }

    fn text(&self, len: usize) -> String {
        self.chars[self.pos..self.pos + len].iter().collect()
    }

    fn classify_word(word: &str) -> Option<TokenKind> {
        if let Some(op) = Operator::from_keyword(word) {
            return Some(TokenKind::Operator(op));
        }
        let mut digits = word.chars();
        match digits.next() {
            Some('1'..='9') if digits.all(|c| c.is_ascii_digit()) => {
                let value = word.parse::<u64>().unwrap_or(u64::MAX);
                Some(TokenKind::Variable(value))
            }
            _ => None,
        }
    }

    fn next_token(&mut self) -> Option<Result<Token>> {
        while self.chars.get(self.pos).is_some_and(|c| c.is_whitespace()) {
            self.pos += 1;
        }
        let c = *self.chars.get(self.pos)?;
        let position = self.pos + 1;

        // Tokens always start after a non-word character, so `NOT(` and the
        // word tokens below are word-bounded on the left.
        let (kind, len) = if self.starts_with("NOT(") {
            (Some(TokenKind::GroupOpen { negate: true }), 4)
        } else if c == '(' {
            (Some(TokenKind::GroupOpen { negate: false }), 1)
        } else if c == ')' {
            (Some(TokenKind::GroupClose), 1)
        } else {
            let len = self.word_len();
            if len > 0 {
                (Self::classify_word(&self.text(len)), len)
            } else {
                (None, 0)
            }
        };

        let token = match kind {
            Some(kind) => {
                let text = self.text(len);
                self.pos += len;
                Ok(Token { kind, text, position })
            }
            None => {
                let len = self.junk_len();
                let text = self.text(len);
                self.pos += len;
                debug!("unrecognized token {:?} at {}", text, position);
                Err(LogicError::UnexpectedCharacters { position, text })
            }
        };
        Some(token)
    }
}

impl Iterator for Lexer {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
