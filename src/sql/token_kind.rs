//! Token kind definitions for the lenient SQL tokenizer.
//!
//! Each `TokenKind` variant represents a lexical atom discovered while
//! scanning in-progress SQL. The tokenizer never rejects input; anything it
//! cannot classify becomes a single-character `Punct`.
//!
//! Design goals:
//! - Preserve original identifier casing via `Ident(String)` for downstream
//!   display and matching; quoted and bracketed spans carry their text with
//!   the delimiters already stripped.
//! - Treat the configured statement terminator as its own kind so callers do
//!   not have to re-compare punctuation characters.
//! - Provide ergonomic helpers (`is_keyword`, `name`) to avoid verbose
//!   pattern matches at call sites.

use crate::sql::keyword::Keyword;

/// Classification for a token produced by the tokenizer.
///
/// Not a full SQL lexeme set; intentionally small and pragmatic. End of input
/// is represented by `None` from the tokenizer, not by a variant here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Recognized SQL keyword.
    Keyword(Keyword),
    /// Table / alias / column / generic identifier, original casing kept.
    Ident(String),
    /// `'...'` or `"..."` span with quotes stripped and doubled quotes
    /// collapsed to a single literal quote.
    Quoted(String),
    /// `[...]` span with brackets stripped. No escape mechanism exists.
    Bracketed(String),
    /// `@name` variable reference, leading `@` included.
    Variable(String),
    /// Numeric literal. Greedy over digits and dots, so `1.2.3` is one token.
    Number(String),
    /// Any other single character (commas, parens, operators, ...).
    Punct(char),
    /// The configured statement terminator character.
    Terminator(char),
}

impl TokenKind {
    /// True if this token is the given keyword.
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == kw)
    }

    /// Returns the identifier text if this token is an `Ident`.
    pub fn ident(&self) -> Option<&str> {
        match self {
            TokenKind::Ident(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the text of anything usable as an object name: bare
    /// identifiers plus quoted and bracketed spans.
    pub fn name(&self) -> Option<&str> {
        match self {
            TokenKind::Ident(s) | TokenKind::Quoted(s) | TokenKind::Bracketed(s) => {
                Some(s.as_str())
            }
            _ => None,
        }
    }

    /// True if this token is the given punctuation character.
    pub fn is_punct(&self, c: char) -> bool {
        matches!(self, TokenKind::Punct(p) if *p == c)
    }

    /// True if this token ends a statement.
    pub fn is_terminator(&self) -> bool {
        matches!(self, TokenKind::Terminator(_))
    }
}
