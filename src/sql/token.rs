//! Token model tying a `TokenKind` to its source span.
//!
//! A `Token` is intentionally minimal: its classification (`kind`) plus byte
//! offsets (`start`, `end`) into the original SQL string. Offsets let
//! higher-level logic (e.g. cursor-aware completion) slice the original query
//! without a parallel reconstructed string; nothing here reports errors, so
//! the spans exist purely for slicing and cursor range checks.

use crate::sql::{keyword::Keyword, token_kind::TokenKind};

/// A lexical token with its inclusive start and exclusive end byte offsets.
///
/// Offsets always refer to the *original* SQL string supplied to the
/// tokenizer.
///
/// Invariants:
/// - `end >= start`
/// - `[start, end)` is a valid slice range for the original input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    /// Construct a new token.
    pub const fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }

    /// Byte length of this token (`end - start`).
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True if the token's length is zero.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the identifier text if this token is a bare identifier.
    pub fn ident(&self) -> Option<&str> {
        self.kind.ident()
    }

    /// Returns the text of anything usable as an object name.
    pub fn name(&self) -> Option<&str> {
        self.kind.name()
    }

    /// Returns true if this token represents a given keyword.
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        self.kind.is_keyword(kw)
    }

    /// Returns true if the cursor (byte offset) lies within this token's span.
    ///
    /// NOTE: End is exclusive, so `cursor == end` returns false.
    pub fn contains(&self, cursor: usize) -> bool {
        cursor >= self.start && cursor < self.end
    }

    /// Convenience: convert to a `(start, end)` tuple.
    pub const fn span(&self) -> (usize, usize) {
        (self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::{keyword::Keyword, token_kind::TokenKind};

    #[test]
    fn length_and_empty() {
        let t = Token::new(TokenKind::Punct(','), 5, 6);
        assert_eq!(t.len(), 1);
        assert!(!t.is_empty());
    }

    #[test]
    fn ident_access() {
        let t = Token::new(TokenKind::Ident("Users".into()), 0, 5);
        assert_eq!(t.ident(), Some("Users"));
        assert_eq!(t.name(), Some("Users"));
        assert!(t.contains(2));
        assert!(!t.contains(5)); // end exclusive
    }

    #[test]
    fn quoted_name_access() {
        let t = Token::new(TokenKind::Quoted("My Table".into()), 0, 10);
        assert_eq!(t.ident(), None);
        assert_eq!(t.name(), Some("My Table"));
    }

    #[test]
    fn keyword_detection() {
        let t = Token::new(TokenKind::Keyword(Keyword::Select), 0, 6);
        assert!(t.is_keyword(Keyword::Select));
        assert!(!t.is_keyword(Keyword::From));
    }

    #[test]
    fn span_method() {
        let t = Token::new(TokenKind::Punct('.'), 10, 11);
        assert_eq!(t.span(), (10, 11));
    }
}
