//! Lenient SQL tokenization for cursor-aware completion.
//!
//! This module groups the lexical building blocks used to reason about a SQL
//! buffer near a cursor position without a full parser:
//!
//! Modules:
//! - `keyword`    : Small enum of only the keywords completion needs.
//! - `token_kind` : Classification of lexical atoms.
//! - `token`      : Token struct pairing a `TokenKind` with source spans.
//! - `tokenizer`  : Streaming tokenizer with one-token pushback.
//! - `scanner`    : Upper-casing keyword/terminator scanner for buffer
//!   completeness checks.
//!
//! Design principles:
//! 1. Accept incomplete / syntactically invalid SQL; completion runs on text
//!    that is unfinished by definition, so nothing here returns an error.
//! 2. Preserve original identifier casing for display and lookup.
//! 3. Keep the keyword set purposely small; extend only when completion
//!    logic demands it.
//!
//! NOTE: This is **not** a validating SQL parser and intentionally ignores
//! constructs that completion heuristics do not need.

pub mod keyword;
pub mod scanner;
pub mod token;
pub mod token_kind;
pub mod tokenizer;

pub use keyword::Keyword;
pub use scanner::KeywordScanner;
pub use token::Token;
pub use token_kind::TokenKind;
pub use tokenizer::{Tokenizer, tokenize};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_and_access() {
        let sql = "SELECT col FROM tbl";
        let tokens = tokenize(sql);
        assert!(tokens.iter().any(|t| t.is_keyword(Keyword::Select)));
        assert!(tokens.iter().any(|t| t.is_keyword(Keyword::From)));
        assert!(tokens.iter().any(|t| t.ident() == Some("col")));
        assert!(tokens.iter().any(|t| t.ident() == Some("tbl")));
    }

    #[test]
    fn streaming_and_batch_agree() {
        let sql = "SELECT a.b FROM [T 1] WHERE x = 'y;' -- done";
        let mut tz = Tokenizer::new(sql);
        let mut streamed = Vec::new();
        while let Some(t) = tz.next() {
            streamed.push(t);
        }
        assert_eq!(streamed, tokenize(sql));
    }
}
