use crate::sql::{token_kind::TokenKind, tokenizer::Tokenizer};

/// Restricted keyword scanner used for "is this buffer statement-complete"
/// checks.
///
/// Yields only two things, both as upper-cased `String`s:
/// - runs of letters/digits/`_` beginning with a letter or `_` (candidate
///   keywords; callers pattern-match against their own small vocabulary), and
/// - the configured statement terminator, as a one-character string.
///
/// Everything else is silently skipped: numbers, punctuation, `@variables`,
/// and anything hidden inside comments, quoted strings, or bracketed
/// identifiers. The scanner exists purely to find terminators that are not
/// buried in one of those constructs, so it shares the tokenizer's skipping
/// rules by being built on top of it.
pub struct KeywordScanner<'a> {
    tokenizer: Tokenizer<'a>,
    lookahead: Option<String>,
}

impl<'a> KeywordScanner<'a> {
    pub fn new(src: &'a str, terminator: char) -> Self {
        Self {
            tokenizer: Tokenizer::new(src).with_terminator(terminator),
            lookahead: None,
        }
    }

    /// Next keyword-candidate word or terminator, upper-cased. `None` at end
    /// of input.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<String> {
        if let Some(word) = self.lookahead.take() {
            return Some(word);
        }
        while let Some(token) = self.tokenizer.next() {
            match token.kind {
                TokenKind::Keyword(kw) => return Some(kw.as_str().to_uppercase()),
                TokenKind::Ident(word) => return Some(word.to_uppercase()),
                TokenKind::Terminator(c) => return Some(c.to_string()),
                // Quoted/bracketed spans, variables, numbers, punctuation:
                // invisible to completeness checks.
                _ => continue,
            }
        }
        None
    }

    /// Push back one scanned word.
    pub fn unget(&mut self, word: String) {
        debug_assert!(self.lookahead.is_none(), "single-slot lookahead overrun");
        self.lookahead = Some(word);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(src: &str, terminator: char) -> Vec<String> {
        let mut scanner = KeywordScanner::new(src, terminator);
        let mut out = Vec::new();
        while let Some(word) = scanner.next() {
            out.push(word);
        }
        out
    }

    #[test]
    fn uppercases_words_and_keeps_terminator() {
        assert_eq!(
            scan("select foo; ", ';'),
            vec!["SELECT".to_string(), "FOO".into(), ";".into()]
        );
    }

    #[test]
    fn skips_quoted_comment_bracket_and_variable_content() {
        // Terminators hidden in strings, comments, brackets, or variable
        // names must not surface; the trailing real one must.
        let src = "insert 'a;b' /* ; */ [x;y] @v;";
        assert_eq!(
            scan(src, ';'),
            vec!["INSERT".to_string(), ";".into()]
        );
    }

    #[test]
    fn skips_numbers_and_punctuation() {
        assert_eq!(
            scan("go 42 , ( ) 1.5 go", '/'),
            vec!["GO".to_string(), "GO".into()]
        );
    }

    #[test]
    fn unget_replays_one_word() {
        let mut scanner = KeywordScanner::new("select 1", ';');
        let word = scanner.next().unwrap();
        assert_eq!(word, "SELECT");
        scanner.unget(word);
        assert_eq!(scanner.next().as_deref(), Some("SELECT"));
        assert_eq!(scanner.next(), None);
    }
}
