use crate::sql::{keyword::Keyword, token::Token, token_kind::TokenKind};

/// Lenient streaming SQL tokenizer.
///
/// Scope / Intent:
/// - Designed for completion over in-progress, necessarily unfinished SQL.
/// - Accepts incomplete / syntactically invalid input; malformed constructs
///   (unterminated quote, bracket, or block comment) consume to end of input
///   and yield whatever was accumulated instead of an error.
/// - Classifies only the minimal keyword set defined in `keyword.rs`.
///
/// Behavior:
/// - Skips whitespace, `--` line comments, and `/* ... */` block comments
///   before every token.
/// - `@name` becomes a `Variable`, `'...'`/`"..."` a `Quoted` span with
///   doubled-quote escapes collapsed, `[...]` a `Bracketed` span with no
///   escape mechanism.
/// - Numbers greedily consume digits and dots, so `1.2.3` is one `Number`
///   token. Known quirk, pinned by tests; do not fix silently.
/// - Words start with a letter or `_` and continue over letters, digits,
///   `_`, and `$`; identifier casing is preserved and keyword classification
///   lower-cases once.
/// - Everything else is a single-character `Punct`, except the configured
///   terminator which surfaces as `Terminator`.
///
/// Guarantees:
/// - Never panics on valid UTF-8 input.
/// - Never returns an error; end of input is `None`.
///
/// `unget` pushes back exactly one token into a dedicated lookahead slot.
/// Callers needing more than one token of pushback are out of contract.
pub struct Tokenizer<'a> {
    src: &'a str,
    pos: usize,
    terminator: char,
    lookahead: Option<Token>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            terminator: ';',
            lookahead: None,
        }
    }

    /// Use a different statement terminator than the default `;`.
    pub fn with_terminator(mut self, terminator: char) -> Self {
        self.terminator = terminator;
        self
    }

    /// Produce the next token, or `None` at end of input.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<Token> {
        if let Some(token) = self.lookahead.take() {
            return Some(token);
        }
        self.skip_noise();
        let start = self.pos;
        let c = self.peek()?;

        if c == '@' {
            return Some(self.variable(start));
        }
        if c == '\'' || c == '"' {
            return Some(self.quoted(start, c));
        }
        if c == '[' {
            return Some(self.bracketed(start));
        }
        if c.is_ascii_digit() || (c == '.' && self.peek_second().is_some_and(|d| d.is_ascii_digit()))
        {
            return Some(self.number(start));
        }
        if c.is_alphabetic() || c == '_' {
            return Some(self.word(start));
        }

        self.bump();
        let kind = if c == self.terminator {
            TokenKind::Terminator(c)
        } else {
            TokenKind::Punct(c)
        };
        Some(Token::new(kind, start, self.pos))
    }

    /// Push back one token. The slot holds a single token; `next` must be
    /// called before the next `unget`.
    pub fn unget(&mut self, token: Token) {
        debug_assert!(self.lookahead.is_none(), "single-slot lookahead overrun");
        self.lookahead = Some(token);
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.src[self.pos..].chars().nth(1)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Skip whitespace and comments. Quote and bracket starts are not comment
    /// starts, so they naturally fall through to token recognition.
    fn skip_noise(&mut self) {
        loop {
            let rest = &self.src[self.pos..];
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('-') if rest.starts_with("--") => {
                    match rest.find('\n') {
                        Some(nl) => self.pos += nl + 1,
                        None => self.pos = self.src.len(),
                    }
                }
                Some('/') if rest.starts_with("/*") => {
                    // Unterminated block comment runs to end of input.
                    match rest[2..].find("*/") {
                        Some(close) => self.pos += 2 + close + 2,
                        None => self.pos = self.src.len(),
                    }
                }
                _ => break,
            }
        }
    }

    fn variable(&mut self, start: usize) -> Token {
        self.bump(); // '@'
        if !self.peek().is_some_and(|c| c.is_alphabetic() || c == '_') {
            // Bare '@' with no name attached is plain punctuation.
            return Token::new(TokenKind::Punct('@'), start, self.pos);
        }
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.bump();
        }
        Token::new(
            TokenKind::Variable(self.src[start..self.pos].to_string()),
            start,
            self.pos,
        )
    }

    fn quoted(&mut self, start: usize, quote: char) -> Token {
        self.bump(); // opening quote
        let mut text = String::new();
        while let Some(c) = self.bump() {
            if c == quote {
                if self.peek() == Some(quote) {
                    // Doubled quote is an escaped literal quote.
                    text.push(quote);
                    self.bump();
                } else {
                    break;
                }
            } else {
                text.push(c);
            }
        }
        Token::new(TokenKind::Quoted(text), start, self.pos)
    }

    fn bracketed(&mut self, start: usize) -> Token {
        self.bump(); // '['
        let text_start = self.pos;
        while self.peek().is_some_and(|c| c != ']') {
            self.bump();
        }
        let text = self.src[text_start..self.pos].to_string();
        self.bump(); // ']' if present
        Token::new(TokenKind::Bracketed(text), start, self.pos)
    }

    fn number(&mut self, start: usize) -> Token {
        while self.peek().is_some_and(|c| c.is_ascii_digit() || c == '.') {
            self.bump();
        }
        Token::new(
            TokenKind::Number(self.src[start..self.pos].to_string()),
            start,
            self.pos,
        )
    }

    fn word(&mut self, start: usize) -> Token {
        self.bump();
        while self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '$')
        {
            self.bump();
        }
        let text = &self.src[start..self.pos];
        let lower = text.to_ascii_lowercase();
        let kind = Keyword::from_lower(&lower)
            .map(TokenKind::Keyword)
            .unwrap_or_else(|| TokenKind::Ident(text.to_string()));
        Token::new(kind, start, self.pos)
    }
}

/// Tokenize an entire string at once. Convenience for tests and callers that
/// do not need streaming or pushback.
pub fn tokenize(sql: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new(sql);
    let mut out = Vec::new();
    while let Some(token) = tokenizer.next() {
        out.push(token);
    }
    out
}
