use crate::*;

/// Quoting convention the user started typing with, re-applied to every
/// candidate handed back so the inserted text matches what is already in the
/// buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display)]
pub enum Quoting {
    #[default]
    #[display("none")]
    None,
    #[display("bracket")]
    Bracket,
    #[display("double-quote")]
    DoubleQuote,
}

impl Quoting {
    /// Wrap a candidate name in this quoting style.
    pub fn wrap(self, name: &str) -> String {
        match self {
            Quoting::None => name.to_string(),
            Quoting::Bracket => format!("[{name}]"),
            Quoting::DoubleQuote => format!("\"{name}\""),
        }
    }

    fn of(first: char) -> Self {
        match first {
            '[' => Quoting::Bracket,
            '"' => Quoting::DoubleQuote,
            _ => Quoting::None,
        }
    }
}

/// The partially typed, dot-separated object name at the cursor.
///
/// `parts` holds 1 to 4 segments; an empty trailing segment (from a trailing
/// dot) is kept as `""`, which is what distinguishes `a.` (two parts) from
/// `a` (one part). When nothing name-like precedes the cursor, `parts` is
/// empty and completion offers nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NameFragment {
    pub parts: Vec<String>,
    pub quoting: Quoting,
}

/// What kind of span, if any, the cursor sits inside after a forward scan of
/// the text. Comments and string literals cannot hold a name in progress.
enum OpenSpan {
    None,
    Comment,
    StringLiteral,
    DoubleQuote(usize),
    Bracket(usize),
}

impl NameFragment {
    /// Derive the fragment by scanning backward from the cursor through the
    /// raw text: contiguous name characters or whole quoted/bracketed spans,
    /// across `.`-separated segments. Any other character stops the scan, so
    /// `a.b` is a fragment where `a+b` is not.
    pub fn at_cursor(text: &str, cursor: usize) -> Self {
        let mut cursor = cursor.min(text.len());
        while !text.is_char_boundary(cursor) {
            cursor -= 1;
        }
        let chars: Vec<char> = text[..cursor].chars().collect();
        let mut parts_rev: Vec<String> = Vec::new();
        let mut i = chars.len();

        // The cursor may sit inside an unterminated "..." or [...] span; if
        // so, that whole span is the trailing segment, spaces and all.
        match open_span(&chars) {
            OpenSpan::Comment | OpenSpan::StringLiteral => return Self::default(),
            OpenSpan::DoubleQuote(start) | OpenSpan::Bracket(start) => {
                parts_rev.push(chars[start + 1..].iter().collect());
                i = start;
                if i == 0 || chars[i - 1] != '.' {
                    return Self::assemble(parts_rev, &chars, i);
                }
                i -= 1;
            }
            OpenSpan::None => {}
        }

        loop {
            // One segment, scanned backward from `i`.
            if i > 0 && chars[i - 1] == '"' {
                let Some(open) = rfind(&chars[..i - 1], '"') else {
                    break;
                };
                parts_rev.push(chars[open + 1..i - 1].iter().collect());
                i = open;
            } else if i > 0 && chars[i - 1] == ']' {
                let Some(open) = rfind(&chars[..i - 1], '[') else {
                    break;
                };
                parts_rev.push(chars[open + 1..i - 1].iter().collect());
                i = open;
            } else {
                let mut j = i;
                while j > 0 && is_name_char(chars[j - 1]) {
                    j -= 1;
                }
                parts_rev.push(chars[j..i].iter().collect());
                i = j;
            }
            if i > 0 && chars[i - 1] == '.' {
                i -= 1;
            } else {
                break;
            }
        }

        Self::assemble(parts_rev, &chars, i)
    }

    fn assemble(mut parts_rev: Vec<String>, chars: &[char], start: usize) -> Self {
        parts_rev.reverse();
        // A lone empty segment means the cursor follows whitespace or an
        // operator: no fragment at all, rather than a fragment of "".
        if parts_rev.iter().all(String::is_empty) {
            return Self::default();
        }
        let quoting = chars.get(start).copied().map(Quoting::of).unwrap_or_default();
        Self {
            parts: parts_rev,
            quoting,
        }
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$' || c == '@'
}

fn rfind(chars: &[char], needle: char) -> Option<usize> {
    chars.iter().rposition(|&c| c == needle)
}

/// Forward scan classifying whether the text ends inside a comment, string,
/// quoted identifier, or bracketed identifier. Mirrors the tokenizer's
/// skipping rules.
fn open_span(chars: &[char]) -> OpenSpan {
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '-' if chars.get(i + 1) == Some(&'-') => {
                match chars[i + 2..].iter().position(|&c| c == '\n') {
                    Some(nl) => i += 2 + nl + 1,
                    None => return OpenSpan::Comment,
                }
            }
            '/' if chars.get(i + 1) == Some(&'*') => {
                let mut j = i + 2;
                loop {
                    if j >= chars.len() {
                        return OpenSpan::Comment;
                    }
                    if chars[j] == '*' && chars.get(j + 1) == Some(&'/') {
                        i = j + 2;
                        break;
                    }
                    j += 1;
                }
            }
            quote @ ('\'' | '"') => {
                let start = i;
                i += 1;
                loop {
                    match chars.get(i) {
                        None => {
                            return if quote == '\'' {
                                OpenSpan::StringLiteral
                            } else {
                                OpenSpan::DoubleQuote(start)
                            };
                        }
                        Some(&c) if c == quote => {
                            if chars.get(i + 1) == Some(&quote) {
                                i += 2; // doubled quote, still inside
                            } else {
                                i += 1;
                                break;
                            }
                        }
                        Some(_) => i += 1,
                    }
                }
            }
            '[' => {
                let start = i;
                match chars[i + 1..].iter().position(|&c| c == ']') {
                    Some(close) => i += 1 + close + 1,
                    None => return OpenSpan::Bracket(start),
                }
            }
            _ => i += 1,
        }
    }
    OpenSpan::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn fragment(text: &str) -> NameFragment {
        NameFragment::at_cursor(text, text.len())
    }

    #[rstest]
    #[case("select a", &["a"])]
    #[case("select a.b", &["a", "b"])]
    #[case("select a.", &["a", ""])] // trailing dot keeps an empty part
    #[case("select cat.sch.tbl.co", &["cat", "sch", "tbl", "co"])]
    #[case("from my_tab$2", &["my_tab$2"])]
    fn splits_dot_separated_parts(#[case] text: &str, #[case] expected: &[&str]) {
        assert_eq!(fragment(text).parts, expected);
    }

    #[test]
    fn quoted_segment_with_trailing_dot() {
        let frag = fragment(r#"select * FROM "My Schema"."#);
        assert_eq!(frag.parts, vec!["My Schema".to_string(), "".into()]);
        assert_eq!(frag.quoting, Quoting::DoubleQuote);
    }

    #[test]
    fn bracketed_segment() {
        let frag = fragment("select [My Table].co");
        assert_eq!(frag.parts, vec!["My Table".to_string(), "co".into()]);
        assert_eq!(frag.quoting, Quoting::Bracket);
    }

    #[test]
    fn unterminated_quote_is_the_trailing_segment() {
        let frag = fragment(r#"select * from "My Sch"#);
        assert_eq!(frag.parts, vec!["My Sch".to_string()]);
        assert_eq!(frag.quoting, Quoting::DoubleQuote);
    }

    #[test]
    fn unterminated_bracket_with_qualifier() {
        let frag = fragment("select dbo.[My T");
        assert_eq!(frag.parts, vec!["dbo".to_string(), "My T".into()]);
        // First character of the whole fragment is a bare letter.
        assert_eq!(frag.quoting, Quoting::None);
    }

    #[rstest]
    #[case("select a+b ")] // cursor after whitespace
    #[case("select a + ")] // operator resets accumulation
    #[case("")]
    fn no_fragment_cases(#[case] text: &str) {
        assert_eq!(fragment(text).parts, Vec::<String>::new());
    }

    #[test]
    fn operator_resets_accumulation() {
        // `a+b` is not a name in progress, only `b` is.
        assert_eq!(fragment("select a+b").parts, vec!["b".to_string()]);
    }

    #[test]
    fn no_fragment_inside_comment_or_string() {
        assert_eq!(fragment("select x -- comment tail").parts, Vec::<String>::new());
        assert_eq!(fragment("select x /* mid").parts, Vec::<String>::new());
        assert_eq!(fragment("select 'str tail").parts, Vec::<String>::new());
    }

    #[test]
    fn wrap_applies_quoting_style() {
        assert_eq!(Quoting::None.wrap("t"), "t");
        assert_eq!(Quoting::Bracket.wrap("t"), "[t]");
        assert_eq!(Quoting::DoubleQuote.wrap("t"), "\"t\"");
    }

    #[test]
    fn quoting_derived_from_first_fragment_char() {
        assert_eq!(fragment(r#"from "Sch".t"#).quoting, Quoting::DoubleQuote);
        assert_eq!(fragment("from [Sch].t").quoting, Quoting::Bracket);
        assert_eq!(fragment("from sch.t").quoting, Quoting::None);
    }
}
