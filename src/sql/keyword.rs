//! SQL keyword model used by the tokenizer and the statement-context tracker.
//!
//! Only the keywords the completion engine has to reason about are listed:
//! statement heads, clause heads, and the connective words around table
//! references. Extend only when a new completion context demands it.
//!
//! Keywords are matched case-insensitively via `from_lower` against a
//! pre-lower-cased word slice, so the tokenizer lower-cases each word once and
//! identifiers keep their original casing.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    // Statement heads
    Select,
    Insert,
    Update,
    Delete,
    Call,
    Exec,
    Execute,
    // Clause heads
    From,
    Where,
    Join,
    On,
    Group,
    Order,
    Having,
    Set,
    Values,
    Into,
    Limit,
    Offset,
    Union,
    Except,
    Intersect,
    // Connectives around table references
    Inner,
    Left,
    Right,
    Full,
    Cross,
    Outer,
    By,
    As,
}

impl Keyword {
    /// Keywords that begin a new statement when seen at a statement boundary.
    pub const STATEMENTS: [Self; 7] = [
        Keyword::Select,
        Keyword::Insert,
        Keyword::Update,
        Keyword::Delete,
        Keyword::Call,
        Keyword::Exec,
        Keyword::Execute,
    ];

    /// Keywords that begin a clause within the current statement.
    pub const CLAUSES: [Self; 15] = [
        Keyword::From,
        Keyword::Where,
        Keyword::Join,
        Keyword::On,
        Keyword::Group,
        Keyword::Order,
        Keyword::Having,
        Keyword::Set,
        Keyword::Values,
        Keyword::Into,
        Keyword::Limit,
        Keyword::Offset,
        Keyword::Union,
        Keyword::Except,
        Keyword::Intersect,
    ];

    /// Words that may precede JOIN without changing the clause.
    pub const JOIN_MODIFIERS: [Self; 6] = [
        Keyword::Inner,
        Keyword::Left,
        Keyword::Right,
        Keyword::Full,
        Keyword::Cross,
        Keyword::Outer,
    ];

    /// Attempt to classify a *lower-cased* word slice into a `Keyword`.
    /// Returns `None` if the word is not a recognized keyword.
    ///
    /// NOTE: The caller is responsible for lower-casing the input. This avoids
    /// allocating new strings for each token; `to_ascii_lowercase` is typically
    /// performed once per word lexeme outside this function.
    pub fn from_lower(word: &str) -> Option<Self> {
        use Keyword::*;
        let kw = match word {
            "select" => Select,
            "insert" => Insert,
            "update" => Update,
            "delete" => Delete,
            "call" => Call,
            "exec" => Exec,
            "execute" => Execute,
            "from" => From,
            "where" => Where,
            "join" => Join,
            "on" => On,
            "group" => Group,
            "order" => Order,
            "having" => Having,
            "set" => Set,
            "values" => Values,
            "into" => Into,
            "limit" => Limit,
            "offset" => Offset,
            "union" => Union,
            "except" => Except,
            "intersect" => Intersect,
            "inner" => Inner,
            "left" => Left,
            "right" => Right,
            "full" => Full,
            "cross" => Cross,
            "outer" => Outer,
            "by" => By,
            "as" => As,
            _ => return None,
        };
        Some(kw)
    }

    /// Canonical lowercase string form of the keyword.
    pub const fn as_str(self) -> &'static str {
        use Keyword::*;
        match self {
            Select => "select",
            Insert => "insert",
            Update => "update",
            Delete => "delete",
            Call => "call",
            Exec => "exec",
            Execute => "execute",
            From => "from",
            Where => "where",
            Join => "join",
            On => "on",
            Group => "group",
            Order => "order",
            Having => "having",
            Set => "set",
            Values => "values",
            Into => "into",
            Limit => "limit",
            Offset => "offset",
            Union => "union",
            Except => "except",
            Intersect => "intersect",
            Inner => "inner",
            Left => "left",
            Right => "right",
            Full => "full",
            Cross => "cross",
            Outer => "outer",
            By => "by",
            As => "as",
        }
    }

    /// True if this keyword begins a new statement.
    pub fn is_statement(self) -> bool {
        Self::STATEMENTS.contains(&self)
    }

    /// True if this keyword begins a clause.
    pub fn is_clause(self) -> bool {
        Self::CLAUSES.contains(&self)
    }

    /// True if this keyword may precede JOIN (INNER, LEFT, ...).
    pub fn is_join_modifier(self) -> bool {
        Self::JOIN_MODIFIERS.contains(&self)
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
