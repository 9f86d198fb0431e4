use itertools::Itertools as _;

/// Discriminates what a reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ObjectKind {
    #[display("table")]
    Table,
    #[display("procedure")]
    Procedure,
}

/// A table or procedure reference extracted from a FROM/JOIN/EXEC-like
/// position.
///
/// Invariant: `name` is always present; `catalog`, `schema`, and `alias` are
/// `None` unless the reference was explicitly qualified or aliased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseObject {
    pub kind: ObjectKind,
    pub catalog: Option<String>,
    pub schema: Option<String>,
    pub name: String,
    pub alias: Option<String>,
}

impl DatabaseObject {
    pub fn table(name: impl Into<String>) -> Self {
        Self {
            kind: ObjectKind::Table,
            catalog: None,
            schema: None,
            name: name.into(),
            alias: None,
        }
    }

    pub fn procedure(name: impl Into<String>) -> Self {
        Self {
            kind: ObjectKind::Procedure,
            ..Self::table(name)
        }
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn with_catalog(mut self, catalog: impl Into<String>) -> Self {
        self.catalog = Some(catalog.into());
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Build a reference from dot-separated qualifier parts:
    /// `name`, `schema.name`, or `catalog.schema.name`.
    pub fn from_parts(kind: ObjectKind, parts: &[String]) -> Option<Self> {
        let mut obj = match parts {
            [] => return None,
            [name] => Self::table(name),
            [schema, name] => Self::table(name).with_schema(schema),
            // Anything deeper than three parts keeps the last three.
            [.., catalog, schema, name] => {
                Self::table(name).with_schema(schema).with_catalog(catalog)
            }
        };
        obj.kind = kind;
        Some(obj)
    }

    /// True if `word` names this reference: matches the alias when one is
    /// set, otherwise the object name. SQL identifiers compare
    /// case-insensitively.
    pub fn answers_to(&self, word: &str) -> bool {
        match &self.alias {
            Some(alias) => alias.eq_ignore_ascii_case(word),
            None => self.name.eq_ignore_ascii_case(word),
        }
    }
}

impl std::fmt::Display for DatabaseObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let qualified = [
            self.catalog.as_deref(),
            self.schema.as_deref(),
            Some(self.name.as_str()),
        ]
        .into_iter()
        .flatten()
        .join(".");
        match &self.alias {
            Some(alias) => write!(f, "{qualified} AS {alias}"),
            None => f.write_str(&qualified),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_maps_qualifiers() {
        let parts = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        let one = DatabaseObject::from_parts(ObjectKind::Table, &parts(&["t"])).unwrap();
        assert_eq!((one.catalog, one.schema, one.name), (None, None, "t".into()));

        let two = DatabaseObject::from_parts(ObjectKind::Table, &parts(&["s", "t"])).unwrap();
        assert_eq!(two.schema.as_deref(), Some("s"));
        assert_eq!(two.name, "t");

        let three =
            DatabaseObject::from_parts(ObjectKind::Procedure, &parts(&["c", "s", "p"])).unwrap();
        assert_eq!(three.kind, ObjectKind::Procedure);
        assert_eq!(three.catalog.as_deref(), Some("c"));
        assert_eq!(three.schema.as_deref(), Some("s"));
        assert_eq!(three.name, "p");

        assert!(DatabaseObject::from_parts(ObjectKind::Table, &[]).is_none());
    }

    #[test]
    fn answers_to_prefers_alias() {
        let t = DatabaseObject::table("users").with_alias("u");
        assert!(t.answers_to("u"));
        assert!(t.answers_to("U"));
        assert!(!t.answers_to("users")); // alias shadows the bare name

        let bare = DatabaseObject::table("users");
        assert!(bare.answers_to("USERS"));
    }

    #[test]
    fn display_joins_qualifiers() {
        let t = DatabaseObject::table("t")
            .with_schema("s")
            .with_catalog("c")
            .with_alias("x");
        assert_eq!(t.to_string(), "c.s.t AS x");
        assert_eq!(DatabaseObject::table("t").to_string(), "t");
    }
}
