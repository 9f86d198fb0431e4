use crate::*;
use itertools::Itertools as _;

/// Cursor-aware completion over a SQL buffer.
///
/// Owns nothing but the metadata provider and a little session context (the
/// current catalog, the statement terminator). Every call to [`complete`]
/// re-tokenizes and re-derives statement context from scratch; buffers are
/// interactive-sized, so redoing the work per keystroke is the simple and
/// correct trade.
///
/// [`complete`]: Completer::complete
pub struct Completer<P> {
    provider: P,
    catalog: Option<String>,
    terminator: char,
}

impl<P: MetadataProvider> Completer<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            catalog: None,
            terminator: config().terminator_char(),
        }
    }

    /// Catalog to scope unqualified table/procedure lookups to.
    pub fn with_catalog(mut self, catalog: impl Into<String>) -> Self {
        self.catalog = Some(catalog.into());
        self
    }

    pub fn with_terminator(mut self, terminator: char) -> Self {
        self.terminator = terminator;
        self
    }

    /// Complete the object name at `cursor` (byte offset into `line`), given
    /// the already-buffered statement text from prior lines in `buffer`.
    ///
    /// Total over its inputs: provider failures contribute nothing and no
    /// error ever propagates; the worst case is an empty vec. Candidates are
    /// deduplicated, deterministically ordered, and re-wrapped in the quoting
    /// style the user started typing.
    pub async fn complete(&self, buffer: &str, line: &str, cursor: usize) -> Vec<String> {
        let mut cursor = cursor.min(line.len());
        // A cursor that is not a char boundary floors to the previous one.
        while !line.is_char_boundary(cursor) {
            cursor -= 1;
        }
        let mut text = String::with_capacity(buffer.len() + 1 + cursor);
        if !buffer.is_empty() {
            // Prior lines go ahead of the current one so cross-line context
            // (an open subquery, a FROM on an earlier line) stays visible.
            text.push_str(buffer);
            text.push('\n');
        }
        text.push_str(&line[..cursor]);

        let fragment = NameFragment::at_cursor(&text, text.len());
        if fragment.parts.is_empty() {
            return Vec::new();
        }

        let state = parse_with_terminator(&text, self.terminator);
        let references = state.object_references();
        debug!(
            statement = ?state.statement(),
            clause = ?state.current_clause(),
            references = references.len(),
            parts = fragment.parts.len(),
            "resolving completion"
        );

        // While naming a table (FROM/JOIN/INTO) or before any reference
        // exists, names come from the catalog at large; otherwise the known
        // references drive column lookups.
        let naming_objects = matches!(
            state.current_clause(),
            Some(Keyword::From | Keyword::Join | Keyword::Into)
        );
        let mut found = Vec::new();
        if references.is_empty() || naming_objects {
            self.global_candidates(&fragment.parts, &mut found).await;
        } else {
            self.referenced_candidates(&fragment.parts, &references, &mut found)
                .await;
        }

        found
            .into_iter()
            .unique()
            .sorted()
            .map(|name| fragment.quoting.wrap(&name))
            .collect()
    }

    /// Candidates when the user is naming an object, not qualifying a known
    /// reference. Dispatch by how many dot-separated parts were typed.
    async fn global_candidates(&self, parts: &[String], found: &mut Vec<String>) {
        let catalog = self.catalog.as_deref();
        match parts {
            [prefix] => {
                self.keep(found, "catalog", self.provider.list_catalogs(prefix).await);
                self.keep(
                    found,
                    "table",
                    self.provider.list_tables(catalog, None, prefix).await,
                );
                self.keep(
                    found,
                    "procedure",
                    self.provider.list_procedures(catalog, None, prefix).await,
                );
            }
            [qualifier, prefix] => {
                // `qualifier` may be a table (complete its columns) or a
                // schema (complete its tables and procedures).
                self.keep(
                    found,
                    "column",
                    self.provider
                        .list_columns(catalog, None, qualifier, prefix)
                        .await,
                );
                self.keep(
                    found,
                    "table",
                    self.provider
                        .list_tables(catalog, Some(qualifier), prefix)
                        .await,
                );
                self.keep(
                    found,
                    "procedure",
                    self.provider
                        .list_procedures(catalog, Some(qualifier), prefix)
                        .await,
                );
            }
            [part1, part2, prefix] => {
                // catalog.schema.name for tables/procedures, or
                // schema.table.column for columns.
                self.keep(
                    found,
                    "table",
                    self.provider
                        .list_tables(Some(part1), Some(part2), prefix)
                        .await,
                );
                self.keep(
                    found,
                    "procedure",
                    self.provider
                        .list_procedures(Some(part1), Some(part2), prefix)
                        .await,
                );
                self.keep(
                    found,
                    "column",
                    self.provider
                        .list_columns(catalog, Some(part1), part2, prefix)
                        .await,
                );
            }
            [cat, schema, table, prefix] => {
                self.keep(
                    found,
                    "column",
                    self.provider
                        .list_columns(Some(cat), Some(schema), table, prefix)
                        .await,
                );
            }
            _ => {}
        }
    }

    /// Candidates resolved against the references the statement already
    /// declared: alias-qualified column lookups, narrowing to one table when
    /// the leading segment names it.
    async fn referenced_candidates(
        &self,
        parts: &[String],
        references: &[DatabaseObject],
        found: &mut Vec<String>,
    ) {
        match parts {
            [prefix] => {
                for obj in references {
                    self.keep(found, "column", self.columns_of(obj, prefix).await);
                }
            }
            [qualifier, prefix] => {
                let matched: Vec<_> = references
                    .iter()
                    .filter(|obj| obj.answers_to(qualifier))
                    .collect();
                if matched.is_empty() {
                    // Not an alias after all; treat it as a schema/table
                    // qualifier like the global path would.
                    self.global_candidates(parts, found).await;
                    return;
                }
                for obj in matched {
                    self.keep(found, "column", self.columns_of(obj, prefix).await);
                }
            }
            // Deeper qualification bypasses aliases entirely.
            _ => self.global_candidates(parts, found).await,
        }
    }

    async fn columns_of(&self, obj: &DatabaseObject, prefix: &str) -> Result<Vec<String>> {
        let catalog = obj.catalog.as_deref().or(self.catalog.as_deref());
        self.provider
            .list_columns(catalog, obj.schema.as_deref(), &obj.name, prefix)
            .await
    }

    /// A failing lookup contributes zero candidates and never aborts its
    /// siblings.
    fn keep(&self, found: &mut Vec<String>, what: &str, result: Result<Vec<String>>) {
        match result {
            Ok(names) => found.extend(names),
            Err(e) => debug!("{what} lookup failed, skipping its candidates: {e}"),
        }
    }
}
