use crate::*;
use itertools::Itertools as _;

/// In-memory metadata: a fixed snapshot of catalogs, tables, columns, and
/// procedures.
///
/// Read-only after construction, so plain vectors suffice. Name matching is
/// case-insensitive prefix matching, the friendliest interpretation of the
/// provider contract for interactive use.
#[derive(Debug, Clone, Default)]
pub struct StaticMetadata {
    tables: Vec<TableEntry>,
    procedures: Vec<ObjectEntry>,
}

#[derive(Debug, Clone)]
struct TableEntry {
    catalog: String,
    schema: String,
    name: String,
    columns: Vec<String>,
}

#[derive(Debug, Clone)]
struct ObjectEntry {
    catalog: String,
    schema: String,
    name: String,
}

fn prefix_match(name: &str, prefix: &str) -> bool {
    name.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

fn scope_match(value: &str, wanted: Option<&str>) -> bool {
    wanted.is_none_or(|w| value.eq_ignore_ascii_case(w))
}

impl StaticMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(
        mut self,
        catalog: impl Into<String>,
        schema: impl Into<String>,
        name: impl Into<String>,
        columns: &[&str],
    ) -> Self {
        self.tables.push(TableEntry {
            catalog: catalog.into(),
            schema: schema.into(),
            name: name.into(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
        });
        self
    }

    pub fn with_procedure(
        mut self,
        catalog: impl Into<String>,
        schema: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.procedures.push(ObjectEntry {
            catalog: catalog.into(),
            schema: schema.into(),
            name: name.into(),
        });
        self
    }
}

impl MetadataProvider for StaticMetadata {
    async fn list_catalogs(&self, prefix: &str) -> Result<Vec<String>> {
        Ok(self
            .tables
            .iter()
            .map(|t| t.catalog.as_str())
            .chain(self.procedures.iter().map(|p| p.catalog.as_str()))
            .filter(|c| prefix_match(c, prefix))
            .unique()
            .map(str::to_string)
            .collect())
    }

    async fn list_tables(
        &self,
        catalog: Option<&str>,
        schema: Option<&str>,
        prefix: &str,
    ) -> Result<Vec<String>> {
        Ok(self
            .tables
            .iter()
            .filter(|t| scope_match(&t.catalog, catalog) && scope_match(&t.schema, schema))
            .filter(|t| prefix_match(&t.name, prefix))
            .map(|t| t.name.clone())
            .collect())
    }

    async fn list_columns(
        &self,
        catalog: Option<&str>,
        schema: Option<&str>,
        table: &str,
        prefix: &str,
    ) -> Result<Vec<String>> {
        Ok(self
            .tables
            .iter()
            .filter(|t| scope_match(&t.catalog, catalog) && scope_match(&t.schema, schema))
            .filter(|t| t.name.eq_ignore_ascii_case(table))
            .flat_map(|t| t.columns.iter())
            .filter(|c| prefix_match(c, prefix))
            .cloned()
            .collect())
    }

    async fn list_procedures(
        &self,
        catalog: Option<&str>,
        schema: Option<&str>,
        prefix: &str,
    ) -> Result<Vec<String>> {
        Ok(self
            .procedures
            .iter()
            .filter(|p| scope_match(&p.catalog, catalog) && scope_match(&p.schema, schema))
            .filter(|p| prefix_match(&p.name, prefix))
            .map(|p| p.name.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StaticMetadata {
        StaticMetadata::new()
            .with_table("app", "public", "users", &["id", "email", "name"])
            .with_table("app", "public", "orders", &["id", "user_id"])
            .with_table("app", "audit", "users", &["seen_at"])
            .with_procedure("app", "public", "prune_sessions")
    }

    #[tokio::test]
    async fn catalog_and_table_prefix_lookup() {
        let meta = sample();
        assert_eq!(meta.list_catalogs("a").await.unwrap(), ["app"]);
        assert_eq!(meta.list_catalogs("z").await.unwrap(), Vec::<String>::new());
        assert_eq!(
            meta.list_tables(None, None, "u").await.unwrap(),
            ["users", "users"]
        );
        assert_eq!(
            meta.list_tables(None, Some("audit"), "").await.unwrap(),
            ["users"]
        );
    }

    #[tokio::test]
    async fn column_lookup_is_schema_scoped_and_case_insensitive() {
        let meta = sample();
        assert_eq!(
            meta.list_columns(None, Some("public"), "USERS", "e").await.unwrap(),
            ["email"]
        );
        assert_eq!(
            meta.list_columns(None, None, "users", "").await.unwrap(),
            ["id", "email", "name", "seen_at"]
        );
    }

    #[tokio::test]
    async fn procedure_lookup() {
        let meta = sample();
        assert_eq!(
            meta.list_procedures(Some("app"), None, "prune").await.unwrap(),
            ["prune_sessions"]
        );
        assert!(
            meta.list_procedures(Some("other"), None, "")
                .await
                .unwrap()
                .is_empty()
        );
    }
}
