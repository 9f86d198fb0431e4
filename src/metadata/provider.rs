use crate::*;

/// Name lookups against a live (or snapshotted) database catalog.
///
/// All lookups are prefix matches (`prefix%` semantics, never exact), and an
/// empty prefix matches everything. `catalog`/`schema` of `None` mean "the
/// current catalog" / "any schema" respectively.
///
/// Implementations may block on network round-trips; the resolver awaits each
/// lookup sequentially and treats any `Err` as an empty result, so a failing
/// or slow provider degrades completion rather than breaking it.
pub trait MetadataProvider {
    /// Catalog (database) names starting with `prefix`.
    async fn list_catalogs(&self, prefix: &str) -> Result<Vec<String>>;

    /// Table names starting with `prefix`, optionally narrowed by catalog
    /// and schema.
    async fn list_tables(
        &self,
        catalog: Option<&str>,
        schema: Option<&str>,
        prefix: &str,
    ) -> Result<Vec<String>>;

    /// Column names of `table` starting with `prefix`.
    async fn list_columns(
        &self,
        catalog: Option<&str>,
        schema: Option<&str>,
        table: &str,
        prefix: &str,
    ) -> Result<Vec<String>>;

    /// Stored procedure names starting with `prefix`.
    async fn list_procedures(
        &self,
        catalog: Option<&str>,
        schema: Option<&str>,
        prefix: &str,
    ) -> Result<Vec<String>>;
}
