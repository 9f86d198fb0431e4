use crate::*;
use moka::future::Cache;
use sqlx::PgPool;
use std::time::Duration;

/// Live Postgres metadata via `pg_catalog` / `information_schema`.
///
/// Every lookup is a prefix LIKE query. Results are cached briefly so that
/// keystroke-rate completion does not hammer the server with identical
/// queries; the resolver itself never caches (each request re-derives
/// everything), so staleness is bounded by the TTL here.
pub struct PgMetadataProvider {
    pool: PgPool,
    cache: Cache<String, Vec<String>>,
}

const CACHE_CAPACITY: u64 = 1024;
const CACHE_TTL: Duration = Duration::from_secs(30);

impl PgMetadataProvider {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            cache: Cache::builder()
                .max_capacity(CACHE_CAPACITY)
                .time_to_live(CACHE_TTL)
                .build(),
        }
    }

    async fn cached(
        &self,
        key: String,
        query: &'static str,
        binds: &[Option<&str>],
    ) -> Result<Vec<String>> {
        if let Some(hit) = self.cache.get(&key).await {
            trace!("metadata cache hit: {key}");
            return Ok(hit);
        }
        let mut q = sqlx::query_scalar(query);
        for bind in binds {
            q = q.bind(bind.map(str::to_string));
        }
        let names: Vec<String> = q.fetch_all(&self.pool).await?;
        self.cache.insert(key, names.clone()).await;
        Ok(names)
    }
}

impl MetadataProvider for PgMetadataProvider {
    async fn list_catalogs(&self, prefix: &str) -> Result<Vec<String>> {
        self.cached(
            format!("catalogs/{prefix}"),
            "SELECT datname FROM pg_catalog.pg_database \
             WHERE NOT datistemplate AND datname LIKE $1 || '%' \
             ORDER BY datname",
            &[Some(prefix)],
        )
        .await
    }

    async fn list_tables(
        &self,
        catalog: Option<&str>,
        schema: Option<&str>,
        prefix: &str,
    ) -> Result<Vec<String>> {
        self.cached(
            format!("tables/{catalog:?}/{schema:?}/{prefix}"),
            "SELECT table_name FROM information_schema.tables \
             WHERE ($1::text IS NULL OR table_catalog = $1) \
               AND ($2::text IS NULL OR table_schema = $2) \
               AND table_name LIKE $3 || '%' \
             ORDER BY table_name",
            &[catalog, schema, Some(prefix)],
        )
        .await
    }

    async fn list_columns(
        &self,
        catalog: Option<&str>,
        schema: Option<&str>,
        table: &str,
        prefix: &str,
    ) -> Result<Vec<String>> {
        self.cached(
            format!("columns/{catalog:?}/{schema:?}/{table}/{prefix}"),
            "SELECT column_name FROM information_schema.columns \
             WHERE ($1::text IS NULL OR table_catalog = $1) \
               AND ($2::text IS NULL OR table_schema = $2) \
               AND table_name = $3 \
               AND column_name LIKE $4 || '%' \
             ORDER BY ordinal_position",
            &[catalog, schema, Some(table), Some(prefix)],
        )
        .await
    }

    async fn list_procedures(
        &self,
        catalog: Option<&str>,
        schema: Option<&str>,
        prefix: &str,
    ) -> Result<Vec<String>> {
        self.cached(
            format!("procedures/{catalog:?}/{schema:?}/{prefix}"),
            "SELECT routine_name FROM information_schema.routines \
             WHERE ($1::text IS NULL OR routine_catalog = $1) \
               AND ($2::text IS NULL OR routine_schema = $2) \
               AND routine_name LIKE $3 || '%' \
             ORDER BY routine_name",
            &[catalog, schema, Some(prefix)],
        )
        .await
    }
}
