#![cfg(test)]
crate::reexport!(container);
crate::reexport!(context);
pub use rstest::*;

pub(in crate::testing) fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Only initialize once for all tests
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env()) // <- reads RUST_LOG
            .with_test_writer() // ensures it integrates with `cargo test` output
            .init();
    });
}

mod isolated_integration_tests {
    use super::{super::*, *};

    #[test_context(IsolatedIntegrationTest)]
    #[tokio::test]
    #[ignore = "needs a running Docker daemon"]
    async fn can_connect(ctx: &mut IsolatedIntegrationTest) -> Result {
        sqlx::query("SELECT 1;").fetch_one(&ctx.pool).await?;
        Ok(())
    }

    #[test_context(IsolatedIntegrationTest)]
    #[tokio::test]
    #[ignore = "needs a running Docker daemon"]
    async fn lists_seeded_tables_and_procedures(ctx: &mut IsolatedIntegrationTest) -> Result {
        ctx.seed_objects().await;
        let meta = PgMetadataProvider::new(ctx.pool.clone());

        let catalogs = meta.list_catalogs("test_db_").await?;
        assert!(catalogs.contains(&ctx.database));

        let tables = meta.list_tables(Some(ctx.database.as_str()), Some("public"), "").await?;
        assert_eq!(tables, ["orders", "users"]);

        // Unpinned schema sees both `users` tables.
        let tables = meta.list_tables(Some(ctx.database.as_str()), None, "users").await?;
        assert_eq!(tables.len(), 2);

        let procedures = meta
            .list_procedures(Some(ctx.database.as_str()), Some("public"), "prune")
            .await?;
        assert_eq!(procedures, ["prune_sessions"]);
        Ok(())
    }

    #[test_context(IsolatedIntegrationTest)]
    #[rstest]
    #[case("users", "e", &["email"])]
    #[case("orders", "", &["id", "user_id", "total"])] // ordinal order, not alphabetical
    #[tokio::test]
    #[ignore = "needs a running Docker daemon"]
    async fn lists_columns_by_prefix(
        ctx: &mut IsolatedIntegrationTest,
        #[case] table: &str,
        #[case] prefix: &str,
        #[case] expected: &[&str],
    ) -> Result {
        ctx.seed_objects().await;
        let meta = PgMetadataProvider::new(ctx.pool.clone());
        let columns = meta
            .list_columns(Some(ctx.database.as_str()), Some("public"), table, prefix)
            .await?;
        assert_eq!(columns, expected);
        Ok(())
    }

    #[test_context(IsolatedIntegrationTest)]
    #[tokio::test]
    #[ignore = "needs a running Docker daemon"]
    async fn completes_against_live_metadata(ctx: &mut IsolatedIntegrationTest) -> Result {
        ctx.seed_objects().await;
        let completer = Completer::new(PgMetadataProvider::new(ctx.pool.clone()))
            .with_catalog(ctx.database.clone());

        let line = "SELECT * FROM users WHERE em";
        let got = completer.complete("", line, line.len()).await;
        assert_eq!(got, ["email"]);

        let line = "SELECT * FROM ord";
        let got = completer.complete("", line, line.len()).await;
        assert_eq!(got, ["orders"]);
        Ok(())
    }
}
