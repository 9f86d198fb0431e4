use crate::testing::*;
use sqlx::{PgPool, Postgres};
use test_context::AsyncTestContext;
pub use test_context::test_context;

/// A throwaway database on the shared test container, dropped on teardown so
/// tests never see each other's objects.
pub struct IsolatedIntegrationTest {
    pub pool: PgPool,
    pub database: String,
}

impl IsolatedIntegrationTest {
    async fn random_database<'c, E: sqlx::Executor<'c, Database = Postgres>>(exec: E) -> String {
        use rand::Rng;
        let db = format!(
            "test_db_{}",
            rand::rng()
                .sample_iter(&rand::distr::Alphanumeric)
                .take(8)
                .map(char::from)
                .collect::<String>()
                .to_lowercase()
        );

        sqlx::query(sqlx::AssertSqlSafe(format!("CREATE DATABASE {db}")))
            .execute(exec)
            .await
            .expect("Failed to create test database");
        db
    }

    /// Seed a small catalog for metadata lookups: two tables and a stored
    /// procedure under `public`, one table under a second schema.
    pub async fn seed_objects(&self) {
        const DDL: &[&str] = &[
            "CREATE TABLE users (id INT PRIMARY KEY, email TEXT, full_name TEXT)",
            "CREATE TABLE orders (id INT PRIMARY KEY, user_id INT, total NUMERIC)",
            "CREATE SCHEMA archive",
            "CREATE TABLE archive.users (id INT, archived_at TIMESTAMPTZ)",
            "CREATE PROCEDURE prune_sessions() LANGUAGE SQL AS $$ SELECT 1 $$",
        ];
        for ddl in DDL {
            sqlx::query(*ddl)
                .execute(&self.pool)
                .await
                .expect("seed DDL failed");
        }
    }
}

impl AsyncTestContext for IsolatedIntegrationTest {
    async fn setup() -> Self {
        crate::testing::common_init();
        let postgres_pool = pool("postgres").await;
        let database = Self::random_database(&postgres_pool).await;

        Self {
            pool: pool(&database).await,
            database,
        }
    }

    async fn teardown(self) {
        self.pool.close().await;

        let pool = pool("postgres").await;
        sqlx::query(sqlx::AssertSqlSafe(format!(
            "DROP DATABASE {}",
            self.database
        )))
        .execute(&pool)
        .await
        .expect("Failed to drop test database");
    }
}
