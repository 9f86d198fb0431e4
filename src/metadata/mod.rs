//! Metadata provider boundary and implementations.
//!
//! The completion resolver only ever talks to the [`MetadataProvider`] trait:
//! prefix lookups for catalog, table, column, and procedure names. Two
//! implementations live here:
//!
//! - `memory`   : a static, in-process map. Used heavily by unit tests and by
//!   embedders that already hold a schema snapshot.
//! - `postgres` : a live `sqlx` pool querying `pg_catalog` /
//!   `information_schema`, with a `moka` cache in front since re-running the
//!   same lookup on every keystroke is the provider's problem to solve, not
//!   the resolver's.

pub mod memory;
pub mod postgres;
pub mod provider;

pub use memory::StaticMetadata;
pub use postgres::PgMetadataProvider;
pub use provider::MetadataProvider;
