//! ClickHouse SQL dialect rules for ETL and migration hosts.
//!
//! The host owns column and connection metadata and asks a
//! [`DatabaseDialect`](dialects::DatabaseDialect) for SQL fragments: column
//! DDL, connection URLs, quoting, catalog queries. The only rule touching a
//! live database, the index check, goes through the [`Session`](executor::Session)
//! trait; [`OdbcSession`](executor::OdbcSession) implements it over ODBC.

pub mod dialects;
pub mod executor;
pub mod logger;
pub mod model;

pub use dialects::{get_dialect, ClickhouseDialect, DatabaseDialect, DialectError};
pub use executor::{Session, SessionError};
pub use model::{AccessType, ColumnDescriptor, Config, ConnectionMeta, KeyFields, ValueType};
