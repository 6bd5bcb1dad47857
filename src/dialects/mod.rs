//! Database dialect system for clickddl
//!
//! A dialect answers the host's capability queries (URLs, column DDL,
//! quoting, catalog SQL) for one database engine. Dialect constants are
//! embedded TOML files parsed once per process.

pub mod base;
pub mod registry;

pub mod clickhouse;

pub use base::{DatabaseDialect, DetectionResult, DialectConfig, DialectError};
pub use clickhouse::ClickhouseDialect;
pub use registry::get_registry;

use std::sync::Arc;

/// Get dialect by name or alias
pub fn get_dialect(name: &str) -> Result<Arc<dyn DatabaseDialect>, DialectError> {
    let registry = get_registry()
        .lock()
        .map_err(|_| DialectError::NotFound("Dialect registry is poisoned".to_string()))?;
    registry
        .get(name)
        .ok_or_else(|| DialectError::NotFound(name.to_string()))
}

/// Detect the dialect serving a connection string
pub fn detect_dialect(connection_string: &str) -> Result<Arc<dyn DatabaseDialect>, DialectError> {
    let registry = get_registry()
        .lock()
        .map_err(|_| DialectError::NotFound("Dialect registry is poisoned".to_string()))?;
    registry.detect(connection_string)
}

/// List all available dialect names
pub fn list_dialects() -> Vec<String> {
    get_registry()
        .lock()
        .map(|registry| registry.list_dialects())
        .unwrap_or_default()
}
