use crate::executor::{Session, SessionError};
use crate::model::{AccessType, ColumnDescriptor, ConnectionMeta, KeyFields};
use serde::{Deserialize, Serialize};

/// Embedded configuration of a database dialect
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DialectConfig {
    pub metadata: DialectMetadata,
    pub detection: DetectionConfig,
    pub features: FeatureConfig,
    pub sql: SqlConfig,
    pub types: TypeConfig,
    pub limits: LimitConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DialectMetadata {
    pub name: String,
    pub version: String,
    pub aliases: Vec<String>,
    pub description: String,
    pub used_libraries: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DetectionConfig {
    pub connection_patterns: Vec<String>,
    pub driver_patterns: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeatureConfig {
    pub supports_auto_inc: bool,
    pub supports_sequences: bool,
    pub supports_sequence_no_max_value_option: bool,
    pub supports_synonyms: bool,
    pub supports_options_in_url: bool,
    pub supports_repository: bool,
    pub supports_prepared_statement_metadata_retrieval: bool,
    pub supports_error_handling_on_batch_updates: bool,
    pub needs_to_lock_all_tables: bool,
    pub use_schema_name_for_table_list: bool,
    pub requires_create_table_primary_key_append: bool,
    pub release_savepoint: bool,
    pub script_parser_uses_backslash_escape: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SqlConfig {
    pub quote_identifier: String,
    pub escape_identifier: String,
    /// Prepended to every connection URL, e.g. "jdbc:"
    pub url_prefix: String,
    pub socket_timeout_ms: u64,
    pub default_host: String,
    pub native_driver_class: String,
    pub odbc_driver_class: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TypeConfig {
    /// String lengths at or above this render as TEXT
    pub clob_length: i32,
    pub max_varchar_length: i32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LimitConfig {
    pub default_native_port: u16,
    pub max_columns_in_index: u32,
    pub temp_column_prefix_len: usize,
    pub temp_column_suffix: String,
}

/// Result of dialect detection
#[derive(Debug, Clone)]
pub struct DetectionResult {
    pub dialect_name: String,
    pub confidence: f32,
    pub matched_pattern: String,
}

/// Capability interface a host queries for dialect-specific SQL
pub trait DatabaseDialect: Send + Sync {
    fn config(&self) -> &DialectConfig;

    fn name(&self) -> &str {
        &self.config().metadata.name
    }

    fn aliases(&self) -> &[String] {
        &self.config().metadata.aliases
    }

    /// Detect if this dialect matches the given connection string
    fn detect(&self, connection_string: &str) -> Option<DetectionResult>;

    // Connection

    fn access_types(&self) -> Vec<AccessType>;

    /// Default port for the access type, `None` when unspecified
    fn default_port(&self, access: AccessType) -> Option<u16>;

    fn driver_class(&self, access: AccessType) -> &str;

    fn url(&self, meta: &ConnectionMeta) -> Result<String, DialectError>;

    fn used_libraries(&self) -> &[String] {
        &self.config().metadata.used_libraries
    }

    // Column DDL

    fn field_definition(
        &self,
        meta: &ConnectionMeta,
        column: &ColumnDescriptor,
        keys: &KeyFields,
        add_fieldname: bool,
        add_cr: bool,
    ) -> String;

    fn add_column_statement(
        &self,
        meta: &ConnectionMeta,
        table: &str,
        column: &ColumnDescriptor,
        keys: &KeyFields,
    ) -> String;

    fn drop_column_statement(&self, table: &str, column: &ColumnDescriptor) -> String;

    fn modify_column_statement(
        &self,
        meta: &ConnectionMeta,
        table: &str,
        column: &ColumnDescriptor,
        keys: &KeyFields,
    ) -> String;

    // Identifiers and literals

    fn reserved_words(&self) -> &'static [&'static str];

    fn is_reserved_word(&self, word: &str) -> bool {
        self.reserved_words()
            .iter()
            .any(|reserved| reserved.eq_ignore_ascii_case(word))
    }

    /// Quote an identifier when it is reserved or not a plain name
    fn quote_field(&self, identifier: &str) -> String {
        let quote = self.config().sql.quote_identifier.as_str();
        let already_quoted = identifier.len() > quote.len()
            && identifier.starts_with(quote)
            && identifier.ends_with(quote);
        if identifier.is_empty() || already_quoted {
            return identifier.to_string();
        }

        let plain = identifier.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
            && !identifier.starts_with(|c: char| c.is_ascii_digit());
        if plain && !self.is_reserved_word(identifier) {
            return identifier.to_string();
        }

        let escape = &self.config().sql.escape_identifier;
        format!("{}{}{}", quote, identifier.replace(quote, escape), quote)
    }

    fn quoted_schema_table(&self, schema: Option<&str>, table: &str) -> String {
        match schema.filter(|s| !s.trim().is_empty()) {
            Some(schema) => format!("{}.{}", self.quote_field(schema), self.quote_field(table)),
            None => self.quote_field(table),
        }
    }

    fn quote_sql_string(&self, value: &str) -> String;

    // Catalog and misc SQL

    fn limit_clause(&self, rows: u64) -> String;

    fn sql_query_fields(&self, table: &str) -> String;

    fn sql_table_exists(&self, table: &str) -> String {
        self.sql_query_fields(table)
    }

    fn sql_column_exists(&self, column: &str, table: &str) -> String;

    fn sql_list_of_procedures(&self) -> String;

    fn sql_list_of_sequences(&self) -> String;

    fn sql_sequence_exists(&self, sequence: &str) -> String;

    fn sql_current_sequence_value(&self, sequence: &str) -> String;

    fn sql_next_sequence_value(&self, sequence: &str) -> String;

    fn sql_lock_tables(&self, tables: &[String]) -> String;

    /// `None` when the dialect has no unlock statement
    fn sql_unlock_tables(&self, tables: &[String]) -> Option<String>;

    fn drop_table_if_exists_statement(&self, table: &str) -> String;

    // Live inspection

    fn check_index_exists(
        &self,
        session: &mut dyn Session,
        schema: Option<&str>,
        table: &str,
        fields: &[String],
    ) -> Result<bool, DialectError>;
}

/// Error types for dialect operations
#[derive(Debug, thiserror::Error)]
pub enum DialectError {
    #[error("Dialect not found: {0}")]
    NotFound(String),

    #[error("{message} (field: {field})")]
    Configuration { field: &'static str, message: String },

    #[error("{message} [{mode}]")]
    UnsupportedMode { mode: AccessType, message: String },

    #[error("{message} [{table}]: {source}")]
    QueryExecution {
        table: String,
        message: String,
        #[source]
        source: SessionError,
    },
}
