use super::reserved::RESERVED_WORDS;
use crate::dialects::base::{DatabaseDialect, DetectionResult, DialectConfig, DialectError};
use crate::executor::{QueryHandle, Session, SessionError};
use crate::model::{AccessType, ColumnDescriptor, ConnectionMeta, KeyFields, Messages, ValueType};
use log::{debug, warn};
use regex::Regex;
use std::sync::OnceLock;

static CONFIG: OnceLock<DialectConfig> = OnceLock::new();

/// Port value hosts store when no port was given
pub const PORT_UNSPECIFIED: &str = "-1";

const CR: &str = "\n";

pub struct ClickhouseDialect {
    config: &'static DialectConfig,
    messages: Messages,
}

impl ClickhouseDialect {
    pub fn new() -> Self {
        Self::with_messages(Messages::default())
    }

    /// Dialect whose user-facing errors use the given message text
    pub fn with_messages(messages: Messages) -> Self {
        let config = CONFIG.get_or_init(|| {
            let config_str = include_str!("dialect.toml");
            toml::from_str(config_str).expect("Failed to parse ClickHouse dialect config")
        });

        Self { config, messages }
    }

    /// Name of the scratch column used while changing a column's type.
    ///
    /// Surrounding double quotes are removed before truncation and put back
    /// afterwards, so the unquoted part never exceeds prefix + suffix length.
    pub fn temp_column_name(&self, name: &str) -> String {
        let limits = &self.config.limits;
        let quoted = name.len() >= 2 && name.starts_with('"') && name.ends_with('"');
        let bare = if quoted { &name[1..name.len() - 1] } else { name };

        let mut tmp: String = bare.chars().take(limits.temp_column_prefix_len).collect();
        tmp.push_str(&limits.temp_column_suffix);

        if quoted {
            format!("\"{}\"", tmp)
        } else {
            tmp
        }
    }

    fn numeric_definition(length: i32, precision: i32) -> String {
        if length <= 0 {
            return "DOUBLE PRECISION".to_string();
        }

        if precision > 0 || length > 18 {
            format!("NUMERIC({}, {})", length + precision, precision)
        } else if precision == 0 {
            if length > 9 {
                "BIGINT".to_string()
            } else if length < 5 {
                "SMALLINT".to_string()
            } else {
                "INT".to_string()
            }
        } else {
            "FLOAT(53)".to_string()
        }
    }

    fn string_definition(&self, length: i32) -> String {
        if length < 1 || length >= self.config.types.clob_length {
            "TEXT".to_string()
        } else {
            format!("VARCHAR({})", length)
        }
    }

    pub fn supports_auto_inc(&self) -> bool {
        self.config.features.supports_auto_inc
    }

    pub fn supports_sequences(&self) -> bool {
        self.config.features.supports_sequences
    }

    pub fn max_columns_in_index(&self) -> u32 {
        self.config.limits.max_columns_in_index
    }

    pub fn max_varchar_length(&self) -> i32 {
        self.config.types.max_varchar_length
    }
}

impl Default for ClickhouseDialect {
    fn default() -> Self {
        Self::new()
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Mark every requested field seen in the COLUMN_NAME column of the result
fn scan_index_columns(
    session: &mut dyn Session,
    handle: &QueryHandle,
    fields: &[String],
    found: &mut [bool],
) -> Result<(), SessionError> {
    while let Some(row) = session.next_row(handle)? {
        let column = row.get_string("COLUMN_NAME", "");
        if let Some(index) = fields.iter().position(|field| field == column) {
            found[index] = true;
        }
    }
    Ok(())
}

impl DatabaseDialect for ClickhouseDialect {
    fn config(&self) -> &DialectConfig {
        self.config
    }

    fn detect(&self, connection_string: &str) -> Option<DetectionResult> {
        let conn_lower = connection_string.to_lowercase();
        let mut confidence = 0.0f32;
        let mut matched_pattern = String::new();

        for pattern in &self.config.detection.connection_patterns {
            if let Ok(re) = Regex::new(pattern) {
                if re.is_match(&conn_lower) {
                    confidence = 0.9;
                    matched_pattern = pattern.clone();
                    break;
                }
            }
        }

        if confidence == 0.0 {
            for pattern in &self.config.detection.driver_patterns {
                if let Ok(re) = Regex::new(pattern) {
                    if re.is_match(connection_string) {
                        confidence = 0.8;
                        matched_pattern = pattern.clone();
                        break;
                    }
                }
            }
        }

        if confidence == 0.0 && conn_lower.contains("clickhouse") {
            confidence = 0.5;
            matched_pattern = "clickhouse".to_string();
        }

        if confidence > 0.0 {
            Some(DetectionResult {
                dialect_name: self.name().to_string(),
                confidence,
                matched_pattern,
            })
        } else {
            None
        }
    }

    fn access_types(&self) -> Vec<AccessType> {
        vec![AccessType::Native, AccessType::Jndi]
    }

    fn default_port(&self, access: AccessType) -> Option<u16> {
        match access {
            AccessType::Native => Some(self.config.limits.default_native_port),
            _ => None,
        }
    }

    fn driver_class(&self, access: AccessType) -> &str {
        match access {
            AccessType::Odbc => &self.config.sql.odbc_driver_class,
            _ => &self.config.sql.native_driver_class,
        }
    }

    fn url(&self, meta: &ConnectionMeta) -> Result<String, DialectError> {
        let sql = &self.config.sql;

        match meta.access {
            AccessType::Odbc => Ok(format!("{}odbc:{}", sql.url_prefix, meta.database)),
            AccessType::Native => {
                if is_blank(&meta.database) {
                    return Err(DialectError::Configuration {
                        field: "database",
                        message: self.messages.missing_database.clone(),
                    });
                }

                let host = if is_blank(&meta.host) {
                    sql.default_host.as_str()
                } else {
                    meta.host.as_str()
                };
                let port = if is_blank(&meta.port) || meta.port == PORT_UNSPECIFIED {
                    String::new()
                } else {
                    format!(":{}", meta.port)
                };
                let database = if meta.database.starts_with('/') {
                    meta.database.clone()
                } else {
                    format!("/{}", meta.database)
                };

                let url = format!(
                    "{}clickhouse://{}{}{}?socket_timeout={}",
                    sql.url_prefix, host, port, database, sql.socket_timeout_ms
                );
                debug!("Built native URL for host {}", host);
                Ok(url)
            }
            other => Err(DialectError::UnsupportedMode {
                mode: other,
                message: self.messages.unsupported_access.clone(),
            }),
        }
    }

    fn field_definition(
        &self,
        meta: &ConnectionMeta,
        column: &ColumnDescriptor,
        keys: &KeyFields,
        add_fieldname: bool,
        add_cr: bool,
    ) -> String {
        let mut retval = String::with_capacity(128);

        if add_fieldname {
            retval.push_str(&column.name);
            retval.push(' ');
        }

        match column.value_type {
            ValueType::Timestamp | ValueType::Date => retval.push_str("TIMESTAMP"),
            ValueType::Boolean => {
                if meta.supports_boolean_data_type() {
                    retval.push_str("BOOLEAN");
                } else {
                    retval.push_str("CHAR(1)");
                }
            }
            t if t.is_numeric() => {
                if keys.is_key(&column.name) {
                    retval.push_str("BIGSERIAL");
                } else {
                    retval.push_str(&Self::numeric_definition(column.length, column.precision));
                }
            }
            ValueType::String => retval.push_str(&self.string_definition(column.length)),
            ValueType::Binary => retval.push_str("BLOB"),
            other => {
                warn!("No ClickHouse type for column '{}' of type {}", column.name, other);
                retval.push_str(" UNKNOWN");
            }
        }

        if add_cr {
            retval.push_str(CR);
        }

        retval
    }

    fn add_column_statement(
        &self,
        meta: &ConnectionMeta,
        table: &str,
        column: &ColumnDescriptor,
        keys: &KeyFields,
    ) -> String {
        format!(
            "ALTER TABLE {} ADD {}",
            table,
            self.field_definition(meta, column, keys, true, false)
        )
    }

    fn drop_column_statement(&self, table: &str, column: &ColumnDescriptor) -> String {
        format!("ALTER TABLE {} DROP COLUMN {}{}", table, column.name, CR)
    }

    fn modify_column_statement(
        &self,
        meta: &ConnectionMeta,
        table: &str,
        column: &ColumnDescriptor,
        keys: &KeyFields,
    ) -> String {
        let tmp_column = column.with_name(self.temp_column_name(&column.name));
        debug!(
            "Modifying column {} of {} through {}",
            column.name, table, tmp_column.name
        );

        let mut sql = String::new();
        sql.push_str(&self.add_column_statement(meta, table, &tmp_column, keys));
        sql.push(';');
        sql.push_str(CR);

        sql.push_str(&format!(
            "UPDATE {} SET {}={};{}",
            table, tmp_column.name, column.name, CR
        ));

        sql.push_str(&self.drop_column_statement(table, column));
        sql.push(';');
        sql.push_str(CR);

        sql.push_str(&self.add_column_statement(meta, table, column, keys));
        sql.push(';');
        sql.push_str(CR);

        sql.push_str(&format!(
            "UPDATE {} SET {}={};{}",
            table, column.name, tmp_column.name, CR
        ));

        sql.push_str(&self.drop_column_statement(table, &tmp_column));

        sql
    }

    fn reserved_words(&self) -> &'static [&'static str] {
        &RESERVED_WORDS
    }

    fn quote_sql_string(&self, value: &str) -> String {
        // CR/LF map to chr(13)/chr(10) swapped; generated scripts already depend on it
        let escaped = value
            .replace('\'', "''")
            .replace('\n', "'||chr(13)||'")
            .replace('\r', "'||chr(10)||'");
        format!("'{}'", escaped)
    }

    fn limit_clause(&self, rows: u64) -> String {
        format!(" WHERE ROWNUM <= {}", rows)
    }

    fn sql_query_fields(&self, table: &str) -> String {
        format!("SELECT * FROM {} WHERE 1=0", table)
    }

    fn sql_column_exists(&self, column: &str, table: &str) -> String {
        format!("SELECT {} FROM {} WHERE 1=0", column, table)
    }

    fn sql_list_of_procedures(&self) -> String {
        "show tables".to_string()
    }

    fn sql_list_of_sequences(&self) -> String {
        "SELECT SEQUENCE_NAME FROM all_sequences".to_string()
    }

    fn sql_sequence_exists(&self, sequence: &str) -> String {
        match sequence.split_once('.') {
            None => format!(
                "SELECT * FROM USER_SEQUENCES WHERE SEQUENCE_NAME = '{}'",
                sequence.to_uppercase()
            ),
            Some((schema, name)) => format!(
                "SELECT * FROM ALL_SEQUENCES WHERE SEQUENCE_NAME = '{}' AND SEQUENCE_OWNER = '{}'",
                name.to_uppercase(),
                schema.to_uppercase()
            ),
        }
    }

    fn sql_current_sequence_value(&self, sequence: &str) -> String {
        format!("SELECT {}.currval FROM DUAL", sequence)
    }

    fn sql_next_sequence_value(&self, sequence: &str) -> String {
        format!("SELECT {}.nextval FROM dual", sequence)
    }

    fn sql_lock_tables(&self, tables: &[String]) -> String {
        tables
            .iter()
            .map(|table| format!("LOCK TABLE {} IN EXCLUSIVE MODE;{}", table, CR))
            .collect()
    }

    fn sql_unlock_tables(&self, _tables: &[String]) -> Option<String> {
        None
    }

    fn drop_table_if_exists_statement(&self, table: &str) -> String {
        format!("DROP TABLE IF EXISTS {}", table)
    }

    fn check_index_exists(
        &self,
        session: &mut dyn Session,
        schema: Option<&str>,
        table: &str,
        fields: &[String],
    ) -> Result<bool, DialectError> {
        let tablename = self.quoted_schema_table(schema, table);
        let wrap = |source: SessionError| DialectError::QueryExecution {
            table: tablename.clone(),
            message: self.messages.index_check_failed.clone(),
            source,
        };

        let sql = format!("SELECT * FROM USER_IND_COLUMNS WHERE TABLE_NAME = '{}'", table);
        let Some(handle) = session.open_query(&sql).map_err(wrap)? else {
            debug!("Index query on {} returned no result set", tablename);
            return Ok(false);
        };

        let mut found = vec![false; fields.len()];
        let scanned = scan_index_columns(session, &handle, fields, &mut found);
        let closed = session.close_query(handle);
        scanned.map_err(wrap)?;
        closed.map_err(wrap)?;

        let all = found.iter().all(|&f| f);
        debug!("Index on {} covering {:?}: {}", tablename, fields, all);
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dialect() -> ClickhouseDialect {
        ClickhouseDialect::new()
    }

    fn native(host: &str, port: &str, database: &str) -> ConnectionMeta {
        ConnectionMeta {
            host: host.to_string(),
            port: port.to_string(),
            database: database.to_string(),
            ..ConnectionMeta::new(AccessType::Native)
        }
    }

    fn field(column: ColumnDescriptor) -> String {
        dialect().field_definition(
            &ConnectionMeta::default(),
            &column,
            &KeyFields::default(),
            false,
            false,
        )
    }

    fn number(length: i32, precision: i32) -> String {
        field(ColumnDescriptor::new("amount", ValueType::Number, length, precision))
    }

    #[test]
    fn test_embedded_config_parses() {
        let d = dialect();
        assert_eq!(d.name(), "clickhouse");
        assert!(d.aliases().contains(&"ch".to_string()));
        assert_eq!(d.config().types.clob_length, 9999999);
        assert_eq!(d.max_columns_in_index(), 32);
        assert_eq!(d.max_varchar_length(), 2000);
        assert!(!d.supports_auto_inc());
        assert!(d.supports_sequences());
        assert_eq!(d.used_libraries().len(), 3);
    }

    #[test]
    fn test_default_port() {
        let d = dialect();
        assert_eq!(d.default_port(AccessType::Native), Some(8123));
        assert_eq!(d.default_port(AccessType::Odbc), None);
        assert_eq!(d.default_port(AccessType::Jndi), None);
    }

    #[test]
    fn test_access_types() {
        assert_eq!(dialect().access_types(), vec![AccessType::Native, AccessType::Jndi]);
    }

    #[test]
    fn test_driver_class() {
        let d = dialect();
        assert_eq!(d.driver_class(AccessType::Odbc), "sun.jdbc.odbc.JdbcOdbcDriver");
        assert_eq!(d.driver_class(AccessType::Native), "ru.yandex.clickhouse.ClickHouseDriver");
    }

    #[test]
    fn test_native_url() {
        let url = dialect().url(&native("ch01", "8123", "events")).unwrap();
        assert_eq!(url, "clickhouse://ch01:8123/events?socket_timeout=600000");
    }

    #[test]
    fn test_native_url_defaults_host_and_skips_port() {
        let d = dialect();
        assert_eq!(
            d.url(&native("", "-1", "events")).unwrap(),
            "clickhouse://localhost/events?socket_timeout=600000"
        );
        assert_eq!(
            d.url(&native("  ", "", "events")).unwrap(),
            "clickhouse://localhost/events?socket_timeout=600000"
        );
    }

    #[test]
    fn test_native_url_rooted_database() {
        let url = dialect().url(&native("ch01", "", "/events")).unwrap();
        assert_eq!(url, "clickhouse://ch01/events?socket_timeout=600000");
    }

    #[test]
    fn test_native_url_requires_database() {
        let err = dialect().url(&native("ch01", "8123", " ")).unwrap_err();
        match &err {
            DialectError::Configuration { field, .. } => assert_eq!(*field, "database"),
            other => panic!("Expected configuration error, got {:?}", other),
        }
        assert!(err.to_string().contains("database"));
    }

    #[test]
    fn test_odbc_url() {
        let mut meta = ConnectionMeta::new(AccessType::Odbc);
        meta.database = "ClickHouseDSN".to_string();
        assert_eq!(dialect().url(&meta).unwrap(), "odbc:ClickHouseDSN");
    }

    #[test]
    fn test_unsupported_access_type() {
        let mut meta = ConnectionMeta::new(AccessType::Jndi);
        meta.database = "events".to_string();
        let err = dialect().url(&meta).unwrap_err();
        assert!(matches!(err, DialectError::UnsupportedMode { mode: AccessType::Jndi, .. }));
        assert!(err.to_string().contains("JNDI"));
    }

    #[test]
    fn test_localized_messages() {
        let messages = Messages {
            missing_database: "必须指定数据库名称".to_string(),
            ..Messages::default()
        };
        let d = ClickhouseDialect::with_messages(messages);
        let err = d.url(&native("", "", "")).unwrap_err();
        assert_eq!(err.to_string(), "必须指定数据库名称 (field: database)");
    }

    #[test]
    fn test_numeric_definitions() {
        assert_eq!(number(0, 0), "DOUBLE PRECISION");
        assert_eq!(number(-1, 2), "DOUBLE PRECISION");
        assert_eq!(number(10, 2), "NUMERIC(12, 2)");
        assert_eq!(number(19, 0), "NUMERIC(19, 0)");
        assert_eq!(number(18, 0), "BIGINT");
        assert_eq!(number(10, 0), "BIGINT");
        assert_eq!(number(9, 0), "INT");
        assert_eq!(number(5, 0), "INT");
        assert_eq!(number(4, 0), "SMALLINT");
        assert_eq!(number(1, 0), "SMALLINT");
        assert_eq!(number(8, -1), "FLOAT(53)");
    }

    #[test]
    fn test_numeric_family_shares_rules() {
        assert_eq!(field(ColumnDescriptor::new("n", ValueType::Integer, 9, 0)), "INT");
        assert_eq!(field(ColumnDescriptor::new("n", ValueType::BigNumber, 20, 4)), "NUMERIC(24, 4)");
    }

    #[test]
    fn test_key_columns_are_bigserial() {
        let d = dialect();
        let column = ColumnDescriptor::new("ID", ValueType::Integer, 9, 0);
        let tk = KeyFields {
            technical_key: Some("id".to_string()),
            ..KeyFields::default()
        };
        let pk = KeyFields {
            primary_key: Some("Id".to_string()),
            ..KeyFields::default()
        };
        let meta = ConnectionMeta::default();
        assert_eq!(d.field_definition(&meta, &column, &tk, false, false), "BIGSERIAL");
        assert_eq!(d.field_definition(&meta, &column, &pk, false, false), "BIGSERIAL");
    }

    #[test]
    fn test_string_definitions() {
        let s = |length| field(ColumnDescriptor::new("s", ValueType::String, length, -1));
        assert_eq!(s(0), "TEXT");
        assert_eq!(s(-1), "TEXT");
        assert_eq!(s(255), "VARCHAR(255)");
        assert_eq!(s(9999998), "VARCHAR(9999998)");
        assert_eq!(s(9999999), "TEXT");
    }

    #[test]
    fn test_temporal_binary_and_boolean() {
        assert_eq!(field(ColumnDescriptor::new("t", ValueType::Timestamp, -1, -1)), "TIMESTAMP");
        assert_eq!(field(ColumnDescriptor::new("d", ValueType::Date, -1, -1)), "TIMESTAMP");
        assert_eq!(field(ColumnDescriptor::new("b", ValueType::Binary, -1, -1)), "BLOB");
        assert_eq!(field(ColumnDescriptor::new("f", ValueType::Boolean, -1, -1)), "CHAR(1)");

        let mut meta = ConnectionMeta::default();
        meta.set_supports_boolean_data_type(true);
        let column = ColumnDescriptor::new("f", ValueType::Boolean, -1, -1);
        assert_eq!(
            dialect().field_definition(&meta, &column, &KeyFields::default(), false, false),
            "BOOLEAN"
        );
    }

    #[test]
    fn test_unknown_type_is_marked() {
        assert_eq!(field(ColumnDescriptor::new("x", ValueType::Serializable, -1, -1)), " UNKNOWN");
        assert_eq!(field(ColumnDescriptor::new("x", ValueType::InetAddress, -1, -1)), " UNKNOWN");
    }

    #[test]
    fn test_field_name_and_cr_flags() {
        let column = ColumnDescriptor::new("city", ValueType::String, 64, -1);
        let d = dialect();
        let meta = ConnectionMeta::default();
        let keys = KeyFields::default();
        assert_eq!(d.field_definition(&meta, &column, &keys, true, false), "city VARCHAR(64)");
        assert_eq!(d.field_definition(&meta, &column, &keys, true, true), "city VARCHAR(64)\n");
        assert_eq!(d.field_definition(&meta, &column, &keys, false, true), "VARCHAR(64)\n");
    }

    #[test]
    fn test_add_and_drop_column() {
        let d = dialect();
        let column = ColumnDescriptor::new("city", ValueType::String, 64, -1);
        assert_eq!(
            d.add_column_statement(&ConnectionMeta::default(), "users", &column, &KeyFields::default()),
            "ALTER TABLE users ADD city VARCHAR(64)"
        );
        assert_eq!(d.drop_column_statement("users", &column), "ALTER TABLE users DROP COLUMN city\n");
    }

    #[test]
    fn test_modify_column_statement() {
        let d = dialect();
        let column = ColumnDescriptor::new("price", ValueType::Number, 10, 2);
        let sql = d.modify_column_statement(
            &ConnectionMeta::default(),
            "orders",
            &column,
            &KeyFields::default(),
        );

        let expected = "ALTER TABLE orders ADD price_KTL NUMERIC(12, 2);\n\
                        UPDATE orders SET price_KTL=price;\n\
                        ALTER TABLE orders DROP COLUMN price\n;\n\
                        ALTER TABLE orders ADD price NUMERIC(12, 2);\n\
                        UPDATE orders SET price=price_KTL;\n\
                        ALTER TABLE orders DROP COLUMN price_KTL\n";
        assert_eq!(sql, expected);
        assert_eq!(sql.matches(';').count(), 5);
    }

    #[test]
    fn test_temp_column_name() {
        let d = dialect();
        assert_eq!(d.temp_column_name("price"), "price_KTL");

        let long = "a".repeat(40);
        let tmp = d.temp_column_name(&long);
        assert_eq!(tmp.len(), 34);
        assert!(tmp.ends_with("_KTL"));

        let quoted = format!("\"{}\"", "b".repeat(40));
        let tmp = d.temp_column_name(&quoted);
        assert!(tmp.starts_with('"') && tmp.ends_with('"'));
        assert_eq!(tmp.trim_matches('"').len(), 34);
        assert_eq!(tmp.trim_matches('"'), format!("{}_KTL", "b".repeat(30)));
    }

    #[test]
    fn test_quote_sql_string() {
        let d = dialect();
        assert_eq!(d.quote_sql_string("O'Brien"), "'O''Brien'");
        assert_eq!(d.quote_sql_string(""), "''");
    }

    #[test]
    fn test_quote_sql_string_line_breaks() {
        let d = dialect();
        assert_eq!(d.quote_sql_string("a\nb"), "'a'||chr(13)||'b'");
        assert_eq!(d.quote_sql_string("a\rb"), "'a'||chr(10)||'b'");
        assert_eq!(d.quote_sql_string("it's\r\n"), "'it''s'||chr(10)||''||chr(13)||''");
    }

    #[test]
    fn test_sequence_sql() {
        let d = dialect();
        assert_eq!(
            d.sql_sequence_exists("seq_orders"),
            "SELECT * FROM USER_SEQUENCES WHERE SEQUENCE_NAME = 'SEQ_ORDERS'"
        );
        assert_eq!(
            d.sql_sequence_exists("sales.seq_orders"),
            "SELECT * FROM ALL_SEQUENCES WHERE SEQUENCE_NAME = 'SEQ_ORDERS' AND SEQUENCE_OWNER = 'SALES'"
        );
        assert_eq!(d.sql_current_sequence_value("s"), "SELECT s.currval FROM DUAL");
        assert_eq!(d.sql_next_sequence_value("s"), "SELECT s.nextval FROM dual");
        assert_eq!(d.sql_list_of_sequences(), "SELECT SEQUENCE_NAME FROM all_sequences");
    }

    #[test]
    fn test_table_sql() {
        let d = dialect();
        let tables = vec!["a".to_string(), "b".to_string()];
        assert_eq!(
            d.sql_lock_tables(&tables),
            "LOCK TABLE a IN EXCLUSIVE MODE;\nLOCK TABLE b IN EXCLUSIVE MODE;\n"
        );
        assert_eq!(d.sql_unlock_tables(&tables), None);
        assert_eq!(d.drop_table_if_exists_statement("t"), "DROP TABLE IF EXISTS t");
        assert_eq!(d.sql_list_of_procedures(), "show tables");
        assert_eq!(d.sql_query_fields("t"), "SELECT * FROM t WHERE 1=0");
        assert_eq!(d.sql_table_exists("t"), "SELECT * FROM t WHERE 1=0");
        assert_eq!(d.sql_column_exists("c", "t"), "SELECT c FROM t WHERE 1=0");
        assert_eq!(d.limit_clause(10), " WHERE ROWNUM <= 10");
    }

    #[test]
    fn test_reserved_words() {
        let d = dialect();
        assert_eq!(d.reserved_words().len(), 118);
        assert!(d.is_reserved_word("select"));
        assert!(d.is_reserved_word("LEVEL"));
        assert!(!d.is_reserved_word("events"));
    }

    #[test]
    fn test_quote_field() {
        let d = dialect();
        assert_eq!(d.quote_field("events"), "events");
        assert_eq!(d.quote_field("table"), "\"table\"");
        assert_eq!(d.quote_field("my col"), "\"my col\"");
        assert_eq!(d.quote_field("1st"), "\"1st\"");
        assert_eq!(d.quote_field("\"Quoted\""), "\"Quoted\"");
        assert_eq!(d.quote_field("a\"b"), "\"a\"\"b\"");
        assert_eq!(d.quoted_schema_table(Some("sales"), "user"), "sales.\"user\"");
        assert_eq!(d.quoted_schema_table(Some(""), "orders"), "orders");
        assert_eq!(d.quoted_schema_table(None, "orders"), "orders");
    }

    #[test]
    fn test_detect() {
        let d = dialect();
        let hit = d.detect("jdbc:clickhouse://ch01:8123/events").unwrap();
        assert_eq!(hit.dialect_name, "clickhouse");
        assert!(hit.confidence >= 0.9);

        let hit = d.detect("Driver={ClickHouse ODBC Driver (Unicode)};Server=ch01").unwrap();
        assert!(hit.confidence >= 0.8);

        assert!(d.detect("postgresql://localhost/db").is_none());
    }
}
