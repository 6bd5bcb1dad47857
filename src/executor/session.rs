use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("ODBC error: {0}")]
    Odbc(#[from] odbc_api::Error),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Query execution failed: {0}")]
    QueryFailed(String),

    #[error("Unknown query handle: {0}")]
    UnknownHandle(u64),
}

/// Opaque reference to an open result set
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct QueryHandle(u64);

impl QueryHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// One result row with access by column name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    columns: Arc<[String]>,
    values: Vec<Option<String>>,
}

impl Row {
    pub fn new(columns: Arc<[String]>, values: Vec<Option<String>>) -> Self {
        Self { columns, values }
    }

    /// Value of `column` (case-insensitive), `default` when absent or NULL
    pub fn get_string<'a>(&'a self, column: &str, default: &'a str) -> &'a str {
        self.columns
            .iter()
            .position(|name| name.eq_ignore_ascii_case(column))
            .and_then(|index| self.values.get(index))
            .and_then(|value| value.as_deref())
            .unwrap_or(default)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}

/// Minimal database access used by dialect rules that inspect a live database
pub trait Session {
    /// Run a query; `None` when the statement produced no result set
    fn open_query(&mut self, sql: &str) -> Result<Option<QueryHandle>, SessionError>;

    /// Next row of an open result set, `None` once exhausted
    fn next_row(&mut self, handle: &QueryHandle) -> Result<Option<Row>, SessionError>;

    /// Release the result set behind `handle`
    fn close_query(&mut self, handle: QueryHandle) -> Result<(), SessionError>;
}
