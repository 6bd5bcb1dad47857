#![allow(dead_code)]

use assert_cmd::Command;
use clickddl_rs::executor::{QueryHandle, Row, Session, SessionError};
use std::collections::VecDeque;
use std::sync::Arc;

/// Returns a configured Command for `clickddl_rs`
pub fn clickddl_cmd() -> Command {
    Command::cargo_bin("clickddl_rs").expect("Binary not found")
}

/// In-memory `Session` serving one canned result set
pub struct MockSession {
    rows: Option<Vec<Vec<Option<String>>>>,
    columns: Arc<[String]>,
    pending: VecDeque<Row>,
    fail_after: Option<usize>,
    fail_open: bool,
    served: usize,
    pub queries: Vec<String>,
    pub opened: usize,
    pub closed: usize,
}

impl MockSession {
    /// Result set of USER_IND_COLUMNS-like rows holding the given column names
    pub fn with_index_columns(names: &[&str]) -> Self {
        let rows = names
            .iter()
            .map(|name| vec![Some("orders".to_string()), Some(name.to_string())])
            .collect();
        Self {
            rows: Some(rows),
            columns: vec!["TABLE_NAME".to_string(), "COLUMN_NAME".to_string()].into(),
            pending: VecDeque::new(),
            fail_after: None,
            fail_open: false,
            served: 0,
            queries: Vec::new(),
            opened: 0,
            closed: 0,
        }
    }

    /// Query that produces no result set at all
    pub fn without_result() -> Self {
        Self {
            rows: None,
            ..Self::with_index_columns(&[])
        }
    }

    pub fn failing_open() -> Self {
        Self {
            fail_open: true,
            ..Self::with_index_columns(&[])
        }
    }

    /// Fails on the fetch following `rows` served rows
    pub fn failing_after(names: &[&str], rows: usize) -> Self {
        Self {
            fail_after: Some(rows),
            ..Self::with_index_columns(names)
        }
    }
}

impl Session for MockSession {
    fn open_query(&mut self, sql: &str) -> Result<Option<QueryHandle>, SessionError> {
        self.queries.push(sql.to_string());
        if self.fail_open {
            return Err(SessionError::QueryFailed("table USER_IND_COLUMNS does not exist".to_string()));
        }
        match &self.rows {
            Some(rows) => {
                self.pending = rows
                    .iter()
                    .map(|values| Row::new(self.columns.clone(), values.clone()))
                    .collect();
                self.opened += 1;
                Ok(Some(QueryHandle::new(7)))
            }
            None => Ok(None),
        }
    }

    fn next_row(&mut self, handle: &QueryHandle) -> Result<Option<Row>, SessionError> {
        if handle.id() != 7 {
            return Err(SessionError::UnknownHandle(handle.id()));
        }
        if self.fail_after == Some(self.served) {
            return Err(SessionError::QueryFailed("connection reset".to_string()));
        }
        self.served += 1;
        Ok(self.pending.pop_front())
    }

    fn close_query(&mut self, handle: QueryHandle) -> Result<(), SessionError> {
        if handle.id() != 7 {
            return Err(SessionError::UnknownHandle(handle.id()));
        }
        self.pending.clear();
        self.closed += 1;
        Ok(())
    }
}
