use crate::executor::script::split_script;
use crate::executor::session::{QueryHandle, Row, Session, SessionError};
use log::{debug, error, info};
use odbc_api::{
    buffers::TextRowSet, Connection, ConnectionOptions, Cursor, Environment, ResultSetMetadata,
};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

const BATCH_SIZE: usize = 100;
const MAX_TEXT_LEN: usize = 4096;

pub struct ConnectionManager {
    environment: Arc<Environment>,
}

impl ConnectionManager {
    pub fn new() -> Result<Self, SessionError> {
        let environment = Environment::new()?;
        Ok(Self {
            environment: Arc::new(environment),
        })
    }

    pub fn connect(&self, connection_string: &str) -> Result<Connection<'_>, SessionError> {
        debug!(
            "Connecting to database with connection string length: {}",
            connection_string.len()
        );

        let connection = self
            .environment
            .connect_with_connection_string(connection_string, ConnectionOptions::default())
            .map_err(|e| {
                error!("Failed to connect to database: {}", e);
                SessionError::ConnectionFailed(e.to_string())
            })?;

        info!("Successfully connected to database");
        Ok(connection)
    }
}

/// `Session` over an ODBC connection.
///
/// Result sets are read completely when the query is opened and handed out
/// row by row afterwards, so no ODBC cursor outlives `open_query`.
pub struct OdbcSession<'a> {
    connection: Connection<'a>,
    open: HashMap<u64, VecDeque<Row>>,
    next_id: u64,
}

impl<'a> OdbcSession<'a> {
    pub fn new(connection: Connection<'a>) -> Self {
        Self {
            connection,
            open: HashMap::new(),
            next_id: 0,
        }
    }

    /// Execute every statement of a script, discarding result rows
    pub fn execute_script(&mut self, script: &str) -> Result<usize, SessionError> {
        let statements = split_script(script);
        debug!("Executing script with {} statements", statements.len());

        for stmt in &statements {
            debug!("Executing SQL statement: {}", stmt);

            let mut prepared = self
                .connection
                .prepare(stmt)
                .map_err(|e| SessionError::QueryFailed(e.to_string()))?;

            match prepared.execute(()) {
                Ok(Some(mut cursor)) => {
                    let mut buffer = TextRowSet::for_cursor(BATCH_SIZE, &mut cursor, Some(MAX_TEXT_LEN))?;
                    let mut row_set_cursor = cursor.bind_buffer(&mut buffer)?;
                    while row_set_cursor.fetch()?.is_some() {
                        // Consume results
                    }
                    debug!("Statement executed successfully with results");
                }
                Ok(None) => {
                    debug!("Statement executed successfully (no results)");
                }
                Err(e) => {
                    error!("Statement execution failed: {}", e);
                    return Err(SessionError::QueryFailed(e.to_string()));
                }
            }
        }

        Ok(statements.len())
    }

    fn fetch_all(&mut self, sql: &str) -> Result<Option<VecDeque<Row>>, SessionError> {
        let mut prepared = self
            .connection
            .prepare(sql)
            .map_err(|e| SessionError::QueryFailed(e.to_string()))?;

        let Some(mut cursor) = prepared
            .execute(())
            .map_err(|e| SessionError::QueryFailed(e.to_string()))?
        else {
            return Ok(None);
        };

        let columns: Arc<[String]> = cursor
            .column_names()?
            .collect::<Result<Vec<String>, _>>()?
            .into();

        let mut buffer = TextRowSet::for_cursor(BATCH_SIZE, &mut cursor, Some(MAX_TEXT_LEN))?;
        let mut row_set_cursor = cursor.bind_buffer(&mut buffer)?;
        let mut rows = VecDeque::new();

        while let Some(row_set) = row_set_cursor.fetch()? {
            for row_index in 0..row_set.num_rows() {
                let values = (0..row_set.num_cols())
                    .map(|col_index| {
                        row_set
                            .at(col_index, row_index)
                            .map(|v| String::from_utf8_lossy(v).to_string())
                    })
                    .collect();
                rows.push_back(Row::new(columns.clone(), values));
            }
        }

        debug!("Query returned {} rows", rows.len());
        Ok(Some(rows))
    }
}

impl Session for OdbcSession<'_> {
    fn open_query(&mut self, sql: &str) -> Result<Option<QueryHandle>, SessionError> {
        debug!("Opening query: {}", sql);

        match self.fetch_all(sql)? {
            Some(rows) => {
                let id = self.next_id;
                self.next_id += 1;
                self.open.insert(id, rows);
                Ok(Some(QueryHandle::new(id)))
            }
            None => Ok(None),
        }
    }

    fn next_row(&mut self, handle: &QueryHandle) -> Result<Option<Row>, SessionError> {
        self.open
            .get_mut(&handle.id())
            .map(VecDeque::pop_front)
            .ok_or(SessionError::UnknownHandle(handle.id()))
    }

    fn close_query(&mut self, handle: QueryHandle) -> Result<(), SessionError> {
        debug!("Closing query handle {}", handle.id());
        self.open
            .remove(&handle.id())
            .map(|_| ())
            .ok_or(SessionError::UnknownHandle(handle.id()))
    }
}
