pub mod connection;
pub mod script;
pub mod session;

pub use connection::{ConnectionManager, OdbcSession};
pub use script::split_script;
pub use session::{QueryHandle, Row, Session, SessionError};
