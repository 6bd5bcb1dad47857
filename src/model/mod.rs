pub mod column;
pub mod config;
pub mod connection;

pub use column::{ColumnDescriptor, KeyFields, ValueType};
pub use config::{Config, ConfigError, ConfigOverlay, Messages};
pub use connection::{AccessType, Attributes, ConnectionMeta};
