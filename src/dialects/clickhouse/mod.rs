mod dialect;
mod reserved;

pub use dialect::{ClickhouseDialect, PORT_UNSPECIFIED};
pub use reserved::RESERVED_WORDS;
