mod error;
pub use error::Error;

pub mod flags;
pub use flags::ExecutionFlags;

pub mod schema;

pub mod stmt;

pub type Result<T, E = Error> = std::result::Result<T, E>;
