mod error;
mod settings;

pub mod forward;
pub mod server;
pub mod spool;

pub type Result<T> = std::result::Result<T, error::Error>;

pub use error::*;
pub use settings::*;
