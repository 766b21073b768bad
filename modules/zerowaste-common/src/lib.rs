pub mod config;
pub mod error;
pub mod format;
pub mod mapping;
pub mod types;

pub use config::Config;
pub use error::{Result, ZeroWasteError};
pub use format::*;
pub use mapping::*;
pub use types::*;
