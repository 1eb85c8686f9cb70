//! Security namespace configuration helpers.
//!
//! # Module Structure
//!
//! - `bean_ids` - Reserved names of the definitions the namespace registers
//! - `utils` - Idempotent registration of access, authentication and filter chain definitions
//! - `error` - Configuration errors

pub use error::{ConfigError, Result};

pub mod bean_ids;
pub mod error;
pub mod utils;
