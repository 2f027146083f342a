//! Result type alias for composition operations

use crate::error::RulestackError;

/// Standard Result type for composition operations
pub type Result<T> = std::result::Result<T, RulestackError>;
