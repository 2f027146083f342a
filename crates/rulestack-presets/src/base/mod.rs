//! Named base configurations
//!
//! Each function returns a fresh immutable [`NamedConfig`]; callers thread
//! the value through whatever derivations they need. The entries here are
//! catalog data: severities and option payloads the engine carries around
//! without interpreting.
//!
//! [`NamedConfig`]: rulestack_core::NamedConfig

mod best_practices;
mod errors;
mod es6;
mod imports;
mod style;
mod variables;

pub use best_practices::best_practices;
pub use errors::errors;
pub use es6::es6;
pub use imports::imports;
pub use style::style;
pub use variables::variables;
