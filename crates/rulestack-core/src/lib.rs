//! Rulestack Core
//!
//! Composition engine for layered lint rule configurations. Named base
//! configs go in; dialect override layers suppress, replace, or extend their
//! entries; and the composer seals everything into one ordered sequence of
//! file-scoped blocks for the consuming analysis tool.
//!
//! The whole pipeline runs once at build time over immutable values: every
//! derivation returns a new value, every failure is fatal, and the output is
//! safe to share across threads without synchronization.

pub mod block;
pub mod catalog;
pub mod compose;
pub mod derive;
pub mod error;
pub mod overlay;
pub mod result;
pub mod setting;

// Re-export commonly used types
pub use block::{Block, BlockBuilder, LanguageOptions, PluginHandle};
pub use catalog::NamedConfig;
pub use compose::{ConfigurationOutput, compose};
pub use error::{ErrorKind, RulestackError};
pub use overlay::OverrideLayerBuilder;
pub use result::Result;
pub use setting::{RuleSetting, Severity};

/// Initialize the tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rulestack=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
