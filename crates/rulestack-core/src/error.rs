//! Error types and handling for configuration composition

use thiserror::Error;

/// Main error type for configuration composition
///
/// Every variant is a build-time failure: composition is deterministic, so
/// none of these are retried or recovered from. A failed composition aborts
/// and the input must be fixed.
#[derive(Debug, Error)]
pub enum RulestackError {
    /// A derivation referenced a rule absent from its base config
    #[error("Rule '{id}' not found in config '{config}'")]
    RuleNotFound { config: String, id: String },

    /// A derivation referenced a settings key absent from its base config
    #[error("Setting '{key}' not found in config '{config}'")]
    SettingNotFound { config: String, key: String },

    /// Two blocks in one composition share a name
    #[error("Duplicate block name '{name}'")]
    DuplicateBlockName { name: String },

    /// A block carries a filematch with zero patterns (ambiguous: matches
    /// nothing vs. matches everything, so it is rejected rather than guessed)
    #[error("Block '{block}' has a filematch with zero patterns")]
    EmptyFilematch { block: String },

    /// A filematch pattern does not compile as a glob
    #[error("Invalid file pattern '{pattern}' in block '{block}': {source}")]
    InvalidPattern {
        block: String,
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// A base payload did not have the shape a derivation call site requires
    #[error("Derivation error for '{context}': {message}")]
    Derivation { context: String, message: String },

    /// Serialization or deserialization of a composed output failed
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Error kind enumeration for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lookup,
    Compose,
    Derivation,
    Serialization,
}

impl RulestackError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            RulestackError::RuleNotFound { .. } => ErrorKind::Lookup,
            RulestackError::SettingNotFound { .. } => ErrorKind::Lookup,
            RulestackError::DuplicateBlockName { .. } => ErrorKind::Compose,
            RulestackError::EmptyFilematch { .. } => ErrorKind::Compose,
            RulestackError::InvalidPattern { .. } => ErrorKind::Compose,
            RulestackError::Derivation { .. } => ErrorKind::Derivation,
            RulestackError::Serialization { .. } => ErrorKind::Serialization,
        }
    }

    /// Create a rule lookup error
    pub fn rule_not_found(config: impl Into<String>, id: impl Into<String>) -> Self {
        Self::RuleNotFound {
            config: config.into(),
            id: id.into(),
        }
    }

    /// Create a settings lookup error
    pub fn setting_not_found(config: impl Into<String>, key: impl Into<String>) -> Self {
        Self::SettingNotFound {
            config: config.into(),
            key: key.into(),
        }
    }

    /// Create a duplicate block name error
    pub fn duplicate_block_name(name: impl Into<String>) -> Self {
        Self::DuplicateBlockName { name: name.into() }
    }

    /// Create an empty filematch error
    pub fn empty_filematch(block: impl Into<String>) -> Self {
        Self::EmptyFilematch {
            block: block.into(),
        }
    }

    /// Create a derivation error
    pub fn derivation(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Derivation {
            context: context.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            RulestackError::rule_not_found("style", "quotes").kind(),
            ErrorKind::Lookup
        );
        assert_eq!(
            RulestackError::duplicate_block_name("base").kind(),
            ErrorKind::Compose
        );
        assert_eq!(
            RulestackError::derivation("comma-dangle", "expected object").kind(),
            ErrorKind::Derivation
        );
    }

    #[test]
    fn test_error_messages() {
        let err = RulestackError::rule_not_found("style", "quotes");
        assert_eq!(err.to_string(), "Rule 'quotes' not found in config 'style'");

        let err = RulestackError::empty_filematch("overrides");
        assert_eq!(
            err.to_string(),
            "Block 'overrides' has a filematch with zero patterns"
        );
    }
}
