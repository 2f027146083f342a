//! Named base configurations
//!
//! A [`NamedConfig`] is an immutable mapping from rule identifier to
//! [`RuleSetting`], plus optional shared settings and a globals list. Base
//! configs are built once from static data and threaded explicitly through
//! every derivation call; there is no process-wide registry.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::block::{Block, BlockBuilder};
use crate::error::RulestackError;
use crate::result::Result;
use crate::setting::RuleSetting;

/// An immutable, named base configuration
///
/// Lookups against a base are build-time operations: a missing rule or
/// settings key means a derivation holds a stale reference, so failures
/// abort composition rather than degrade to a default.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedConfig {
    name: String,
    rules: BTreeMap<String, RuleSetting>,
    settings: BTreeMap<String, Value>,
    globals: Vec<String>,
}

impl NamedConfig {
    /// Start a new base config with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: BTreeMap::new(),
            settings: BTreeMap::new(),
            globals: Vec::new(),
        }
    }

    /// Add a rule entry (consuming builder style; configs are read-only
    /// once handed out)
    pub fn rule(mut self, id: impl Into<String>, setting: RuleSetting) -> Self {
        self.rules.insert(id.into(), setting);
        self
    }

    /// Add a shared settings entry
    pub fn setting(mut self, key: impl Into<String>, value: Value) -> Self {
        self.settings.insert(key.into(), value);
        self
    }

    /// Add a recognized global identifier
    pub fn global(mut self, name: impl Into<String>) -> Self {
        self.globals.push(name.into());
        self
    }

    /// The config's name (used in diagnostics and lookup errors)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Iterate over the rule entries in identifier order
    pub fn rules(&self) -> impl Iterator<Item = (&str, &RuleSetting)> {
        self.rules.iter().map(|(id, setting)| (id.as_str(), setting))
    }

    /// Number of rule entries
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the config defines no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Look up a rule entry, `None` when absent
    pub fn get(&self, id: &str) -> Option<&RuleSetting> {
        self.rules.get(id)
    }

    /// Look up a rule entry, failing when absent
    pub fn lookup(&self, id: &str) -> Result<&RuleSetting> {
        self.rules
            .get(id)
            .ok_or_else(|| RulestackError::rule_not_found(&self.name, id))
    }

    /// Look up a shared settings value, `None` when absent
    pub fn get_setting(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }

    /// Look up a shared settings value, failing when absent
    pub fn settings_for(&self, key: &str) -> Result<&Value> {
        self.settings
            .get(key)
            .ok_or_else(|| RulestackError::setting_not_found(&self.name, key))
    }

    /// The recognized global identifiers
    pub fn globals(&self) -> &[String] {
        &self.globals
    }

    /// Lower this base config into an unscoped block so it can lead a
    /// composed sequence
    pub fn to_block(&self) -> Block {
        let mut builder = BlockBuilder::new(&self.name);
        for (id, setting) in &self.rules {
            builder = builder.rule(id, setting.clone());
        }
        for (key, value) in &self.settings {
            builder = builder.setting(key, value.clone());
        }
        for global in &self.globals {
            builder = builder.global(global);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn style() -> NamedConfig {
        NamedConfig::new("style")
            .rule("quotes", RuleSetting::error_with([json!("single")]))
            .rule("semi", RuleSetting::error())
            .setting("resolver", json!({"extensions": [".js"]}))
    }

    #[test]
    fn test_lookup_present() {
        let config = style();
        let setting = config.lookup("semi").unwrap();
        assert_eq!(*setting, RuleSetting::error());
    }

    #[test]
    fn test_lookup_missing_is_fatal() {
        let config = style();
        let err = config.lookup("indent").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lookup);
        assert_eq!(err.to_string(), "Rule 'indent' not found in config 'style'");
    }

    #[test]
    fn test_settings_lookup() {
        let config = style();
        assert!(config.settings_for("resolver").is_ok());
        assert!(config.settings_for("missing").is_err());
        assert!(config.get_setting("missing").is_none());
    }

    #[test]
    fn test_to_block_is_unscoped() {
        let block = style().to_block();
        assert_eq!(block.name(), "style");
        assert!(block.files().is_none());
        assert!(block.matches("any/path/at/all.txt"));
        assert_eq!(block.rule("semi"), Some(&RuleSetting::error()));
        assert!(block.settings().is_some());
    }
}
