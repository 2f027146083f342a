//! Override layer construction
//!
//! An override layer is a block that adapts a set of base rules to a
//! language dialect: each overridden rule gets an `off` entry suppressing
//! the base id plus a namespaced replacement entry carrying the base
//! setting (or a derivation of it). Emitting only one of the pair is a
//! defect — a missing `off` double-reports, a missing replacement silently
//! stops checking — so the builder always writes both.

use serde_json::Value;

use crate::block::{Block, BlockBuilder, PluginHandle};
use crate::catalog::NamedConfig;
use crate::result::Result;
use crate::setting::RuleSetting;

/// Builder for dialect override blocks
///
/// Base configs are passed explicitly to each overriding call; the builder
/// holds no registry. Lookup failures mean a stale rule reference and abort
/// the build immediately.
#[derive(Debug, Clone)]
pub struct OverrideLayerBuilder {
    namespace: String,
    inner: BlockBuilder,
}

impl OverrideLayerBuilder {
    /// Start an override layer with a block name and a namespace prefix for
    /// replacement rules
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            inner: BlockBuilder::new(name),
        }
    }

    /// Restrict the layer to paths matching the given glob patterns
    pub fn files<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner = self.inner.files(patterns);
        self
    }

    /// Register a plugin handle under its namespace
    pub fn plugin(mut self, namespace: impl Into<String>, handle: PluginHandle) -> Self {
        self.inner = self.inner.plugin(namespace, handle);
        self
    }

    /// Set the dialect parser handle
    pub fn parser(mut self, handle: PluginHandle) -> Self {
        self.inner = self.inner.parser(handle);
        self
    }

    /// Set the opaque parser options payload
    pub fn parser_options(mut self, options: Value) -> Self {
        self.inner = self.inner.parser_options(options);
        self
    }

    /// Set one shared settings entry
    pub fn setting(mut self, key: impl Into<String>, value: Value) -> Self {
        self.inner = self.inner.setting(key, value);
        self
    }

    /// Set one rule entry verbatim, outside the suppress/replace pattern
    ///
    /// For amending a rule in place (same id, re-derived options) rather
    /// than replacing it under the namespace.
    pub fn rule(mut self, id: impl Into<String>, setting: RuleSetting) -> Self {
        self.inner = self.inner.rule(id, setting);
        self
    }

    /// Replace a base rule with its namespaced equivalent
    ///
    /// Emits `{id: off}` plus `{namespace/id: <base setting>}`; severity and
    /// payload are preserved.
    pub fn replace(self, base: &NamedConfig, id: &str) -> Result<Self> {
        let setting = base.lookup(id)?.clone();
        Ok(self.suppress_and_install(id, id, setting))
    }

    /// Replace a base rule under a different replacement name
    pub fn replace_as(self, base: &NamedConfig, id: &str, replacement: &str) -> Result<Self> {
        let setting = base.lookup(id)?.clone();
        Ok(self.suppress_and_install(id, replacement, setting))
    }

    /// Replace a base rule, deriving the replacement setting from the base
    ///
    /// The transform may only reshape the payload (see
    /// [`RuleSetting::map_options`]); deriving an unrelated setting defeats
    /// the point of an override layer.
    pub fn replace_with<F>(self, base: &NamedConfig, id: &str, derive: F) -> Result<Self>
    where
        F: FnOnce(&RuleSetting) -> Result<RuleSetting>,
    {
        self.replace_as_with(base, id, id, derive)
    }

    /// Replace a base rule under a different name, deriving the setting
    pub fn replace_as_with<F>(
        self,
        base: &NamedConfig,
        id: &str,
        replacement: &str,
        derive: F,
    ) -> Result<Self>
    where
        F: FnOnce(&RuleSetting) -> Result<RuleSetting>,
    {
        let derived = derive(base.lookup(id)?)?;
        Ok(self.suppress_and_install(id, replacement, derived))
    }

    /// Suppress a base rule without installing a replacement
    ///
    /// For rules the dialect makes redundant (covered by its compiler or a
    /// wider replacement installed separately). The id is still looked up in
    /// the given base so a stale reference fails the build.
    pub fn disable(mut self, base: &NamedConfig, id: &str) -> Result<Self> {
        base.lookup(id)?;
        self.inner = self.inner.rule(id, RuleSetting::off());
        Ok(self)
    }

    /// Install a new namespaced rule that has no single base equivalent
    ///
    /// The call site is responsible for defaults that keep the rule's
    /// behavior a superset-compatible match of whatever base rules it
    /// subsumes.
    pub fn install(mut self, id: &str, setting: RuleSetting) -> Self {
        let namespaced = self.namespaced(id);
        self.inner = self.inner.rule(namespaced, setting);
        self
    }

    pub fn build(self) -> Block {
        self.inner.build()
    }

    fn namespaced(&self, id: &str) -> String {
        format!("{}/{}", self.namespace, id)
    }

    fn suppress_and_install(
        mut self,
        original: &str,
        replacement: &str,
        setting: RuleSetting,
    ) -> Self {
        let namespaced = self.namespaced(replacement);
        tracing::debug!("Overriding '{original}' with '{namespaced}'");
        self.inner = self.inner.rule(original, RuleSetting::off());
        self.inner = self.inner.rule(namespaced, setting);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::setting::Severity;
    use serde_json::json;

    fn style() -> NamedConfig {
        NamedConfig::new("style")
            .rule(
                "quotes",
                RuleSetting::error_with([json!("single")]),
            )
            .rule("semi", RuleSetting::warn())
            .rule("camelcase", RuleSetting::error())
    }

    #[test]
    fn test_replace_emits_suppression_pair() {
        let block = OverrideLayerBuilder::new("layer", "ns")
            .replace(&style(), "quotes")
            .unwrap()
            .build();

        assert_eq!(block.rule("quotes"), Some(&RuleSetting::off()));
        assert_eq!(
            block.rule("ns/quotes"),
            Some(&RuleSetting::error_with([json!("single")]))
        );
        assert_eq!(block.rules().len(), 2);
    }

    #[test]
    fn test_replace_preserves_severity() {
        let block = OverrideLayerBuilder::new("layer", "ns")
            .replace(&style(), "semi")
            .unwrap()
            .build();
        assert_eq!(block.rule("ns/semi").unwrap().severity(), Severity::Warn);
    }

    #[test]
    fn test_replace_missing_rule_aborts() {
        let err = OverrideLayerBuilder::new("layer", "ns")
            .replace(&style(), "indent")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lookup);
    }

    #[test]
    fn test_replace_as_renames_replacement_only() {
        let block = OverrideLayerBuilder::new("layer", "ns")
            .replace_as(&style(), "camelcase", "naming-convention")
            .unwrap()
            .build();
        assert_eq!(block.rule("camelcase"), Some(&RuleSetting::off()));
        assert!(block.rule("ns/naming-convention").is_some());
        assert!(block.rule("ns/camelcase").is_none());
    }

    #[test]
    fn test_replace_with_derives_payload() {
        let block = OverrideLayerBuilder::new("layer", "ns")
            .replace_with(&style(), "quotes", |setting| {
                Ok(setting.with_added_options([json!({"avoidEscape": true})]))
            })
            .unwrap()
            .build();
        let replacement = block.rule("ns/quotes").unwrap();
        assert_eq!(replacement.severity(), Severity::Error);
        assert_eq!(replacement.options().unwrap().len(), 2);
    }

    #[test]
    fn test_disable_checks_stale_references() {
        let layer = OverrideLayerBuilder::new("layer", "ns");
        let err = layer.clone().disable(&style(), "no-such-rule").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lookup);

        let block = layer.disable(&style(), "semi").unwrap().build();
        assert_eq!(block.rule("semi"), Some(&RuleSetting::off()));
    }

    #[test]
    fn test_install_prefixes_namespace() {
        let block = OverrideLayerBuilder::new("layer", "ns")
            .install("naming-convention", RuleSetting::error())
            .build();
        assert_eq!(block.rule("ns/naming-convention"), Some(&RuleSetting::error()));
    }
}
