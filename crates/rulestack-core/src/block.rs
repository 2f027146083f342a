//! Configuration blocks: named, optionally file-scoped rule bundles
//!
//! A block is the unit of composition. Its name is diagnostic only; its
//! `files` patterns decide which paths it applies to; its rule and settings
//! maps are what the consuming tool reads. Blocks are immutable once built,
//! and precedence between blocks is purely positional (see `compose`).

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::setting::RuleSetting;

/// Opaque handle naming a plugin or parser implementation
///
/// The engine never dereferences a handle; it only carries the namespace
/// string the consuming tool resolves against its own registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct PluginHandle(String);

impl PluginHandle {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PluginHandle {
    fn from(handle: &str) -> Self {
        Self::new(handle)
    }
}

/// Language dialect options carried by a block
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LanguageOptions {
    /// Parser handle, resolved by the consuming tool
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser: Option<PluginHandle>,

    /// Opaque parser options payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser_options: Option<Value>,

    /// Identifiers the dialect treats as ambient globals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub globals: Option<Vec<String>>,
}

impl LanguageOptions {
    fn is_unset(&self) -> bool {
        self.parser.is_none() && self.parser_options.is_none() && self.globals.is_none()
    }
}

/// One composed configuration block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    files: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    plugins: Option<BTreeMap<String, PluginHandle>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    language_options: Option<LanguageOptions>,

    #[serde(default)]
    rules: BTreeMap<String, RuleSetting>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    settings: Option<BTreeMap<String, Value>>,
}

impl Block {
    /// The block's diagnostic name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The filematch patterns; `None` means the block applies to all files
    pub fn files(&self) -> Option<&[String]> {
        self.files.as_deref()
    }

    /// Plugin handles keyed by namespace
    pub fn plugins(&self) -> Option<&BTreeMap<String, PluginHandle>> {
        self.plugins.as_ref()
    }

    /// Language dialect options
    pub fn language_options(&self) -> Option<&LanguageOptions> {
        self.language_options.as_ref()
    }

    /// The rule entries
    pub fn rules(&self) -> &BTreeMap<String, RuleSetting> {
        &self.rules
    }

    /// Look up one rule entry
    pub fn rule(&self, id: &str) -> Option<&RuleSetting> {
        self.rules.get(id)
    }

    /// The shared settings map
    pub fn settings(&self) -> Option<&BTreeMap<String, Value>> {
        self.settings.as_ref()
    }

    /// Whether this block applies to the given path
    ///
    /// A pattern without `/` is matched against the path's basename, a
    /// pattern with `/` against the whole relative path. Patterns are
    /// validated during `compose`, so a pattern that fails to compile here
    /// is only logged and treated as non-matching.
    pub fn matches(&self, path: &str) -> bool {
        let Some(patterns) = &self.files else {
            return true;
        };
        patterns
            .iter()
            .any(|pattern| pattern_matches(pattern, path))
    }
}

fn pattern_matches(pattern: &str, path: &str) -> bool {
    let candidate = if pattern.contains('/') {
        path
    } else {
        path.rsplit('/').next().unwrap_or(path)
    };
    match glob::Pattern::new(pattern) {
        Ok(compiled) => compiled.matches(candidate),
        Err(err) => {
            tracing::warn!("Skipping unmatchable file pattern '{pattern}': {err}");
            false
        }
    }
}

/// Builder for plain configuration blocks
#[derive(Debug, Clone)]
pub struct BlockBuilder {
    name: String,
    files: Option<Vec<String>>,
    plugins: BTreeMap<String, PluginHandle>,
    language_options: LanguageOptions,
    rules: BTreeMap<String, RuleSetting>,
    settings: BTreeMap<String, Value>,
}

impl BlockBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: None,
            plugins: BTreeMap::new(),
            language_options: LanguageOptions::default(),
            rules: BTreeMap::new(),
            settings: BTreeMap::new(),
        }
    }

    /// Restrict the block to paths matching the given glob patterns
    pub fn files<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files = Some(patterns.into_iter().map(Into::into).collect());
        self
    }

    /// Register a plugin handle under its namespace
    pub fn plugin(mut self, namespace: impl Into<String>, handle: PluginHandle) -> Self {
        self.plugins.insert(namespace.into(), handle);
        self
    }

    /// Set the dialect parser handle
    pub fn parser(mut self, handle: PluginHandle) -> Self {
        self.language_options.parser = Some(handle);
        self
    }

    /// Set the opaque parser options payload
    pub fn parser_options(mut self, options: Value) -> Self {
        self.language_options.parser_options = Some(options);
        self
    }

    /// Declare an ambient global identifier
    pub fn global(mut self, name: impl Into<String>) -> Self {
        self.language_options
            .globals
            .get_or_insert_with(Vec::new)
            .push(name.into());
        self
    }

    /// Set one rule entry
    pub fn rule(mut self, id: impl Into<String>, setting: RuleSetting) -> Self {
        self.rules.insert(id.into(), setting);
        self
    }

    /// Set one shared settings entry
    pub fn setting(mut self, key: impl Into<String>, value: Value) -> Self {
        self.settings.insert(key.into(), value);
        self
    }

    pub fn build(self) -> Block {
        Block {
            name: self.name,
            files: self.files,
            plugins: if self.plugins.is_empty() {
                None
            } else {
                Some(self.plugins)
            },
            language_options: if self.language_options.is_unset() {
                None
            } else {
                Some(self.language_options)
            },
            rules: self.rules,
            settings: if self.settings.is_empty() {
                None
            } else {
                Some(self.settings)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unscoped_block_matches_everything() {
        let block = BlockBuilder::new("base")
            .rule("x", RuleSetting::warn())
            .build();
        assert!(block.matches("foo.txt"));
        assert!(block.matches("deep/nested/foo.special"));
    }

    #[test]
    fn test_basename_matching_for_flat_patterns() {
        let block = BlockBuilder::new("scoped")
            .files(["*.special"])
            .rule("x", RuleSetting::error())
            .build();
        assert!(block.matches("foo.special"));
        assert!(block.matches("deep/nested/foo.special"));
        assert!(!block.matches("foo.txt"));
    }

    #[test]
    fn test_path_matching_for_slash_patterns() {
        let block = BlockBuilder::new("scoped")
            .files(["src/**/*.ts"])
            .build();
        assert!(block.matches("src/lib/mod.ts"));
        assert!(!block.matches("tests/lib/mod.ts"));
    }

    #[test]
    fn test_optional_fields_omitted_from_serialization() {
        let block = BlockBuilder::new("minimal")
            .rule("semi", RuleSetting::error())
            .build();
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(value, json!({"name": "minimal", "rules": {"semi": "error"}}));
    }

    #[test]
    fn test_full_block_serialization_shape() {
        let block = BlockBuilder::new("dialect")
            .files(["*.ts"])
            .plugin("ns", PluginHandle::new("ns/plugin"))
            .parser(PluginHandle::new("ns/parser"))
            .parser_options(json!({"projectService": true}))
            .rule("quotes", RuleSetting::error_with([json!("single")]))
            .setting("resolver", json!({"extensions": [".ts"]}))
            .build();
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "dialect",
                "files": ["*.ts"],
                "plugins": {"ns": "ns/plugin"},
                "languageOptions": {
                    "parser": "ns/parser",
                    "parserOptions": {"projectService": true}
                },
                "rules": {"quotes": ["error", "single"]},
                "settings": {"resolver": {"extensions": [".ts"]}}
            })
        );
    }

    #[test]
    fn test_block_round_trip() {
        let block = BlockBuilder::new("dialect")
            .files(["*.ts", "*.tsx"])
            .global("describe")
            .rule("x", RuleSetting::warn_with([json!({"depth": 3})]))
            .build();
        let text = serde_json::to_string(&block).unwrap();
        let back: Block = serde_json::from_str(&text).unwrap();
        assert_eq!(back, block);
    }
}
