//! Block sequence composition and consumer-side shadow resolution
//!
//! `compose` validates structural invariants and returns the block sequence
//! unchanged: shadow resolution happens at file-evaluation time in the
//! consuming tool, and order in the sequence is the whole precedence
//! contract. The `effective_*` helpers implement that consumer-side
//! resolution so the contract is executable here.

use std::collections::{BTreeMap, HashSet};

use schemars::JsonSchema;
use serde::Serialize;
use serde_json::Value;

use crate::block::Block;
use crate::error::RulestackError;
use crate::result::Result;
use crate::setting::RuleSetting;

/// Validate an ordered block sequence and seal it as the final output
///
/// Fails with `DuplicateBlockName` when two blocks share a name, with
/// `EmptyFilematch` when a filematch is present but has zero patterns, and
/// with `InvalidPattern` when a filematch glob does not compile. The
/// sequence order is returned untouched.
pub fn compose(blocks: Vec<Block>) -> Result<ConfigurationOutput> {
    let mut seen = HashSet::new();
    for block in &blocks {
        if !seen.insert(block.name().to_string()) {
            return Err(RulestackError::duplicate_block_name(block.name()));
        }
        if let Some(patterns) = block.files() {
            if patterns.is_empty() {
                return Err(RulestackError::empty_filematch(block.name()));
            }
            for pattern in patterns {
                glob::Pattern::new(pattern).map_err(|source| RulestackError::InvalidPattern {
                    block: block.name().to_string(),
                    pattern: pattern.clone(),
                    source,
                })?;
            }
        }
    }
    tracing::debug!("Composed {} configuration blocks", blocks.len());
    Ok(ConfigurationOutput { blocks })
}

/// The final ordered block sequence, the engine's sole output artifact
///
/// Serializes transparently as a JSON array of blocks. Within the sequence,
/// the effective setting for a file and rule id comes from the last block
/// that both matches the file and defines the id; blocks never mutate one
/// another.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct ConfigurationOutput {
    blocks: Vec<Block>,
}

impl ConfigurationOutput {
    /// The composed blocks, in precedence order
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of blocks
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the output holds no blocks
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The effective setting for a rule at a path: the last matching block
    /// that defines the id wins
    pub fn effective_setting(&self, path: &str, rule_id: &str) -> Option<&RuleSetting> {
        self.blocks
            .iter()
            .rev()
            .filter(|block| block.matches(path))
            .find_map(|block| block.rule(rule_id))
    }

    /// Shared settings for a path, shallow-merged across matching blocks in
    /// sequence order (later blocks win per key, values replaced wholesale)
    pub fn effective_settings(&self, path: &str) -> BTreeMap<String, Value> {
        let mut merged = BTreeMap::new();
        for block in self.blocks.iter().filter(|block| block.matches(path)) {
            if let Some(settings) = block.settings() {
                for (key, value) in settings {
                    merged.insert(key.clone(), value.clone());
                }
            }
        }
        merged
    }

    /// Serialize the output as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.blocks)?)
    }

    /// Parse a serialized output, re-validating the composition invariants
    pub fn from_json(text: &str) -> Result<Self> {
        let blocks: Vec<Block> = serde_json::from_str(text)?;
        compose(blocks)
    }
}

impl<'a> IntoIterator for &'a ConfigurationOutput {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
