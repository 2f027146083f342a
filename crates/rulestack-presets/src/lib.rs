//! Rulestack Presets
//!
//! The data side of the engine: named base configurations (catalog data the
//! composer treats as opaque) and the dialect override layers derived from
//! them. `rulestack-core` supplies the composition semantics; this crate
//! supplies concrete layered configurations built with it.

pub mod base;
pub mod typescript;

use rulestack_core::{Block, ConfigurationOutput, Result, compose};

/// The full TypeScript configuration: base configs lowered to unscoped
/// blocks, followed by the TypeScript override layer
pub fn typescript_config() -> Result<ConfigurationOutput> {
    let mut blocks: Vec<Block> = vec![
        base::best_practices().to_block(),
        base::errors().to_block(),
        base::es6().to_block(),
        base::imports().to_block(),
        base::style().to_block(),
        base::variables().to_block(),
    ];
    blocks.extend(typescript::blocks()?);
    compose(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_composes() {
        let output = typescript_config().unwrap();
        assert_eq!(output.len(), 9);
        // base blocks lead, layer blocks trail
        assert_eq!(output.blocks()[0].name(), "best-practices");
        assert_eq!(output.blocks()[6].name(), "rulestack/typescript");
    }
}
