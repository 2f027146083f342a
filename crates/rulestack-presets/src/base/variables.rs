//! Variable declaration and usage conventions

use rulestack_core::{NamedConfig, RuleSetting};
use serde_json::json;

pub fn variables() -> NamedConfig {
    NamedConfig::new("variables")
        .rule("no-shadow", RuleSetting::error())
        .rule("no-undef", RuleSetting::error())
        .rule(
            "no-unused-vars",
            RuleSetting::error_with([json!({
                "vars": "all",
                "args": "after-used",
                "ignoreRestSiblings": true
            })]),
        )
        .rule(
            "no-use-before-define",
            RuleSetting::error_with([json!({
                "functions": true,
                "classes": true,
                "variables": true
            })]),
        )
}
