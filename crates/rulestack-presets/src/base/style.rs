//! Formatting and naming conventions

use rulestack_core::{NamedConfig, RuleSetting};
use serde_json::json;

pub fn style() -> NamedConfig {
    NamedConfig::new("style")
        .rule(
            "brace-style",
            RuleSetting::error_with([json!("1tbs"), json!({"allowSingleLine": true})]),
        )
        .rule(
            "camelcase",
            RuleSetting::error_with([json!({"properties": "never", "ignoreDestructuring": false})]),
        )
        .rule(
            "comma-dangle",
            RuleSetting::error_with([json!({
                "arrays": "always-multiline",
                "objects": "always-multiline",
                "imports": "always-multiline",
                "exports": "always-multiline",
                "functions": "always-multiline"
            })]),
        )
        .rule(
            "comma-spacing",
            RuleSetting::error_with([json!({"before": false, "after": true})]),
        )
        .rule("func-call-spacing", RuleSetting::error_with([json!("never")]))
        .rule(
            "indent",
            RuleSetting::error_with([json!(2), json!({"SwitchCase": 1})]),
        )
        .rule(
            "keyword-spacing",
            RuleSetting::error_with([json!({"before": true, "after": true})]),
        )
        .rule(
            "lines-between-class-members",
            RuleSetting::error_with([json!("always"), json!({"exceptAfterSingleLine": false})]),
        )
        .rule("no-array-constructor", RuleSetting::error())
        .rule("object-curly-spacing", RuleSetting::error_with([json!("always")]))
        .rule(
            "quotes",
            RuleSetting::error_with([json!("single"), json!({"avoidEscape": true})]),
        )
        .rule("semi", RuleSetting::error_with([json!("always")]))
        .rule("space-before-blocks", RuleSetting::error())
        .rule(
            "space-before-function-paren",
            RuleSetting::error_with([json!({
                "anonymous": "always",
                "named": "never",
                "asyncArrow": "always"
            })]),
        )
        .rule("space-infix-ops", RuleSetting::error())
}
