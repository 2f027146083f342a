//! Correct-usage conventions

use rulestack_core::{NamedConfig, RuleSetting, Severity};
use serde_json::json;

pub fn best_practices() -> NamedConfig {
    NamedConfig::new("best-practices")
        .rule("default-param-last", RuleSetting::error())
        .rule(
            "dot-notation",
            RuleSetting::error_with([json!({"allowKeywords": true})]),
        )
        .rule(
            "no-empty-function",
            RuleSetting::error_with([json!({
                "allow": ["arrowFunctions", "functions", "methods"]
            })]),
        )
        .rule("no-implied-eval", RuleSetting::error())
        .rule("no-loop-func", RuleSetting::error())
        // Disabled by default, but the option payload is kept so dialect
        // layers inherit it when they re-enable the check
        .rule(
            "no-magic-numbers",
            RuleSetting::with_options(
                Severity::Off,
                [json!({
                    "ignore": [],
                    "ignoreArrayIndexes": true,
                    "enforceConst": true,
                    "detectObjects": false
                })],
            ),
        )
        .rule("no-new-func", RuleSetting::error())
        .rule("no-redeclare", RuleSetting::error())
        .rule("no-return-await", RuleSetting::error())
        .rule("no-throw-literal", RuleSetting::error())
        .rule(
            "no-unused-expressions",
            RuleSetting::error_with([json!({
                "allowShortCircuit": false,
                "allowTernary": false,
                "allowTaggedTemplates": false
            })]),
        )
        .rule("no-with", RuleSetting::error())
        .rule("require-await", RuleSetting::off())
}
