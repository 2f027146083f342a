//! Possible-error detection

use rulestack_core::{NamedConfig, RuleSetting, Severity};
use serde_json::json;

pub fn errors() -> NamedConfig {
    NamedConfig::new("errors")
        .rule(
            "getter-return",
            RuleSetting::error_with([json!({"allowImplicit": true})]),
        )
        .rule("no-dupe-args", RuleSetting::error())
        .rule("no-dupe-keys", RuleSetting::error())
        .rule(
            "no-extra-parens",
            RuleSetting::with_options(
                Severity::Off,
                [
                    json!("all"),
                    json!({
                        "conditionalAssign": true,
                        "nestedBinaryExpressions": false,
                        "returnAssign": false,
                        "ignoreJSX": "all",
                        "enforceForArrowConditionals": false
                    }),
                ],
            ),
        )
        .rule("no-extra-semi", RuleSetting::error())
        .rule("no-func-assign", RuleSetting::error())
        .rule("no-import-assign", RuleSetting::error())
        .rule("no-loss-of-precision", RuleSetting::error())
        .rule("no-new-native-nonconstructor", RuleSetting::error())
        .rule("no-obj-calls", RuleSetting::error())
        .rule("no-setter-return", RuleSetting::error())
        .rule("no-unreachable", RuleSetting::error())
        .rule("no-unsafe-negation", RuleSetting::error())
        .rule(
            "valid-typeof",
            RuleSetting::error_with([json!({"requireStringLiterals": true})]),
        )
}
