//! Module import conventions and resolver settings

use rulestack_core::{NamedConfig, RuleSetting};
use serde_json::json;

pub fn imports() -> NamedConfig {
    NamedConfig::new("imports")
        .rule(
            "import/extensions",
            RuleSetting::error_with([
                json!("ignorePackages"),
                json!({"js": "never", "mjs": "never", "jsx": "never"}),
            ]),
        )
        .rule("import/named", RuleSetting::error())
        .rule(
            "import/no-extraneous-dependencies",
            RuleSetting::error_with([json!({
                "devDependencies": [
                    "test/**",
                    "tests/**",
                    "spec/**",
                    "**/__tests__/**",
                    "**/__mocks__/**",
                    "test.{js,jsx}",
                    "test-*.{js,jsx}",
                    "**/*{.,_}{test,spec}.{js,jsx}",
                    "**/jest.config.js",
                    "**/webpack.config.js",
                    "**/rollup.config.js"
                ],
                "optionalDependencies": false
            })]),
        )
        .rule("import/no-named-as-default-member", RuleSetting::error())
        .setting(
            "import/resolver",
            json!({"node": {"extensions": [".mjs", ".js", ".json"]}}),
        )
        .setting("import/extensions", json!([".js", ".mjs", ".jsx"]))
}
