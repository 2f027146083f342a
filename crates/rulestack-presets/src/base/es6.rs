//! Modern-syntax conventions

use rulestack_core::{NamedConfig, RuleSetting};

pub fn es6() -> NamedConfig {
    NamedConfig::new("es6")
        .rule("constructor-super", RuleSetting::error())
        .rule("no-class-assign", RuleSetting::error())
        .rule("no-const-assign", RuleSetting::error())
        .rule("no-dupe-class-members", RuleSetting::error())
        .rule("no-this-before-super", RuleSetting::error())
        .rule("no-useless-constructor", RuleSetting::error())
}
