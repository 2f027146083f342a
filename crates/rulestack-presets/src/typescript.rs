//! TypeScript dialect override layer
//!
//! Adapts the JavaScript base configs to TypeScript: syntax-level rules move
//! to their `@typescript-eslint` equivalents (base rule suppressed, replacement
//! installed with the base severity and payload), checks the compiler already
//! performs are disabled for `.ts`/`.tsx` files, and the shared resolver
//! settings learn the TypeScript file extensions.

use std::sync::LazyLock;

use regex::Regex;
use rulestack_core::{
    Block, NamedConfig, OverrideLayerBuilder, PluginHandle, Result, RuleSetting, RulestackError,
    derive,
};
use serde_json::{Map, Value, json};

use crate::base;

/// Namespace the replacement rules are installed under
pub const NAMESPACE: &str = "@typescript-eslint";

/// Extensions appended to the base module-resolution settings
const RESOLVER_EXTENSIONS: [&str; 4] = [".ts", ".cts", ".mts", ".d.ts"];

/// Extensions appended to the base `import/extensions` settings list
const IMPORT_EXTENSIONS: [&str; 3] = [".ts", ".tsx", ".d.ts"];

/// Rewrites `js`/`jsx` tokens inside devDependency globs to `ts`/`tsx`
static JS_TO_TS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bjs(x?)\b").expect("static pattern compiles"));

/// Build the three TypeScript layer blocks, in composition order
pub fn blocks() -> Result<Vec<Block>> {
    let best_practices = base::best_practices();
    let errors = base::errors();
    let es6 = base::es6();
    let imports = base::imports();
    let style = base::style();
    let variables = base::variables();

    let blocks = vec![
        config_block(&best_practices, &errors, &es6, &imports, &style, &variables)?,
        compiler_overrides_block(&best_practices, &errors, &es6, &variables)?,
        import_overrides_block(&imports)?,
    ];
    tracing::debug!("Built TypeScript override layer ({} blocks)", blocks.len());
    Ok(blocks)
}

/// The unscoped dialect block: plugin/parser handles, extended resolver
/// settings, and the suppress/replace pairs
fn config_block(
    best_practices: &NamedConfig,
    errors: &NamedConfig,
    es6: &NamedConfig,
    imports: &NamedConfig,
    style: &NamedConfig,
    variables: &NamedConfig,
) -> Result<Block> {
    let layer = OverrideLayerBuilder::new("rulestack/typescript", NAMESPACE)
        .plugin(NAMESPACE, PluginHandle::new("typescript-eslint/plugin"))
        .parser(PluginHandle::new("typescript-eslint/parser"))
        .parser_options(json!({"projectService": true}))
        .setting("import/resolver", resolver_setting(imports)?)
        .setting("import/extensions", import_extensions_setting(imports)?)
        // Resolve type definition packages
        .setting(
            "import/external-module-folders",
            json!(["node_modules", "node_modules/@types"]),
        )
        .replace(style, "brace-style")?
        // 'camelcase' is subsumed by the wider 'naming-convention' check;
        // underscore handling stays with the base 'no-underscore-dangle'
        .disable(style, "camelcase")?
        .install("naming-convention", naming_convention())
        .replace_with(style, "comma-dangle", comma_dangle)?
        .replace(style, "comma-spacing")?
        .replace(best_practices, "default-param-last")?
        .replace(best_practices, "dot-notation")?
        .replace(style, "func-call-spacing")?
        .replace(style, "indent")?
        .replace(style, "keyword-spacing")?
        .replace(style, "lines-between-class-members")?
        .replace(style, "no-array-constructor")?
        .replace(es6, "no-dupe-class-members")?
        .replace(best_practices, "no-empty-function")?
        .replace(errors, "no-extra-parens")?
        .replace(errors, "no-extra-semi")?
        // The replacement covers both eval-adjacent base rules
        .replace(best_practices, "no-implied-eval")?
        .disable(best_practices, "no-new-func")?
        .replace(errors, "no-loss-of-precision")?
        .replace(best_practices, "no-loop-func")?
        .replace(best_practices, "no-magic-numbers")?
        .replace(best_practices, "no-redeclare")?
        .replace(variables, "no-shadow")?
        .replace(best_practices, "no-throw-literal")?
        .replace(best_practices, "no-unused-expressions")?
        .replace(variables, "no-unused-vars")?
        .replace(variables, "no-use-before-define")?
        .replace(es6, "no-useless-constructor")?
        .replace(style, "quotes")?
        .replace(style, "semi")?
        .replace(style, "space-before-blocks")?
        .replace(style, "space-before-function-paren")?
        .replace(best_practices, "require-await")?
        .replace_as_with(best_practices, "no-return-await", "return-await", |setting| {
            Ok(setting.with_added_options([json!("in-try-catch")]))
        })?
        .replace(style, "space-infix-ops")?
        .replace(style, "object-curly-spacing")?
        // Amended in place rather than replaced: same rule ids, re-derived
        // options
        .rule("import/extensions", import_extensions_rule(imports)?)
        .rule(
            "import/no-extraneous-dependencies",
            no_extraneous_dependencies_rule(imports)?,
        );

    Ok(layer.build())
}

/// Base rules the TypeScript compiler already checks, disabled for
/// TypeScript sources
fn compiler_overrides_block(
    best_practices: &NamedConfig,
    errors: &NamedConfig,
    es6: &NamedConfig,
    variables: &NamedConfig,
) -> Result<Block> {
    let layer = OverrideLayerBuilder::new("rulestack/typescript-overrides", NAMESPACE)
        .files(["*.ts", "*.tsx"])
        .disable(es6, "constructor-super")?
        .disable(errors, "getter-return")?
        .disable(es6, "no-class-assign")?
        .disable(es6, "no-const-assign")?
        .disable(errors, "no-dupe-args")?
        .disable(es6, "no-dupe-class-members")?
        .disable(errors, "no-dupe-keys")?
        .disable(errors, "no-func-assign")?
        .disable(errors, "no-import-assign")?
        .disable(errors, "no-new-native-nonconstructor")?
        .disable(errors, "no-obj-calls")?
        .disable(best_practices, "no-redeclare")?
        .disable(errors, "no-setter-return")?
        .disable(es6, "no-this-before-super")?
        .disable(variables, "no-undef")?
        .disable(errors, "no-unreachable")?
        .disable(errors, "no-unsafe-negation")?
        .disable(best_practices, "no-with")?
        .disable(errors, "valid-typeof")?;
    Ok(layer.build())
}

/// Import rules that misfire on TypeScript sources, disabled for them
fn import_overrides_block(imports: &NamedConfig) -> Result<Block> {
    let layer = OverrideLayerBuilder::new("rulestack/typescript-import-overrides", NAMESPACE)
        .files(["*.ts", "*.tsx"])
        .disable(imports, "import/named")?
        .disable(imports, "import/no-named-as-default-member")?;
    Ok(layer.build())
}

/// Append the TypeScript extensions to the resolver's `node.extensions`
///
/// Only `node.extensions` is re-derived; sibling resolver settings are
/// copied as-is (explicit per-field copy, not a deep-merge).
fn resolver_setting(imports: &NamedConfig) -> Result<Value> {
    let context = "import/resolver";
    let resolver = derive::as_object(context, imports.settings_for(context)?)?;
    let node = derive::as_object(
        context,
        resolver
            .get("node")
            .ok_or_else(|| RulestackError::derivation(context, "missing 'node' resolver"))?,
    )?;
    let extensions = derive::as_string_list(
        context,
        node.get("extensions")
            .ok_or_else(|| RulestackError::derivation(context, "missing 'extensions' list"))?,
    )?;
    let extended = derive::list_append(&extensions, &owned(&RESOLVER_EXTENSIONS));

    let mut node = node.clone();
    node.insert("extensions".to_string(), derive::string_list(&extended));
    let mut resolver = resolver.clone();
    resolver.insert("node".to_string(), Value::Object(node));
    Ok(Value::Object(resolver))
}

/// Append the TypeScript extensions to the `import/extensions` settings list
fn import_extensions_setting(imports: &NamedConfig) -> Result<Value> {
    let context = "import/extensions";
    let extensions = derive::as_string_list(context, imports.settings_for(context)?)?;
    let extended = derive::list_append(&extensions, &owned(&IMPORT_EXTENSIONS));
    Ok(derive::string_list(&extended))
}

/// The recombined naming rules installed in place of `camelcase`
///
/// Formats mirror what the base config accepted (camelCase, PascalCase and
/// UPPER_CASE variables; camelCase and PascalCase functions) so enabling the
/// replacement does not tighten checking; PascalCase for type-like names is
/// the one named addition of this override.
fn naming_convention() -> RuleSetting {
    RuleSetting::error_with([
        json!({
            "selector": "variable",
            "format": ["camelCase", "PascalCase", "UPPER_CASE"]
        }),
        json!({
            "selector": "function",
            "format": ["camelCase", "PascalCase"]
        }),
        json!({
            "selector": "typeLike",
            "format": ["PascalCase"]
        }),
    ])
}

/// The replacement adds three option switches; each mirrors the base
/// `arrays` value so TypeScript constructs dangle the same way
fn comma_dangle(setting: &RuleSetting) -> Result<RuleSetting> {
    let context = "comma-dangle";
    setting.map_options(|options| {
        let base = derive::object_option(context, options, 0)?;
        let arrays = base
            .get("arrays")
            .cloned()
            .ok_or_else(|| RulestackError::derivation(context, "missing 'arrays' option"))?;

        let mut overrides = Map::new();
        overrides.insert("enums".to_string(), arrays.clone());
        overrides.insert("generics".to_string(), arrays.clone());
        overrides.insert("tuples".to_string(), arrays);
        Ok(vec![Value::Object(derive::payload_patch(base, overrides))])
    })
}

/// Amend `import/extensions` so `.ts`/`.tsx` imports are extensionless too;
/// the per-extension object is patched, its siblings re-derived explicitly
fn import_extensions_rule(imports: &NamedConfig) -> Result<RuleSetting> {
    let context = "import/extensions";
    imports.lookup(context)?.map_options(|options| {
        let mode = options
            .first()
            .cloned()
            .ok_or_else(|| RulestackError::derivation(context, "missing mode option"))?;
        let per_extension = derive::object_option(context, options, 1)?;

        let mut overrides = Map::new();
        overrides.insert("ts".to_string(), json!("never"));
        overrides.insert("tsx".to_string(), json!("never"));
        Ok(vec![
            mode,
            Value::Object(derive::payload_patch(per_extension, overrides)),
        ])
    })
}

/// Amend `import/no-extraneous-dependencies`: every devDependency glob that
/// names `js`/`jsx` files gains a `ts`/`tsx` twin, appended right after it
fn no_extraneous_dependencies_rule(imports: &NamedConfig) -> Result<RuleSetting> {
    let context = "import/no-extraneous-dependencies";
    imports.lookup(context)?.map_options(|options| {
        let payload = derive::object_option(context, options, 0)?;
        let dev_dependencies = derive::as_string_list(
            context,
            payload.get("devDependencies").ok_or_else(|| {
                RulestackError::derivation(context, "missing 'devDependencies' list")
            })?,
        )?;

        let mut extended = Vec::with_capacity(dev_dependencies.len() * 2);
        for glob in dev_dependencies {
            let twin = JS_TO_TS.replace_all(&glob, "ts$1").into_owned();
            let has_twin = twin != glob;
            extended.push(glob);
            if has_twin {
                extended.push(twin);
            }
        }

        let mut overrides = Map::new();
        overrides.insert("devDependencies".to_string(), derive::string_list(&extended));
        Ok(vec![Value::Object(derive::payload_patch(payload, overrides))])
    })
}

fn owned(extensions: &[&str]) -> Vec<String> {
    extensions.iter().map(|ext| ext.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolver_extensions_appended_in_order() {
        let resolver = resolver_setting(&base::imports()).unwrap();
        assert_eq!(
            resolver,
            json!({
                "node": {
                    "extensions": [".mjs", ".js", ".json", ".ts", ".cts", ".mts", ".d.ts"]
                }
            })
        );
    }

    #[test]
    fn test_comma_dangle_gains_typescript_switches() {
        let style = base::style();
        let derived = comma_dangle(style.lookup("comma-dangle").unwrap()).unwrap();
        let payload = derived.options().unwrap()[0].as_object().unwrap();
        assert_eq!(payload["enums"], json!("always-multiline"));
        assert_eq!(payload["generics"], json!("always-multiline"));
        assert_eq!(payload["tuples"], json!("always-multiline"));
        // siblings untouched
        assert_eq!(payload["objects"], json!("always-multiline"));
    }

    #[test]
    fn test_dev_dependency_globs_gain_ts_twins() {
        let derived = no_extraneous_dependencies_rule(&base::imports()).unwrap();
        let payload = derived.options().unwrap()[0].as_object().unwrap();
        let globs: Vec<&str> = payload["devDependencies"]
            .as_array()
            .unwrap()
            .iter()
            .map(|glob| glob.as_str().unwrap())
            .collect();

        let js_pos = globs.iter().position(|g| *g == "test.{js,jsx}").unwrap();
        assert_eq!(globs[js_pos + 1], "test.{ts,tsx}");
        // globs without a js token are kept once, unchanged
        assert_eq!(globs.iter().filter(|g| **g == "test/**").count(), 1);
    }

    #[test]
    fn test_import_extensions_rule_keeps_mode() {
        let derived = import_extensions_rule(&base::imports()).unwrap();
        let options = derived.options().unwrap();
        assert_eq!(options[0], json!("ignorePackages"));
        let per_extension = options[1].as_object().unwrap();
        assert_eq!(per_extension["ts"], json!("never"));
        assert_eq!(per_extension["js"], json!("never"));
    }
}
