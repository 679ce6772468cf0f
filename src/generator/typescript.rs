use anyhow::Context;
use askama::Template;
use indexmap::IndexMap;
use serde_json::Value;

use super::interface::render_inline;
use super::keys::camel_case_key;
use super::shared::analyze;
use super::tree::{build_tree, TreeNode};
use super::value::render_value;
use crate::config::FormatOptions;
use crate::tokens::Token;

/// Outer shell of the generated TypeScript module
#[derive(Template)]
#[template(path = "tokens.ts.txt", escape = "none")]
struct TokensModuleTemplate {
    show_file_header: bool,
    interfaces: String,
    main_interface: String,
    object_value: String,
}

/// Render the full `typescript/auto-interfaces` module for a token list.
///
/// Output order: shared interface declarations, the `DesignTokens` root
/// interface, a `tokens` accessor returning the literal value tree `as
/// const`, and a `Tokens` alias derived from the accessor. A pure function of
/// the token list and options: callers invoke it once per output file, and
/// independent runs (say, a references-preserved and a fully-resolved
/// variant) share nothing.
pub fn render_typescript(tokens: &[Token], options: &FormatOptions) -> anyhow::Result<String> {
    let root = build_tree(tokens, options.output_references)?;
    let shared = analyze(&root);
    let template = TokensModuleTemplate {
        show_file_header: options.show_file_header,
        interfaces: shared.declarations.concat(),
        main_interface: render_main_interface(&root, &shared.by_field),
        object_value: render_value(&root, 0),
    };
    template
        .render()
        .context("failed to render the tokens module template")
}

/// The root interface: fields in tree insertion order, display-form names,
/// shared interface names where the analyzer grouped the field, inline types
/// everywhere else.
fn render_main_interface(
    root: &IndexMap<String, TreeNode>,
    by_field: &IndexMap<String, String>,
) -> String {
    let mut out = String::from("export interface DesignTokens {\n");
    for (key, node) in root {
        let field = camel_case_key(key);
        let field_type = match node {
            TreeNode::Object(map) => by_field
                .get(key)
                .cloned()
                .unwrap_or_else(|| render_inline(map, 1)),
            TreeNode::Leaf(Value::Number(_)) => "number".to_string(),
            TreeNode::Leaf(_) => "string".to_string(),
        };
        out.push_str(&format!("  {field}: {field_type};\n"));
    }
    out.push_str("}\n\n");
    out
}
