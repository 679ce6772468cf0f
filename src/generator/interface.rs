use indexmap::IndexMap;

use super::keys::{safe_key, sort_keys};
use super::tree::TreeNode;
use serde_json::Value;

/// Render an object shape as an inline type literal, `{ field: type; ... }`,
/// indented for embedding at `indent` levels deep.
///
/// Fields are emitted in sorted order ([`sort_keys`]), regardless of the
/// tree's insertion order.
pub fn render_inline(obj: &IndexMap<String, TreeNode>, indent: usize) -> String {
    let spaces = "  ".repeat(indent);
    let mut out = String::from("{\n");
    for key in sorted_keys(obj) {
        let field_type = value_type(&obj[key], indent);
        out.push_str(&format!("{spaces}  {}: {field_type};\n", safe_key(key)));
    }
    out.push_str(&spaces);
    out.push('}');
    out
}

/// Render an object shape as a named exported interface declaration.
pub fn render_named(obj: &IndexMap<String, TreeNode>, name: &str) -> String {
    let mut out = format!("export interface {name} {{\n");
    for key in sorted_keys(obj) {
        let field_type = value_type(&obj[key], 1);
        out.push_str(&format!("  {}: {field_type};\n", safe_key(key)));
    }
    out.push_str("}\n\n");
    out
}

fn sorted_keys(obj: &IndexMap<String, TreeNode>) -> Vec<&str> {
    let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    sort_keys(&mut keys);
    keys
}

/// Numbers type as `number`; every other leaf, arrays included, is `string`.
fn value_type(node: &TreeNode, indent: usize) -> String {
    match node {
        TreeNode::Object(map) => render_inline(map, indent + 1),
        TreeNode::Leaf(Value::Number(_)) => "number".to_string(),
        TreeNode::Leaf(_) => "string".to_string(),
    }
}
