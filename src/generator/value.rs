use indexmap::IndexMap;
use serde_json::Value;

use super::keys::raw_key;
use super::tree::TreeNode;

/// Render the token tree as a TypeScript object literal.
///
/// Fields use [`raw_key`] names and keep the tree's insertion order; the
/// declared interface sorts its fields, the value deliberately does not.
/// Field order has no structural meaning in either position, so the two
/// renderers are each valid against the other.
pub fn render_value(obj: &IndexMap<String, TreeNode>, indent: usize) -> String {
    let spaces = "  ".repeat(indent);
    let mut out = String::from("{\n");
    for (key, node) in obj {
        out.push_str(&format!(
            "{spaces}  {}: {},\n",
            raw_key(key),
            format_value(node, indent)
        ));
    }
    out.push_str(&spaces);
    out.push('}');
    out
}

/// Numbers are emitted bare; everything else becomes a template literal with
/// backticks and interpolation triggers backslash-escaped.
fn format_value(node: &TreeNode, indent: usize) -> String {
    match node {
        TreeNode::Object(map) => render_value(map, indent + 1),
        TreeNode::Leaf(Value::Number(n)) => n.to_string(),
        TreeNode::Leaf(value) => {
            let escaped = coerce_string(value)
                .replace('`', "\\`")
                .replace('$', "\\$");
            format!("`{escaped}`")
        }
    }
}

/// JavaScript `String()` coercion for leaf values that are not plain strings.
pub(crate) fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        // Array.prototype.join turns null elements into empty strings
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => coerce_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
