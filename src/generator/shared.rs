use indexmap::IndexMap;

use super::interface::render_named;
use super::tree::TreeNode;

/// Result of structural analysis over the tree root.
#[derive(Debug, Clone, Default)]
pub struct SharedInterfaces {
    /// Rendered named interface declarations, in first-seen group order
    pub declarations: Vec<String>,
    /// Root field name → shared interface name, for every grouped field
    pub by_field: IndexMap<String, String>,
}

/// Group root-level object fields by structure signature and extract one
/// named interface per group of two or more.
///
/// The signature is the sorted, comma-joined set of a field's immediate child
/// names; children's own structure is not compared. Only depth-1 siblings are
/// grouped; nested objects always render inline. The interface is rendered
/// from the group's first member and named `I<Name>Palette` after it, so
/// iterating the same tree twice yields identical declarations and mappings.
pub fn analyze(root: &IndexMap<String, TreeNode>) -> SharedInterfaces {
    let mut groups: IndexMap<String, Vec<(&str, &IndexMap<String, TreeNode>)>> = IndexMap::new();
    for (key, node) in root {
        let TreeNode::Object(map) = node else {
            continue;
        };
        let mut fields: Vec<&str> = map.keys().map(String::as_str).collect();
        fields.sort_unstable();
        groups
            .entry(fields.join(","))
            .or_default()
            .push((key.as_str(), map));
    }

    let mut shared = SharedInterfaces::default();
    for members in groups.values() {
        if members.len() < 2 {
            continue;
        }
        let (first_key, first_map) = members[0];
        let name = format!("I{}Palette", capitalize(first_key));
        shared.declarations.push(render_named(first_map, &name));
        for (key, _) in members {
            shared.by_field.insert((*key).to_string(), name.clone());
        }
    }
    shared
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
