use anyhow::Context;
use indexmap::IndexMap;
use serde_json::Value;

use crate::tokens::{Token, REFERENCE};

/// One node of the nested token tree.
///
/// Leaves carry the raw JSON value; arrays and other non-map values are
/// opaque leaves and are never recursed into.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    /// Group of child nodes, in insertion order
    Object(IndexMap<String, TreeNode>),
    /// Scalar (or opaque) token value
    Leaf(Value),
}

impl TreeNode {
    /// View this node as an object map, replacing it with an empty one if it
    /// currently holds a leaf. A later token claiming an intermediate segment
    /// wins the object interpretation; the leaf value stored there is lost.
    fn object_entry(&mut self) -> &mut IndexMap<String, TreeNode> {
        if !matches!(self, TreeNode::Object(_)) {
            *self = TreeNode::Object(IndexMap::new());
        }
        match self {
            TreeNode::Object(map) => map,
            TreeNode::Leaf(_) => unreachable!("node was just replaced with an object"),
        }
    }
}

/// Build the nested token tree from the flat token list.
///
/// `use_original` selects the authored value (reference placeholders intact)
/// over the resolved one; string values are run through
/// [`rewrite_references`] either way. A token with an empty path fails the
/// whole build.
pub fn build_tree(
    tokens: &[Token],
    use_original: bool,
) -> anyhow::Result<IndexMap<String, TreeNode>> {
    let mut root = IndexMap::new();
    for token in tokens {
        let (last, parents) = token
            .path
            .split_last()
            .context("token record with an empty path")?;
        let mut current = &mut root;
        for segment in parents {
            current = current
                .entry(segment.clone())
                .or_insert_with(|| TreeNode::Object(IndexMap::new()))
                .object_entry();
        }
        let value = if use_original {
            &token.original
        } else {
            &token.value
        };
        current.insert(last.clone(), TreeNode::Leaf(rewrite_references(value)));
    }
    Ok(root)
}

/// Rewrite `{a.b.c}` placeholders into their flat spelling `{a-b-c}`.
///
/// Dots become dashes inside the braces only; the braces and all surrounding
/// text are kept as found. This is a textual rewrite, not reference
/// resolution, and non-string values pass through untouched.
pub fn rewrite_references(value: &Value) -> Value {
    let Value::String(text) = value else {
        return value.clone();
    };
    if !text.contains('{') {
        return value.clone();
    }
    let rewritten = REFERENCE.replace_all(text, |caps: &regex::Captures| {
        format!("{{{}}}", caps[1].replace('.', "-"))
    });
    Value::String(rewritten.into_owned())
}
