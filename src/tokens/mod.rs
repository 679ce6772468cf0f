//! # Tokens Module
//!
//! Loading and flattening of design-token sources.
//!
//! Token sources are JSON or YAML documents of nested groups whose leaves are
//! `{ "value": ... }` records. The loader deep-merges every configured source
//! into one document and flattens it into a list of [`Token`] records; the
//! resolver then substitutes `{a.b.c}` reference placeholders so that each
//! token carries both its authored value and its resolved value. Which of the
//! two feeds a format is decided per output file (`outputReferences`).

mod loader;
mod resolver;

pub use loader::*;
pub use resolver::*;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Matches one `{segment.segment...}` reference placeholder inside a string value.
pub(crate) static REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^}]+)\}").expect("reference regex should be valid"));

/// One flattened design token.
///
/// `original` is the value as authored, reference placeholders intact.
/// `value` starts out identical and is rewritten by
/// [`resolve_references`] once all sources are loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Position in the token tree, outermost segment first
    pub path: Vec<String>,
    /// Resolved value (references substituted)
    pub value: Value,
    /// Authored value (references preserved)
    pub original: Value,
}

impl Token {
    /// Build a token whose resolved and authored values coincide.
    pub fn new<S: Into<String>>(path: Vec<S>, value: Value) -> Self {
        Token {
            path: path.into_iter().map(Into::into).collect(),
            value: value.clone(),
            original: value,
        }
    }

    /// Flat variable name, e.g. `color-base-white`.
    pub fn name(&self) -> String {
        self.path.join("-")
    }

    /// Dotted reference path, e.g. `color.base.white`.
    pub fn dotted(&self) -> String {
        self.path.join(".")
    }
}
