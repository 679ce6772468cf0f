use anyhow::{bail, Context};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;

use super::{Token, REFERENCE};
use crate::generator::coerce_string;

/// Matches a string value that is exactly one reference placeholder.
static WHOLE_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{([^}]+)\}$").expect("whole reference regex should be valid"));

/// Upper bound on substitution passes per token. A chain longer than this is
/// treated as a cycle.
const MAX_RESOLUTION_PASSES: usize = 32;

/// Substitute `{a.b.c}` placeholders in every token's resolved value.
///
/// A string that is exactly one placeholder adopts the target's value
/// wholesale, so numeric tokens stay numeric through an alias. Placeholders
/// embedded in larger strings substitute textually. Unknown references and
/// reference cycles fail the whole run; the downstream emitters perform no
/// validation of their own.
pub fn resolve_references(tokens: &mut [Token]) -> anyhow::Result<()> {
    let index: HashMap<String, Value> = tokens
        .iter()
        .map(|token| (token.dotted(), token.original.clone()))
        .collect();
    for token in tokens.iter_mut() {
        let owner = token.dotted();
        token.value = resolve_value(&token.original, &index, &owner)?;
    }
    Ok(())
}

fn resolve_value(
    original: &Value,
    index: &HashMap<String, Value>,
    owner: &str,
) -> anyhow::Result<Value> {
    let mut current = original.clone();
    for _ in 0..MAX_RESOLUTION_PASSES {
        let Value::String(text) = &current else {
            return Ok(current);
        };
        // A bare `{` without a closing brace is a literal, not a placeholder
        if !REFERENCE.is_match(text) {
            return Ok(current);
        }
        if let Some(caps) = WHOLE_REFERENCE.captures(text) {
            let target = index.get(&caps[1]).with_context(|| {
                format!("unknown token reference {{{}}} in {owner}", &caps[1])
            })?;
            current = target.clone();
            continue;
        }
        let mut missing = None;
        let replaced = REFERENCE.replace_all(text, |caps: &regex::Captures| {
            match index.get(&caps[1]) {
                Some(value) => coerce_string(value),
                None => {
                    missing = Some(caps[1].to_string());
                    String::new()
                }
            }
        });
        if let Some(path) = missing {
            bail!("unknown token reference {{{path}}} in {owner}");
        }
        current = Value::String(replaced.into_owned());
    }
    bail!("reference cycle detected while resolving {owner}")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolves_string_alias() {
        let mut tokens = vec![
            Token::new(vec!["color", "base", "white"], json!("#ffffff")),
            Token::new(vec!["color", "background"], json!("{color.base.white}")),
        ];
        resolve_references(&mut tokens).unwrap();
        assert_eq!(tokens[1].value, json!("#ffffff"));
        assert_eq!(tokens[1].original, json!("{color.base.white}"));
    }

    #[test]
    fn test_whole_reference_keeps_target_type() {
        let mut tokens = vec![
            Token::new(vec!["border", "sm"], json!(4)),
            Token::new(vec!["border", "md"], json!("{border.sm}")),
        ];
        resolve_references(&mut tokens).unwrap();
        assert_eq!(tokens[1].value, json!(4));
    }

    #[test]
    fn test_embedded_reference_substitutes_textually() {
        let mut tokens = vec![
            Token::new(vec!["spacing", "xs"], json!("4px")),
            Token::new(vec!["grid", "gap"], json!("{spacing.xs} {spacing.xs}")),
        ];
        resolve_references(&mut tokens).unwrap();
        assert_eq!(tokens[1].value, json!("4px 4px"));
    }

    #[test]
    fn test_chained_references_resolve() {
        let mut tokens = vec![
            Token::new(vec!["color", "base"], json!("#3b82f6")),
            Token::new(vec!["color", "brand"], json!("{color.base}")),
            Token::new(vec!["color", "link"], json!("{color.brand}")),
        ];
        resolve_references(&mut tokens).unwrap();
        assert_eq!(tokens[2].value, json!("#3b82f6"));
    }

    #[test]
    fn test_unknown_reference_fails() {
        let mut tokens = vec![Token::new(vec!["color", "text"], json!("{color.missing}"))];
        let err = resolve_references(&mut tokens).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("color.missing"), "{message}");
        assert!(message.contains("color.text"), "{message}");
    }

    #[test]
    fn test_literal_open_brace_passes_through() {
        let mut tokens = vec![
            Token::new(vec!["font", "odd"], json!("brace { literal")),
            Token::new(vec!["spacing", "xs"], json!("4px")),
            Token::new(vec!["grid", "gap"], json!("calc({spacing.xs} + { fudge")),
        ];
        resolve_references(&mut tokens).unwrap();
        assert_eq!(tokens[0].value, json!("brace { literal"));
        assert_eq!(tokens[2].value, json!("calc(4px + { fudge"));
    }

    #[test]
    fn test_reference_cycle_fails() {
        let mut tokens = vec![
            Token::new(vec!["a"], json!("{b}")),
            Token::new(vec!["b"], json!("{a}")),
        ];
        let err = resolve_references(&mut tokens).unwrap_err();
        assert!(err.to_string().contains("cycle"), "{err}");
    }
}
