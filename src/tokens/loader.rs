use anyhow::{bail, Context};
use serde_json::{map::Entry, Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::Token;

/// Load every configured token source and flatten it into a token list.
///
/// Each source entry is a file or a directory relative to `base_dir`;
/// directories are walked recursively in file-name order so repeated runs see
/// the same document order. Documents are deep-merged before flattening, so a
/// later file can override individual values from an earlier one.
pub fn load_sources(sources: &[String], base_dir: &Path) -> anyhow::Result<Vec<Token>> {
    let mut merged = Map::new();
    for file in collect_source_files(sources, base_dir)? {
        let document = read_document(&file)?;
        let Value::Object(map) = document else {
            bail!(
                "token source {} must be a map at the top level",
                file.display()
            );
        };
        deep_merge(&mut merged, map);
    }
    let mut tokens = Vec::new();
    flatten(&merged, &mut Vec::new(), &mut tokens)?;
    tracing::debug!(count = tokens.len(), "flattened token sources");
    Ok(tokens)
}

fn collect_source_files(sources: &[String], base_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in sources {
        let path = base_dir.join(entry);
        if path.is_dir() {
            for found in WalkDir::new(&path).sort_by_file_name() {
                let found = found
                    .with_context(|| format!("failed to walk token sources in {}", path.display()))?;
                if found.file_type().is_file() && is_token_file(found.path()) {
                    files.push(found.into_path());
                }
            }
        } else if path.is_file() {
            files.push(path);
        } else {
            bail!("token source not found: {}", path.display());
        }
    }
    tracing::debug!(files = files.len(), "collected token source files");
    Ok(files)
}

fn is_token_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("json") | Some("yaml") | Some("yml")
    )
}

fn read_document(path: &Path) -> anyhow::Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read token source {}", path.display()))?;
    let value = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse YAML token source {}", path.display()))?,
        _ => serde_json::from_str(&content)
            .with_context(|| format!("failed to parse JSON token source {}", path.display()))?,
    };
    Ok(value)
}

/// Merge `incoming` into `target`, recursing through nested maps.
/// Scalar collisions resolve in favor of the later document.
fn deep_merge(target: &mut Map<String, Value>, incoming: Map<String, Value>) {
    for (key, value) in incoming {
        match target.entry(key) {
            Entry::Occupied(mut slot) => match (slot.get_mut(), value) {
                (Value::Object(existing), Value::Object(incoming_map)) => {
                    deep_merge(existing, incoming_map);
                }
                (slot_value, value) => *slot_value = value,
            },
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
        }
    }
}

/// A map containing a `value` key is one token; any other map is a group.
fn flatten(
    map: &Map<String, Value>,
    path: &mut Vec<String>,
    out: &mut Vec<Token>,
) -> anyhow::Result<()> {
    for (key, value) in map {
        path.push(key.clone());
        match value {
            Value::Object(inner) if inner.contains_key("value") => {
                let original = inner["value"].clone();
                out.push(Token {
                    path: path.clone(),
                    value: original.clone(),
                    original,
                });
            }
            Value::Object(inner) => flatten(inner, path, out)?,
            _ => bail!(
                "expected a token record or group at {}, found a bare value",
                path.join(".")
            ),
        }
        path.pop();
    }
    Ok(())
}
