use anyhow::{bail, Context};
use std::fs;
use std::path::{Path, PathBuf};

use super::css::{render_css_variables, render_scss_variables};
use super::typescript::render_typescript;
use crate::config::{Config, FileOutput, Format};
use crate::tokens::{load_sources, resolve_references, Token};

/// Render one configured output file from the token list.
pub fn render_file(tokens: &[Token], file: &FileOutput) -> anyhow::Result<String> {
    match file.format {
        Format::TypeScriptInterfaces => render_typescript(tokens, &file.options),
        Format::ScssVariables => render_scss_variables(tokens, &file.options),
        Format::CssVariables => render_css_variables(tokens, &file.options),
    }
}

/// Run a full build: load sources, resolve references, render and write
/// every configured platform output. Returns the destinations produced, in
/// build order. With `dry_run` everything is rendered but nothing touches
/// the filesystem.
///
/// Source paths and build paths resolve relative to the config file's
/// directory, so a build behaves the same from any working directory.
pub fn build_from_config(
    config_path: &Path,
    platform_filter: Option<&str>,
    dry_run: bool,
) -> anyhow::Result<Vec<PathBuf>> {
    let config = Config::from_file(config_path)?;
    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));

    if let Some(name) = platform_filter {
        if !config.platforms.contains_key(name) {
            let known: Vec<&str> = config.platforms.keys().map(String::as_str).collect();
            bail!(
                "unknown platform {name:?} (configured platforms: {})",
                known.join(", ")
            );
        }
    }

    let mut tokens = load_sources(&config.source, base_dir)?;
    resolve_references(&mut tokens)?;
    tracing::info!(tokens = tokens.len(), "loaded design tokens");

    let mut written = Vec::new();
    for (name, platform) in &config.platforms {
        if platform_filter.is_some_and(|filter| filter != name) {
            continue;
        }
        let build_dir = match &platform.build_path {
            Some(path) => base_dir.join(path),
            None => base_dir.to_path_buf(),
        };
        for file in &platform.files {
            let output = render_file(&tokens, file)?;
            let destination = build_dir.join(&file.destination);
            if dry_run {
                println!("📝 {name}: would write {}", destination.display());
            } else {
                if let Some(parent) = destination.parent() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("failed to create output directory {}", parent.display())
                    })?;
                }
                fs::write(&destination, output).with_context(|| {
                    format!("failed to write {}", destination.display())
                })?;
                println!("✅ {name}: wrote {}", destination.display());
            }
            written.push(destination);
        }
    }
    Ok(written)
}
