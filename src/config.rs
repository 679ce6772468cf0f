//! Build configuration: token sources plus the platform/file output matrix.
//!
//! The file mirrors the shape most token pipelines use: a `source` list and a
//! `platforms` map, each platform carrying a `buildPath` and a list of output
//! files with a format name and per-file options. JSON and YAML are both
//! accepted, branching on the file extension.

use anyhow::Context;
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Token source files or directories, relative to the config file
    pub source: Vec<String>,
    /// Named platforms, built in declaration order
    pub platforms: IndexMap<String, Platform>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Platform {
    /// Directory every destination in this platform is joined under
    #[serde(default)]
    pub build_path: Option<String>,
    /// Output files to produce for this platform
    pub files: Vec<FileOutput>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileOutput {
    /// Output file name, joined under the platform's build path
    pub destination: String,
    pub format: Format,
    #[serde(default)]
    pub options: FormatOptions,
}

/// The fixed format registry. A config naming anything else fails to parse;
/// there is no runtime registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Format {
    #[serde(rename = "typescript/auto-interfaces")]
    TypeScriptInterfaces,
    #[serde(rename = "scss/variables")]
    ScssVariables,
    #[serde(rename = "css/variables")]
    CssVariables,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatOptions {
    /// Emit reference placeholders textually instead of resolved values
    pub output_references: bool,
    /// Prepend the "do not edit" header comment
    pub show_file_header: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            output_references: false,
            show_file_header: true,
        }
    }
}

impl Config {
    /// Load a configuration file, JSON or YAML by extension.
    pub fn from_file(path: &Path) -> anyhow::Result<Config> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("failed to parse YAML config {}", path.display()))?,
            _ => serde_json::from_str(&content)
                .with_context(|| format!("failed to parse JSON config {}", path.display()))?,
        };
        Ok(config)
    }
}
