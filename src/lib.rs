//! # tokenforge
//!
//! **tokenforge** is a design-token build tool: it reads hierarchical token
//! sources (nested JSON/YAML groups whose leaves are `{ "value": ... }`
//! records) and generates statically typed artifacts from them, chiefly a
//! TypeScript module describing the token tree's exact shape alongside the
//! resolved values.
//!
//! ## Architecture
//!
//! The library is organized into a few key modules:
//!
//! - **[`tokens`]** - Source loading, flattening, and reference resolution
//! - **[`config`]** - Build configuration (sources, platforms, output files)
//! - **[`generator`]** - The flatten → group → emit core and the per-format
//!   renderers
//! - **[`cli`]** - The `tokenforge-gen` command line
//!
//! ## Generation Flow
//!
//! ```text
//! sources/*.json ──► tokens::load_sources ──► tokens::resolve_references
//!                                                      │
//!                       ┌──────────────────────────────┤
//!                       ▼                              ▼
//!         generator::render_typescript    generator::render_{scss,css}_variables
//!                       │                              │
//!                       └───────► generator::build_from_config ──► files
//! ```
//!
//! The flagship `typescript/auto-interfaces` format builds a nested token
//! tree, groups structurally identical root sub-trees into shared named
//! interfaces, and emits a `DesignTokens` interface plus a `tokens` accessor
//! returning the literal value tree `as const`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use tokenforge::config::FormatOptions;
//! use tokenforge::generator::render_typescript;
//! use tokenforge::tokens::Token;
//! use serde_json::json;
//!
//! let tokens = vec![
//!     Token::new(vec!["spacing", "xs"], json!("4px")),
//!     Token::new(vec!["spacing", "sm"], json!("8px")),
//! ];
//! let module = render_typescript(&tokens, &FormatOptions::default())?;
//! assert!(module.contains("export interface DesignTokens"));
//! ```

pub mod cli;
pub mod config;
pub mod generator;
pub mod tokens;

pub use config::{Config, FileOutput, Format, FormatOptions, Platform};
pub use generator::{
    analyze, build_from_config, build_tree, render_css_variables, render_file, render_inline,
    render_named, render_scss_variables, render_typescript, render_value, SharedInterfaces,
    TreeNode,
};
pub use tokens::{load_sources, resolve_references, Token};
