//! # CLI Module
//!
//! Command-line interface for the tokenforge code generator.
//!
//! ## Commands
//!
//! ### `build`
//!
//! Run a configured build, writing every platform output:
//!
//! ```bash
//! tokenforge-gen build --config tokens.config.json
//! ```
//!
//! Options:
//! - `--config <FILE>` - Build configuration, JSON or YAML (default: `tokens.config.json`)
//! - `--platform <NAME>` - Limit the build to one named platform
//! - `--dry-run` - Render everything, write nothing

mod commands;

pub use commands::*;
