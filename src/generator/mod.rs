//! # Generator Module
//!
//! Code generation for design tokens: the flat token list goes through a
//! fixed flatten → group → emit transformation and comes back out as source
//! text.
//!
//! ```text
//! Token List → Tree Builder → Structural Analyzer → Emitters → Output File
//! ```
//!
//! - `tree` builds the nested token tree, rewriting reference placeholders on
//!   the way in
//! - `shared` groups structurally identical root sub-trees into shared named
//!   interfaces
//! - `interface` and `value` render the type and value positions of any
//!   object shape
//! - `typescript` assembles the `typescript/auto-interfaces` module; `css`
//!   covers the flat `scss/variables` and `css/variables` formats
//! - `project` drives a configured build end to end and writes the output
//!   files
//!
//! Everything here is synchronous and pure over its input; a run either
//! returns the complete output string or fails with the first error. State is
//! built fresh per run and dropped with it, so independent runs can be issued
//! concurrently for different output targets.

mod css;
mod interface;
mod keys;
mod project;
mod shared;
mod tree;
mod typescript;
mod value;

pub use css::*;
pub use interface::*;
pub use keys::*;
pub use project::*;
pub use shared::*;
pub use tree::*;
pub use typescript::*;
pub use value::render_value;

pub(crate) use value::coerce_string;
