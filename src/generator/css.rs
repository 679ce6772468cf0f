use anyhow::Context;
use askama::Template;
use serde_json::Value;

use super::value::coerce_string;
use crate::config::FormatOptions;
use crate::tokens::{Token, REFERENCE};

/// One flat stylesheet variable
struct Variable {
    name: String,
    value: String,
}

#[derive(Template)]
#[template(path = "variables.scss.txt", escape = "none")]
struct ScssVariablesTemplate {
    show_file_header: bool,
    variables: Vec<Variable>,
}

#[derive(Template)]
#[template(path = "variables.css.txt", escape = "none")]
struct CssVariablesTemplate {
    show_file_header: bool,
    variables: Vec<Variable>,
}

/// How a preserved reference placeholder is spelled in the output
#[derive(Clone, Copy)]
enum ReferenceStyle {
    Scss,
    Css,
}

impl ReferenceStyle {
    fn spell(self, path: &str) -> String {
        let flat = path.replace('.', "-");
        match self {
            ReferenceStyle::Scss => format!("${flat}"),
            ReferenceStyle::Css => format!("var(--{flat})"),
        }
    }
}

/// Render the `scss/variables` format: one `$name: value;` line per token.
pub fn render_scss_variables(
    tokens: &[Token],
    options: &FormatOptions,
) -> anyhow::Result<String> {
    ScssVariablesTemplate {
        show_file_header: options.show_file_header,
        variables: variables(tokens, options, ReferenceStyle::Scss),
    }
    .render()
    .context("failed to render the SCSS variables template")
}

/// Render the `css/variables` format: custom properties in a `:root` block.
pub fn render_css_variables(
    tokens: &[Token],
    options: &FormatOptions,
) -> anyhow::Result<String> {
    CssVariablesTemplate {
        show_file_header: options.show_file_header,
        variables: variables(tokens, options, ReferenceStyle::Css),
    }
    .render()
    .context("failed to render the CSS variables template")
}

fn variables(tokens: &[Token], options: &FormatOptions, style: ReferenceStyle) -> Vec<Variable> {
    tokens
        .iter()
        .map(|token| {
            let raw = if options.output_references {
                &token.original
            } else {
                &token.value
            };
            let value = match raw {
                Value::String(text) if options.output_references && text.contains('{') => {
                    REFERENCE
                        .replace_all(text, |caps: &regex::Captures| style.spell(&caps[1]))
                        .into_owned()
                }
                other => coerce_string(other),
            };
            Variable {
                name: token.name(),
                value,
            }
        })
        .collect()
}
