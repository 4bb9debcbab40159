//! Output formatting module
//!
//! This module provides formatters for HTML microdata, JSON, YAML, ANSI and
//! plain-text output of trails.

pub mod ansi;
pub mod html;
mod json;
mod yaml;

pub use ansi::format_ansi;
pub use html::render_html;
pub use json::format_json;
pub use yaml::format_yaml;

use crate::config::TrailConfig;
use crate::models::Trail;
use thiserror::Error;

/// Output format errors
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Available output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// HTML with schema.org microdata
    #[default]
    Html,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
    /// ANSI colored text
    Ansi,
    /// Plain text path
    Summary,
}

/// Format a trail in the specified format
pub fn format_output(
    trail: &Trail,
    format: OutputFormat,
    config: &TrailConfig,
) -> Result<String, FormatError> {
    match format {
        OutputFormat::Html => Ok(render_html(trail, config)),
        OutputFormat::Json => format_json(trail),
        OutputFormat::Yaml => format_yaml(trail),
        OutputFormat::Ansi => Ok(format_ansi(trail)),
        OutputFormat::Summary => Ok(trail.path()),
    }
}
