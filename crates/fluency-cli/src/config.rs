//! CLI configuration
//!
//! Loaded from an optional TOML file; every field has a default so an empty
//! or missing file is valid.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output format for rendered results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Fluency CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FluencyConfig {
    /// Student analyzed when none is given on the command line
    pub default_student: String,
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// Default output format
    pub output: OutputFormat,
}

impl FluencyConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With default student
    #[inline]
    #[must_use]
    pub fn with_default_student(mut self, student: impl Into<String>) -> Self {
        self.default_student = student.into();
        self
    }

    /// With output format
    #[inline]
    #[must_use]
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Load from a TOML file, or defaults when no path is given
    ///
    /// # Errors
    /// Fails if the file cannot be read or is not valid TOML for this shape
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }
}

impl Default for FluencyConfig {
    fn default() -> Self {
        Self {
            default_student: fluency_store::DEMO_STUDENT_ID.to_string(),
            log_level: "info".to_string(),
            output: OutputFormat::Text,
        }
    }
}
