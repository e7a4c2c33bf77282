//! Engine configuration

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

/// How command results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Single-line JSON
    Json,
    /// Indented JSON
    #[default]
    Pretty,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Pretty => write!(f, "pretty"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => anyhow::bail!("Unknown output format: {other}"),
        }
    }
}

/// Engine configuration loaded from environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON file of user-authored forms layered over the built-in templates
    pub custom_forms_path: Option<PathBuf>,
    pub output: OutputFormat,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let custom_forms_path = lookup("WILDSHAPE_CUSTOM_FORMS")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let output = match lookup("WILDSHAPE_OUTPUT") {
            Some(raw) => raw
                .parse()
                .context("WILDSHAPE_OUTPUT must be 'json' or 'pretty'")?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            custom_forms_path,
            output,
        })
    }
}
