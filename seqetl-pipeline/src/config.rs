use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{PipelineError, Result};

///
/// Tunables for one pipeline run. Every field has a default, so an empty
/// (or missing) config file gives the standard behavior.
///
/// Dates are written as quoted `YYYY-MM-DD` strings.
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PipelineConfig {
    pub valid_extensions: Vec<String>,
    pub max_string_length: usize,
    pub date_range_start: NaiveDate,
    pub date_range_end: NaiveDate,
    pub minimum_age: i64,
    pub sensitive_prefix: String,
    pub birth_date_field: String,
    pub output_suffix: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            valid_extensions: DEFAULT_VALID_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            max_string_length: DEFAULT_MAX_STRING_LENGTH,
            date_range_start: NaiveDate::from_ymd_opt(2014, 1, 1).unwrap_or_default(),
            date_range_end: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or_default(),
            minimum_age: DEFAULT_MINIMUM_AGE,
            sensitive_prefix: DEFAULT_SENSITIVE_PREFIX.to_string(),
            birth_date_field: DEFAULT_BIRTH_DATE_FIELD.to_string(),
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
        }
    }
}

impl TryFrom<&Path> for PipelineConfig {
    type Error = PipelineError;

    fn try_from(path: &Path) -> Result<Self> {
        let toml_str = read_to_string(path)?;
        let config = toml::from_str(&toml_str)?;
        Ok(config)
    }
}

///
/// Where to read a participant's files from and where to write the result.
///
/// `context_path` is the participant directory, named by the participant UUID.
/// `results_path` is the `out` directory inside it.
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PipelineInput {
    pub context_path: PathBuf,
    pub results_path: PathBuf,
}

impl PipelineInput {
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(context_path: P, results_path: Q) -> Self {
        PipelineInput {
            context_path: context_path.into(),
            results_path: results_path.into(),
        }
    }
}

impl TryFrom<&str> for PipelineInput {
    type Error = PipelineError;

    ///
    /// Parse an input descriptor from its JSON text. Exactly the keys
    /// `context_path` and `results_path` are accepted, both strings.
    ///
    fn try_from(value: &str) -> Result<Self> {
        serde_json::from_str(value).map_err(|_| {
            PipelineError::InvalidInput(format!(
                "Input must contain '{}' and '{}' as strings, and nothing else.",
                CONTEXT_PATH_KEY, RESULTS_PATH_KEY
            ))
        })
    }
}

impl TryFrom<&Path> for PipelineInput {
    type Error = PipelineError;

    fn try_from(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(PipelineError::NotFound(path.display().to_string()));
        }
        let json_str = read_to_string(path)?;
        PipelineInput::try_from(json_str.as_str())
    }
}
