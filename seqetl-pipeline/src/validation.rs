//! Validation of a run's input descriptor and participant directory.
//!
//! A valid participant directory looks like this:
//!
//! ```text
//! <uuid>/
//!   <uuid>_<anything>.txt
//!   <uuid>_<anything>.json
//!   out/
//! ```
//!
//! where `<uuid>` is a lowercase canonical UUID, `context_path` points at `<uuid>/`
//! and `results_path` at `<uuid>/out`.

use std::collections::HashMap;
use std::fs::read_dir;
use std::path::{Path, PathBuf};

use log::debug;
use regex::Regex;

use crate::config::{PipelineConfig, PipelineInput};
use crate::consts::*;
use crate::error::{PipelineError, Result, ValidationError};

/// What a successful validation hands to the rest of the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    /// UUID taken from the context directory name
    pub participant_id: String,
    /// Participant files, sorted by name
    pub files: Vec<PathBuf>,
}

pub struct InputValidator<'a> {
    input: &'a PipelineInput,
    config: &'a PipelineConfig,
    uuid_pattern: Regex,
}

impl<'a> InputValidator<'a> {
    pub fn new(input: &'a PipelineInput, config: &'a PipelineConfig) -> Result<Self> {
        let uuid_pattern = Regex::new(UUID_PATTERN)
            .map_err(|e| PipelineError::InvalidInput(format!("Bad UUID pattern: {}", e)))?;

        Ok(InputValidator {
            input,
            config,
            uuid_pattern,
        })
    }

    ///
    /// Validate the paths and the participant files.
    ///
    /// Checks, in order: both paths are set, exist and are directories; the context
    /// directory is named by a UUID and the results directory is `<same uuid>/out`;
    /// the context directory holds files, every one with an allowed extension and
    /// prefixed by the participant UUID, exactly one per allowed extension.
    ///
    pub fn validate(&self) -> std::result::Result<ValidatedInput, ValidationError> {
        let context_path = self.input.context_path.as_path();
        let results_path = self.input.results_path.as_path();

        check_directory(CONTEXT_PATH_KEY, context_path)?;
        check_directory(RESULTS_PATH_KEY, results_path)?;

        let participant_id = self.participant_id(context_path, results_path)?;
        let files = self.participant_files(context_path, &participant_id)?;

        debug!(
            "Validated {} files for participant {}",
            files.len(),
            participant_id
        );

        Ok(ValidatedInput {
            participant_id,
            files,
        })
    }

    fn is_uuid(&self, value: &str) -> bool {
        self.uuid_pattern.is_match(value)
    }

    fn participant_id(
        &self,
        context_path: &Path,
        results_path: &Path,
    ) -> std::result::Result<String, ValidationError> {
        let context_uuid = dir_name(context_path)
            .filter(|name| self.is_uuid(name))
            .ok_or_else(|| ValidationError::InvalidContextPath(context_path.display().to_string()))?;

        let results_uuid = match dir_name(results_path) {
            Some(RESULTS_DIR_NAME) => results_path
                .parent()
                .and_then(dir_name)
                .filter(|name| self.is_uuid(name)),
            _ => None,
        }
        .ok_or_else(|| ValidationError::InvalidResultsPath(results_path.display().to_string()))?;

        if context_uuid != results_uuid {
            return Err(ValidationError::UuidMismatch {
                context: context_uuid.to_string(),
                results: results_uuid.to_string(),
            });
        }

        Ok(context_uuid.to_string())
    }

    fn participant_files(
        &self,
        context_path: &Path,
        participant_id: &str,
    ) -> std::result::Result<Vec<PathBuf>, ValidationError> {
        let mut files: Vec<PathBuf> = read_dir(context_path)
            .map_err(|_| ValidationError::PathNotFound {
                name: CONTEXT_PATH_KEY,
                path: context_path.display().to_string(),
            })?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file())
            .collect();

        if files.is_empty() {
            return Err(ValidationError::EmptyContextDirectory(
                context_path.display().to_string(),
            ));
        }
        files.sort();

        let mut counts: HashMap<&str, usize> = self
            .config
            .valid_extensions
            .iter()
            .map(|ext| (ext.as_str(), 0))
            .collect();

        for file in &files {
            let file_name = file
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default();

            // everything after the last dot, or the whole name if there is none
            let extension = file_name.rsplit('.').next().unwrap_or_default();
            match counts.get_mut(extension) {
                Some(count) => *count += 1,
                None => {
                    return Err(ValidationError::InvalidExtension {
                        extension: extension.to_string(),
                        file: file_name.clone(),
                    });
                }
            }

            let file_uuid = file_name.split('_').next().unwrap_or_default();
            if file_uuid != participant_id {
                return Err(ValidationError::ForeignFile {
                    found: file_uuid.to_string(),
                    expected: participant_id.to_string(),
                });
            }
        }

        for extension in &self.config.valid_extensions {
            let count = counts.get(extension.as_str()).copied().unwrap_or_default();
            if count != 1 {
                return Err(ValidationError::FileCount {
                    extension: extension.clone(),
                    count,
                });
            }
        }

        Ok(files)
    }
}

fn check_directory(name: &'static str, path: &Path) -> std::result::Result<(), ValidationError> {
    if path.as_os_str().is_empty() {
        return Err(ValidationError::EmptyPath(name));
    }
    if !path.exists() {
        return Err(ValidationError::PathNotFound {
            name,
            path: path.display().to_string(),
        });
    }
    if !path.is_dir() {
        return Err(ValidationError::NotADirectory {
            name,
            path: path.display().to_string(),
        });
    }
    Ok(())
}

fn dir_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|name| name.to_str())
}
