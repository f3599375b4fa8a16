use std::fs::read_dir;
use std::path::{Path, PathBuf};

use crate::config::PipelineInput;
use crate::error::{PipelineError, Result};

///
/// Collect the participant's files and id from the context directory.
///
pub struct Extractor<'a> {
    input: &'a PipelineInput,
}

impl<'a> Extractor<'a> {
    pub fn new(input: &'a PipelineInput) -> Self {
        Extractor { input }
    }

    ///
    /// Returns the regular files of the context directory, sorted, and the
    /// participant id (the context directory name).
    ///
    pub fn extract(&self) -> Result<(Vec<PathBuf>, String)> {
        let context_path = self.input.context_path.as_path();
        Ok((extract_files(context_path)?, extract_uuid(context_path)?))
    }
}

fn extract_files(context_path: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in read_dir(context_path)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn extract_uuid(context_path: &Path) -> Result<String> {
    context_path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .ok_or_else(|| PipelineError::NotFound(context_path.display().to_string()))
}
