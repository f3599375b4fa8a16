use std::path::PathBuf;

use log::info;
use serde_json::{Map, Value};

use seqetl_core::utils::file_extension;

use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};
use crate::processors::processor_for;

///
/// Run the matching [crate::processors::FileProcessor] over each participant file.
///
pub struct Transformer<'a> {
    files: &'a [PathBuf],
    config: &'a PipelineConfig,
}

impl<'a> Transformer<'a> {
    pub fn new(files: &'a [PathBuf], config: &'a PipelineConfig) -> Self {
        Transformer { files, config }
    }

    ///
    /// Results keyed by lowercase file extension, e.g. `txt` and `json`.
    ///
    pub fn transform(&self) -> Result<Map<String, Value>> {
        let mut processed_results = Map::new();

        for file in self.files {
            let file_type = file_extension(file)
                .ok_or_else(|| PipelineError::UnsupportedFileType(file.display().to_string()))?;

            info!("Transforming {} as {}", file.display(), file_type);

            let processor = processor_for(file, &file_type, self.config)?;
            processed_results.insert(file_type, processor.process()?);
        }

        Ok(processed_results)
    }
}
