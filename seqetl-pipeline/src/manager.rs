use std::path::PathBuf;

use chrono::{SecondsFormat, Utc};
use log::info;
use serde_json::{Map, Value};

use crate::config::{PipelineConfig, PipelineInput};
use crate::error::{PipelineError, Result, Stage};
use crate::extract::Extractor;
use crate::load::Loader;
use crate::models::{EtlResult, Participant, ParticipantResult, RunMetadata};
use crate::transform::Transformer;
use crate::validation::InputValidator;

///
/// Runs the whole pipeline for one participant directory:
/// validate, extract, transform, assemble and load.
///
pub struct EtlManager {
    input: PipelineInput,
    config: PipelineConfig,
}

impl EtlManager {
    pub fn new(input: PipelineInput, config: PipelineConfig) -> Self {
        EtlManager { input, config }
    }

    pub fn input(&self) -> &PipelineInput {
        &self.input
    }

    ///
    /// Process the participant and write `<results_path>/<uuid><output_suffix>`.
    ///
    /// Any failure is reported as [PipelineError::Failed], tagged with the stage
    /// it happened in. Running twice on the same input overwrites the result file.
    ///
    /// # Returns
    /// - the path of the written result file
    pub fn process(&self) -> Result<PathBuf> {
        let start_at = timestamp();

        info!("Validating {}", self.input.context_path.display());
        let validator =
            InputValidator::new(&self.input, &self.config).map_err(|e| e.at(Stage::Validate))?;
        validator
            .validate()
            .map_err(|e| PipelineError::from(e).at(Stage::Validate))?;

        let (files, participant_id) = Extractor::new(&self.input)
            .extract()
            .map_err(|e| e.at(Stage::Extract))?;
        info!(
            "Extracted {} files for participant {}",
            files.len(),
            participant_id
        );

        let processed = Transformer::new(&files, &self.config)
            .transform()
            .map_err(|e| e.at(Stage::Transform))?;

        let end_at = timestamp();
        let result = self.create_result(processed, &participant_id, start_at, end_at);

        let file_name = format!("{}{}", participant_id, self.config.output_suffix);
        let output_file = Loader::new(&self.input.results_path)
            .load(&result, &file_name)
            .map_err(|e| e.at(Stage::Load))?;

        info!("Results written to {}", output_file.display());

        Ok(output_file)
    }

    fn create_result(
        &self,
        processed: Map<String, Value>,
        participant_id: &str,
        start_at: String,
        end_at: String,
    ) -> EtlResult {
        EtlResult {
            metadata: RunMetadata {
                start_at,
                end_at,
                context_path: self.input.context_path.display().to_string(),
                results_path: self.input.results_path.display().to_string(),
            },
            results: vec![ParticipantResult {
                participant: Participant {
                    id: participant_id.to_string(),
                },
                processed,
            }],
        }
    }
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
