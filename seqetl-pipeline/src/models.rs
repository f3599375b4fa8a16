use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The document written for one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EtlResult {
    pub metadata: RunMetadata,
    pub results: Vec<ParticipantResult>,
}

/// When and on what paths a run happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetadata {
    pub start_at: String,
    pub end_at: String,
    pub context_path: String,
    pub results_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(rename = "_id")]
    pub id: String,
}

/// A participant and the processed content of each of their files, keyed by file type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantResult {
    pub participant: Participant,
    #[serde(flatten)]
    pub processed: Map<String, Value>,
}
