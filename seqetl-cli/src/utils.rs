use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use seqetl_pipeline::consts::JSON_INDENT;
use seqetl_pipeline::{JsonWrite, PipelineConfig};

///
/// Load the pipeline config from a TOML file, or fall back to the defaults.
///
pub fn load_config(path: Option<&String>) -> Result<PipelineConfig> {
    match path {
        Some(path) => PipelineConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to load config file {}", path)),
        None => Ok(PipelineConfig::default()),
    }
}

///
/// Write `data` as pretty JSON to `output`, or to stdout when no output is given.
///
pub fn write_output<S: Serialize>(data: &S, output: Option<&String>) -> Result<()> {
    match output {
        Some(output) => data
            .write_json(output)
            .with_context(|| format!("Failed to write {}", output)),
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();

            let formatter = PrettyFormatter::with_indent(JSON_INDENT);
            let mut serializer = Serializer::with_formatter(&mut handle, formatter);
            data.serialize(&mut serializer)?;

            writeln!(handle)?;
            Ok(())
        }
    }
}
