use anyhow::{Context, Result};
use clap::ArgMatches;

use seqetl_pipeline::MetadataSanitizer;
use seqetl_pipeline::processors::{FileProcessor, MetadataProcessor};

use crate::utils::{load_config, write_output};

pub fn run_sanitize(matches: &ArgMatches) -> Result<()> {
    let metadata = matches
        .get_one::<String>("metadata")
        .context("A path to a metadata file is required.")?;
    let config = load_config(matches.get_one::<String>("config"))?;

    let sanitized = MetadataProcessor::new(metadata, MetadataSanitizer::from(&config))
        .process()
        .with_context(|| format!("Failed to sanitize {}", metadata))?;

    write_output(&sanitized, matches.get_one::<String>("output"))
}
