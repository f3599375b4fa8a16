use anyhow::{Context, Result};
use clap::ArgMatches;

use seqetl_stats::SequenceReport;

use crate::utils::write_output;

pub fn run_stats(matches: &ArgMatches) -> Result<()> {
    let sequences = matches
        .get_one::<String>("sequences")
        .context("A path to a sequence file is required.")?;

    let report = SequenceReport::from_path(sequences)
        .with_context(|| format!("Failed to analyze {}", sequences))?;

    write_output(&report, matches.get_one::<String>("output"))
}
