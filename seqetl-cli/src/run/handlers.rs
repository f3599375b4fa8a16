use std::fs::read_dir;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use log::{error, info};

use seqetl_pipeline::{EtlManager, PipelineConfig, PipelineInput};

use crate::utils::load_config;

pub fn run_etl(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .context("A path to an input descriptor is required.")?;
    let config = load_config(matches.get_one::<String>("config"))?;

    let descriptors = input_descriptors(Path::new(input))?;
    if descriptors.is_empty() {
        bail!("No input descriptors found in {}", input);
    }

    let total = descriptors.len();
    let mut failed = 0;

    for descriptor in &descriptors {
        match process_descriptor(descriptor, &config) {
            Ok(output) => info!("{} -> {}", descriptor.display(), output.display()),
            Err(e) => {
                error!("{}: {:#}", descriptor.display(), e);
                failed += 1;
            }
        }
    }

    info!("Processed {} inputs, {} failed", total, failed);

    if failed > 0 {
        bail!("{} of {} inputs failed", failed, total);
    }

    Ok(())
}

fn process_descriptor(descriptor: &Path, config: &PipelineConfig) -> Result<PathBuf> {
    let input = PipelineInput::try_from(descriptor)?;
    let output = EtlManager::new(input, config.clone()).process()?;
    Ok(output)
}

///
/// A single descriptor file, or every `*.json` file in a directory, sorted.
///
fn input_descriptors(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        bail!("Input path does not exist: {}", path.display());
    }

    let mut descriptors = Vec::new();
    for entry in read_dir(path).with_context(|| format!("Failed to read {}", path.display()))? {
        let entry_path = entry?.path();
        if entry_path.is_file() && entry_path.extension().is_some_and(|ext| ext == "json") {
            descriptors.push(entry_path);
        }
    }
    descriptors.sort();

    Ok(descriptors)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::*;
    use std::fs::{File, create_dir};

    #[rstest]
    fn test_input_descriptors_single_file() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("input.json");
        File::create(&path).unwrap();

        assert_eq!(input_descriptors(&path).unwrap(), vec![path]);
    }

    #[rstest]
    fn test_input_descriptors_directory() {
        let tempdir = tempfile::tempdir().unwrap();
        for name in ["b.json", "a.json", "notes.txt"] {
            File::create(tempdir.path().join(name)).unwrap();
        }
        create_dir(tempdir.path().join("nested.json")).unwrap();

        assert_eq!(
            input_descriptors(tempdir.path()).unwrap(),
            vec![tempdir.path().join("a.json"), tempdir.path().join("b.json")]
        );
    }

    #[rstest]
    fn test_input_descriptors_missing() {
        assert!(input_descriptors(Path::new("/definitely/not/here")).is_err());
    }
}
