use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use crate::consts::JSON_INDENT;
use crate::error::Result;

pub trait JsonWrite {
    ///
    /// Write data to disk as pretty-printed JSON, replacing any existing file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_json<T: AsRef<Path>>(&self, path: T) -> Result<()>;
}

impl<S: Serialize> JsonWrite for S {
    fn write_json<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        let formatter = PrettyFormatter::with_indent(JSON_INDENT);
        let mut serializer = Serializer::with_formatter(&mut writer, formatter);
        self.serialize(&mut serializer)?;

        writer.flush()?;
        Ok(())
    }
}

///
/// Writes participant results into the results directory.
///
pub struct Loader {
    results_path: PathBuf,
}

impl Loader {
    pub fn new<P: Into<PathBuf>>(results_path: P) -> Self {
        Loader {
            results_path: results_path.into(),
        }
    }

    ///
    /// Save `data` as `<results_path>/<file_name>` and return the full path.
    ///
    pub fn load<S: Serialize>(&self, data: &S, file_name: &str) -> Result<PathBuf> {
        let output_file = self.results_path.join(file_name);
        data.write_json(&output_file)?;
        Ok(output_file)
    }
}
