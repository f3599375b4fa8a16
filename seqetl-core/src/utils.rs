use std::ffi::OsStr;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

use flate2::read::MultiGzDecoder;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> std::io::Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path)?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    let reader = BufReader::new(file);

    Ok(reader)
}

///
/// Lowercased extension of a file name, ignoring a trailing `.gz`.
///
/// `sample.TXT` gives `txt`, `sample.txt.gz` gives `txt`, `sample` gives `None`.
///
pub fn file_extension(path: &Path) -> Option<String> {
    let path = match path.extension() == Some(OsStr::new("gz")) {
        true => Path::new(path.file_stem()?),
        false => path,
    };

    path.extension()
        .and_then(OsStr::to_str)
        .map(|ext| ext.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    use flate2::write::GzEncoder;
    use flate2::Compression;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::path::PathBuf;

    #[rstest]
    #[case("sample.txt", Some("txt"))]
    #[case("sample.TXT", Some("txt"))]
    #[case("nested/dir/sample.json", Some("json"))]
    #[case("sample.txt.gz", Some("txt"))]
    #[case("sample", None)]
    fn test_file_extension(#[case] path: &str, #[case] expected: Option<&str>) {
        let result = file_extension(&PathBuf::from(path));
        assert_eq!(result.as_deref(), expected);
    }

    #[rstest]
    fn test_dynamic_reader_reads_gzip() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("seqs.txt.gz");

        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        encoder.write_all(b"ATCG\nGGCC\n").unwrap();
        encoder.finish().unwrap();

        let lines: Vec<String> = get_dynamic_reader(&path)
            .unwrap()
            .lines()
            .map(|l| l.unwrap())
            .collect();
        assert_eq!(lines, vec!["ATCG".to_string(), "GGCC".to_string()]);
    }

    #[rstest]
    fn test_dynamic_reader_missing_file() {
        let result = get_dynamic_reader(Path::new("does/not/exist.txt"));
        assert!(result.is_err());
    }
}
