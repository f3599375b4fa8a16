use clap::{Arg, Command};

pub const STATS_CMD: &str = "stats";

pub fn create_stats_cli() -> Command {
    Command::new(STATS_CMD)
        .about("Compute GC content, codon frequencies and longest common substrings for a sequence file.")
        .arg(
            Arg::new("sequences")
                .required(true)
                .help("Path to a DNA sequence text file, one sequence per line (may be gzipped)"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .required(false)
                .help("Where to write the JSON report (default: stdout)"),
        )
}
