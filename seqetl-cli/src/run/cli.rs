use clap::{Arg, Command};

pub const RUN_CMD: &str = "run";

pub fn create_run_cli() -> Command {
    Command::new(RUN_CMD)
        .about("Run the full ETL pipeline for one or more participant directories.")
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .required(true)
                .help("Path to an input descriptor JSON file, or a directory of them"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .required(false)
                .help("Path to a TOML config file (defaults are used when omitted)"),
        )
}
