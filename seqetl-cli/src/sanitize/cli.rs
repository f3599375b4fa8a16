use clap::{Arg, Command};

pub const SANITIZE_CMD: &str = "sanitize";

pub fn create_sanitize_cli() -> Command {
    Command::new(SANITIZE_CMD)
        .about("Validate a participant metadata JSON file and strip its sensitive fields.")
        .arg(
            Arg::new("metadata")
                .required(true)
                .help("Path to the metadata JSON file"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .required(false)
                .help("Path to a TOML config file (defaults are used when omitted)"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .required(false)
                .help("Where to write the sanitized JSON (default: stdout)"),
        )
}
