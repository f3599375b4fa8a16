mod run;
mod sanitize;
mod stats;
mod utils;

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::LevelFilter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "seqetl";

    pub const VERBOSE_FLAG: &str = "verbose";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Extract, transform and load participant DNA sequence and metadata files.")
        .subcommand_required(true)
        .arg(
            Arg::new(consts::VERBOSE_FLAG)
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log debug output (RUST_LOG overrides this)"),
        )
        .subcommand(run::cli::create_run_cli())
        .subcommand(stats::cli::create_stats_cli())
        .subcommand(sanitize::cli::create_sanitize_cli())
}

fn init_logger(matches: &ArgMatches) {
    let level = if matches.get_flag(consts::VERBOSE_FLAG) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logger(&matches);

    match matches.subcommand() {
        //
        // RUN
        //
        Some((run::cli::RUN_CMD, matches)) => {
            run::handlers::run_etl(matches)?;
        }

        //
        // STATS
        //
        Some((stats::cli::STATS_CMD, matches)) => {
            stats::handlers::run_stats(matches)?;
        }

        //
        // SANITIZE
        //
        Some((sanitize::cli::SANITIZE_CMD, matches)) => {
            sanitize::handlers::run_sanitize(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
