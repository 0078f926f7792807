use std::path::PathBuf;

use clap::{Arg, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("reap")
        .about("Delete old folders in a specified directory")
        .arg(
            Arg::new("n-days")
                .long("n-days")
                .value_name("DAYS")
                .value_parser(value_parser!(u64))
                .required(true)
                .help("Number of days (days older than current date) to determine which folders to delete"),
        )
        .arg(
            Arg::new("folder-name")
                .long("folder-name")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .required(true)
                .help("Full path to the directory where the timestamp-named folders are located"),
        )
}
