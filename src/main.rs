//! Command line entry point: `rowsort [OPTION]... FILE`

use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use env_logger::Env;

use rowsort::{
    config::{SortConfig, SortConfigBuilder},
    error::{SortError, SortResult},
    sort, SortOutcome, EXIT_SUCCESS,
};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    match run(std::env::args()) {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("rowsort: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn run<I>(args: I) -> SortResult<i32>
where
    I: IntoIterator<Item = String>,
{
    let matches = match build_cli().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => return Err(SortError::usage(e.to_string().trim_end())),
    };

    let config = parse_config_from_matches(&matches);
    let path = input_path(&matches)?;

    match sort(&config, &path)? {
        SortOutcome::AlreadySorted => println!("{}: already sorted", path.display()),
        SortOutcome::Written { .. } => {}
    }
    Ok(EXIT_SUCCESS)
}

fn build_cli() -> Command {
    Command::new("rowsort")
        .version(env!("CARGO_PKG_VERSION"))
        .override_usage("rowsort [OPTION]... FILE")
        .about("Sort the lines of a text file in place")
        .disable_help_flag(true) // We use -h for human-numeric-sort
        .disable_version_flag(true)
        .arg(Arg::new("file")
            .help("File to sort; it is rewritten with the result")
            .required(true)
            .num_args(1)
            .value_parser(value_parser!(PathBuf))
            .value_name("FILE"))
        .arg(Arg::new("key")
            .short('k')
            .long("key")
            .help("Sort by the N-th whitespace-separated field (1-based); 0 uses every field in turn")
            .value_name("N")
            .default_value("0")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("numeric-sort")
            .short('n')
            .long("numeric-sort")
            .help("Compare keys that are integers by value")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("human-numeric-sort")
            .short('h')
            .long("human-numeric-sort")
            .help("Compare human readable numbers (e.g., 2K 1G)")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("month-sort")
            .short('M')
            .long("month-sort")
            .help("Compare full English month names in calendar order")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("reverse")
            .short('r')
            .long("reverse")
            .help("Reverse the sorted result")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("unique")
            .short('u')
            .long("unique")
            .help("Drop repeated lines, keeping the first")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("ignore-blanks")
            .short('b')
            .long("ignore-blanks")
            .help("Ignore leading and trailing blanks when extracting keys")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("check")
            .short('c')
            .long("check")
            .help("Leave the file untouched if it is already sorted")
            .action(ArgAction::SetTrue))
        // Add explicit help and version options since we disabled the automatic ones
        .arg(Arg::new("help")
            .long("help")
            .help("Display this help and exit")
            .action(ArgAction::Help))
        .arg(Arg::new("version")
            .long("version")
            .help("Output version information and exit")
            .action(ArgAction::Version))
}

/// Parse configuration from command line matches
fn parse_config_from_matches(matches: &ArgMatches) -> SortConfig {
    let mut builder = SortConfigBuilder::new()
        .key_column(matches.get_one::<usize>("key").copied().unwrap_or(0));

    if matches.get_flag("numeric-sort") {
        builder = builder.numeric();
    }
    if matches.get_flag("human-numeric-sort") {
        builder = builder.human_numeric();
    }
    if matches.get_flag("month-sort") {
        builder = builder.month();
    }
    if matches.get_flag("reverse") {
        builder = builder.reverse();
    }
    if matches.get_flag("unique") {
        builder = builder.unique();
    }
    if matches.get_flag("ignore-blanks") {
        builder = builder.ignore_blanks();
    }
    if matches.get_flag("check") {
        builder = builder.check();
    }

    builder.build()
}

fn input_path(matches: &ArgMatches) -> SortResult<PathBuf> {
    matches
        .get_one::<PathBuf>("file")
        .cloned()
        .ok_or_else(|| SortError::usage("missing FILE operand"))
}
