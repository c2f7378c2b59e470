//! Algorithms harness command line
//!
//! Runs the selected search and sort algorithms over every line of an input
//! file and prints a timing report per algorithm.

use std::path::Path;
use std::process;
use clap::{Arg, ArgAction, Command};

use algo_harness::{
    config::{HarnessConfig, HarnessConfigBuilder, Verbosity},
    error::{HarnessError, HarnessResult},
    generate::{self, GenerateSpec},
    Algorithm, EXIT_SUCCESS,
};

fn main() {
    let result = run();
    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("harness: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn run() -> HarnessResult<i32> {
    let matches = build_cli().get_matches();

    if let Some(lines) = matches.get_one::<usize>("generate") {
        let spec = parse_generate_spec(&matches, *lines);
        let items = generate::generate_work_items(&spec)?;
        print!("{}", generate::to_input_text(&items));
        return Ok(EXIT_SUCCESS);
    }

    let config = parse_config_from_matches(&matches)?;
    init_tracing(config.verbosity);

    let reports = algo_harness::run(&config)?;
    println!("{}", reports.join("\n\n"));
    Ok(EXIT_SUCCESS)
}

/// Install the diagnostic subscriber on stderr; `RUST_LOG` overrides the level
fn init_tracing(verbosity: Verbosity) {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(verbosity.filter_directive())
            }),
        )
        .try_init();
}

fn build_cli() -> Command {
    Command::new("harness")
        .version(env!("CARGO_PKG_VERSION"))
        .override_usage("harness [OPTION]... FILE")
        .about("Run search and sort algorithms over integer arrays and time them")
        .long_about("Run search and sort algorithms over integer arrays and time them.\n\nFILE holds one test case per line as whitespace-separated integers. Each selected algorithm runs once over every line and a pass/fail report with per-test timings is printed.")

        .arg(Arg::new("file")
            .help("Input file with one array per line")
            .value_name("FILE")
            .required_unless_present("generate"))

        // Algorithm selection
        .arg(Arg::new("algorithm")
            .short('a')
            .long("algorithm")
            .help("Algorithm to run (repeatable; default: all)")
            .long_help("Algorithm to run. May be given more than once; suites run in the given order.\n\nSearches: linear_search, binary_search\nSorts: bubble_sort, sinking_sort, selection_sort, insertion_sort, merge_sort, quick_sort")
            .value_name("NAME")
            .action(ArgAction::Append))
        .arg(Arg::new("target")
            .short('t')
            .long("target")
            .help("Value the search algorithms look for")
            .value_name("INT")
            .allow_negative_numbers(true)
            .value_parser(clap::value_parser!(i64)))

        // Input handling
        .arg(Arg::new("stop-at-blank")
            .long("stop-at-blank")
            .help("Stop reading input at the first blank line")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("lenient")
            .long("lenient")
            .help("Score malformed lines as failed tests instead of aborting")
            .action(ArgAction::SetTrue))

        // Output
        .arg(Arg::new("millis")
            .long("millis")
            .help("Report times in milliseconds instead of microseconds")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("verbose")
            .short('v')
            .long("verbose")
            .help("Log harness events to stderr; twice for algorithm traces")
            .action(ArgAction::Count))
        .arg(Arg::new("quiet")
            .short('q')
            .long("quiet")
            .help("Only log errors")
            .conflicts_with("verbose")
            .action(ArgAction::SetTrue))

        // Input generation
        .arg(Arg::new("generate")
            .long("generate")
            .help("Print LINES random arrays in the input format and exit")
            .value_name("LINES")
            .conflicts_with("file")
            .value_parser(clap::value_parser!(usize)))
        .arg(Arg::new("width")
            .long("width")
            .help("Values per generated line")
            .value_name("N")
            .requires("generate")
            .value_parser(clap::value_parser!(usize)))
        .arg(Arg::new("min")
            .long("min")
            .help("Smallest generated value")
            .value_name("INT")
            .requires("generate")
            .allow_negative_numbers(true)
            .value_parser(clap::value_parser!(i64)))
        .arg(Arg::new("max")
            .long("max")
            .help("Largest generated value")
            .value_name("INT")
            .requires("generate")
            .allow_negative_numbers(true)
            .value_parser(clap::value_parser!(i64)))
        .arg(Arg::new("seed")
            .long("seed")
            .help("Seed for generated values")
            .value_name("SEED")
            .requires("generate")
            .value_parser(clap::value_parser!(u64)))
}

fn parse_generate_spec(matches: &clap::ArgMatches, lines: usize) -> GenerateSpec {
    let defaults = GenerateSpec::default();
    GenerateSpec {
        lines,
        width: matches.get_one::<usize>("width").copied().unwrap_or(defaults.width),
        min: matches.get_one::<i64>("min").copied().unwrap_or(defaults.min),
        max: matches.get_one::<i64>("max").copied().unwrap_or(defaults.max),
        seed: matches.get_one::<u64>("seed").copied().unwrap_or(defaults.seed),
    }
}

/// Parse configuration from command line matches
fn parse_config_from_matches(matches: &clap::ArgMatches) -> HarnessResult<HarnessConfig> {
    let file = matches
        .get_one::<String>("file")
        .ok_or_else(|| HarnessError::invalid_arguments("expected exactly one input file"))?;

    // The input must be an existing regular file before any harness is built
    let path = Path::new(file);
    if !path.exists() {
        return Err(HarnessError::file_not_found(file));
    }
    if !path.is_file() {
        return Err(HarnessError::is_directory(file));
    }

    let mut builder = HarnessConfigBuilder::new().input_file(file.as_str());

    if let Some(names) = matches.get_many::<String>("algorithm") {
        for name in names {
            builder = builder.algorithm(name.parse::<Algorithm>()?);
        }
    }
    if let Some(target) = matches.get_one::<i64>("target") {
        builder = builder.target(*target);
    }
    if matches.get_flag("stop-at-blank") {
        builder = builder.stop_at_blank();
    }
    if matches.get_flag("lenient") {
        builder = builder.lenient();
    }
    if matches.get_flag("millis") {
        builder = builder.time_unit(algo_harness::config::TimeUnit::Millis);
    }

    let verbosity = if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else {
        Verbosity::from_occurrences(matches.get_count("verbose"))
    };

    builder.verbosity(verbosity).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use algo_harness::config::{BlankLinePolicy, ParsePolicy, TimeUnit};
    use std::fs;
    use tempfile::TempDir;

    fn input_file(temp_dir: &TempDir) -> String {
        let path = temp_dir.path().join("input.txt");
        fs::write(&path, "3 1 2\n5 4\n").expect("Failed to write test input");
        path.to_string_lossy().to_string()
    }

    #[test]
    fn test_parse_basic_config() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file = input_file(&temp_dir);
        let matches = build_cli()
            .try_get_matches_from([
                "harness",
                "-a",
                "quick_sort",
                "-a",
                "binary",
                "-t",
                "-3",
                file.as_str(),
            ])
            .expect("Failed to parse test arguments");

        let config = parse_config_from_matches(&matches).expect("Failed to parse test config");
        assert_eq!(config.algorithms, vec![Algorithm::QuickSort, Algorithm::BinarySearch]);
        assert_eq!(config.target, Some(-3));
        assert_eq!(config.blank_lines, BlankLinePolicy::Skip);
        assert_eq!(config.verbosity, Verbosity::Normal);
    }

    #[test]
    fn test_parse_flags() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file = input_file(&temp_dir);
        let matches = build_cli()
            .try_get_matches_from([
                "harness",
                "--stop-at-blank",
                "--lenient",
                "--millis",
                "-vv",
                file.as_str(),
            ])
            .expect("Failed to parse test arguments");

        let config = parse_config_from_matches(&matches).expect("Failed to parse test config");
        assert_eq!(config.algorithms.len(), 8);
        assert_eq!(config.blank_lines, BlankLinePolicy::Stop);
        assert_eq!(config.parse_policy, ParsePolicy::Lenient);
        assert_eq!(config.time_unit, TimeUnit::Millis);
        assert_eq!(config.verbosity, Verbosity::Trace);
    }

    #[test]
    fn test_missing_file_is_access_error() {
        let matches = build_cli()
            .try_get_matches_from(["harness", "/definitely/not/here.txt"])
            .expect("Failed to parse test arguments");
        let err = parse_config_from_matches(&matches).unwrap_err();
        assert!(err.is_access_error());
    }

    #[test]
    fn test_unknown_algorithm() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file = input_file(&temp_dir);
        let matches = build_cli()
            .try_get_matches_from(["harness", "-a", "bogo_sort", file.as_str()])
            .expect("Failed to parse test arguments");
        assert!(matches!(
            parse_config_from_matches(&matches),
            Err(HarnessError::UnknownAlgorithm { .. })
        ));
    }

    #[test]
    fn test_argument_count() {
        assert!(build_cli().try_get_matches_from(["harness"]).is_err());
        assert!(build_cli().try_get_matches_from(["harness", "a.txt", "b.txt"]).is_err());
    }

    #[test]
    fn test_generate_rejects_input_file() {
        let result = build_cli().try_get_matches_from(["harness", "--generate", "3", "cases.txt"]);
        let err = result.expect_err("--generate with FILE should not parse");
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_generate_options() {
        let matches = build_cli()
            .try_get_matches_from([
                "harness", "--generate", "3", "--width", "4", "--min", "-5", "--seed", "11",
            ])
            .expect("Failed to parse test arguments");
        let lines = *matches.get_one::<usize>("generate").expect("generate missing");
        let spec = parse_generate_spec(&matches, lines);
        assert_eq!(spec.lines, 3);
        assert_eq!(spec.width, 4);
        assert_eq!(spec.min, -5);
        assert_eq!(spec.max, 20);
        assert_eq!(spec.seed, 11);
    }
}
