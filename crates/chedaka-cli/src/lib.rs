// chedaka-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use chedaka::{Chedaka, Config};

/// File whose presence marks a directory as a chedaka data directory.
const RULES_FILE: &str = "sandhi-rules.csv";

/// Search for a data directory and load an engine from it.
///
/// Search order:
/// 1. `data_path` argument (if provided)
/// 2. `CHEDAKA_DATA_PATH` environment variable
/// 3. `~/.chedaka`
/// 4. Current working directory
pub fn load_engine(data_path: Option<&str>) -> Result<Chedaka, String> {
    let search_paths = build_search_paths(data_path);

    for dir in &search_paths {
        if dir.join(RULES_FILE).is_file() {
            return Chedaka::new(Config::new(dir))
                .map_err(|e| format!("failed to load data from {}: {e}", dir.display()));
        }
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        RULES_FILE,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of directories to search for data files.
fn build_search_paths(data_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = data_path {
        paths.push(PathBuf::from(p));
    }

    // 2. CHEDAKA_DATA_PATH environment variable
    if let Ok(env_path) = std::env::var("CHEDAKA_DATA_PATH") {
        paths.push(PathBuf::from(&env_path));
    }

    // 3. Home directory
    if let Some(home) = home_dir() {
        paths.push(home.join(".chedaka"));
    }

    // 4. Current directory (fallback for local development)
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--data-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(data_path, remaining_args)`.
pub fn parse_data_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut data_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--data-path=") {
            data_path = Some(val.to_string());
        } else if arg == "--data-path" || arg == "-d" {
            if i + 1 < args.len() {
                data_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (data_path, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
