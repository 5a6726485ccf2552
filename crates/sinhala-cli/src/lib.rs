// sinhala-cli: shared utilities for CLI tools.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;

use sinhala_spell::config::CONFIG_FILE;
use sinhala_spell::{ResourceConfig, SinhalaConfig, SinhalaHandle};

/// Environment variable naming the data directory.
pub const DATA_PATH_ENV: &str = "SINHALA_DATA_PATH";

/// Data directory name under the home directory.
const HOME_DATA_DIR: &str = ".sinhala-spell";

/// Options shared by every tool.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommonArgs {
    pub data_dir: Option<String>,
    pub config: Option<String>,
    pub json: bool,
}

/// Initialize logging. The level is taken from `RUST_LOG` and defaults to
/// warnings only.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Create a SinhalaHandle from an explicit config file or a data directory.
///
/// With `--config` the file is used as is. Otherwise the first directory
/// containing the resource files is used, searched in this order:
/// 1. `--data-dir` argument (if provided)
/// 2. `SINHALA_DATA_PATH` environment variable
/// 3. `~/.sinhala-spell`
/// 4. Current working directory
///
/// A `sinhala-spell.json` inside the chosen directory supplies options.
pub fn load_handle(args: &CommonArgs) -> Result<SinhalaHandle, String> {
    let config = match &args.config {
        Some(path) => SinhalaConfig::from_json_file(path).map_err(|e| e.to_string())?,
        None => find_config(args.data_dir.as_deref())?,
    };
    log::info!("dictionary: {}", config.resources.dictionary_path.display());
    SinhalaHandle::from_config(&config).map_err(|e| format!("failed to create SinhalaHandle: {e}"))
}

fn find_config(data_dir: Option<&str>) -> Result<SinhalaConfig, String> {
    let search_paths = build_search_paths(data_dir);
    for dir in &search_paths {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.is_file() {
            return SinhalaConfig::from_json_file(&config_path).map_err(|e| e.to_string());
        }
        let resources = ResourceConfig::from_dir(dir);
        if resources.missing_files().is_empty() {
            return Ok(SinhalaConfig::new(resources));
        }
    }

    Err(format!(
        "could not find the resource files in any of the search paths:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of directories to search for resource files.
fn build_search_paths(data_dir: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = data_dir {
        paths.push(PathBuf::from(p));
    }
    if let Ok(env_path) = std::env::var(DATA_PATH_ENV) {
        paths.push(PathBuf::from(env_path));
    }
    if let Some(home) = home_dir() {
        paths.push(home.join(HOME_DATA_DIR));
    }
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Extract `--data-dir`/`-d`, `--config`/`-c` and `--json` from the
/// command line.
///
/// Returns `(common, remaining_args)`.
pub fn parse_common_args(args: &[String]) -> Result<(CommonArgs, Vec<String>), String> {
    let mut common = CommonArgs::default();
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--data-dir=") {
            common.data_dir = Some(val.to_string());
        } else if let Some(val) = arg.strip_prefix("--config=") {
            common.config = Some(val.to_string());
        } else if arg == "--data-dir" || arg == "-d" {
            common.data_dir = Some(value_for(arg, iter.next())?);
        } else if arg == "--config" || arg == "-c" {
            common.config = Some(value_for(arg, iter.next())?);
        } else if arg == "--json" {
            common.json = true;
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((common, remaining))
}

fn value_for(flag: &str, value: Option<&String>) -> Result<String, String> {
    value
        .cloned()
        .ok_or_else(|| format!("{flag} requires a value"))
}

/// Positional arguments left after option parsing. Any remaining argument
/// that looks like an option is an error.
pub fn positional(args: &[String]) -> Result<Vec<String>, String> {
    match args.iter().find(|a| a.starts_with('-')) {
        Some(flag) => Err(format!("unknown option: {flag}")),
        None => Ok(args.to_vec()),
    }
}

/// Positional arguments joined as one input, or stdin lines when there are
/// none. Blank lines are skipped.
pub fn inputs(positional: Vec<String>, join_args: bool) -> Vec<String> {
    if !positional.is_empty() {
        return if join_args {
            vec![positional.join(" ")]
        } else {
            positional
        };
    }
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        match line {
            Ok(l) if !l.trim().is_empty() => lines.push(l.trim().to_string()),
            Ok(_) => {}
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        }
    }
    lines
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
