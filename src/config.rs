use log::debug;
use serde::Deserialize;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::{fs::File, io::Read};

use crate::cli::CliArgs;

pub(crate) const DEFAULT_SEPARATORS: &[&str] = &["", "@", "*", "#", ".", "_", "-"];
pub(crate) const DEFAULT_MIN_LENGTH: usize = 8;
pub(crate) const DEFAULT_MAX_LENGTH: usize = 16;
pub(crate) const DEFAULT_OUTPUT: &str = "passwords.txt";
pub(crate) const DEFAULT_YEAR_FROM: u16 = 1990;
pub(crate) const DEFAULT_YEAR_TO: u16 = 2025;

/// Optional overrides read from a YAML file. Every field may be omitted;
/// command-line flags win over file values.
#[derive(Deserialize, Debug, Default)]
pub(crate) struct FileConfig {
    pub(crate) min_length: Option<usize>,
    pub(crate) max_length: Option<usize>,
    pub(crate) separators: Option<String>,
    pub(crate) include_prefixes: Option<bool>,
    pub(crate) output: Option<PathBuf>,
    pub(crate) year_from: Option<u16>,
    pub(crate) year_to: Option<u16>,
    pub(crate) sorted: Option<bool>,
}

/// Fully resolved generation settings, validated before any generation runs.
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) min_length: usize,
    pub(crate) max_length: usize,
    pub(crate) separators: Vec<String>,
    pub(crate) include_prefixes: bool,
    pub(crate) year_range: RangeInclusive<u16>,
    pub(crate) sort_output: bool,
    pub(crate) output: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            separators: DEFAULT_SEPARATORS.iter().map(|s| s.to_string()).collect(),
            include_prefixes: false,
            year_range: DEFAULT_YEAR_FROM..=DEFAULT_YEAR_TO,
            sort_output: true,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

pub(crate) fn read_config(config_path: &PathBuf) -> Result<FileConfig, String> {
    let path_string = config_path.to_string_lossy();
    debug!("Reading config at: {path_string}");

    let mut config_data: String = String::new();
    let mut config_file: File = File::open(config_path)
        .map_err(|e| format!("Failed to read configuration file '{}': {}", path_string, e))?;
    config_file
        .read_to_string(&mut config_data)
        .map_err(|e| format!("Failed to read configuration file '{}': {}", path_string, e))?;

    serde_yaml::from_str(&config_data)
        .map_err(|e| format!("Failed to parse configuration '{}': {}", path_string, e))
}

/// Merge defaults, the optional config file and command-line flags into
/// validated settings. Flags take precedence over the file.
pub(crate) fn resolve_settings(args: &CliArgs) -> Result<Settings, String> {
    let file = match &args.config {
        Some(path) => read_config(path)?,
        None => FileConfig::default(),
    };

    let mut settings = Settings {
        min_length: args
            .min_length
            .or(file.min_length)
            .unwrap_or(DEFAULT_MIN_LENGTH),
        max_length: args
            .max_length
            .or(file.max_length)
            .unwrap_or(DEFAULT_MAX_LENGTH),
        include_prefixes: args.include_prefixes || file.include_prefixes.unwrap_or(false),
        year_range: file.year_from.unwrap_or(DEFAULT_YEAR_FROM)
            ..=file.year_to.unwrap_or(DEFAULT_YEAR_TO),
        sort_output: !args.unsorted && file.sorted.unwrap_or(true),
        output: args
            .out
            .clone()
            .or(file.output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
        ..Settings::default()
    };

    if let Some(symbols) = args.symbols.as_deref().or(file.separators.as_deref()) {
        settings.separators = separator_catalog(symbols);
    }

    if settings.min_length > settings.max_length {
        return Err(format!(
            "Invalid length window: min_length ({}) exceeds max_length ({})",
            settings.min_length, settings.max_length
        ));
    }
    if settings.year_range.is_empty() {
        return Err(format!(
            "Invalid year range: {} exceeds {}",
            settings.year_range.start(),
            settings.year_range.end()
        ));
    }

    Ok(settings)
}

/// Turn a symbol string like "@*&#" into a separator catalog. The empty
/// separator is always present, and duplicate characters collapse.
fn separator_catalog(symbols: &str) -> Vec<String> {
    let mut separators: Vec<String> = vec![String::new()];
    for ch in symbols.chars() {
        let sep = ch.to_string();
        if !separators.contains(&sep) {
            separators.push(sep);
        }
    }
    separators
}
