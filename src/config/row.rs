use crate::RowParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Default, Deserialize)]
pub struct OutputConfig {
    pub json_out: Option<PathBuf>,
    pub debug_dir: Option<PathBuf>,
}

#[derive(Clone, Deserialize)]
pub struct RuntimeConfig {
    pub input_path: PathBuf,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub row_params: RowParams,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: RuntimeConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}

/// Parses demo CLI arguments:
/// `<input> [--config cfg.json] [--json report.json] [--debug-dir dir]`.
/// A config file provides the defaults; explicit flags override it.
pub fn parse_cli(program: &str) -> Result<RuntimeConfig, String> {
    let usage =
        format!("Usage: {program} <input-image> [--config cfg.json] [--json report.json] [--debug-dir dir]");

    let mut input_path: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut json_out: Option<PathBuf> = None;
    let mut debug_dir: Option<PathBuf> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => config_path = Some(next_value(&mut args, "--config")?),
            "--json" => json_out = Some(next_value(&mut args, "--json")?),
            "--debug-dir" => debug_dir = Some(next_value(&mut args, "--debug-dir")?),
            "--help" | "-h" => return Err(usage),
            other if !other.starts_with('-') => input_path = Some(PathBuf::from(other)),
            other => return Err(format!("Unknown flag {other}\n{usage}")),
        }
    }

    let mut config = match config_path {
        Some(path) => load_config(&path)?,
        None => RuntimeConfig {
            input_path: PathBuf::new(),
            output: OutputConfig::default(),
            row_params: RowParams::default(),
        },
    };
    if let Some(path) = input_path {
        config.input_path = path;
    }
    if config.input_path.as_os_str().is_empty() {
        return Err(usage);
    }
    if json_out.is_some() {
        config.output.json_out = json_out;
    }
    if debug_dir.is_some() {
        config.output.debug_dir = debug_dir;
    }
    Ok(config)
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<PathBuf, String> {
    args.next()
        .map(PathBuf::from)
        .ok_or_else(|| format!("{flag} requires a value"))
}
