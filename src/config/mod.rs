pub mod merge;
pub mod schema;

pub use schema::*;

use crate::cli::Cli;
use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// Load configuration by merging global, project, and CLI sources.
/// Precedence: CLI > project config > global config > defaults.
///
/// The project config is `--config` when given, otherwise `./critique.toml`.
/// Missing implicit config files are handled gracefully (defaults apply).
pub fn load_config(cli: &Cli) -> Result<AppConfig, ConfigError> {
    load_layers(cli, global_config_path().as_deref(), Path::new("."))
}

/// Same as [`load_config`] with the global config path and project directory
/// made explicit.
pub fn load_layers(
    cli: &Cli,
    global_path: Option<&Path>,
    project_dir: &Path,
) -> Result<AppConfig, ConfigError> {
    // Layer 1: Global config (~/.config/critique/critique.toml or platform equivalent)
    let global = match global_path {
        Some(p) => load_toml_file(p).unwrap_or_default(),
        None => {
            tracing::debug!("Could not determine global config directory");
            PartialConfig::default()
        }
    };

    // Layer 2: Project config. An explicit --config must exist and parse.
    let project = match &cli.config {
        Some(path) => load_explicit_file(path)?,
        None => load_toml_file(&project_dir.join("critique.toml")).unwrap_or_default(),
    };

    // Layer 3: CLI args
    let cli_partial = cli_to_partial(cli);

    Ok(cli_partial
        .with_fallback(project)
        .with_fallback(global)
        .finalize())
}

/// Read the API key from the environment variable named in the config.
/// `main` loads `.env` into the environment before this runs.
pub fn resolve_api_key(config: &AppConfig) -> Result<String, ConfigError> {
    match std::env::var(&config.api_key_env) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(ConfigError::MissingApiKey {
            var: config.api_key_env.clone(),
        }),
    }
}

/// Load and parse a TOML config file into a PartialConfig.
/// Returns None on file-not-found; parse errors are logged and skipped.
fn load_toml_file(path: &Path) -> Option<PartialConfig> {
    match std::fs::read_to_string(path) {
        Ok(contents) => match parse_config(path, &contents) {
            Ok(partial) => {
                tracing::info!("Loaded config from {}", path.display());
                Some(partial)
            }
            Err(e) => {
                tracing::warn!("Config parse error: {}", e);
                None
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            None
        }
        Err(e) => {
            tracing::warn!("Failed to read config at {}: {}", path.display(), e);
            None
        }
    }
}

fn load_explicit_file(path: &Path) -> Result<PartialConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    let partial = parse_config(path, &contents)?;
    tracing::info!("Loaded config from {}", path.display());
    Ok(partial)
}

fn parse_config(path: &Path, contents: &str) -> Result<PartialConfig, ConfigError> {
    toml::from_str::<ConfigFile>(contents)
        .map(|file| file.to_partial())
        .map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Resolve the platform-specific global config path.
/// Linux: ~/.config/critique/critique.toml
/// macOS: ~/Library/Application Support/critique/critique.toml
fn global_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "critique")
        .map(|dirs| dirs.config_dir().join("critique.toml"))
}

/// Convert CLI arguments to a PartialConfig for merging.
/// `--model` applies to every role, so it also fills the role overrides.
fn cli_to_partial(cli: &Cli) -> PartialConfig {
    PartialConfig {
        model: cli.model.clone(),
        reviews_dir: cli.reviews_dir.clone(),
        junior_model: cli.model.clone(),
        senior_model: cli.model.clone(),
        manager_model: cli.model.clone(),
        planner_notes: cli.planner_notes.then_some(true),
        ..Default::default()
    }
}
