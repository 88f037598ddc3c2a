use serde::Deserialize;
use std::path::PathBuf;

/// The TOML file structure for critique.toml.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub general: Option<GeneralConfig>,
    pub auth: Option<AuthConfig>,
    pub agents: Option<AgentsConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Deserialize)]
pub struct GeneralConfig {
    pub model: Option<String>,
    pub reviews_dir: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AuthConfig {
    /// Name of the environment variable holding the API key.
    pub api_key_env: Option<String>,
}

/// Per-role model overrides. Unset roles use `general.model`.
#[derive(Debug, Deserialize)]
pub struct AgentsConfig {
    pub junior_model: Option<String>,
    pub senior_model: Option<String>,
    pub manager_model: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    pub planner_notes: Option<bool>,
    pub session_log: Option<bool>,
}

impl ConfigFile {
    pub fn to_partial(&self) -> PartialConfig {
        let general = self.general.as_ref();
        let agents = self.agents.as_ref();
        let output = self.output.as_ref();

        PartialConfig {
            model: general.and_then(|g| g.model.clone()),
            reviews_dir: general
                .and_then(|g| g.reviews_dir.as_ref())
                .map(PathBuf::from),
            api_key_env: self.auth.as_ref().and_then(|a| a.api_key_env.clone()),
            junior_model: agents.and_then(|a| a.junior_model.clone()),
            senior_model: agents.and_then(|a| a.senior_model.clone()),
            manager_model: agents.and_then(|a| a.manager_model.clone()),
            planner_notes: output.and_then(|o| o.planner_notes),
            session_log: output.and_then(|o| o.session_log),
        }
    }
}

/// Fully-resolved runtime configuration. All fields have values.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub model: String,
    pub reviews_dir: PathBuf,
    pub api_key_env: String,
    pub junior_model: String,
    pub senior_model: String,
    pub manager_model: String,
    pub planner_notes: bool,
    pub session_log: bool,
}

/// Partial config used during merge. All fields are Option so that
/// missing fields don't override lower-priority values.
#[derive(Debug, Clone, Default)]
pub struct PartialConfig {
    pub model: Option<String>,
    pub reviews_dir: Option<PathBuf>,
    pub api_key_env: Option<String>,
    pub junior_model: Option<String>,
    pub senior_model: Option<String>,
    pub manager_model: Option<String>,
    pub planner_notes: Option<bool>,
    pub session_log: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config_file() {
        let file: ConfigFile = toml::from_str(
            r#"
[general]
model = "gpt-4o"
reviews_dir = "out/reviews"

[auth]
api_key_env = "MY_KEY"

[agents]
manager_model = "gpt-5"

[output]
planner_notes = true
session_log = false
"#,
        )
        .unwrap();

        let partial = file.to_partial();
        assert_eq!(partial.model.as_deref(), Some("gpt-4o"));
        assert_eq!(partial.reviews_dir, Some(PathBuf::from("out/reviews")));
        assert_eq!(partial.api_key_env.as_deref(), Some("MY_KEY"));
        assert_eq!(partial.manager_model.as_deref(), Some("gpt-5"));
        assert!(partial.junior_model.is_none());
        assert_eq!(partial.planner_notes, Some(true));
        assert_eq!(partial.session_log, Some(false));
    }

    #[test]
    fn empty_file_yields_empty_partial() {
        let file: ConfigFile = toml::from_str("").unwrap();
        let partial = file.to_partial();
        assert!(partial.model.is_none());
        assert!(partial.reviews_dir.is_none());
        assert!(partial.session_log.is_none());
    }
}
