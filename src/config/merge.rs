use super::schema::{AppConfig, PartialConfig};
use std::path::PathBuf;

pub const DEFAULT_MODEL: &str = "gpt-5-mini";
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

impl PartialConfig {
    /// Merge self with a lower-priority fallback.
    /// Self's non-None values take precedence.
    pub fn with_fallback(self, fallback: PartialConfig) -> PartialConfig {
        PartialConfig {
            model: self.model.or(fallback.model),
            reviews_dir: self.reviews_dir.or(fallback.reviews_dir),
            api_key_env: self.api_key_env.or(fallback.api_key_env),
            junior_model: self.junior_model.or(fallback.junior_model),
            senior_model: self.senior_model.or(fallback.senior_model),
            manager_model: self.manager_model.or(fallback.manager_model),
            planner_notes: self.planner_notes.or(fallback.planner_notes),
            session_log: self.session_log.or(fallback.session_log),
        }
    }

    /// Convert to AppConfig, filling any remaining gaps with defaults.
    /// Role models fall back to the resolved general model.
    pub fn finalize(self) -> AppConfig {
        let model = self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string());

        AppConfig {
            junior_model: self.junior_model.unwrap_or_else(|| model.clone()),
            senior_model: self.senior_model.unwrap_or_else(|| model.clone()),
            manager_model: self.manager_model.unwrap_or_else(|| model.clone()),
            model,
            reviews_dir: self.reviews_dir.unwrap_or_else(|| PathBuf::from("reviews")),
            api_key_env: self
                .api_key_env
                .unwrap_or_else(|| DEFAULT_API_KEY_ENV.to_string()),
            planner_notes: self.planner_notes.unwrap_or(false),
            session_log: self.session_log.unwrap_or(true),
        }
    }
}
