// src/config.rs
//! Widget configuration: YAML file, then environment, then CLI flags.

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::{ChatError, Result};
use crate::log_debug;

/// Looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "planr-chat.yml";

pub const ENDPOINT_ENV: &str = "CHAT_API_URL";
pub const USER_AVATAR_ENV: &str = "USER_PROFILE_PIC";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// URL the query is POSTed to
    pub endpoint: String,
    /// Image shown next to user messages
    pub user_avatar: String,
    pub assistant_glyph: String,
    pub user_label: String,
    pub assistant_label: String,
    /// Rendered in place of an answer when the request fails
    pub fallback_message: String,
    pub export_dir: PathBuf,
    /// Preset questions, bound to F1..F9
    pub suggestions: Vec<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8000/api/chat/".to_string(),
            user_avatar: "profile_pics/default.jpg".to_string(),
            assistant_glyph: "🏛️".to_string(),
            user_label: "You".to_string(),
            assistant_label: "Planr AI".to_string(),
            fallback_message: "Connection Failed. This is because the free tier of PythonAnywhere cannot handle an active LLM".to_string(),
            export_dir: PathBuf::from("."),
            suggestions: vec![
                "Do I need planning permission for a rear extension?".to_string(),
                "How do I object to a planning application?".to_string(),
                "What are the opening hours of the planning counter?".to_string(),
            ],
        }
    }
}

impl ChatConfig {
    /// Load from `path`, or from [`DEFAULT_CONFIG_FILE`] if it exists, then
    /// apply environment overrides. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        log_debug!("Loading chat config from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Apply `CHAT_API_URL` / `USER_PROFILE_PIC` style overrides
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup(ENDPOINT_ENV).filter(|v| !v.trim().is_empty()) {
            self.endpoint = endpoint;
        }
        if let Some(avatar) = lookup(USER_AVATAR_ENV).filter(|v| !v.trim().is_empty()) {
            self.user_avatar = avatar;
        }
    }

    pub fn validate(&self) -> Result<()> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err(ChatError::Config("endpoint must not be empty".into()));
        }
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ChatError::Config(format!(
                "endpoint must be an http(s) URL, got '{}'",
                endpoint
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = ChatConfig::from_yaml_str(
            "endpoint: https://planr.example/api/chat/\nassistant_label: Planr\n",
        ).unwrap();

        assert_eq!(config.endpoint, "https://planr.example/api/chat/");
        assert_eq!(config.assistant_label, "Planr");
        assert_eq!(config.user_label, "You");
        assert_eq!(config.export_dir, PathBuf::from("."));
    }

    #[test]
    fn test_env_overrides_endpoint_and_avatar() {
        let vars: HashMap<&str, &str> = [
            (ENDPOINT_ENV, "http://10.0.0.2/api/chat/"),
            (USER_AVATAR_ENV, "media/me.png"),
        ].into_iter().collect();

        let mut config = ChatConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.endpoint, "http://10.0.0.2/api/chat/");
        assert_eq!(config.user_avatar, "media/me.png");
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let mut config = ChatConfig::default();
        config.apply_overrides(|_| Some("  ".to_string()));
        assert_eq!(config, ChatConfig::default());
    }

    #[test]
    fn test_validate_rejects_non_http_endpoint() {
        let mut config = ChatConfig::default();
        config.endpoint = "ftp://nope".to_string();
        assert!(matches!(config.validate(), Err(ChatError::Config(_))));

        config.endpoint = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_yaml_is_config_error() {
        let result = ChatConfig::from_yaml_str("suggestions: 12: [");
        assert!(matches!(result, Err(ChatError::Config(_))));
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = ChatConfig::load(Some(&dir.path().join("absent.yml")));
        assert!(matches!(result, Err(ChatError::Io(_))));
    }
}
