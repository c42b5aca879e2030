use serde::{Deserialize, Serialize};

use crate::config::ChatConfig;
use crate::util::markup;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Display name used in exports
    pub fn label<'a>(&self, config: &'a ChatConfig) -> &'a str {
        match self {
            Role::User => &config.user_label,
            Role::Assistant => &config.assistant_label,
        }
    }
}

/// One transcript entry. Content holds real newlines, never `<br>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new_user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn new_assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }

    /// Build from rendered markup, turning line breaks back into `\n`
    pub fn from_markup(role: Role, markup: &str) -> Self {
        Self { role, content: markup::breaks_to_newlines(markup) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_markup_restores_newlines() {
        let msg = Message::from_markup(Role::Assistant, "a<br>b");
        assert_eq!(msg, Message::new_assistant("a\nb"));
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&Message::new_user("hi")).unwrap();
        assert_eq!(json, r#"{"role":"user","content":"hi"}"#);
    }
}
