// src/chat/row.rs
//! Render model for a single message

use crate::config::ChatConfig;
use crate::util::markup;

use super::Role;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Avatar {
    /// User picture
    Image { src: String, alt: String },
    /// Fixed assistant glyph
    Glyph(String),
}

/// User rows are mirrored: content first, avatar last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowLayout {
    AvatarFirst,
    ContentFirst,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRow {
    pub role: Role,
    pub avatar: Avatar,
    pub layout: RowLayout,
    pub markup: String,
    pub lines: Vec<String>,
}

impl MessageRow {
    pub fn new(markup: &str, is_user: bool, config: &ChatConfig) -> Self {
        let (role, avatar, layout) = if is_user {
            (
                Role::User,
                Avatar::Image {
                    src: config.user_avatar.clone(),
                    alt: "Profile".to_string(),
                },
                RowLayout::ContentFirst,
            )
        } else {
            (
                Role::Assistant,
                Avatar::Glyph(config.assistant_glyph.clone()),
                RowLayout::AvatarFirst,
            )
        };

        Self {
            role,
            avatar,
            layout,
            markup: markup.to_string(),
            lines: markup::split_breaks(markup),
        }
    }
}
