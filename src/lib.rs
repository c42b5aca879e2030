pub mod app;
pub mod chat;
pub mod config;
pub mod error;
pub mod event;
pub mod ui;
pub mod util;

pub use chat::{ChatBackend, ChatView, ChatWidget, HttpBackend, Message, Role, SendOutcome, Transcript};
pub use config::ChatConfig;
pub use error::{ChatError, Result};
