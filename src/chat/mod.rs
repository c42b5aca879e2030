// src/chat/mod.rs
//! Chat widget - transcript, rendering seam, dispatcher and exporter

pub mod message;
pub mod transcript;
pub mod row;
pub mod view;
pub mod backend;
pub mod exporter;
pub mod widget;

pub use message::{Message, Role};
pub use transcript::Transcript;
pub use row::{Avatar, MessageRow, RowLayout};
pub use view::ChatView;
pub use backend::{ChatBackend, HttpBackend};
pub use exporter::{export_transcript, save_transcript, EXPORT_FILE_NAME};
pub use widget::{ChatWidget, SendOutcome};
