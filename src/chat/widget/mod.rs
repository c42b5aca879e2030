mod new;
mod input;
mod append_message;
mod begin_send;
mod complete_send;
mod send;
mod ask_question;
mod export_transcript;


use std::sync::Arc;

use crate::config::ChatConfig;

use super::Transcript;

/// What `send` did with the current input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Input was empty after trimming
    Ignored,
    /// A request is already in flight
    Busy,
    /// Request completed, answer rendered
    Answered,
    /// Request failed, fallback rendered
    Failed,
}

/// Chat widget controller. Owns the transcript and the busy flag.
#[derive(Debug)]
pub struct ChatWidget<B, V> {
    config: ChatConfig,
    backend: Arc<B>,
    view: V,
    transcript: Transcript,
    input: String,
    busy: bool,
}
