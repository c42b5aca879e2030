use crate::chat::{ChatBackend, ChatView};
use crate::error::ChatError;
use crate::util::markup;
use crate::log_warn;

use super::{ChatWidget, SendOutcome};

impl<B: ChatBackend, V: ChatView> ChatWidget<B, V> {
    /// Second half of a send: render the answer (or the fallback) and reset.
    pub fn complete_send(&mut self, result: Result<String, ChatError>) -> SendOutcome {
        let outcome = match result {
            Ok(answer) => {
                let formatted = markup::newlines_to_breaks(&answer);
                self.append_message(&formatted, false);
                SendOutcome::Answered
            }
            Err(e) => {
                log_warn!("Chat request failed: {}", e);
                let fallback = self.config.fallback_message.clone();
                self.append_message(&fallback, false);
                SendOutcome::Failed
            }
        };

        self.busy = false;
        self.view.set_sending(false);
        self.view.focus_input();

        outcome
    }
}
