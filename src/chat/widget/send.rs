use crate::chat::{ChatBackend, ChatView};

use super::{ChatWidget, SendOutcome};

impl<B: ChatBackend, V: ChatView> ChatWidget<B, V> {
    /// Send the current input and wait for the answer.
    pub async fn send(&mut self) -> SendOutcome {
        if self.busy && !self.input.trim().is_empty() {
            return SendOutcome::Busy;
        }

        let query = match self.begin_send() {
            Some(query) => query,
            None => return SendOutcome::Ignored,
        };

        let backend = self.backend();
        let result = backend.ask(&query).await;
        self.complete_send(result)
    }
}
