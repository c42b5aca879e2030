use crate::chat::{ChatBackend, ChatView};

use super::{ChatWidget, SendOutcome};

impl<B: ChatBackend, V: ChatView> ChatWidget<B, V> {
    /// Pre-fill the input with `question` and send it right away.
    /// While a request is in flight the current draft is left alone.
    pub async fn ask_question(&mut self, question: &str) -> SendOutcome {
        if self.busy {
            return SendOutcome::Busy;
        }
        self.set_input(question);
        self.send().await
    }
}
