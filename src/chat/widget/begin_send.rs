use crate::chat::{ChatBackend, ChatView};
use crate::log_debug;

use super::ChatWidget;

impl<B: ChatBackend, V: ChatView> ChatWidget<B, V> {
    /// First half of a send: validate the input, render it, go busy.
    ///
    /// Returns the trimmed query to dispatch, or `None` when the input is
    /// blank or a request is already in flight. Every `Some` must be
    /// followed by exactly one [`complete_send`](Self::complete_send).
    pub fn begin_send(&mut self) -> Option<String> {
        let query = self.input.trim();
        if query.is_empty() {
            return None;
        }
        if self.busy {
            log_debug!("Send ignored, request already in flight");
            return None;
        }

        let query = query.to_string();
        self.append_message(&query, true);
        self.input.clear();

        self.busy = true;
        self.view.set_sending(true);

        Some(query)
    }
}
