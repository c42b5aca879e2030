use crate::chat::{ChatView, Message, MessageRow};

use super::ChatWidget;

impl<B, V: ChatView> ChatWidget<B, V> {
    /// Render `markup` and record it; the transcript gets real newlines.
    pub(super) fn append_message(&mut self, markup: &str, is_user: bool) {
        let row = MessageRow::new(markup, is_user, &self.config);
        let message = Message::from_markup(row.role, markup);

        self.view.append_row(row);
        self.transcript.push(message);
    }
}
