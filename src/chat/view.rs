use super::MessageRow;

/// Surface the widget draws into. The terminal front end implements it
/// with ratatui; tests record calls.
pub trait ChatView {
    /// Append to the scroll region and scroll to the newest entry
    fn append_row(&mut self, row: MessageRow);

    /// `true` disables the send control and shows the loading indicator
    fn set_sending(&mut self, sending: bool);

    fn focus_input(&mut self);
}
