// src/ui/terminal_view.rs
//! ratatui implementation of the chat surface

use throbber_widgets_tui::ThrobberState;
use tui_scrollview::ScrollViewState;

use crate::chat::{ChatView, MessageRow};

pub struct TerminalView {
    rows: Vec<MessageRow>,
    pub(super) scroll: ScrollViewState,
    /// Set on append, consumed by the next draw once heights are known
    pub(super) follow_bottom: bool,
    sending: bool,
    input_focused: bool,
    pub(super) throbber: ThrobberState,
    status: Option<String>,
}

// Manual Debug implementation since the widget states carry no useful output
impl std::fmt::Debug for TerminalView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalView")
            .field("rows", &self.rows.len())
            .field("sending", &self.sending)
            .field("input_focused", &self.input_focused)
            .field("status", &self.status)
            .finish()
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalView {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            scroll: ScrollViewState::default(),
            follow_bottom: false,
            sending: false,
            input_focused: true,
            throbber: ThrobberState::default(),
            status: None,
        }
    }

    pub fn rows(&self) -> &[MessageRow] {
        &self.rows
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn is_input_focused(&self) -> bool {
        self.input_focused
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    /// Advance the loading animation
    pub fn tick(&mut self) {
        if self.sending {
            self.throbber.calc_next();
        }
    }

    pub fn scroll_up(&mut self) {
        self.follow_bottom = false;
        self.scroll.scroll_up();
    }

    pub fn scroll_down(&mut self) {
        self.follow_bottom = false;
        self.scroll.scroll_down();
    }

    pub fn page_up(&mut self) {
        self.follow_bottom = false;
        self.scroll.scroll_page_up();
    }

    pub fn page_down(&mut self) {
        self.follow_bottom = false;
        self.scroll.scroll_page_down();
    }
}

impl ChatView for TerminalView {
    fn append_row(&mut self, row: MessageRow) {
        self.rows.push(row);
        self.follow_bottom = true;
    }

    fn set_sending(&mut self, sending: bool) {
        self.sending = sending;
        if sending {
            self.input_focused = false;
            self.status = None;
        }
    }

    fn focus_input(&mut self) {
        self.input_focused = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChatConfig;

    #[test]
    fn test_append_requests_scroll_to_newest() {
        let mut view = TerminalView::new();
        view.scroll_up();
        assert!(!view.follow_bottom);

        view.append_row(MessageRow::new("hi", true, &ChatConfig::default()));
        assert!(view.follow_bottom);
        assert_eq!(view.rows().len(), 1);
    }

    #[test]
    fn test_sending_takes_focus_until_returned() {
        let mut view = TerminalView::new();
        view.set_status("Saved");

        view.set_sending(true);
        assert!(view.is_sending());
        assert!(!view.is_input_focused());
        assert_eq!(view.status(), None);

        view.set_sending(false);
        view.focus_input();
        assert!(!view.is_sending());
        assert!(view.is_input_focused());
    }
}
