use std::sync::Arc;

use crate::chat::{ChatBackend, ChatView, Transcript};
use crate::config::ChatConfig;

use super::ChatWidget;

impl<B: ChatBackend, V: ChatView> ChatWidget<B, V> {
    pub fn new(config: ChatConfig, backend: B, view: V) -> Self {
        Self {
            config,
            backend: Arc::new(backend),
            view,
            transcript: Transcript::new(),
            input: String::new(),
            busy: false,
        }
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Shared handle, for running a request outside the widget borrow
    pub fn backend(&self) -> Arc<B> {
        Arc::clone(&self.backend)
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Input, config and view at once, for drawing
    pub fn render_parts(&mut self) -> (&str, &ChatConfig, &mut V) {
        (self.input.as_str(), &self.config, &mut self.view)
    }
}
