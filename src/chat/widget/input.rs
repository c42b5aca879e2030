use super::ChatWidget;

impl<B, V> ChatWidget<B, V> {
    pub fn handle_input(&mut self, ch: char) {
        self.input.push(ch);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn get_input(&self) -> &str {
        &self.input
    }
}
