pub mod style;
pub mod terminal_view;
pub mod chat_screen;

pub use terminal_view::TerminalView;
pub use chat_screen::render_chat;
