use ratatui::{
    DefaultTerminal,
    Frame,
    crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use color_eyre::Result;

use crate::chat::{ChatBackend, ChatWidget, HttpBackend};
use crate::config::ChatConfig;
use crate::event::{AppEvent, Event, EventHandler};
use crate::ui::{self, TerminalView};
use crate::{log_debug, log_error, log_info};

/// Application.
#[derive(Debug)]
pub struct App<B = HttpBackend> {
    /// Is the application running?
    pub running: bool,
    /// Chat controller drawing into the terminal view
    pub chat: ChatWidget<B, TerminalView>,
    /// Event handler.
    pub events: EventHandler,
}

impl App<HttpBackend> {
    /// Constructs a new instance of [`App`] talking to the configured endpoint.
    pub fn new(config: ChatConfig) -> Self {
        let backend = HttpBackend::new(config.endpoint.clone());
        Self::with_backend(config, backend, EventHandler::new())
    }
}

impl<B: ChatBackend + 'static> App<B> {
    pub fn with_backend(config: ChatConfig, backend: B, events: EventHandler) -> Self {
        log_info!("Chat session started, endpoint {}", config.endpoint);
        Self {
            running: true,
            chat: ChatWidget::new(config, backend, TerminalView::new()),
            events,
        }
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let mut needs_redraw = true;

        while self.running {
            if needs_redraw {
                terminal.draw(|frame| self.render(frame))?;
                needs_redraw = false;
            }

            match self.events.next().await? {
                Event::Tick => {
                    if self.chat.view().is_sending() {
                        self.chat.view_mut().tick();
                        needs_redraw = true;
                    }
                }
                Event::Crossterm(event) => match event {
                    CrosstermEvent::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                        if let Some(app_event) = self.handle_key_events(key_event) {
                            self.events.send(app_event);
                        }
                        needs_redraw = true;
                    }
                    CrosstermEvent::Resize(_, _) => needs_redraw = true,
                    _ => {}
                },
                Event::App(app_event) => {
                    self.handle_app_event(app_event);
                    needs_redraw = true;
                }
            }
        }

        log_info!("Chat session ended after {} messages", self.chat.transcript().len());
        Ok(())
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let (input, config, view) = self.chat.render_parts();
        ui::render_chat(frame, input, config, view);
    }

    /// Edits and scrolling are applied directly; anything else becomes an [`AppEvent`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) -> Option<AppEvent> {
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

        match key_event.code {
            KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Char('c') if ctrl => Some(AppEvent::Quit),
            KeyCode::Char('s') if ctrl => Some(AppEvent::SaveChat),
            KeyCode::Enter => {
                // send control is disabled while a request is in flight
                if self.chat.view().is_sending() {
                    None
                } else {
                    Some(AppEvent::ChatSubmit)
                }
            }
            KeyCode::F(n) if (1..=9).contains(&n) => Some(AppEvent::AskSuggestion(n as usize - 1)),
            KeyCode::Backspace => {
                self.chat.backspace();
                None
            }
            KeyCode::Char(ch) if !ctrl => {
                self.chat.handle_input(ch);
                None
            }
            KeyCode::Up => {
                self.chat.view_mut().scroll_up();
                None
            }
            KeyCode::Down => {
                self.chat.view_mut().scroll_down();
                None
            }
            KeyCode::PageUp => {
                self.chat.view_mut().page_up();
                None
            }
            KeyCode::PageDown => {
                self.chat.view_mut().page_down();
                None
            }
            _ => None,
        }
    }

    pub fn handle_app_event(&mut self, app_event: AppEvent) {
        match app_event {
            AppEvent::Quit => self.quit(),
            AppEvent::ChatSubmit => self.dispatch(),
            AppEvent::AskSuggestion(index) => {
                match self.chat.config().suggestions.get(index).cloned() {
                    Some(question) => self.ask_question(question),
                    None => log_debug!("No suggestion bound to F{}", index + 1),
                }
            }
            AppEvent::Ask(question) => self.ask_question(question),
            AppEvent::SaveChat => match self.chat.save_transcript() {
                Ok(path) => {
                    self.chat.view_mut().set_status(format!("Chat saved to {}", path.display()));
                }
                Err(e) => {
                    log_error!("Failed to save chat: {}", e);
                    self.chat.view_mut().set_status(format!("Could not save chat: {}", e));
                }
            },
            AppEvent::Answer(result) => {
                let outcome = self.chat.complete_send(result);
                log_debug!("Request finished: {:?}", outcome);
            }
        }
    }

    /// Pre-fill the input and send, unless a request is still running
    fn ask_question(&mut self, question: String) {
        if self.chat.is_busy() {
            log_debug!("Suggestion ignored, request already in flight");
            return;
        }
        self.chat.set_input(question);
        self.dispatch();
    }

    /// Start a send and run the request off the loop; the answer comes back as
    /// [`AppEvent::Answer`].
    fn dispatch(&mut self) {
        let query = match self.chat.begin_send() {
            Some(query) => query,
            None => return,
        };

        let backend = self.chat.backend();
        let sender = self.events.sender();
        tokio::spawn(async move {
            let result = backend.ask(&query).await;
            let _ = sender.send(Event::App(AppEvent::Answer(result)));
        });
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Debug)]
    struct EchoBackend;

    #[async_trait]
    impl ChatBackend for EchoBackend {
        async fn ask(&self, query: &str) -> crate::error::Result<String> {
            Ok(format!("echo\n{}", query))
        }
    }

    fn app() -> App<EchoBackend> {
        App::with_backend(ChatConfig::default(), EchoBackend, EventHandler::detached())
    }

    fn press(app: &mut App<EchoBackend>, code: KeyCode) -> Option<AppEvent> {
        app.handle_key_events(KeyEvent::new(code, KeyModifiers::NONE))
    }

    async fn next_answer(app: &mut App<EchoBackend>) {
        match app.events.next().await.unwrap() {
            Event::App(event @ AppEvent::Answer(_)) => app.handle_app_event(event),
            other => panic!("expected an answer, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_typed_message_round_trip() {
        let mut app = app();
        for ch in "hi".chars() {
            assert!(press(&mut app, KeyCode::Char(ch)).is_none());
        }

        let event = press(&mut app, KeyCode::Enter).unwrap();
        app.handle_app_event(event);
        assert!(app.chat.view().is_sending());
        assert!(press(&mut app, KeyCode::Enter).is_none());

        next_answer(&mut app).await;

        assert!(!app.chat.view().is_sending());
        assert_eq!(app.chat.export_transcript(), "You: hi\nPlanr AI: echo\nhi\n");
        assert_eq!(app.chat.view().rows()[1].lines, vec!["echo", "hi"]);
    }

    #[tokio::test]
    async fn test_function_key_asks_suggestion() {
        let mut app = app();
        let first = app.chat.config().suggestions[0].clone();

        let event = press(&mut app, KeyCode::F(1)).unwrap();
        app.handle_app_event(event);
        next_answer(&mut app).await;

        assert_eq!(app.chat.transcript().messages()[0].content, first);
    }

    #[tokio::test]
    async fn test_suggestion_while_busy_keeps_input() {
        let mut app = app();
        app.handle_app_event(AppEvent::Ask("first".to_string()));
        for ch in "draft".chars() {
            press(&mut app, KeyCode::Char(ch));
        }

        app.handle_app_event(AppEvent::AskSuggestion(0));
        assert_eq!(app.chat.get_input(), "draft");

        next_answer(&mut app).await;
        assert_eq!(app.chat.transcript().len(), 2);
    }

    #[test]
    fn test_ctrl_keys() {
        let mut app = app();
        let save = app.handle_key_events(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert!(matches!(save, Some(AppEvent::SaveChat)));
        assert_eq!(app.chat.get_input(), "");

        let other = app.handle_key_events(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        assert!(other.is_none());
        assert_eq!(app.chat.get_input(), "");

        app.handle_app_event(AppEvent::Quit);
        assert!(!app.running);
    }

    #[test]
    fn test_save_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = ChatConfig { export_dir: dir.path().to_path_buf(), ..ChatConfig::default() };
        let mut app = App::with_backend(config, EchoBackend, EventHandler::detached());

        app.handle_app_event(AppEvent::SaveChat);

        assert!(dir.path().join("chat_session.txt").exists());
        assert!(app.chat.view().status().unwrap().starts_with("Chat saved to"));
    }
}
