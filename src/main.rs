use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;

use planr_chat::app::App;
use planr_chat::config::ChatConfig;
use planr_chat::event::AppEvent;
use planr_chat::log_warn;
use planr_chat::util::log::{log_dir, open_trace_file};

/// Terminal chat client for the Planr planning assistant
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// YAML config file (defaults to ./planr-chat.yml when present)
    #[arg(long, env = "PLANR_CHAT_CONFIG")]
    config: Option<PathBuf>,

    /// Override the chat endpoint URL
    #[arg(long)]
    endpoint: Option<String>,

    /// Ask this question as soon as the chat opens
    #[arg(long)]
    ask: Option<String>,
}

/// The TUI owns stdout, so tracing goes to a file next to the other logs.
/// An unwritable log directory leaves tracing off rather than aborting.
fn init_tracing() {
    let file = match open_trace_file(&log_dir()) {
        Ok(file) => file,
        Err(e) => {
            log_warn!("Tracing disabled, cannot open trace log: {}", e);
            return;
        }
    };

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing();

    let mut config = ChatConfig::load(cli.config.as_deref())?;
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
        config.validate()?;
    }

    let terminal = ratatui::init();
    let mut app = App::new(config);
    if let Some(question) = cli.ask {
        app.events.send(AppEvent::Ask(question));
    }
    let result = app.run(terminal).await;
    ratatui::restore();
    result
}
