//! Runs in its own binary so the logger statics start uninitialised.

use std::fs;

use tempfile::TempDir;

use planr_chat::config::ChatConfig;
use planr_chat::{log_debug, log_info};

#[test]
fn test_debug_lines_before_first_info_are_kept() {
    let dir = TempDir::new().unwrap();
    let logs = dir.path().join("logs");
    std::env::set_var("PLANR_LOG_DIR", &logs);
    std::env::set_var("DEBUG", "true");

    let config_path = dir.path().join("planr-chat.yml");
    fs::write(&config_path, "endpoint: http://localhost:9000/api/chat/\n").unwrap();

    // first logger use in this process is a debug line
    ChatConfig::from_file(&config_path).unwrap();
    log_info!("session started");
    log_debug!("after init");

    let debug = fs::read_to_string(logs.join("debug.log")).unwrap();
    assert!(debug.contains("Loading chat config"));
    assert!(debug.contains("after init"));
}
