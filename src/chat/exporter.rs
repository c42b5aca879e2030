// src/chat/exporter.rs
//! Plaintext export of the transcript

use std::fs::{self, create_dir_all};
use std::path::PathBuf;

use crate::config::ChatConfig;
use crate::log_info;

use super::Transcript;

pub const EXPORT_FILE_NAME: &str = "chat_session.txt";

/// One `"<Role label>: <content>\n"` line per message
pub fn export_transcript(transcript: &Transcript, config: &ChatConfig) -> String {
    transcript
        .messages()
        .iter()
        .map(|msg| format!("{}: {}\n", msg.role.label(config), msg.content))
        .collect()
}

/// Write the export to `<export_dir>/chat_session.txt`, replacing any previous file
pub fn save_transcript(transcript: &Transcript, config: &ChatConfig) -> std::io::Result<PathBuf> {
    create_dir_all(&config.export_dir)?;
    let path = config.export_dir.join(EXPORT_FILE_NAME);
    fs::write(&path, export_transcript(transcript, config))?;
    log_info!("Saved {} messages to {:?}", transcript.len(), path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Message;

    fn sample() -> Transcript {
        let mut transcript = Transcript::new();
        transcript.push(Message::new_user("hi"));
        transcript.push(Message::new_assistant("hello"));
        transcript
    }

    #[test]
    fn test_export_labels() {
        let text = export_transcript(&sample(), &ChatConfig::default());
        assert_eq!(text, "You: hi\nPlanr AI: hello\n");
    }

    #[test]
    fn test_empty_transcript_exports_empty_text() {
        assert_eq!(export_transcript(&Transcript::new(), &ChatConfig::default()), "");
    }

    #[test]
    fn test_save_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = ChatConfig {
            export_dir: dir.path().join("exports"),
            ..ChatConfig::default()
        };

        let path = save_transcript(&sample(), &config).unwrap();

        assert_eq!(path.file_name().unwrap(), EXPORT_FILE_NAME);
        assert_eq!(fs::read_to_string(path).unwrap(), "You: hi\nPlanr AI: hello\n");
    }
}
