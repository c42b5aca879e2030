use std::path::PathBuf;

use crate::chat::exporter;

use super::ChatWidget;

impl<B, V> ChatWidget<B, V> {
    pub fn export_transcript(&self) -> String {
        exporter::export_transcript(&self.transcript, &self.config)
    }

    pub fn save_transcript(&self) -> std::io::Result<PathBuf> {
        exporter::save_transcript(&self.transcript, &self.config)
    }
}
