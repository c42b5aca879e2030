use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<serde_yaml::Error> for ChatError {
    fn from(error: serde_yaml::Error) -> Self {
        ChatError::Config(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ChatError>;
