use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrintError {
    #[error("Config directory not found at {0}. Run 'invoice-print init' to create it.")]
    ConfigNotFound(PathBuf),

    #[error("Config file not found: {0}")]
    ConfigFileNotFound(PathBuf),

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config directory already exists at {0}")]
    AlreadyInitialized(PathBuf),

    #[error("No API token found. Add `token = \"...\"` to {0} or pass --token.")]
    MissingCredential(PathBuf),

    #[error("Invoice request failed with HTTP status {0}")]
    HttpStatus(u16),

    #[error("Invoice request failed: {0}")]
    Transport(String),

    #[error("Response did not contain invoice '{0}'")]
    InvoiceMissing(String),

    #[error("Malformed invoice response: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("Invoice '{0}' not found or unavailable")]
    Unavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ureq::Error> for PrintError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(code) => PrintError::HttpStatus(code),
            other => PrintError::Transport(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, PrintError>;
