use thiserror::Error;

#[derive(Error, Debug)]
pub enum EffectsError {
    #[error("Element not found: {0}")]
    MissingElement(&'static str),
    #[error("Clipboard write failed: {0}")]
    Clipboard(String),
    #[error("DOM operation failed: {0}")]
    Dom(String),
    #[error("Invalid effects config: {0}")]
    Config(#[from] serde_json::Error),
}
