//! Error types

/// Settings could not be read or are unusable
#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    /// Malformed JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Settings file unreadable
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Well-formed but out of range
    #[error("Invalid settings: {0}")]
    Invalid(String),
}

/// Browser environment is missing something the game needs
#[derive(thiserror::Error, Debug)]
pub enum PlatformError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("element #{0} is not a canvas")]
    NotACanvas(String),

    /// Canvas API missing: the board has been disabled
    #[error("canvas is not supported by this browser")]
    CanvasUnsupported,

    #[error("2d context unavailable")]
    ContextUnavailable,
}
