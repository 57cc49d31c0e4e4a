use macros::loggable;
use std::path::PathBuf;

loggable! {
    PreferencesError {
        #[error("Failed to read preferences from {path}: {reason}")]
        ReadFailed { path: PathBuf, reason: String } => tracing::Level::WARN,

        #[error("Failed to parse preferences in {path}: {reason}")]
        ParseFailed { path: PathBuf, reason: String } => tracing::Level::WARN,

        #[error("Failed to serialize preferences: {reason}")]
        SerializeFailed { reason: String } => tracing::Level::ERROR,

        #[error("Failed to create preferences directory {path}: {reason}")]
        CreateDirectoryFailed { path: PathBuf, reason: String } => tracing::Level::ERROR,

        #[error("Failed to write preferences to {path}: {reason}")]
        WriteFailed { path: PathBuf, reason: String } => tracing::Level::ERROR,
    }
}
