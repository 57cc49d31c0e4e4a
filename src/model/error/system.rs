use macros::loggable;
use std::path::PathBuf;

loggable! {
    SystemError {
        #[error("Failed to read configuration {path}: {reason}")]
        ConfigUnreadable { path: PathBuf, reason: String } => tracing::Level::ERROR,

        #[error("Invalid configuration: {reason}")]
        InvalidConfig { reason: String } => tracing::Level::ERROR,

        #[error("Failed to initialize logging: {reason}")]
        LoggingInitFailed { reason: String } => tracing::Level::ERROR,

        /// The GUI host could not be started. Always fatal.
        #[error("Host runtime failed to start: {reason}")]
        HostStartFailed { reason: String } => tracing::Level::ERROR,
    }
}
