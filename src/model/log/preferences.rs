use macros::loggable;

loggable! {
    PreferencesLog {
        #[error("Preferences loaded from {path}")]
        Loaded { path: String } => tracing::Level::INFO,

        #[error("No preferences at {path}, using defaults")]
        NotFound { path: String } => tracing::Level::INFO,

        #[error("Stored window size {width}x{height} is invalid, using defaults")]
        InvalidWindowSize { width: i64, height: i64 } => tracing::Level::WARN,

        #[error("Window state saved: {width}x{height}, maximized: {maximized}")]
        WindowStateSaved { width: i64, height: i64, maximized: bool } => tracing::Level::DEBUG,

        #[error("Application version changed from {previous} to {current}")]
        VersionChanged { previous: String, current: String } => tracing::Level::INFO,
    }
}
