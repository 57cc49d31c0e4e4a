use macros::loggable;

loggable! {
    SystemLog {
        #[error("Initializing")]
        Initializing => tracing::Level::INFO,

        #[error("Initialization completed")]
        InitializeComplete => tracing::Level::INFO,

        #[error("Starting {name} {version}")]
        Starting { name: String, version: String } => tracing::Level::INFO,

        #[error("Configuration file {path} not found, using defaults")]
        ConfigDefaulted { path: String } => tracing::Level::INFO,

        #[error("Termination in process")]
        Terminating => tracing::Level::INFO,

        #[error("Termination completed")]
        TerminateComplete => tracing::Level::INFO,

        #[error("Gui Exited")]
        GuiExited => tracing::Level::INFO,

        #[error("Running without application icon")]
        IconUnavailable => tracing::Level::WARN,
    }
}
