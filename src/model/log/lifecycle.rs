use crate::model::lifecycle::LifecyclePhase;
use macros::loggable;

loggable! {
    LifecycleLog {
        #[error("Lifecycle phase {from} -> {to}")]
        PhaseChanged { from: LifecyclePhase, to: LifecyclePhase } => tracing::Level::DEBUG,

        #[error("Host configured: {width}x{height}, start mode {start_mode}, frameless: {frameless}")]
        HostConfigured { width: u32, height: u32, start_mode: String, frameless: bool } => tracing::Level::INFO,

        #[error("Startup hook running for version {version}")]
        StartupRunning { version: String } => tracing::Level::INFO,

        #[error("Startup completed")]
        StartupComplete => tracing::Level::INFO,

        #[error("Startup aborted")]
        StartupAborted => tracing::Level::WARN,

        #[error("System service failed during startup, continuing")]
        SystemServiceFailed => tracing::Level::WARN,

        #[error("First run of version {version}")]
        FirstRunOfVersion { version: String } => tracing::Level::INFO,

        #[error("Screen smaller than minimum window size, maximizing")]
        MaximizeForSmallScreen => tracing::Level::INFO,
    }
}
