use crate::model::lifecycle::LifecyclePhase;
use macros::loggable;

loggable! {
    LifecycleError {
        /// The host cancelled the startup context, usually because it is shutting down.
        #[error("Startup aborted by cancellation")]
        StartupAborted => tracing::Level::WARN,

        #[error("Startup hook already ran, current phase: {phase}")]
        AlreadyStarted { phase: LifecyclePhase } => tracing::Level::WARN,

        #[error("Startup hook invoked before the host was configured")]
        NotConfigured => tracing::Level::ERROR,

        #[error("Invalid lifecycle transition from {from} to {to}")]
        InvalidTransition { from: LifecyclePhase, to: LifecyclePhase } => tracing::Level::ERROR,

        #[error("Application version was not recorded before startup")]
        VersionNotRecorded => tracing::Level::ERROR,

        #[error("Startup task did not complete: {reason}")]
        StartupTaskFailed { reason: String } => tracing::Level::WARN,
    }
}
