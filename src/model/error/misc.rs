use macros::loggable;

loggable! {
    MiscError {
        #[error("Embedded asset not found: {name}")]
        AssetNotFound { name: String } => tracing::Level::WARN,

        #[error("Failed to decode application icon: {reason}")]
        IconDecodeFailed { reason: String } => tracing::Level::WARN,
    }
}
