use crate::model::error::Error;
use crate::model::error::system::SystemError;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

pub const LOG_DIRECTORY: &str = "./logs";
pub const LOG_FILE_PREFIX: &str = "algo4evaluation.log";
pub const DEFAULT_LOG_FILTER: &str = "info";

pub struct Logging;

impl Logging {
    /// Installs the global subscriber: stdout plus a daily file under `./logs`.
    /// The returned guard flushes the file writer when dropped.
    pub fn initialize() -> Result<WorkerGuard, Error> {
        let file_appender = tracing_appender::rolling::daily(LOG_DIRECTORY, LOG_FILE_PREFIX);
        let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .with(fmt::layer().with_writer(file_writer).with_ansi(false))
            .try_init()
            .map_err(|err| SystemError::LoggingInitFailed {
                reason: err.to_string(),
            })?;

        log_panics::init();
        Ok(guard)
    }
}
