use crate::core::gui::gui_manager::GuiManager;
use crate::core::infrastructure::app_config::AppConfig;
use crate::core::infrastructure::app_state::AppState;
use crate::core::lifecycle::lifecycle_coordinator::{APP_TITLE, LifecycleCoordinator};
use crate::core::preferences::preferences_store::PreferencesStore;
use crate::core::service::system_service::AppSystemService;
use crate::interface::host_runtime::HostRuntime;
use crate::model::error::Error;
use crate::model::log::system::SystemLog;
use crate::platform::CURRENT_PLATFORM;
use crate::utils::logging::Logging;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_appender::non_blocking::WorkerGuard;

/// Version stamped in at build time.
pub const APP_VERSION: &str = match option_env!("ALGO4EVALUATION_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

pub struct System {
    preferences: Arc<PreferencesStore>,
    coordinator: Arc<LifecycleCoordinator>,
    shutdown: CancellationToken,
    _log_guard: Option<WorkerGuard>,
}

impl System {
    pub async fn initialize() -> Result<Self, Error> {
        let log_guard = Logging::initialize()?;
        SystemLog::Initializing.log();
        let app_config = AppConfig::new()?;
        let mut system = Self::assemble(&app_config, APP_VERSION);
        system._log_guard = Some(log_guard);
        SystemLog::InitializeComplete.log();
        Ok(system)
    }

    /// Wires the components in startup order: the version is recorded before anything
    /// reads preferences.
    pub fn assemble(app_config: &AppConfig, version: &str) -> Self {
        let app_state = Arc::new(AppState::new());
        let preferences = Arc::new(PreferencesStore::from_config(app_config, app_state.clone()));
        preferences.set_app_version(version);

        let system_service = Arc::new(AppSystemService::new(preferences.clone()));
        let coordinator = Arc::new(LifecycleCoordinator::new(
            app_state,
            preferences.clone(),
            system_service,
            app_config.min_window_size(),
        ));

        Self {
            preferences,
            coordinator,
            shutdown: CancellationToken::new(),
            _log_guard: None,
        }
    }

    pub async fn run(&self) -> Result<(), Error> {
        let host = GuiManager::new(self.shutdown.clone());
        self.run_with(&host).await
    }

    pub async fn run_with<H: HostRuntime + ?Sized>(&self, host: &H) -> Result<(), Error> {
        SystemLog::Starting {
            name: APP_TITLE.to_string(),
            version: self.preferences.app_version().unwrap_or_default(),
        }
        .log();
        let configuration = self.coordinator.configure(CURRENT_PLATFORM)?;
        host.run(
            configuration,
            self.coordinator.clone(),
            self.preferences.clone(),
        )
        .await
    }

    pub async fn terminate(&self) {
        SystemLog::Terminating.log();
        self.shutdown.cancel();
        SystemLog::TerminateComplete.log();
    }
}
