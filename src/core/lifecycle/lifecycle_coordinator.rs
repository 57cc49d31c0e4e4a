use crate::core::infrastructure::app_state::AppState;
use crate::core::lifecycle::menu;
use crate::core::preferences::preferences_store::PreferencesStore;
use crate::interface::startup_hook::StartupHook;
use crate::interface::system_service::SystemService;
use crate::model::error::Error;
use crate::model::error::lifecycle::LifecycleError;
use crate::model::lifecycle::{LifecyclePhase, StartupContext, StartupOutcome};
use crate::model::log::lifecycle::LifecycleLog;
use crate::model::menu::MenuDescriptor;
use crate::model::platform::Platform;
use crate::model::window::{
    BACKGROUND_COLOUR, HostConfiguration, StartMode, WindowOptions, WindowSize,
};
use async_trait::async_trait;
use macros::log;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub const APP_TITLE: &str = "Algo4evaluation";

/// Turns stored preferences into host configuration and runs the one-shot startup hook.
///
/// Phases move `Uninitialized -> Configured -> Starting -> Ready | Aborted` and never back.
pub struct LifecycleCoordinator {
    app_state: Arc<AppState>,
    preferences: Arc<PreferencesStore>,
    system: Arc<dyn SystemService>,
    min_window_size: WindowSize,
    phase: Mutex<LifecyclePhase>,
}

impl LifecycleCoordinator {
    pub fn new(
        app_state: Arc<AppState>,
        preferences: Arc<PreferencesStore>,
        system: Arc<dyn SystemService>,
        min_window_size: WindowSize,
    ) -> Self {
        Self {
            app_state,
            preferences,
            system,
            min_window_size,
            phase: Mutex::new(LifecyclePhase::Uninitialized),
        }
    }

    pub fn phase(&self) -> LifecyclePhase {
        *self.lock_phase()
    }

    /// Stored geometry, raised to the minimum window size.
    pub fn derive_window_options(&self) -> WindowOptions {
        let state = self.preferences.window_state();
        let size = state.size().clamp_to(self.min_window_size);
        WindowOptions {
            width: size.width,
            height: size.height,
            min_width: self.min_window_size.width,
            min_height: self.min_window_size.height,
            start_mode: if state.maximized {
                StartMode::Maximized
            } else {
                StartMode::Normal
            },
        }
    }

    pub fn build_menu(&self, platform: Platform) -> (MenuDescriptor, bool) {
        menu::build_menu(platform)
    }

    /// Builds the host configuration. May be repeated until the startup hook has run.
    pub fn configure(&self, platform: Platform) -> Result<HostConfiguration, Error> {
        let window = self.derive_window_options();
        let (menu, frameless) = self.build_menu(platform);

        {
            let mut phase = self.lock_phase();
            match *phase {
                LifecyclePhase::Uninitialized | LifecyclePhase::Configured => {
                    Self::advance(&mut phase, LifecyclePhase::Configured);
                }
                current => {
                    return Err(LifecycleError::InvalidTransition {
                        from: current,
                        to: LifecyclePhase::Configured,
                    }
                    .into());
                }
            }
        }

        log!(LifecycleLog::HostConfigured {
            width: window.width,
            height: window.height,
            start_mode: window.start_mode.to_string(),
            frameless,
        });

        Ok(HostConfiguration {
            title: APP_TITLE.to_string(),
            window,
            frameless,
            menu,
            background: BACKGROUND_COLOUR,
            start_hidden: true,
            enable_default_context_menu: true,
        })
    }

    fn lock_phase(&self) -> MutexGuard<'_, LifecyclePhase> {
        self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn advance(phase: &mut LifecyclePhase, to: LifecyclePhase) {
        if *phase != to {
            log!(LifecycleLog::PhaseChanged { from: *phase, to });
            *phase = to;
        }
    }

    fn finish(&self, outcome: StartupOutcome) {
        let to = match outcome {
            StartupOutcome::Ready => LifecyclePhase::Ready,
            StartupOutcome::Aborted => LifecyclePhase::Aborted,
        };
        Self::advance(&mut self.lock_phase(), to);
    }
}

#[async_trait]
impl StartupHook for LifecycleCoordinator {
    async fn on_ready(&self, ctx: StartupContext) -> Result<StartupOutcome, Error> {
        let version = self
            .app_state
            .app_version()
            .ok_or(LifecycleError::VersionNotRecorded)?;

        {
            let mut phase = self.lock_phase();
            match *phase {
                LifecyclePhase::Configured => Self::advance(&mut phase, LifecyclePhase::Starting),
                LifecyclePhase::Uninitialized => return Err(LifecycleError::NotConfigured.into()),
                current => return Err(LifecycleError::AlreadyStarted { phase: current }.into()),
            }
        }

        log!(LifecycleLog::StartupRunning {
            version: version.clone()
        });

        // Cancellation wins ties, so an already-cancelled context never polls the service.
        let result = tokio::select! {
            biased;
            _ = ctx.cancelled() => Err(LifecycleError::StartupAborted.into()),
            result = self.system.start(&ctx, &version) => result,
        };

        let outcome = match result {
            Ok(()) => StartupOutcome::Ready,
            Err(Error::Lifecycle(LifecycleError::StartupAborted)) => StartupOutcome::Aborted,
            Err(err) => {
                log!(err);
                log!(LifecycleLog::SystemServiceFailed);
                if ctx.is_cancelled() {
                    StartupOutcome::Aborted
                } else {
                    StartupOutcome::Ready
                }
            }
        };

        self.finish(outcome);
        match outcome {
            StartupOutcome::Ready => log!(LifecycleLog::StartupComplete),
            StartupOutcome::Aborted => log!(LifecycleLog::StartupAborted),
        }
        Ok(outcome)
    }
}
