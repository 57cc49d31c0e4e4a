use crate::core::preferences::preferences_store::PreferencesStore;
use crate::interface::system_service::SystemService;
use crate::model::error::Error;
use crate::model::error::lifecycle::LifecycleError;
use crate::model::lifecycle::StartupContext;
use crate::model::log::lifecycle::LifecycleLog;
use crate::model::window::WindowSize;
use async_trait::async_trait;
use macros::log;
use std::sync::Arc;
use tokio::task::JoinError;

/// Startup work run behind the lifecycle hook.
pub struct AppSystemService {
    preferences: Arc<PreferencesStore>,
}

impl AppSystemService {
    pub fn new(preferences: Arc<PreferencesStore>) -> Self {
        Self { preferences }
    }
}

#[async_trait]
impl SystemService for AppSystemService {
    async fn start(&self, ctx: &StartupContext, version: &str) -> Result<(), Error> {
        ctx.checkpoint()?;

        let preferences = self.preferences.clone();
        let first_run = first_run_or_log(
            tokio::task::spawn_blocking(move || preferences.mark_version_seen()).await,
        );
        if first_run {
            log!(LifecycleLog::FirstRunOfVersion {
                version: version.to_string()
            });
        }

        ctx.checkpoint()?;
        Ok(())
    }
}

fn first_run_or_log(joined: Result<bool, JoinError>) -> bool {
    joined.unwrap_or_else(|err| {
        log!(LifecycleError::StartupTaskFailed {
            reason: err.to_string()
        });
        false
    })
}

/// A screen smaller than the minimum window cannot show the window whole, so it opens maximized.
pub fn should_maximize_for_screen(screen: WindowSize, min_window_size: WindowSize) -> bool {
    !min_window_size.fits_within(&screen)
}

#[cfg(test)]
mod tests {
    use super::{AppSystemService, first_run_or_log, should_maximize_for_screen};
    use crate::core::infrastructure::app_state::AppState;
    use crate::core::preferences::preferences_store::PreferencesStore;
    use crate::interface::system_service::SystemService;
    use crate::model::error::Error;
    use crate::model::error::lifecycle::LifecycleError;
    use crate::model::lifecycle::StartupContext;
    use crate::model::window::WindowSize;
    use std::sync::Arc;
    use tokio_util::sync::CancellationToken;

    fn store(dir: &tempfile::TempDir) -> Arc<PreferencesStore> {
        let store = PreferencesStore::new(
            dir.path().join("preferences.toml"),
            Arc::new(AppState::new()),
            WindowSize::new(1024, 768),
        );
        store.set_app_version("1.2.3");
        Arc::new(store)
    }

    #[tokio::test]
    async fn start_records_the_running_version() {
        let dir = tempfile::tempdir().expect("tempdir");
        let preferences = store(&dir);
        let service = AppSystemService::new(preferences.clone());

        service
            .start(&StartupContext::default(), "1.2.3")
            .await
            .expect("start");

        assert_eq!(preferences.last_version(), "1.2.3");
    }

    #[tokio::test]
    async fn start_with_cancelled_context_does_no_work() {
        let dir = tempfile::tempdir().expect("tempdir");
        let preferences = store(&dir);
        let service = AppSystemService::new(preferences.clone());
        let token = CancellationToken::new();
        token.cancel();

        let result = service.start(&StartupContext::new(token), "1.2.3").await;

        assert_eq!(
            result,
            Err(Error::Lifecycle(LifecycleError::StartupAborted))
        );
        assert_eq!(preferences.last_version(), "");
    }

    #[tokio::test]
    async fn panicked_version_check_counts_as_not_first_run() {
        let joined =
            tokio::task::spawn_blocking(|| -> bool { panic!("version check exploded") }).await;
        assert!(joined.is_err());

        assert!(!first_run_or_log(joined));
        assert!(first_run_or_log(Ok(true)));
    }

    #[test]
    fn small_screens_force_maximized_window() {
        let min = WindowSize::new(960, 640);
        assert!(should_maximize_for_screen(WindowSize::new(800, 1080), min));
        assert!(should_maximize_for_screen(WindowSize::new(1920, 600), min));
        assert!(!should_maximize_for_screen(WindowSize::new(960, 640), min));
        assert!(!should_maximize_for_screen(WindowSize::new(2560, 1440), min));
    }
}
