use crate::interface::host_runtime::HostRuntime;
use crate::interface::startup_hook::StartupHook;
use crate::interface::window_state_sink::WindowStateSink;
use crate::model::error::Error;
use crate::model::error::system::SystemError;
use crate::model::lifecycle::{StartupContext, StartupOutcome};
use crate::model::log::system::SystemLog;
use crate::model::window::{HostConfiguration, StartMode};
use crate::ui::shell_page::{ShellPage, StartupStatus};
use crate::utils::assets::Assets;
use async_trait::async_trait;
use eframe::egui;
use macros::log;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

/// eframe-backed host runtime.
pub struct GuiManager {
    shutdown: CancellationToken,
}

impl GuiManager {
    pub fn new(shutdown: CancellationToken) -> Self {
        Self { shutdown }
    }

    fn viewport(configuration: &HostConfiguration) -> egui::ViewportBuilder {
        let window = &configuration.window;
        let viewport = egui::ViewportBuilder::default()
            .with_title(configuration.title.as_str())
            .with_inner_size([window.width as f32, window.height as f32])
            .with_min_inner_size([window.min_width as f32, window.min_height as f32])
            .with_maximized(window.start_mode == StartMode::Maximized)
            .with_decorations(!configuration.frameless)
            .with_visible(!configuration.start_hidden);

        match Assets::load_app_icon() {
            Ok(icon_data) => viewport.with_icon(icon_data),
            Err(err) => {
                log!(err);
                log!(SystemLog::IconUnavailable);
                viewport
            }
        }
    }

    /// Runs the startup hook to completion from the GUI thread.
    fn await_startup(
        runtime: &Handle,
        hook: Arc<dyn StartupHook>,
        token: CancellationToken,
    ) -> StartupStatus {
        let result = tokio::task::block_in_place(|| {
            runtime.block_on(hook.on_ready(StartupContext::new(token)))
        });
        match result {
            Ok(StartupOutcome::Ready) => StartupStatus::Ready,
            Ok(StartupOutcome::Aborted) => StartupStatus::Aborted,
            Err(err) => {
                log!(err);
                StartupStatus::Failed(err.to_string())
            }
        }
    }
}

#[async_trait]
impl HostRuntime for GuiManager {
    async fn run(
        &self,
        configuration: HostConfiguration,
        hook: Arc<dyn StartupHook>,
        window_sink: Arc<dyn WindowStateSink>,
    ) -> Result<(), Error> {
        let runtime = Handle::current();
        let startup_token = self.shutdown.child_token();
        let title = configuration.title.clone();
        let options = eframe::NativeOptions {
            viewport: Self::viewport(&configuration),
            ..Default::default()
        };

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                // eframe shows the window after its first frame, so startup finishes before
                // the page exists.
                let status = Self::await_startup(&runtime, hook, startup_token.clone());
                Ok(Box::new(ShellPage::new(
                    configuration,
                    window_sink,
                    startup_token,
                    status,
                )))
            }),
        )
        .map_err(|err| SystemError::HostStartFailed {
            reason: err.to_string(),
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::GuiManager;
    use crate::interface::startup_hook::StartupHook;
    use crate::model::error::Error;
    use crate::model::error::lifecycle::LifecycleError;
    use crate::model::lifecycle::{StartupContext, StartupOutcome};
    use crate::model::menu::MenuDescriptor;
    use crate::ui::shell_page::StartupStatus;
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::runtime::Handle;
    use tokio_util::sync::CancellationToken;
    use crate::model::window::{
        BACKGROUND_COLOUR, HostConfiguration, StartMode, WindowOptions,
    };

    fn configuration(start_mode: StartMode, frameless: bool) -> HostConfiguration {
        HostConfiguration {
            title: "Algo4evaluation".to_string(),
            window: WindowOptions {
                width: 1200,
                height: 800,
                min_width: 960,
                min_height: 640,
                start_mode,
            },
            frameless,
            menu: MenuDescriptor::new(),
            background: BACKGROUND_COLOUR,
            start_hidden: true,
            enable_default_context_menu: true,
        }
    }

    #[test]
    fn viewport_reflects_host_configuration() {
        let viewport = GuiManager::viewport(&configuration(StartMode::Maximized, true));

        assert_eq!(viewport.title.as_deref(), Some("Algo4evaluation"));
        assert_eq!(viewport.inner_size, Some(eframe::egui::vec2(1200.0, 800.0)));
        assert_eq!(viewport.min_inner_size, Some(eframe::egui::vec2(960.0, 640.0)));
        assert_eq!(viewport.maximized, Some(true));
        assert_eq!(viewport.decorations, Some(false));
        assert_eq!(viewport.visible, Some(false));
        assert!(viewport.icon.is_some());
    }

    struct ScriptedHook {
        result: Result<StartupOutcome, Error>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl StartupHook for ScriptedHook {
        async fn on_ready(&self, ctx: StartupContext) -> Result<StartupOutcome, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            if ctx.is_cancelled() {
                return Ok(StartupOutcome::Aborted);
            }
            self.result.clone()
        }
    }

    fn hook(result: Result<StartupOutcome, Error>) -> Arc<ScriptedHook> {
        Arc::new(ScriptedHook {
            result,
            calls: AtomicUsize::new(0),
        })
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn startup_resolves_before_the_page_is_built() {
        let ready = hook(Ok(StartupOutcome::Ready));
        let status = GuiManager::await_startup(
            &Handle::current(),
            ready.clone(),
            CancellationToken::new(),
        );
        assert_eq!(status, StartupStatus::Ready);
        assert_eq!(ready.calls.load(Ordering::SeqCst), 1);

        let failing = hook(Err(LifecycleError::VersionNotRecorded.into()));
        let status =
            GuiManager::await_startup(&Handle::current(), failing, CancellationToken::new());
        assert!(matches!(status, StartupStatus::Failed(_)));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn cancelled_startup_keeps_the_window_closed() {
        let token = CancellationToken::new();
        token.cancel();

        let status = GuiManager::await_startup(
            &Handle::current(),
            hook(Ok(StartupOutcome::Ready)),
            token,
        );

        assert_eq!(status, StartupStatus::Aborted);
    }

    #[test]
    fn normal_start_keeps_native_decorations() {
        let viewport = GuiManager::viewport(&configuration(StartMode::Normal, false));

        assert_eq!(viewport.maximized, Some(false));
        assert_eq!(viewport.decorations, Some(true));
    }
}
