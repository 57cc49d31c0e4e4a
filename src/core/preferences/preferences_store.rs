use crate::core::infrastructure::app_config::AppConfig;
use crate::core::infrastructure::app_state::AppState;
use crate::interface::window_state_sink::WindowStateSink;
use crate::model::error::preferences::PreferencesError;
use crate::model::log::preferences::PreferencesLog;
use crate::model::preferences::{BehaviorPreferences, Preferences};
use crate::model::window::{WindowSize, WindowState};
use macros::log;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

/// Durable, best-effort user preferences.
///
/// The file is read on first access and cached. Every change is written straight through;
/// storage errors are logged and never reach the caller.
#[derive(Debug)]
pub struct PreferencesStore {
    path: PathBuf,
    app_state: Arc<AppState>,
    default_window_size: WindowSize,
    cache: RwLock<Option<Preferences>>,
}

impl PreferencesStore {
    pub fn new(
        path: impl Into<PathBuf>,
        app_state: Arc<AppState>,
        default_window_size: WindowSize,
    ) -> Self {
        Self {
            path: path.into(),
            app_state,
            default_window_size,
            cache: RwLock::new(None),
        }
    }

    pub fn from_config(app_config: &AppConfig, app_state: Arc<AppState>) -> Self {
        Self::new(
            app_config.preferences_path.clone(),
            app_state,
            app_config.default_window_size(),
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn set_app_version(&self, version: impl Into<String>) {
        self.app_state.set_app_version(version);
    }

    pub fn app_version(&self) -> Option<String> {
        self.app_state.app_version()
    }

    /// Width, height and maximized flag to open the window with.
    pub fn get_window_size(&self) -> (u32, u32, bool) {
        let state = self.window_state();
        (state.width, state.height, state.maximized)
    }

    pub fn window_state(&self) -> WindowState {
        let behavior = self.with_preferences(|preferences| preferences.behavior.clone());
        Self::resolve_window_state(&behavior, self.default_window_size)
    }

    fn resolve_window_state(behavior: &BehaviorPreferences, defaults: WindowSize) -> WindowState {
        let width = u32::try_from(behavior.window_width).ok().filter(|w| *w > 0);
        let height = u32::try_from(behavior.window_height).ok().filter(|h| *h > 0);
        match (width, height) {
            (Some(width), Some(height)) => WindowState {
                width,
                height,
                maximized: behavior.window_maximized,
            },
            _ => {
                // 0x0 is what a fresh record holds, anything else was written by someone.
                if behavior.window_width != 0 || behavior.window_height != 0 {
                    log!(PreferencesLog::InvalidWindowSize {
                        width: behavior.window_width,
                        height: behavior.window_height,
                    });
                }
                WindowState {
                    width: defaults.width,
                    height: defaults.height,
                    maximized: false,
                }
            }
        }
    }

    /// Records the window placement. While maximized only the flag changes, so the last
    /// normal size survives for the next restore. A record without a valid size takes the
    /// size passed along with the maximized flag.
    pub fn save_window_state(&self, width: i64, height: i64, maximized: bool) {
        self.update(|preferences| {
            let behavior = &mut preferences.behavior;
            if maximized {
                if (behavior.window_width <= 0 || behavior.window_height <= 0)
                    && width > 0
                    && height > 0
                {
                    behavior.window_width = width;
                    behavior.window_height = height;
                }
                behavior.window_maximized = true;
            } else {
                if width > 0 && height > 0 {
                    behavior.window_width = width;
                    behavior.window_height = height;
                }
                behavior.window_maximized = false;
            }
            true
        });
        log!(PreferencesLog::WindowStateSaved {
            width,
            height,
            maximized,
        });
    }

    pub fn last_version(&self) -> String {
        self.with_preferences(|preferences| preferences.behavior.last_version.clone())
    }

    /// Stores the running version as last seen. Returns `true` if it differs from the
    /// version recorded by the previous run.
    pub fn mark_version_seen(&self) -> bool {
        let Some(current) = self.app_version() else {
            return false;
        };

        let mut previous = None;
        self.update(|preferences| {
            let behavior = &mut preferences.behavior;
            if behavior.last_version == current {
                return false;
            }
            previous = Some(std::mem::replace(
                &mut behavior.last_version,
                current.clone(),
            ));
            true
        });

        match previous {
            Some(previous) => {
                log!(PreferencesLog::VersionChanged { previous, current });
                true
            }
            None => false,
        }
    }

    fn with_preferences<T>(&self, read: impl FnOnce(&Preferences) -> T) -> T {
        {
            let guard = self.cache.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(preferences) = guard.as_ref() {
                return read(preferences);
            }
        }
        let mut guard = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        let preferences = guard.get_or_insert_with(|| self.load());
        read(preferences)
    }

    /// Applies `mutate` to the cached record and writes it through when it reports a change.
    /// The cache keeps the new value even if the write fails.
    fn update(&self, mutate: impl FnOnce(&mut Preferences) -> bool) {
        let mut guard = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        let preferences = guard.get_or_insert_with(|| self.load());
        if !mutate(preferences) {
            return;
        }
        if let Err(err) = Self::write_file(&self.path, preferences) {
            log!(err);
        }
    }

    fn load(&self) -> Preferences {
        match Self::read_file(&self.path) {
            Ok(Some(preferences)) => {
                log!(PreferencesLog::Loaded {
                    path: self.path.display().to_string()
                });
                preferences
            }
            Ok(None) => {
                log!(PreferencesLog::NotFound {
                    path: self.path.display().to_string()
                });
                Preferences::default()
            }
            Err(err) => {
                log!(err);
                Preferences::default()
            }
        }
    }

    fn read_file(path: &Path) -> Result<Option<Preferences>, PreferencesError> {
        let toml_string = match fs::read_to_string(path) {
            Ok(toml_string) => toml_string,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(PreferencesError::ReadFailed {
                    path: path.to_path_buf(),
                    reason: err.to_string(),
                });
            }
        };
        toml::from_str::<Preferences>(&toml_string)
            .map(Some)
            .map_err(|err| PreferencesError::ParseFailed {
                path: path.to_path_buf(),
                reason: err.to_string(),
            })
    }

    fn write_file(path: &Path, preferences: &Preferences) -> Result<(), PreferencesError> {
        let toml_string =
            toml::to_string_pretty(preferences).map_err(|err| PreferencesError::SerializeFailed {
                reason: err.to_string(),
            })?;

        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| PreferencesError::CreateDirectoryFailed {
                path: parent.to_path_buf(),
                reason: err.to_string(),
            })?;
        }

        let staging = path.with_extension("toml.tmp");
        fs::write(&staging, toml_string)
            .and_then(|_| fs::rename(&staging, path))
            .map_err(|err| PreferencesError::WriteFailed {
                path: path.to_path_buf(),
                reason: err.to_string(),
            })
    }
}

impl WindowStateSink for PreferencesStore {
    fn save_window_state(&self, width: i64, height: i64, maximized: bool) {
        PreferencesStore::save_window_state(self, width, height, maximized);
    }
}

#[cfg(test)]
mod tests {
    use super::PreferencesStore;
    use crate::core::infrastructure::app_state::AppState;
    use crate::model::window::WindowSize;
    use std::fs;
    use std::path::Path;
    use std::sync::Arc;

    const DEFAULTS: WindowSize = WindowSize::new(1024, 768);

    fn store_at(path: &Path) -> PreferencesStore {
        PreferencesStore::new(path, Arc::new(AppState::new()), DEFAULTS)
    }

    fn write_record(path: &Path, width: i64, height: i64, maximized: bool) {
        fs::write(
            path,
            format!(
                "[behavior]\nwindow_width = {width}\nwindow_height = {height}\nwindow_maximized = {maximized}\n"
            ),
        )
        .expect("write preferences");
    }

    #[test]
    fn missing_record_returns_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_at(&dir.path().join("preferences.toml"));

        assert_eq!(store.get_window_size(), (1024, 768, false));
    }

    #[test]
    fn stored_record_is_restored_verbatim() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("preferences.toml");
        write_record(&path, 1200, 800, true);

        assert_eq!(store_at(&path).get_window_size(), (1200, 800, true));
    }

    #[test]
    fn non_positive_dimensions_fall_back_to_defaults_and_normal_mode() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("preferences.toml");

        for (width, height) in [(0, 800), (1200, 0), (-5, 800), (1200, -1), (-1, -1)] {
            write_record(&path, width, height, true);
            assert_eq!(
                store_at(&path).get_window_size(),
                (1024, 768, false),
                "record {width}x{height}"
            );
        }
    }

    #[test]
    fn corrupt_record_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("preferences.toml");
        fs::write(&path, "behavior = [not toml").expect("write preferences");

        assert_eq!(store_at(&path).get_window_size(), (1024, 768, false));
    }

    #[test]
    fn saved_state_survives_a_restart() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("preferences.toml");

        store_at(&path).save_window_state(1280, 900, false);

        assert!(path.exists());
        assert_eq!(store_at(&path).get_window_size(), (1280, 900, false));
    }

    #[test]
    fn maximized_save_keeps_last_normal_size() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("preferences.toml");
        let store = store_at(&path);

        store.save_window_state(1280, 900, false);
        store.save_window_state(2560, 1440, true);
        assert_eq!(store.get_window_size(), (1280, 900, true));

        store.save_window_state(1300, 910, false);
        assert_eq!(store_at(&path).get_window_size(), (1300, 910, false));
    }

    #[test]
    fn maximized_save_on_fresh_record_is_restored() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("preferences.toml");

        store_at(&path).save_window_state(1024, 768, true);

        assert_eq!(store_at(&path).get_window_size(), (1024, 768, true));
    }

    #[test]
    fn maximized_save_repairs_invalid_record() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("preferences.toml");
        write_record(&path, -1, 800, false);

        store_at(&path).save_window_state(1100, 700, true);

        assert_eq!(store_at(&path).get_window_size(), (1100, 700, true));
    }

    #[test]
    fn non_positive_save_only_updates_flag() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("preferences.toml");
        write_record(&path, 1200, 800, true);
        let store = store_at(&path);

        store.save_window_state(0, -3, false);

        assert_eq!(store.get_window_size(), (1200, 800, false));
    }

    #[test]
    fn write_failure_is_swallowed_and_cache_stays_current() {
        let dir = tempfile::tempdir().expect("tempdir");
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "a file, not a directory").expect("write blocker");
        let store = store_at(&blocker.join("preferences.toml"));

        store.save_window_state(1100, 700, false);

        assert_eq!(store.get_window_size(), (1100, 700, false));
    }

    #[test]
    fn mark_version_seen_detects_first_run_per_version() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("preferences.toml");

        let store = store_at(&path);
        store.set_app_version("1.2.3");
        assert!(store.mark_version_seen());
        assert!(!store.mark_version_seen());

        let restarted = store_at(&path);
        restarted.set_app_version("1.2.3");
        assert_eq!(restarted.last_version(), "1.2.3");
        assert!(!restarted.mark_version_seen());

        restarted.set_app_version("1.3.0");
        assert!(restarted.mark_version_seen());
    }

    #[test]
    fn mark_version_seen_without_version_is_a_no_op() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("preferences.toml");
        let store = store_at(&path);

        assert!(!store.mark_version_seen());
        assert!(!path.exists());
    }

    #[test]
    fn window_reads_observe_recorded_version() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_at(&dir.path().join("preferences.toml"));

        store.set_app_version("2024.1-rc1");
        let _ = store.get_window_size();

        assert_eq!(store.app_version().as_deref(), Some("2024.1-rc1"));
    }
}
