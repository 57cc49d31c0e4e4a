/// Window placement to hand to the preferences sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSnapshot {
    pub width: i64,
    pub height: i64,
    pub maximized: bool,
}

/// Follows viewport changes frame by frame and decides when they are worth persisting.
///
/// The normal size is only tracked while the window is not maximized. A snapshot is produced
/// whenever the maximized flag flips; size changes alone wait for the window to close.
#[derive(Debug, Default)]
pub struct WindowTracker {
    normal_size: Option<(i64, i64)>,
    maximized: Option<bool>,
}

impl WindowTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(
        &mut self,
        inner_size: Option<[f32; 2]>,
        maximized: Option<bool>,
    ) -> Option<WindowSnapshot> {
        let maximized = maximized.unwrap_or(false);
        if !maximized {
            if let Some([width, height]) = inner_size {
                self.normal_size = Some((width.round() as i64, height.round() as i64));
            }
        }

        let flipped = self.maximized.is_some_and(|previous| previous != maximized);
        self.maximized = Some(maximized);
        if flipped { self.snapshot() } else { None }
    }

    pub fn snapshot(&self) -> Option<WindowSnapshot> {
        let maximized = self.maximized?;
        let (width, height) = self.normal_size.unwrap_or((0, 0));
        Some(WindowSnapshot {
            width,
            height,
            maximized,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{WindowSnapshot, WindowTracker};

    #[test]
    fn nothing_to_save_before_first_frame() {
        assert_eq!(WindowTracker::new().snapshot(), None);
    }

    #[test]
    fn resizing_alone_does_not_emit() {
        let mut tracker = WindowTracker::new();
        assert_eq!(tracker.observe(Some([1024.0, 768.0]), Some(false)), None);
        assert_eq!(tracker.observe(Some([1100.4, 700.6]), Some(false)), None);
        assert_eq!(
            tracker.snapshot(),
            Some(WindowSnapshot {
                width: 1100,
                height: 701,
                maximized: false
            })
        );
    }

    #[test]
    fn maximize_flip_emits_with_last_normal_size() {
        let mut tracker = WindowTracker::new();
        tracker.observe(Some([1200.0, 800.0]), Some(false));

        let maximized = tracker.observe(Some([2560.0, 1400.0]), Some(true));
        assert_eq!(
            maximized,
            Some(WindowSnapshot {
                width: 1200,
                height: 800,
                maximized: true
            })
        );

        let restored = tracker.observe(Some([1200.0, 800.0]), Some(false));
        assert_eq!(
            restored,
            Some(WindowSnapshot {
                width: 1200,
                height: 800,
                maximized: false
            })
        );
    }

    #[test]
    fn starting_maximized_has_no_normal_size() {
        let mut tracker = WindowTracker::new();
        assert_eq!(tracker.observe(Some([2560.0, 1400.0]), Some(true)), None);
        assert_eq!(
            tracker.snapshot(),
            Some(WindowSnapshot {
                width: 0,
                height: 0,
                maximized: true
            })
        );
    }
}
