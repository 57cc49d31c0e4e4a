pub trait WindowStateSink: Send + Sync {
    fn save_window_state(&self, width: i64, height: i64, maximized: bool);
}
