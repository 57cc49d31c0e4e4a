use crate::core::gui::window_tracker::{WindowSnapshot, WindowTracker};
use crate::core::service::system_service::should_maximize_for_screen;
use crate::interface::window_state_sink::WindowStateSink;
use crate::model::log::lifecycle::LifecycleLog;
use crate::model::log::system::SystemLog;
use crate::model::menu::MenuSection;
use crate::model::window::{HostConfiguration, WindowSize};
use eframe::egui;
use eframe::{App, Frame};
use macros::log;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Result of the startup hook, known before the first frame.
#[derive(Debug, Clone, PartialEq)]
pub enum StartupStatus {
    Ready,
    Aborted,
    Failed(String),
}

pub struct ShellPage {
    configuration: HostConfiguration,
    window_sink: Arc<dyn WindowStateSink>,
    startup_token: CancellationToken,
    startup_status: StartupStatus,
    tracker: WindowTracker,
    revealed: bool,
    screen_checked: bool,
}

impl ShellPage {
    pub fn new(
        configuration: HostConfiguration,
        window_sink: Arc<dyn WindowStateSink>,
        startup_token: CancellationToken,
        startup_status: StartupStatus,
    ) -> Self {
        let revealed = !configuration.start_hidden;
        Self {
            configuration,
            window_sink,
            startup_token,
            startup_status,
            tracker: WindowTracker::new(),
            revealed,
            screen_checked: false,
        }
    }

    fn persist(&self, snapshot: WindowSnapshot) {
        self.window_sink
            .save_window_state(snapshot.width, snapshot.height, snapshot.maximized);
    }

    fn track_window(&mut self, ctx: &egui::Context) {
        let (inner_size, maximized) = ctx.input(|input| {
            let viewport = input.viewport();
            (
                viewport
                    .inner_rect
                    .map(|rect| [rect.width(), rect.height()]),
                viewport.maximized,
            )
        });
        if let Some(snapshot) = self.tracker.observe(inner_size, maximized) {
            self.persist(snapshot);
        }
    }

    fn fit_to_screen(&mut self, ctx: &egui::Context) {
        if self.screen_checked {
            return;
        }
        let Some(monitor) = ctx.input(|input| input.viewport().monitor_size) else {
            return;
        };
        self.screen_checked = true;

        let screen = WindowSize::new(monitor.x.round() as u32, monitor.y.round() as u32);
        let window = &self.configuration.window;
        if should_maximize_for_screen(screen, WindowSize::new(window.min_width, window.min_height)) {
            log!(LifecycleLog::MaximizeForSmallScreen);
            ctx.send_viewport_cmd(egui::ViewportCommand::Maximized(true));
        }
    }

    fn reveal_when_ready(&mut self, ctx: &egui::Context) {
        if self.revealed {
            return;
        }
        self.revealed = true;
        match self.startup_status {
            StartupStatus::Aborted => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Visible(false));
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            StartupStatus::Ready | StartupStatus::Failed(_) => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Visible(true));
                ctx.send_viewport_cmd(egui::ViewportCommand::Focus);
            }
        }
    }

    fn toggle_maximized(ctx: &egui::Context) {
        let maximized = ctx.input(|input| input.viewport().maximized.unwrap_or(false));
        ctx.send_viewport_cmd(egui::ViewportCommand::Maximized(!maximized));
    }

    // Frameless windows have no native title bar to drag or close.
    fn draw_title_bar(&self, ctx: &egui::Context) {
        if !self.configuration.frameless {
            return;
        }
        egui::TopBottomPanel::top("title_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let title = ui.add(
                    egui::Label::new(egui::RichText::new(self.configuration.title.as_str()).strong())
                        .sense(egui::Sense::click_and_drag()),
                );
                if title.drag_started() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::StartDrag);
                }
                if title.double_clicked() {
                    Self::toggle_maximized(ctx);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("✕").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                    if ui.button("🗖").clicked() {
                        Self::toggle_maximized(ctx);
                    }
                    if ui.button("🗕").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Minimized(true));
                    }
                });
            });
        });
    }

    fn draw_menu_bar(&self, ctx: &egui::Context) {
        if self.configuration.menu.is_empty() {
            return;
        }
        let title = self.configuration.title.clone();
        let sections = self.configuration.menu.sections().to_vec();

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                for section in sections {
                    match section {
                        MenuSection::Application => {
                            ui.menu_button(title.as_str(), |ui| {
                                if ui.button(format!("Quit {title}")).clicked() {
                                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                                }
                            });
                        }
                        MenuSection::Edit => {
                            ui.menu_button("Edit", |ui| {
                                if ui.button("Cut").clicked() {
                                    ctx.send_viewport_cmd(egui::ViewportCommand::RequestCut);
                                    ui.close();
                                }
                                if ui.button("Copy").clicked() {
                                    ctx.send_viewport_cmd(egui::ViewportCommand::RequestCopy);
                                    ui.close();
                                }
                                if ui.button("Paste").clicked() {
                                    ctx.send_viewport_cmd(egui::ViewportCommand::RequestPaste);
                                    ui.close();
                                }
                            });
                        }
                        MenuSection::Window => {
                            ui.menu_button("Window", |ui| {
                                if ui.button("Minimize").clicked() {
                                    ctx.send_viewport_cmd(egui::ViewportCommand::Minimized(true));
                                    ui.close();
                                }
                                if ui.button("Zoom").clicked() {
                                    Self::toggle_maximized(ctx);
                                    ui.close();
                                }
                            });
                        }
                    }
                }
            });
        });
    }

    fn draw_content(&self, ctx: &egui::Context) {
        let status = &self.startup_status;
        let context_menu = self.configuration.enable_default_context_menu;

        egui::CentralPanel::default().show(ctx, |ui| {
            let background = ui.interact(
                ui.max_rect(),
                ui.id().with("background"),
                egui::Sense::click(),
            );

            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() / 3.0);
                ui.heading(self.configuration.title.as_str());
                match status {
                    StartupStatus::Ready => ui.label("Ready"),
                    StartupStatus::Aborted => ui.label("Shutting down"),
                    StartupStatus::Failed(reason) => ui.colored_label(egui::Color32::RED, reason.as_str()),
                };
            });

            if context_menu {
                background.context_menu(|ui| {
                    if ui.button("Copy").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::RequestCopy);
                        ui.close();
                    }
                    if ui.button("Paste").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::RequestPaste);
                        ui.close();
                    }
                });
            }
        });
    }
}

impl App for ShellPage {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.track_window(ctx);
        self.fit_to_screen(ctx);
        self.reveal_when_ready(ctx);

        self.draw_title_bar(ctx);
        self.draw_menu_bar(ctx);
        self.draw_content(ctx);
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        self.configuration.background.to_normalized()
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.startup_token.cancel();
        if let Some(snapshot) = self.tracker.snapshot() {
            self.persist(snapshot);
        }
        log!(SystemLog::GuiExited)
    }
}
