use eframe::egui;
use std::time::{Duration, Instant};
use teleplot_core::SessionConfig;
use teleplot_runtime::Session;

mod surface;

use surface::PlotSurface;

#[derive(Debug, Clone)]
pub struct GuiConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 600.0,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum GuiError {
    #[error("failed to launch session: {0}")]
    Launch(#[from] teleplot_runtime::ProcessError),
    #[error("gui error: {0}")]
    Gui(String),
}

/// Launches the instrumented script and runs the live plot window until the
/// user closes it. The window keeps showing the collected data after the
/// session stops.
pub fn run_gui(config: SessionConfig, gui: GuiConfig) -> Result<(), GuiError> {
    let session = Session::launch(&config)?;
    log::info!("opening plot window for {}", config.script_path);
    let title = session.driver.title();
    let tick_interval = config.tick_interval();

    let mut options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([gui.width, gui.height]),
        ..Default::default()
    };
    // NOTE: Vsync generates hangs and lag on occluded windows.
    options.vsync = false;

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Box::new(PlotApp::new(session, tick_interval))),
    )
    .map_err(|err| GuiError::Gui(err.to_string()))
}

struct PlotApp {
    session: Session,
    surface: PlotSurface,
    tick_interval: Duration,
    last_tick: Option<Instant>,
}

impl PlotApp {
    fn new(session: Session, tick_interval: Duration) -> Self {
        Self {
            session,
            surface: PlotSurface::default(),
            tick_interval,
            last_tick: None,
        }
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Fixed-rate ticking on the repaint clock; repaints between ticks
        // just redraw the current snapshot.
        let now = Instant::now();
        let due = self
            .last_tick
            .map_or(true, |last| now.duration_since(last) >= self.tick_interval);
        if due {
            self.session.driver.tick(&mut self.surface);
            self.last_tick = Some(now);
        }

        if let Some(title) = self.surface.take_title() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.surface.render(ui);
        });

        ctx.request_repaint_after(self.tick_interval);
    }
}

impl Drop for PlotApp {
    fn drop(&mut self) {
        // Window closed: make sure the child does not outlive the session.
        self.session.shutdown();
    }
}
