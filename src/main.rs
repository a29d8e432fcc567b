//! Bézier Sketchpad.
//!
//! Interaktiver Editor zum Zeichnen kubischer Bézier-Kurven: vier Klicks
//! platzieren eine Kurve, bestehende Punkte lassen sich per Drag verformen.

use bezier_sketchpad::shared::options::WINDOW_SIZE_DEFAULT;
use bezier_sketchpad::{render, ui, AppController, AppIntent, AppState, EditorOptions};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Bézier Sketchpad v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(WINDOW_SIZE_DEFAULT)
                .with_title("Bézier Sketchpad"),
            ..Default::default()
        };

        eframe::run_native(
            "Bézier Sketchpad",
            options,
            Box::new(|_cc| Ok(Box::new(SketchApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct SketchApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl SketchApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = editor_options;

        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for SketchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl SketchApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_toolbar(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(self.input.collect_viewport_events(ui, &response));

                let scene = self
                    .controller
                    .build_render_scene(&self.state, [rect.width(), rect.height()]);

                let painter = ui.painter_at(rect);
                let mut surface = render::PainterSurface::new(&painter, rect);
                render::scene::paint(&scene, &mut surface);
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || self.state.drag.is_dragging()
            || ctx.input(|i| i.pointer.is_moving())
        {
            ctx.request_repaint();
        }
    }
}
