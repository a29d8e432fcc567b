//! Toolbar mit Clear-Aktion und Platzierungshinweis.

use crate::app::{AppIntent, AppState};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("Clear").clicked() {
                events.push(AppIntent::ClearRequested);
            }

            ui.separator();

            let hint = match state.pending_count() {
                0 => "Click to place point 1 of 4".to_owned(),
                n @ 1..=3 => format!("Click to place point {} of 4", n + 1),
                _ => String::new(),
            };
            ui.label(hint);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                }
            });
        });
    });

    events
}
