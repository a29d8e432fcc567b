//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Curves: {} | Pending points: {}",
                state.curve_count(),
                state.pending_count()
            ));

            ui.separator();

            if state.drag.is_dragging() {
                ui.label("Dragging point");
            } else {
                ui.label("Idle");
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
