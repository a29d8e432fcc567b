//! Handler für Viewport und Anwendungssteuerung.

use crate::app::AppState;

/// Übernimmt die aktuelle Viewport-Größe.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Markiert die Anwendung zum kontrollierten Beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
    log::info!("Beenden angefordert");
}
