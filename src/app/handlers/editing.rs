//! Handler für Punkt-Platzierung und Clear.

use glam::Vec2;

use crate::app::AppState;

/// Platziert einen offenen Punkt; der vierte committet atomar eine Kurve.
pub fn add_pending_point(state: &mut AppState, pos: Vec2) {
    let committed = state.sketch.add_pending_point(pos);
    if committed {
        log::info!("Kurve #{} committet", state.sketch.curve_count());
    } else {
        log::debug!(
            "Offener Punkt {}/4 bei ({:.1}, {:.1})",
            state.sketch.pending_count(),
            pos.x,
            pos.y
        );
    }
}

/// Leert die Zeichnung vollständig und beendet einen laufenden Drag.
pub fn clear(state: &mut AppState) {
    state.drag.grabbed = None;
    state.sketch.clear();
    log::info!("Zeichnung geleert");
}
