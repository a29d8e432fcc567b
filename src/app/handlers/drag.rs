//! Handler für den Drag-Lifecycle: greifen, verschieben, loslassen.

use glam::Vec2;

use crate::app::AppState;
use crate::core::PointRef;

/// Greift einen Punkt und wechselt damit nach DRAGGING.
pub fn grab_point(state: &mut AppState, point: PointRef) {
    state.drag.grabbed = Some(point);
    log::debug!("Punkt gegriffen: {:?}", point);
}

/// Verschiebt den gegriffenen Punkt an die Pointer-Position.
///
/// Ohne gegriffenen Punkt (oder bei veralteter Referenz) ein No-op,
/// kein Fehler.
pub fn move_grabbed_point(state: &mut AppState, pos: Vec2) {
    let Some(point_ref) = state.drag.grabbed else {
        return;
    };
    if let Some(point) = state.sketch.point_mut(point_ref) {
        point.position = pos;
    }
}

/// Lässt den gegriffenen Punkt los und kehrt nach IDLE zurück.
pub fn release_grabbed_point(state: &mut AppState) {
    if state.drag.grabbed.take().is_some() {
        log::debug!("Punkt losgelassen");
    }
}
