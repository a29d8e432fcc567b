//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier liegt die Entscheidungstabelle der Pointer-Interaktion. Sie kennt
//! genau zwei Zustände, IDLE (kein Punkt gegriffen) und DRAGGING, und
//! drei Pointer-Ereignisse:
//!
//! - Pressed in IDLE: Treffer ⇒ Punkt greifen, sonst offenen Punkt setzen
//! - Dragged in DRAGGING: gegriffenen Punkt verschieben; in IDLE No-op
//! - Released in DRAGGING: loslassen; in IDLE No-op (idempotent)
//!
//! Neu platzierte und früher platzierte Punkte sind hier bewusst
//! ununterscheidbar: beide sind nur über den Hit-Test erreichbar.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { pos } => match state.sketch.hit_test(pos) {
            Some(point) => vec![AppCommand::GrabPoint { point }],
            None => vec![AppCommand::AddPendingPoint { pos }],
        },
        AppIntent::PointerDragged { pos } => {
            if state.drag.is_dragging() {
                vec![AppCommand::MoveGrabbedPoint { pos }]
            } else {
                Vec::new()
            }
        }
        AppIntent::PointerReleased => {
            if state.drag.is_dragging() {
                vec![AppCommand::ReleaseGrabbedPoint]
            } else {
                Vec::new()
            }
        }
        AppIntent::ClearRequested => vec![AppCommand::ClearSketch],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
