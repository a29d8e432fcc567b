use crate::app::CommandLog;
use crate::core::Sketch;
use crate::shared::EditorOptions;

use super::{DragState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Die Zeichnung: committete Kurven + offene Punkte
    pub sketch: Sketch,
    /// Zustand der Pointer-Interaktion (IDLE/DRAGGING)
    pub drag: DragState,
    /// View-State
    pub view: ViewState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            sketch: Sketch::new(),
            drag: DragState::new(),
            view: ViewState::new(),
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Kurven zurück (für UI-Anzeige)
    pub fn curve_count(&self) -> usize {
        self.sketch.curve_count()
    }

    /// Gibt die Anzahl der offenen Punkte zurück (für UI-Anzeige)
    pub fn pending_count(&self) -> usize {
        self.sketch.pending_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
