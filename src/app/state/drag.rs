use crate::core::PointRef;

/// Zustand der Pointer-Interaktion.
///
/// `grabbed` ist genau dann gesetzt, wenn ein Drag läuft (DRAGGING);
/// `None` entspricht IDLE. Mehr Zustände braucht die Maschine nicht.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragState {
    /// Gegriffener Punkt; schwache Referenz, kein Besitz
    pub grabbed: Option<PointRef>,
}

impl DragState {
    /// Erstellt den Ausgangszustand (IDLE).
    pub fn new() -> Self {
        Self { grabbed: None }
    }

    /// Gibt `true` zurück, wenn gerade ein Punkt gegriffen ist.
    pub fn is_dragging(&self) -> bool {
        self.grabbed.is_some()
    }
}
