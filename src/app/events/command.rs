use glam::Vec2;

use crate::core::PointRef;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Punkt unter dem Pointer greifen (Drag-Beginn)
    GrabPoint { point: PointRef },
    /// Gegriffenen Punkt an die Pointer-Position verschieben
    MoveGrabbedPoint { pos: Vec2 },
    /// Gegriffenen Punkt loslassen (Drag-Ende)
    ReleaseGrabbedPoint,
    /// Neuen offenen Punkt platzieren; der vierte committet eine Kurve
    AddPendingPoint { pos: Vec2 },
    /// Kurven und offene Punkte vollständig löschen
    ClearSketch,
    /// Viewport-Größe übernehmen
    SetViewportSize { size: [f32; 2] },
    /// Anwendung kontrolliert beenden
    RequestExit,
}
