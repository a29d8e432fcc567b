use glam::Vec2;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Pointer auf der Zeichenfläche gedrückt (Surface-Koordinaten)
    PointerPressed { pos: Vec2 },
    /// Pointer bei gedrückter Taste bewegt
    PointerDragged { pos: Vec2 },
    /// Pointer losgelassen
    PointerReleased,
    /// Zeichnung leeren (Clear-Button)
    ClearRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Anwendung beenden
    ExitRequested,
}
