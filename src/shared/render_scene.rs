//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use crate::core::{PointRef, Sketch};

use super::options::EditorOptions;

/// Read-only Daten für einen Render-Frame.
///
/// Die Zeichnung wird als Snapshot geklont; mit vier Punkten pro Kurve ist
/// das pro Frame billig, die Sample-Punkte entstehen erst beim Zeichnen.
#[derive(Clone)]
pub struct RenderScene {
    /// Snapshot der Zeichnung (Kurven + offene Punkte)
    pub sketch: Sketch,
    /// Aktuell gegriffener Punkt (für Hervorhebung), None wenn idle
    pub grabbed: Option<PointRef>,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Laufzeit-Optionen (Farben)
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob die Szene sichtbaren Inhalt hat.
    pub fn has_content(&self) -> bool {
        !self.sketch.curves.is_empty() || !self.sketch.pending_points.is_empty()
    }
}
