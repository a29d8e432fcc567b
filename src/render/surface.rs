//! Zeichenflächen-Vertrag: die Primitive, die der Szenen-Renderer braucht.

use glam::Vec2;

/// Abstrakte 2D-Zeichenfläche in Surface-Koordinaten.
///
/// Produktiv implementiert über den egui-Painter; Tests verwenden eine
/// aufzeichnende Implementierung, um Zeichenreihenfolge und Primitive
/// zu prüfen.
pub trait DrawSurface {
    /// Füllt die gesamte Fläche mit `color` (Frame-Beginn).
    fn clear(&mut self, color: [f32; 4]);

    /// Zeichnet ein gefülltes, achsenparalleles Rechteck um `center`.
    fn fill_rect(&mut self, center: Vec2, size: Vec2, color: [f32; 4]);

    /// Zeichnet einen gefüllten Kreis um `center`.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]);
}
