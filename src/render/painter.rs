//! DrawSurface-Implementierung über den egui-Painter.

use glam::Vec2;

use super::surface::DrawSurface;

/// Zeichnet in das Canvas-Rechteck eines egui-Frames.
///
/// Übersetzt Surface-Koordinaten (Ursprung = linke obere Canvas-Ecke)
/// in Screen-Koordinaten des Painters.
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    canvas_rect: egui::Rect,
}

impl<'a> PainterSurface<'a> {
    /// Erstellt eine Surface über dem übergebenen Canvas-Rechteck.
    pub fn new(painter: &'a egui::Painter, canvas_rect: egui::Rect) -> Self {
        Self {
            painter,
            canvas_rect,
        }
    }

    fn to_screen(&self, pos: Vec2) -> egui::Pos2 {
        self.canvas_rect.min + egui::Vec2::new(pos.x, pos.y)
    }
}

/// Konvertiert eine RGBA-Farbe (0..1) in egui-Farbwerte.
fn to_color32(color: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0).round() as u8,
        (color[1] * 255.0).round() as u8,
        (color[2] * 255.0).round() as u8,
        (color[3] * 255.0).round() as u8,
    )
}

impl DrawSurface for PainterSurface<'_> {
    fn clear(&mut self, color: [f32; 4]) {
        self.painter
            .rect_filled(self.canvas_rect, 0.0, to_color32(color));
    }

    fn fill_rect(&mut self, center: Vec2, size: Vec2, color: [f32; 4]) {
        let rect = egui::Rect::from_center_size(
            self.to_screen(center),
            egui::Vec2::new(size.x, size.y),
        );
        self.painter.rect_filled(rect, 0.0, to_color32(color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        self.painter
            .circle_filled(self.to_screen(center), radius, to_color32(color));
    }
}
