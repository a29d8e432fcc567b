//! Punktmodell: Position plus feste, achsenparallele Hitbox.

use glam::Vec2;

/// Halbe Kantenlänge der Handle-Hitbox (ergibt ein 10×10-Quadrat).
pub const HANDLE_HALF_EXTENT: f32 = 5.0;
/// Radius der gerenderten Kurven-Sample-Punkte.
pub const SAMPLE_RADIUS: f32 = 2.0;

/// Verschiebbarer Anker- oder Kontrollpunkt einer Kurve.
///
/// Die Hitbox ist auf die Position zentriert und über die gesamte
/// Lebensdauer des Punkts konstant groß; beim Verschieben ändert sich
/// ausschließlich die Position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SketchPoint {
    /// Mittelpunkt in Surface-Koordinaten
    pub position: Vec2,
    half_extent: Vec2,
}

impl SketchPoint {
    /// Erstellt einen Punkt mit Standard-Hitbox an der übergebenen Position.
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            half_extent: Vec2::splat(HANDLE_HALF_EXTENT),
        }
    }

    /// Gibt die halbe Hitbox-Ausdehnung zurück.
    pub fn half_extent(&self) -> Vec2 {
        self.half_extent
    }

    /// Prüft, ob `probe` strikt innerhalb der Hitbox liegt.
    ///
    /// Alle vier Vergleiche sind strikt: eine Berührung des Rands zählt
    /// nicht als Treffer.
    pub fn hit_test(&self, probe: Vec2) -> bool {
        probe.x > self.position.x - self.half_extent.x
            && probe.x < self.position.x + self.half_extent.x
            && probe.y > self.position.y - self.half_extent.y
            && probe.y < self.position.y + self.half_extent.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_test_inside_box() {
        let point = SketchPoint::new(Vec2::new(50.0, 50.0));

        assert!(point.hit_test(Vec2::new(50.0, 50.0)));
        assert!(point.hit_test(Vec2::new(54.9, 54.9)));
        assert!(point.hit_test(Vec2::new(45.1, 45.1)));
    }

    #[test]
    fn hit_test_edge_is_a_miss() {
        let point = SketchPoint::new(Vec2::new(50.0, 50.0));

        // Rand der Box: strikte Ungleichheit, kein Treffer
        assert!(!point.hit_test(Vec2::new(55.0, 55.0)));
        assert!(!point.hit_test(Vec2::new(45.0, 50.0)));
        assert!(!point.hit_test(Vec2::new(50.0, 55.0)));
    }

    #[test]
    fn hit_test_outside_box() {
        let point = SketchPoint::new(Vec2::new(50.0, 50.0));

        assert!(!point.hit_test(Vec2::new(60.0, 50.0)));
        assert!(!point.hit_test(Vec2::new(50.0, 30.0)));
    }

    #[test]
    fn hitbox_stays_constant_while_moving() {
        let mut point = SketchPoint::new(Vec2::new(0.0, 0.0));
        let extent_before = point.half_extent();

        point.position = Vec2::new(200.0, -30.0);

        assert_eq!(point.half_extent(), extent_before);
        assert!(point.hit_test(Vec2::new(200.0, -30.0)));
        assert!(!point.hit_test(Vec2::new(0.0, 0.0)));
    }
}
