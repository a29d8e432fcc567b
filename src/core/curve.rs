//! Kubische Bézier-Kurve aus vier exklusiv besessenen Punkten.

use glam::Vec2;

use super::point::SketchPoint;
use super::tessellation;

/// Adressiert einen der vier definierenden Punkte einer Kurve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurvePointSlot {
    /// Start-Anker (Kurve läuft bei t = 0 durch ihn)
    AnchorStart,
    /// Kontrollpunkt 0 (startseitig) oder 1 (endseitig)
    Control(usize),
    /// End-Anker (t → 1)
    AnchorEnd,
}

/// Eine committete Kurve: zwei Anker plus geordnetes Kontrollpunkt-Paar.
///
/// Die Sample-Positionen werden nicht gehalten, sondern pro Frame aus den
/// aktuellen Punktlagen neu tesselliert.
#[derive(Debug, Clone)]
pub struct BezierCurve {
    /// Start-Anker
    pub anchor_start: SketchPoint,
    /// End-Anker
    pub anchor_end: SketchPoint,
    /// Kontrollpunkte in Reihenfolge: [0] startseitig, [1] endseitig
    pub control_points: [SketchPoint; 2],
}

impl BezierCurve {
    /// Baut eine Kurve aus den vier übernommenen Punkten.
    pub fn new(
        anchor_start: SketchPoint,
        control_points: [SketchPoint; 2],
        anchor_end: SketchPoint,
    ) -> Self {
        Self {
            anchor_start,
            anchor_end,
            control_points,
        }
    }

    /// Hit-Test über die vier Punkte der Kurve.
    ///
    /// Prüfreihenfolge ist der Tie-Break bei überlappenden Hitboxen:
    /// Start-Anker, dann Kontrollpunkte in Reihenfolge, dann End-Anker.
    pub fn hit_test_points(&self, probe: Vec2) -> Option<CurvePointSlot> {
        if self.anchor_start.hit_test(probe) {
            return Some(CurvePointSlot::AnchorStart);
        }
        for (index, control) in self.control_points.iter().enumerate() {
            if control.hit_test(probe) {
                return Some(CurvePointSlot::Control(index));
            }
        }
        if self.anchor_end.hit_test(probe) {
            return Some(CurvePointSlot::AnchorEnd);
        }
        None
    }

    /// Read-only Zugriff auf den Punkt hinter einem Slot.
    pub fn point(&self, slot: CurvePointSlot) -> &SketchPoint {
        match slot {
            CurvePointSlot::AnchorStart => &self.anchor_start,
            CurvePointSlot::Control(index) => &self.control_points[index],
            CurvePointSlot::AnchorEnd => &self.anchor_end,
        }
    }

    /// Mutabler Zugriff auf den Punkt hinter einem Slot.
    pub fn point_mut(&mut self, slot: CurvePointSlot) -> &mut SketchPoint {
        match slot {
            CurvePointSlot::AnchorStart => &mut self.anchor_start,
            CurvePointSlot::Control(index) => &mut self.control_points[index],
            CurvePointSlot::AnchorEnd => &mut self.anchor_end,
        }
    }

    /// Tesselliert die Kurve aus den aktuellen Punktlagen.
    pub fn sample_positions(&self) -> Vec<Vec2> {
        tessellation::sample_positions(
            self.anchor_start.position,
            self.control_points[0].position,
            self.control_points[1].position,
            self.anchor_end.position,
        )
    }
}
