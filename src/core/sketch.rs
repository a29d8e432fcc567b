//! Zeichnung: committete Kurven plus offene Punkte, Hit-Testing und
//! Commit-Regel.

use glam::Vec2;

use super::curve::{BezierCurve, CurvePointSlot};
use super::point::SketchPoint;

/// Schwache Referenz auf einen Punkt der Zeichnung.
///
/// Identifiziert, besitzt aber nicht: der Verweis wird bei jeder Verwendung
/// gegen die Zeichnung aufgelöst. Ein veralteter Verweis (z.B. nach einem
/// Clear) löst zu `None` auf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointRef {
    /// Punkt einer committeten Kurve
    Curve {
        /// Index in `Sketch::curves`
        curve_index: usize,
        /// Punkt innerhalb der Kurve
        slot: CurvePointSlot,
    },
    /// Offener Punkt, noch keiner Kurve zugeordnet
    Pending {
        /// Index in `Sketch::pending_points`
        index: usize,
    },
}

/// Alle Kurven und offenen Punkte einer Zeichen-Session.
///
/// Einfüge-Reihenfolge der Kurven ist zugleich Stapel-Reihenfolge beim
/// Zeichnen und bleibt stabil.
#[derive(Debug, Clone, Default)]
pub struct Sketch {
    /// Committete Kurven in Einfüge-Reihenfolge
    pub curves: Vec<BezierCurve>,
    /// Offene Punkte; nach jeder abgeschlossenen Operation 0–3 Einträge
    pub pending_points: Vec<SketchPoint>,
}

impl Sketch {
    /// Erstellt eine leere Zeichnung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt die Anzahl committeter Kurven zurück.
    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    /// Gibt die Anzahl offener Punkte zurück.
    pub fn pending_count(&self) -> usize {
        self.pending_points.len()
    }

    /// Hit-Test über die gesamte Zeichnung.
    ///
    /// Kurven-Punkte haben Vorrang vor offenen Punkten; innerhalb beider
    /// Gruppen entscheidet die Einfüge-Reihenfolge. Der erste Treffer
    /// gewinnt, das Ergebnis ist damit deterministisch.
    pub fn hit_test(&self, probe: Vec2) -> Option<PointRef> {
        for (curve_index, curve) in self.curves.iter().enumerate() {
            if let Some(slot) = curve.hit_test_points(probe) {
                return Some(PointRef::Curve { curve_index, slot });
            }
        }
        self.pending_points
            .iter()
            .position(|point| point.hit_test(probe))
            .map(|index| PointRef::Pending { index })
    }

    /// Platziert einen offenen Punkt an `position`.
    ///
    /// Der vierte offene Punkt committet im selben Aufruf atomar eine
    /// Kurve: [0] wird Start-Anker, [1] und [2] das Kontrollpunkt-Paar
    /// (Reihenfolge erhalten), [3] End-Anker; rein indexbasiert, ohne
    /// räumliche Sortierung. Die Punkte werden übernommen, nicht kopiert.
    ///
    /// Gibt `true` zurück, wenn eine Kurve committet wurde.
    pub fn add_pending_point(&mut self, position: Vec2) -> bool {
        self.pending_points.push(SketchPoint::new(position));
        if self.pending_points.len() < 4 {
            return false;
        }

        let controls = [self.pending_points.remove(1), self.pending_points.remove(1)];
        let start = self.pending_points.remove(0);
        let end = self.pending_points.remove(0);
        self.curves.push(BezierCurve::new(start, controls, end));

        debug_assert!(self.pending_points.is_empty());
        true
    }

    /// Löst eine Punktreferenz read-only auf.
    pub fn point(&self, point_ref: PointRef) -> Option<&SketchPoint> {
        match point_ref {
            PointRef::Curve { curve_index, slot } => {
                self.curves.get(curve_index).map(|curve| curve.point(slot))
            }
            PointRef::Pending { index } => self.pending_points.get(index),
        }
    }

    /// Löst eine Punktreferenz mutabel auf.
    pub fn point_mut(&mut self, point_ref: PointRef) -> Option<&mut SketchPoint> {
        match point_ref {
            PointRef::Curve { curve_index, slot } => self
                .curves
                .get_mut(curve_index)
                .map(|curve| curve.point_mut(slot)),
            PointRef::Pending { index } => self.pending_points.get_mut(index),
        }
    }

    /// Leert Kurven und offene Punkte vollständig.
    pub fn clear(&mut self) {
        self.curves.clear();
        self.pending_points.clear();
    }
}
