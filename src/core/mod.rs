//! Core-Domänentypen: Punkte, Kurven, Tessellation und Zeichnung.
//!
//! Dieses Modul ist frei von UI-Abhängigkeiten und definiert die
//! Haupt-Datenstrukturen:
//! - SketchPoint: verschiebbarer Punkt mit fester Hitbox
//! - BezierCurve: committete Kurve aus vier Punkten
//! - Sketch: Container für Kurven und offene Punkte

pub mod curve;
pub mod point;
pub mod sketch;
pub mod tessellation;

pub use curve::{BezierCurve, CurvePointSlot};
pub use point::{SketchPoint, HANDLE_HALF_EXTENT, SAMPLE_RADIUS};
pub use sketch::{PointRef, Sketch};
pub use tessellation::{cubic_bezier, sample_positions, CURVE_SAMPLE_COUNT, CURVE_SAMPLE_STEP};
