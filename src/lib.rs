//! Bézier Sketchpad Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, DragState, ViewState};
pub use core::{
    BezierCurve, CurvePointSlot, PointRef, Sketch, SketchPoint, CURVE_SAMPLE_COUNT,
    HANDLE_HALF_EXTENT, SAMPLE_RADIUS,
};
pub use render::{DrawSurface, PainterSurface};
pub use shared::{EditorOptions, RenderScene};
