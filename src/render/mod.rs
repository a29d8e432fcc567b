//! Rendering: Zeichenflächen-Vertrag, egui-Backend und Szenen-Painter.
//!
//! Der Renderer konsumiert ausschließlich `RenderScene`, nie den
//! AppState direkt.

pub mod painter;
pub mod scene;
pub mod surface;

pub use painter::PainterSurface;
pub use surface::DrawSurface;
