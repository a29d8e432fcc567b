//! Application State und Teilzustände.
//!
//! Dieses Modul verwaltet den Zustand der Anwendung (Zeichnung,
//! Drag-Interaktion, View).

mod app_state;
mod drag;
mod view;

pub use app_state::AppState;
pub use drag::DragState;
pub use view::ViewState;
