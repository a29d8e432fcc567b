//! Viewport-Input-Handling: rohe Pointer-Events → AppIntent.
//!
//! Übersetzt den egui-Pointer-Zustand in die drei Ereignisse der
//! Interaktionsmaschine (Pressed/Dragged/Released), bereits in
//! Surface-Koordinaten. Die Entscheidung, was ein Ereignis bewirkt,
//! liegt vollständig im Intent-Mapping; hier wird nur gesammelt.

use crate::app::AppIntent;

/// Verwaltet den Input-Zustand für das Viewport.
#[derive(Default)]
pub struct InputState {
    /// Läuft eine auf der Zeichenfläche begonnene Pointer-Interaktion?
    pointer_active: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            pointer_active: false,
        }
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg für die
    /// Pointer-Interaktion auf der Zeichenfläche.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let rect = response.rect;
        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: [rect.width(), rect.height()],
        });

        let (pressed, released, primary_down, moving, press_origin, latest_pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.primary_down(),
                i.pointer.is_moving(),
                i.pointer.press_origin(),
                i.pointer.latest_pos(),
            )
        });

        if pressed {
            // press_origin() liefert die exakte Druckposition, noch vor
            // jeder Drag-Schwelle
            if let Some(pos) = press_origin {
                if rect.contains(pos) {
                    self.pointer_active = true;
                    events.push(AppIntent::PointerPressed {
                        pos: to_surface_pos(pos, rect),
                    });
                }
            }
        }

        // Move-Events auch außerhalb des Canvas-Rechtecks weiterreichen,
        // solange der Drag auf der Fläche begonnen hat
        if self.pointer_active && primary_down && moving {
            if let Some(pos) = latest_pos {
                events.push(AppIntent::PointerDragged {
                    pos: to_surface_pos(pos, rect),
                });
            }
        }

        if released && self.pointer_active {
            self.pointer_active = false;
            events.push(AppIntent::PointerReleased);
        }

        events
    }
}

/// Rechnet eine Bildschirmposition in Surface-Koordinaten um.
fn to_surface_pos(pointer_pos: egui::Pos2, rect: egui::Rect) -> glam::Vec2 {
    let local = pointer_pos - rect.min;
    glam::Vec2::new(local.x, local.y)
}
