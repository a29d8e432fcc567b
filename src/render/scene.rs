//! Zeichnet eine RenderScene in fester Reihenfolge: Fläche leeren,
//! offene Punkte, dann je Kurve erst die vier Handles, anschließend
//! die tessellierte Kurve.

use glam::Vec2;

use crate::core::{CurvePointSlot, PointRef, SketchPoint, HANDLE_HALF_EXTENT, SAMPLE_RADIUS};
use crate::shared::RenderScene;

use super::surface::DrawSurface;

/// Kantenlänge der gerenderten Handle-Quadrate.
const HANDLE_SIZE: f32 = 2.0 * HANDLE_HALF_EXTENT;

/// Malt die komplette Szene auf die Surface (voller Repaint, keine
/// Dirty-Regions).
pub fn paint(scene: &RenderScene, surface: &mut dyn DrawSurface) {
    surface.clear(scene.options.background_color);

    for (index, point) in scene.sketch.pending_points.iter().enumerate() {
        let grabbed = scene.grabbed == Some(PointRef::Pending { index });
        paint_handle(surface, scene, point, grabbed);
    }

    for (curve_index, curve) in scene.sketch.curves.iter().enumerate() {
        let slots = [
            CurvePointSlot::AnchorStart,
            CurvePointSlot::Control(0),
            CurvePointSlot::Control(1),
            CurvePointSlot::AnchorEnd,
        ];
        for slot in slots {
            let grabbed = scene.grabbed == Some(PointRef::Curve { curve_index, slot });
            paint_handle(surface, scene, curve.point(slot), grabbed);
        }

        for sample in curve.sample_positions() {
            surface.fill_circle(sample, SAMPLE_RADIUS, scene.options.curve_color);
        }
    }
}

fn paint_handle(
    surface: &mut dyn DrawSurface,
    scene: &RenderScene,
    point: &SketchPoint,
    grabbed: bool,
) {
    let color = if grabbed {
        scene.options.handle_color_grabbed
    } else {
        scene.options.handle_color
    };
    surface.fill_rect(point.position, Vec2::splat(HANDLE_SIZE), color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{build_render_scene, AppState};
    use crate::core::CURVE_SAMPLE_COUNT;

    /// Aufzeichnende Surface für Reihenfolge- und Primitive-Prüfungen.
    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<Call>,
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Clear([f32; 4]),
        Rect { center: Vec2, color: [f32; 4] },
        Circle { center: Vec2, radius: f32 },
    }

    impl DrawSurface for RecordingSurface {
        fn clear(&mut self, color: [f32; 4]) {
            self.calls.push(Call::Clear(color));
        }

        fn fill_rect(&mut self, center: Vec2, _size: Vec2, color: [f32; 4]) {
            self.calls.push(Call::Rect { center, color });
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, _color: [f32; 4]) {
            self.calls.push(Call::Circle { center, radius });
        }
    }

    fn state_with_curve_and_pending() -> AppState {
        let mut state = AppState::new();
        for p in [
            Vec2::new(10.0, 10.0),
            Vec2::new(20.0, 0.0),
            Vec2::new(30.0, 0.0),
            Vec2::new(40.0, 10.0),
        ] {
            state.sketch.add_pending_point(p);
        }
        state.sketch.add_pending_point(Vec2::new(200.0, 200.0));
        state
    }

    #[test]
    fn paint_starts_with_clear() {
        let state = state_with_curve_and_pending();
        let scene = build_render_scene(&state, [800.0, 600.0]);
        let mut surface = RecordingSurface::default();

        paint(&scene, &mut surface);

        assert_eq!(
            surface.calls[0],
            Call::Clear(scene.options.background_color)
        );
    }

    #[test]
    fn pending_points_are_drawn_before_curves() {
        let state = state_with_curve_and_pending();
        let scene = build_render_scene(&state, [800.0, 600.0]);
        let mut surface = RecordingSurface::default();

        paint(&scene, &mut surface);

        // Nach dem Clear: erst der offene Punkt, dann die Kurven-Handles
        assert_eq!(
            surface.calls[1],
            Call::Rect {
                center: Vec2::new(200.0, 200.0),
                color: scene.options.handle_color,
            }
        );
        assert_eq!(
            surface.calls[2],
            Call::Rect {
                center: Vec2::new(10.0, 10.0),
                color: scene.options.handle_color,
            }
        );
    }

    #[test]
    fn each_curve_emits_four_handles_and_all_samples() {
        let state = state_with_curve_and_pending();
        let scene = build_render_scene(&state, [800.0, 600.0]);
        let mut surface = RecordingSurface::default();

        paint(&scene, &mut surface);

        let rects = surface
            .calls
            .iter()
            .filter(|call| matches!(call, Call::Rect { .. }))
            .count();
        let circles = surface
            .calls
            .iter()
            .filter(|call| matches!(call, Call::Circle { .. }))
            .count();

        // 1 offener Punkt + 4 Kurven-Handles
        assert_eq!(rects, 5);
        assert_eq!(circles, CURVE_SAMPLE_COUNT);
    }

    #[test]
    fn grabbed_handle_uses_highlight_color() {
        let mut state = state_with_curve_and_pending();
        let point_ref = state.sketch.hit_test(Vec2::new(200.0, 200.0)).unwrap();
        state.drag.grabbed = Some(point_ref);

        let scene = build_render_scene(&state, [800.0, 600.0]);
        let mut surface = RecordingSurface::default();
        paint(&scene, &mut surface);

        assert_eq!(
            surface.calls[1],
            Call::Rect {
                center: Vec2::new(200.0, 200.0),
                color: scene.options.handle_color_grabbed,
            }
        );
    }

    #[test]
    fn first_sample_sits_on_start_anchor() {
        let state = state_with_curve_and_pending();
        let scene = build_render_scene(&state, [800.0, 600.0]);
        let mut surface = RecordingSurface::default();

        paint(&scene, &mut surface);

        let first_circle = surface
            .calls
            .iter()
            .find_map(|call| match call {
                Call::Circle { center, radius } => Some((*center, *radius)),
                _ => None,
            })
            .expect("Kurve sollte Samples zeichnen");

        assert_eq!(first_circle.0, Vec2::new(10.0, 10.0));
        assert_eq!(first_circle.1, SAMPLE_RADIUS);
    }
}
