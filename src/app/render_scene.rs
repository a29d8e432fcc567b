//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    RenderScene {
        sketch: state.sketch.clone(),
        grabbed: state.drag.grabbed,
        viewport_size,
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use glam::Vec2;

    #[test]
    fn build_snapshots_sketch_and_grab_state() {
        let mut state = AppState::new();
        state.sketch.add_pending_point(Vec2::new(10.0, 10.0));
        let point_ref = state.sketch.hit_test(Vec2::new(10.0, 10.0)).unwrap();
        state.drag.grabbed = Some(point_ref);

        let scene = build(&state, [800.0, 600.0]);

        assert_eq!(scene.sketch.pending_count(), 1);
        assert_eq!(scene.grabbed, Some(point_ref));
        assert_eq!(scene.viewport_size, [800.0, 600.0]);
        assert!(scene.has_content());
    }

    #[test]
    fn scene_is_a_snapshot_not_a_view() {
        let mut state = AppState::new();
        state.sketch.add_pending_point(Vec2::new(10.0, 10.0));

        let scene = build(&state, [800.0, 600.0]);
        state.sketch.clear();

        assert_eq!(scene.sketch.pending_count(), 1);
    }
}
