//! Tessellation: Abtastung kubischer Bézier-Kurven in diskrete Positionen.

use glam::Vec2;

/// Anzahl der Sample-Punkte pro Kurve.
pub const CURVE_SAMPLE_COUNT: usize = 1000;
/// Parameter-Schrittweite; t läuft über [0, 1), der Endpunkt ist exklusiv.
pub const CURVE_SAMPLE_STEP: f32 = 0.001;

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Sampelt die Kurve bei t = 0, 0.001, …, 0.999.
///
/// Die Formel wird unbedingt ausgewertet; degenerierte Konfigurationen
/// (zusammenfallende oder kollineare Punkte) ergeben natürlich einen Punkt
/// bzw. eine Strecke. Die Sequenz wird bei jedem Aufruf vollständig neu
/// erzeugt, nie inkrementell geflickt.
pub fn sample_positions(start: Vec2, ctrl0: Vec2, ctrl1: Vec2, end: Vec2) -> Vec<Vec2> {
    (0..CURVE_SAMPLE_COUNT)
        .map(|i| cubic_bezier(start, ctrl0, ctrl1, end, i as f32 * CURVE_SAMPLE_STEP))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sample_count_is_fixed() {
        let positions = sample_positions(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(20.0, 0.0),
            Vec2::new(30.0, 0.0),
        );

        assert_eq!(positions.len(), CURVE_SAMPLE_COUNT);
    }

    #[test]
    fn first_sample_equals_start_anchor_exactly() {
        let start = Vec2::new(10.0, 10.0);
        let positions = sample_positions(
            start,
            Vec2::new(20.0, 0.0),
            Vec2::new(30.0, 0.0),
            Vec2::new(40.0, 10.0),
        );

        // t = 0: Bernstein-Gewicht 1 auf dem Start-Anker
        assert_eq!(positions[0], start);
    }

    #[test]
    fn last_sample_approaches_end_anchor() {
        let end = Vec2::new(40.0, 10.0);
        let positions = sample_positions(
            Vec2::new(10.0, 10.0),
            Vec2::new(20.0, 0.0),
            Vec2::new(30.0, 0.0),
            end,
        );

        // t erreicht nie exakt 1.0; das letzte Sample (t = 0.999) liegt
        // innerhalb eines Formel-Schritts am End-Anker
        let last = positions[CURVE_SAMPLE_COUNT - 1];
        assert_relative_eq!(last.x, end.x, epsilon = 0.1);
        assert_relative_eq!(last.y, end.y, epsilon = 0.1);
        assert_ne!(last, end);
    }

    #[test]
    fn coincident_points_collapse_to_single_position() {
        let p = Vec2::new(7.0, 7.0);
        let positions = sample_positions(p, p, p, p);

        assert!(positions.iter().all(|&sample| sample == p));
    }

    #[test]
    fn collinear_points_stay_on_the_line() {
        let positions = sample_positions(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(3.0, 3.0),
        );

        for sample in positions {
            assert_relative_eq!(sample.x, sample.y, epsilon = 1e-4);
        }
    }

    #[test]
    fn midpoint_matches_bernstein_average() {
        let p0 = Vec2::new(0.0, 0.0);
        let p1 = Vec2::new(0.0, 8.0);
        let p2 = Vec2::new(8.0, 8.0);
        let p3 = Vec2::new(8.0, 0.0);

        // B(0.5) = (P0 + 3·P1 + 3·P2 + P3) / 8
        let expected = (p0 + 3.0 * p1 + 3.0 * p2 + p3) / 8.0;
        let actual = cubic_bezier(p0, p1, p2, p3, 0.5);

        assert_relative_eq!(actual.x, expected.x, epsilon = 1e-5);
        assert_relative_eq!(actual.y, expected.y, epsilon = 1e-5);
    }
}
