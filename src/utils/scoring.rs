//! Scoring rules: angle wrapping, alignment distance, point tiers, and the capture/reset
//! transitions applied to the session resources.
use std::f64::consts::TAU;

use crate::utils::constants::cube_constants::CUBE_INITIAL_SPEED;
use crate::utils::constants::scoring_constants::{
    SCORE_FALLBACK_POINTS, SCORE_TIERS, SPEED_INCREMENT_PER_ROUND, STATUS_READY,
};
use crate::utils::objects::{CubeTransform, GameState};

/// Result of a successful capture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaptureOutcome {
    pub degrees: f64,
    pub points: u32,
}

/// Wraps any angle into [0, 2π).
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = ((angle % TAU) + TAU) % TAU;
    // `x + TAU` can round up to exactly TAU for tiny negative x.
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Distance in radians from a wrapped angle to the nearest alignment point (0 or 2π).
pub fn alignment_distance(wrapped: f64) -> f64 {
    wrapped.min(TAU - wrapped)
}

/// Misalignment of an unbounded angle, in degrees, within [0, 180].
pub fn misalignment_degrees(angle: f64) -> f64 {
    alignment_distance(wrap_angle(angle)).to_degrees()
}

/// Points for a misalignment given in degrees.
pub fn points_for(degrees: f64) -> u32 {
    SCORE_TIERS
        .iter()
        .find(|(limit, _)| degrees <= *limit)
        .map_or(SCORE_FALLBACK_POINTS, |(_, points)| *points)
}

pub fn status_message(outcome: &CaptureOutcome) -> String {
    format!("Angle {:.1}°. +{} pts", outcome.degrees, outcome.points)
}

/// Scores the current rotation.
///
/// Returns `None` without touching anything while the game is paused. Otherwise pauses it,
/// adds the points, bumps the round, and makes the cube spin faster. Resuming is left to
/// the cool-down.
pub fn capture(state: &mut GameState, cube: &mut CubeTransform) -> Option<CaptureOutcome> {
    if !state.running {
        return None;
    }
    state.running = false;

    let degrees = misalignment_degrees(cube.rotation_y);
    let outcome = CaptureOutcome {
        degrees,
        points: points_for(degrees),
    };

    state.score += outcome.points;
    state.best = state.best.max(state.score);
    state.round += 1;
    cube.speed += SPEED_INCREMENT_PER_ROUND;
    state.status = status_message(&outcome);

    log::debug!(
        "capture: rotation_y={} -> {:.2} deg, +{} (score {}, round {})",
        cube.rotation_y,
        degrees,
        outcome.points,
        state.score,
        state.round
    );
    Some(outcome)
}

/// Starts over: score and round back to their initial values and the cube back to its
/// initial speed. The best score, the orientation, and a pending cool-down are kept.
pub fn reset(state: &mut GameState, cube: &mut CubeTransform) {
    state.score = 0;
    state.round = 1;
    cube.speed = CUBE_INITIAL_SPEED;
    state.status = STATUS_READY.to_string();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn wrap_angle_lands_in_range() {
        let samples = [
            0.0, 1.0, -1.0, PI, -PI, TAU, -TAU, 7.5, -7.5, 1000.0, -1000.0, 123456.7, -1e-17,
        ];
        for angle in samples {
            let wrapped = wrap_angle(angle);
            assert!((0.0..TAU).contains(&wrapped), "{angle} wrapped to {wrapped}");
        }
        assert!((wrap_angle(-1.0) - (TAU - 1.0)).abs() < 1e-12);
        assert!((wrap_angle(TAU + 0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn alignment_distance_is_symmetric() {
        for i in 0..360 {
            let theta = f64::from(i) * TAU / 360.0;
            let a = alignment_distance(theta);
            let b = alignment_distance(TAU - theta);
            assert!((a - b).abs() < 1e-12, "theta={theta}");
            assert!((0.0..=PI).contains(&a));
        }
    }

    #[test]
    fn negative_angles_measure_like_positive_ones() {
        let d = 12f64.to_radians();
        assert!((misalignment_degrees(-d) - 12.0).abs() < 1e-9);
        assert!((misalignment_degrees(d + 3.0 * TAU) - 12.0).abs() < 1e-9);
    }

    #[test]
    fn huge_angles_still_measure_precisely() {
        let turns = 50_000.0 * TAU;
        assert!((misalignment_degrees(turns + 4f64.to_radians()) - 4.0).abs() < 1e-6);
        assert!((misalignment_degrees(turns - 4f64.to_radians()) - 4.0).abs() < 1e-6);
    }

    #[test]
    fn point_tiers_are_a_step_function() {
        assert_eq!(points_for(0.0), 100);
        assert_eq!(points_for(5.0), 100);
        assert_eq!(points_for(5.01), 70);
        assert_eq!(points_for(10.0), 70);
        assert_eq!(points_for(10.5), 40);
        assert_eq!(points_for(18.0), 40);
        assert_eq!(points_for(18.01), 10);
        assert_eq!(points_for(30.0), 10);
        assert_eq!(points_for(180.0), 10);
    }

    #[test]
    fn capture_near_alignment_scores_top_tier() {
        let mut state = GameState::default();
        let mut cube = CubeTransform {
            rotation_y: 4f64.to_radians(),
            ..CubeTransform::default()
        };

        let outcome = capture(&mut state, &mut cube).expect("running game must score");

        assert_eq!(outcome.points, 100);
        assert!((outcome.degrees - 4.0).abs() < 1e-9);
        assert_eq!(state.score, 100);
        assert_eq!(state.best, 100);
        assert_eq!(state.round, 2);
        assert!((cube.speed - 0.016).abs() < 1e-12);
        assert!(!state.running);
        assert_eq!(state.status, "Angle 4.0°. +100 pts");
    }

    #[test]
    fn capture_while_paused_changes_nothing() {
        let mut state = GameState::default();
        let mut cube = CubeTransform::default();
        capture(&mut state, &mut cube);

        let (state_before, cube_before) = (state.clone(), cube.clone());
        assert_eq!(capture(&mut state, &mut cube), None);
        assert_eq!(state, state_before);
        assert_eq!(cube, cube_before);
    }

    #[test]
    fn capture_does_not_touch_orientation() {
        let mut state = GameState::default();
        let mut cube = CubeTransform::default();
        capture(&mut state, &mut cube);
        assert_eq!(cube.rotation_x, CubeTransform::default().rotation_x);
        assert_eq!(cube.rotation_y, CubeTransform::default().rotation_y);
    }

    #[test]
    fn reset_keeps_best_and_orientation() {
        let mut state = GameState::default();
        let mut cube = CubeTransform {
            rotation_y: 0.0,
            ..CubeTransform::default()
        };
        capture(&mut state, &mut cube);
        state.running = true;
        cube.rotation_y = 1.0;
        cube.rotation_x = 2.0;

        reset(&mut state, &mut cube);

        assert_eq!(state.score, 0);
        assert_eq!(state.round, 1);
        assert_eq!(state.best, 100);
        assert_eq!(cube.speed, CUBE_INITIAL_SPEED);
        assert_eq!((cube.rotation_x, cube.rotation_y), (2.0, 1.0));
        assert_eq!(state.status, STATUS_READY);
    }

    #[test]
    fn best_never_decreases() {
        let mut state = GameState::default();
        let mut cube = CubeTransform::default();
        let mut previous_best = 0;
        // Alternate runs of captures with resets at various angles.
        for step in 0..40u32 {
            if step % 7 == 6 {
                reset(&mut state, &mut cube);
            } else {
                cube.rotation_y = f64::from(step) * 0.37;
                capture(&mut state, &mut cube);
                state.running = true;
            }
            assert!(state.best >= previous_best);
            assert!(state.best >= state.score);
            previous_best = state.best;
        }
    }
}
