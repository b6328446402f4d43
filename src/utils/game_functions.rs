//! Core game systems: the rotation tick, the wireframe redraw, captures, resets, the cool-down
//! and the HUD refresh.
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use std::time::Duration;

use crate::utils::constants::render_constants::EDGE_COLOR;
use crate::utils::constants::scoring_constants::CAPTURE_COOLDOWN_MS;
use crate::utils::geometry::{CUBE_EDGES, canvas_to_world, project_cube};
use crate::utils::objects::{
    CaptureCooldown, CaptureRequest, CubeTransform, GameState, HudText, ResetRequest, VertexDot,
};
use crate::utils::scoring::{capture, reset};

/// Spins the cube by one step. Runs on the fixed tick, frozen while a capture cools down.
pub fn advance_rotation(game_state: Res<GameState>, mut cube: ResMut<CubeTransform>) {
    if !game_state.running {
        return;
    }
    cube.advance();
}

/// Cube vertices in world space for the given window.
fn world_points(cube: &CubeTransform, window: &Window) -> [Vec2; 8] {
    let viewport = Vec2::new(window.width(), window.height());
    project_cube(cube.rotation_x, cube.rotation_y, viewport)
        .map(|point| canvas_to_world(point, viewport))
}

/// Redraws the wireframe edges as gizmo lines.
pub fn draw_cube(
    cube: Res<CubeTransform>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut gizmos: Gizmos,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let points = world_points(&cube, window);
    for (start, end) in CUBE_EDGES {
        gizmos.line_2d(points[start], points[end], EDGE_COLOR);
    }
}

/// Moves the vertex dots onto the projected vertices.
pub fn place_vertex_dots(
    cube: Res<CubeTransform>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut dots: Query<(&VertexDot, &mut Transform)>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let points = world_points(&cube, window);
    for (dot, mut transform) in &mut dots {
        // Dots sit above the lines
        transform.translation = points[dot.vertex_index].extend(1.0);
    }
}

/// Scores every pending capture request. Requests arriving while paused are dropped.
pub fn apply_capture_requests(
    mut requests: MessageReader<CaptureRequest>,
    time: Res<Time>,
    mut game_state: ResMut<GameState>,
    mut cube: ResMut<CubeTransform>,
    mut cooldown: ResMut<CaptureCooldown>,
) {
    for _ in requests.read() {
        // Read-only check, an ignored request must not flag the state as changed.
        if !game_state.running {
            debug!("Capture ignored: cooling down");
            continue;
        }
        let Some(outcome) = capture(&mut game_state, &mut cube) else {
            continue;
        };
        cooldown.started_at = Some(time.elapsed());

        info!(
            "Captured at {:.1} deg: +{} pts (score {}, best {}, round {})",
            outcome.degrees, outcome.points, game_state.score, game_state.best, game_state.round
        );
    }
}

/// Handles reset requests.
pub fn apply_reset_requests(
    mut requests: MessageReader<ResetRequest>,
    mut game_state: ResMut<GameState>,
    mut cube: ResMut<CubeTransform>,
) {
    // Several resets in one frame amount to one.
    if requests.read().count() == 0 {
        return;
    }
    reset(&mut game_state, &mut cube);
    info!("Game reset (best {})", game_state.best);
}

/// Re-arms captures once the cool-down has elapsed.
pub fn end_cooldown(
    time: Res<Time>,
    mut cooldown: ResMut<CaptureCooldown>,
    mut game_state: ResMut<GameState>,
) {
    let Some(started_at) = cooldown.started_at else {
        return;
    };
    if time.elapsed().saturating_sub(started_at) < Duration::from_millis(CAPTURE_COOLDOWN_MS) {
        return;
    }
    cooldown.started_at = None;
    game_state.running = true;
    debug!("Cool-down over, captures re-armed");
}

/// Rewrites the HUD texts whenever the game state changed.
pub fn update_hud(game_state: Res<GameState>, mut texts: Query<(&HudText, &mut Text)>) {
    if !game_state.is_changed() {
        return;
    }
    for (region, mut text) in &mut texts {
        let content = region.render(&game_state);
        if text.0 != content {
            text.0 = content;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::utils::constants::cube_constants::CUBE_INITIAL_SPEED;
    use crate::utils::geometry::CUBE_VERTICES;

    /// Headless app holding only the game resources and the logic systems.
    fn logic_app() -> App {
        let mut app = App::new();
        app.init_resource::<Time>()
            .init_resource::<CubeTransform>()
            .init_resource::<GameState>()
            .init_resource::<CaptureCooldown>()
            .add_message::<CaptureRequest>()
            .add_message::<ResetRequest>()
            .add_systems(
                Update,
                (apply_capture_requests, apply_reset_requests, end_cooldown).chain(),
            );
        app
    }

    fn advance_time(app: &mut App, millis: u64) {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(millis));
    }

    #[test]
    fn capture_scores_and_pauses_until_cooldown_ends() {
        let mut app = logic_app();
        app.world_mut().resource_mut::<CubeTransform>().rotation_y = 4f64.to_radians();

        app.world_mut().write_message(CaptureRequest);
        app.update();

        let state = app.world().resource::<GameState>().clone();
        assert_eq!((state.score, state.best, state.round), (100, 100, 2));
        assert!(!state.running);
        let speed = app.world().resource::<CubeTransform>().speed;
        assert!((speed - 0.016).abs() < 1e-12);

        // Still inside the cool-down: a second capture is a no-op.
        advance_time(&mut app, 200);
        app.world_mut().write_message(CaptureRequest);
        app.update();
        assert_eq!(app.world().resource::<GameState>(), &state);

        advance_time(&mut app, 250);
        app.update();
        assert!(app.world().resource::<GameState>().running);
        assert!(app.world().resource::<CaptureCooldown>().started_at.is_none());
    }

    #[test]
    fn double_capture_in_one_frame_scores_once() {
        let mut app = logic_app();
        app.world_mut().write_message(CaptureRequest);
        app.world_mut().write_message(CaptureRequest);
        app.update();
        assert_eq!(app.world().resource::<GameState>().round, 2);
    }

    #[test]
    fn reset_during_cooldown_keeps_best_and_cooldown() {
        let mut app = logic_app();
        app.world_mut().resource_mut::<CubeTransform>().rotation_y = 0.0;
        app.world_mut().write_message(CaptureRequest);
        app.update();

        app.world_mut().write_message(ResetRequest);
        app.update();

        let state = app.world().resource::<GameState>();
        assert_eq!((state.score, state.round, state.best), (0, 1, 100));
        assert!(!state.running);
        assert_eq!(app.world().resource::<CubeTransform>().speed, CUBE_INITIAL_SPEED);

        advance_time(&mut app, 400);
        app.update();
        assert!(app.world().resource::<GameState>().running);
    }

    #[test]
    fn rotation_freezes_while_paused() {
        let mut app = App::new();
        app.init_resource::<CubeTransform>()
            .init_resource::<GameState>()
            .add_systems(Update, advance_rotation);

        app.update();
        let moved = app.world().resource::<CubeTransform>().clone();
        assert!(moved.rotation_y > CubeTransform::default().rotation_y);

        app.world_mut().resource_mut::<GameState>().running = false;
        app.update();
        app.update();
        assert_eq!(app.world().resource::<CubeTransform>(), &moved);
    }

    #[test]
    fn hud_follows_game_state() {
        let mut app = App::new();
        app.init_resource::<GameState>()
            .add_systems(Update, update_hud);
        let score = app.world_mut().spawn((HudText::Score, Text::new(""))).id();
        let status = app.world_mut().spawn((HudText::Status, Text::new(""))).id();

        app.update();
        assert_eq!(app.world().get::<Text>(score).map(|t| t.0.as_str()), Some("Score: 0"));

        {
            let mut state = app.world_mut().resource_mut::<GameState>();
            state.score = 40;
            state.status = "Angle 15.0°. +40 pts".into();
        }
        app.update();
        assert_eq!(app.world().get::<Text>(score).map(|t| t.0.as_str()), Some("Score: 40"));
        assert_eq!(
            app.world().get::<Text>(status).map(|t| t.0.as_str()),
            Some("Angle 15.0°. +40 pts")
        );
    }

    #[test]
    fn dots_follow_the_projected_vertices() {
        let mut app = App::new();
        app.insert_resource(CubeTransform {
            rotation_x: 0.4,
            rotation_y: 2.5,
            ..CubeTransform::default()
        })
        .add_systems(Update, place_vertex_dots);

        let mut window = Window::default();
        window.resolution.set(800.0, 600.0);
        app.world_mut().spawn((window, PrimaryWindow));
        let dots: Vec<Entity> = (0..CUBE_VERTICES.len())
            .map(|vertex_index| {
                app.world_mut()
                    .spawn((VertexDot { vertex_index }, Transform::default()))
                    .id()
            })
            .collect();

        app.update();

        let viewport = Vec2::new(800.0, 600.0);
        let expected = project_cube(0.4, 2.5, viewport);
        for (i, dot) in dots.iter().enumerate() {
            let translation = app.world().get::<Transform>(*dot).map(|t| t.translation);
            let want = canvas_to_world(expected[i], viewport).extend(1.0);
            assert!(
                translation.is_some_and(|t| t.abs_diff_eq(want, 1e-4)),
                "vertex {i}: {translation:?} vs {want}"
            );
        }

        // The next spin step moves them along.
        app.world_mut().resource_mut::<CubeTransform>().advance();
        app.update();
        let moved = app.world().get::<Transform>(dots[0]).map(|t| t.translation);
        assert_ne!(moved, Some(canvas_to_world(expected[0], viewport).extend(1.0)));
    }
}
