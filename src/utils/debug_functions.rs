//! Debug functions for the game.
use bevy::{prelude::*, window::*};

use crate::utils::constants::render_constants::{
    GAUGE_MARGIN_PX, GAUGE_NEEDLE_COLOR, GAUGE_RADIUS_PX, GAUGE_TARGET_COLOR,
};
use crate::utils::constants::scoring_constants::SCORE_TIERS;
use crate::utils::objects::{AlignmentGauge, CubeTransform};
use crate::utils::scoring::{misalignment_degrees, wrap_angle};
use crate::utils::systems_logic::GameSet;

pub struct DebugFunctionsPlugin;

impl Plugin for DebugFunctionsPlugin {
    /// Plugin adding the vsync and alignment gauge toggles.
    fn build(&self, app: &mut App) {
        app.init_resource::<AlignmentGauge>()
            .add_systems(Update, (toggle_vsync, toggle_alignment_gauge).in_set(GameSet::Input))
            .add_systems(Update, draw_alignment_gauge.in_set(GameSet::Render));
    }
}

/// Toggles VSync when the 'V' key is pressed.
fn toggle_vsync(input: Res<ButtonInput<KeyCode>>, mut window: Query<&mut Window, With<PrimaryWindow>>) {
    if input.just_pressed(KeyCode::KeyV) {
        let Ok(mut window) = window.single_mut() else {
            return;
        };

        window.present_mode = if matches!(window.present_mode, PresentMode::AutoVsync) {
            PresentMode::AutoNoVsync
        } else {
            PresentMode::AutoVsync
        };

        info!("PRESENT_MODE: {:?}", window.present_mode);
    }
}

/// Toggles the alignment gauge when the 'G' key is pressed.
fn toggle_alignment_gauge(input: Res<ButtonInput<KeyCode>>, mut gauge: ResMut<AlignmentGauge>) {
    if input.just_pressed(KeyCode::KeyG) {
        gauge.0 = !gauge.0;
        info!("Alignment gauge: {}", gauge.0);
    }
}

/// Dial in the top-right corner: a spoke at the alignment point and a needle at the current
/// wrapped Y angle, green once inside the top tier.
fn draw_alignment_gauge(
    gauge: Res<AlignmentGauge>,
    cube: Res<CubeTransform>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut gizmos: Gizmos,
) {
    if !gauge.0 {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };

    let center = gauge_center(Vec2::new(window.width(), window.height()));
    gizmos.circle_2d(Isometry2d::from_translation(center), GAUGE_RADIUS_PX, Color::WHITE);
    gizmos.line_2d(center, center + Vec2::X * GAUGE_RADIUS_PX, GAUGE_TARGET_COLOR);

    let needle = Vec2::from_angle(wrap_angle(cube.rotation_y) as f32) * GAUGE_RADIUS_PX;
    let color = if misalignment_degrees(cube.rotation_y) <= SCORE_TIERS[0].0 {
        GAUGE_TARGET_COLOR
    } else {
        GAUGE_NEEDLE_COLOR
    };
    gizmos.line_2d(center, center + needle, color);
}

/// World position of the gauge, inset from the top-right corner.
fn gauge_center(viewport: Vec2) -> Vec2 {
    viewport / 2.0 - Vec2::splat(GAUGE_MARGIN_PX + GAUGE_RADIUS_PX)
}
