//! Wiring of all the game systems into the bevy schedules.
//!
//! The fixed tick drives the rotation; every frame then reads inputs, applies captures, resets
//! and the cool-down, and finally redraws the cube and the HUD.

use crate::utils::constants::render_constants::BACKGROUND_WASH;
use crate::utils::game_functions::{
    advance_rotation, apply_capture_requests, apply_reset_requests, draw_cube, end_cooldown,
    place_vertex_dots, update_hud,
};
use crate::utils::objects::{CaptureCooldown, CaptureRequest, CubeTransform, GameState, ResetRequest};
use crate::utils::setup::{ConfigReport, configure_gizmos, report_config, setup};
use bevy::prelude::*;

/// Per frame ordering: inputs produce messages, logic consumes them, rendering reads the result.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    Input,
    Logic,
    Render,
}

// Plugin for managing all the game systems.
pub struct SystemsLogicPlugin;

impl Plugin for SystemsLogicPlugin {
    /// Builds the plugin by adding the systems to the app.
    fn build(&self, app: &mut App) {
        app.init_resource::<CubeTransform>()
            .init_resource::<GameState>()
            .init_resource::<CaptureCooldown>()
            .init_resource::<ConfigReport>()
            .insert_resource(ClearColor(BACKGROUND_WASH))
            .add_message::<CaptureRequest>()
            .add_message::<ResetRequest>()
            .configure_sets(
                Update,
                (GameSet::Input, GameSet::Logic, GameSet::Render).chain(),
            )
            .add_systems(Startup, (setup, configure_gizmos, report_config))
            // Rotation advances once per fixed tick, unless paused
            .add_systems(FixedUpdate, advance_rotation)
            .add_systems(
                Update,
                (apply_capture_requests, apply_reset_requests, end_cooldown)
                    .chain()
                    .in_set(GameSet::Logic),
            )
            .add_systems(
                Update,
                (draw_cube, place_vertex_dots, update_hud).in_set(GameSet::Render),
            );
    }
}
