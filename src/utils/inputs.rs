//! Input handling: keyboard shortcuts and HUD buttons turned into game messages.
use bevy::prelude::*;

use bevy::window::{MonitorSelection, PrimaryWindow, WindowMode};

use crate::utils::constants::ui_constants::{BUTTON_HOVERED, BUTTON_IDLE, BUTTON_PRESSED};
use crate::utils::objects::{CaptureRequest, HudButton, ResetRequest};
use crate::utils::systems_logic::GameSet;

/// Plugin for handling inputs
pub struct InputsPlugin;

impl Plugin for InputsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (handle_keyboard_input, handle_hud_buttons).in_set(GameSet::Input),
        );
    }
}

/// Space captures, R resets, Escape toggles fullscreen (native only).
pub fn handle_keyboard_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    mut captures: MessageWriter<CaptureRequest>,
    mut resets: MessageWriter<ResetRequest>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        captures.write(CaptureRequest);
    }
    if keyboard.just_pressed(KeyCode::KeyR) {
        resets.write(ResetRequest);
    }

    if keyboard.just_pressed(KeyCode::Escape) {
        let Ok(mut window) = windows.single_mut() else {
            return;
        };
        if toggle_fullscreen(&mut window) {
            info!("Window mode is now {:?}", window.mode);
        }
    }
}

/// Cycle between windowed and borderless fullscreen. Returns whether the mode changed.
pub fn toggle_fullscreen(window: &mut Window) -> bool {
    // The browser owns the canvas size on the web
    if cfg!(target_arch = "wasm32") {
        return false;
    }
    window.mode = match window.mode {
        WindowMode::Windowed => WindowMode::BorderlessFullscreen(MonitorSelection::Current),
        _ => WindowMode::Windowed,
    };
    true
}

/// Sends the message of a pressed HUD button and shades the buttons by interaction.
pub fn handle_hud_buttons(
    mut buttons: Query<(&Interaction, &HudButton, &mut BackgroundColor), Changed<Interaction>>,
    mut captures: MessageWriter<CaptureRequest>,
    mut resets: MessageWriter<ResetRequest>,
) {
    for (interaction, button, mut background) in &mut buttons {
        match interaction {
            Interaction::Pressed => {
                background.0 = BUTTON_PRESSED;
                match button {
                    HudButton::Capture => {
                        captures.write(CaptureRequest);
                    }
                    HudButton::Reset => {
                        resets.write(ResetRequest);
                    }
                }
            }
            Interaction::Hovered => background.0 = BUTTON_HOVERED,
            Interaction::None => background.0 = BUTTON_IDLE,
        }
    }
}
