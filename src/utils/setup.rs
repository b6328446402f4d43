//! Startup spawning: the 2D camera, the vertex dots and the HUD, plus the gizmo line width and
//! the deferred config report.
use bevy::prelude::*;

use crate::utils::constants::render_constants::{EDGE_WIDTH_PX, VERTEX_COLOR, VERTEX_RADIUS_PX};
use crate::utils::constants::ui_constants::{
    BUTTON_FONT_SIZE, BUTTON_HEIGHT_PX, BUTTON_IDLE, BUTTON_WIDTH_PX, HUD_FONT_SIZE,
    HUD_MARGIN_PX, STATUS_COLOR, STATUS_FONT_SIZE, TEXT_COLOR,
};
use crate::utils::geometry::CUBE_VERTICES;
use crate::utils::objects::{GameState, HudButton, HudText, VertexDot};

/// Config load problem noticed before logging was available, reported once at startup.
#[derive(Resource, Default)]
pub struct ConfigReport(pub Option<String>);

/// Spawns the camera, one dot per cube vertex, and the HUD texts and buttons for the initial
/// game state.
pub fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    game_state: Res<GameState>,
) {
    // Camera
    commands.spawn(Camera2d);

    // One filled dot per vertex, moved every frame by `place_vertex_dots`
    let dot_mesh = meshes.add(Circle::new(VERTEX_RADIUS_PX));
    let dot_material = materials.add(VERTEX_COLOR);
    for vertex_index in 0..CUBE_VERTICES.len() {
        commands.spawn((
            Mesh2d(dot_mesh.clone()),
            MeshMaterial2d(dot_material.clone()),
            Transform::default(),
            VertexDot { vertex_index },
        ));
    }

    spawn_hud(&mut commands, &game_state);

    info!("Cube Capture started");
    info!("SPACE or \"Capture\": score the current angle | R or \"Reset\": start over");
}

/// Edges are gizmo lines; their width lives in the gizmo config.
pub fn configure_gizmos(mut config_store: ResMut<GizmoConfigStore>) {
    let (config, _) = config_store.config_mut::<DefaultGizmoConfigGroup>();
    config.line.width = EDGE_WIDTH_PX;
}

pub fn report_config(report: Res<ConfigReport>) {
    if let Some(error) = &report.0 {
        warn!("{error}");
        warn!("falling back to default config");
    }
}

/// Score, best and round along the top, status below them, buttons at the bottom.
fn spawn_hud(commands: &mut Commands, game_state: &GameState) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Px(HUD_MARGIN_PX),
            left: Val::Px(HUD_MARGIN_PX),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(HUD_MARGIN_PX / 2.0),
            ..default()
        })
        .with_children(|parent| {
            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    column_gap: Val::Px(HUD_MARGIN_PX * 2.0),
                    ..default()
                })
                .with_children(|row| {
                    for region in [HudText::Score, HudText::Best, HudText::Round] {
                        row.spawn((
                            Text::new(region.render(game_state)),
                            TextFont {
                                font_size: HUD_FONT_SIZE,
                                ..default()
                            },
                            TextColor(TEXT_COLOR),
                            region,
                        ));
                    }
                });

            parent.spawn((
                Text::new(HudText::Status.render(game_state)),
                TextFont {
                    font_size: STATUS_FONT_SIZE,
                    ..default()
                },
                TextColor(STATUS_COLOR),
                HudText::Status,
            ));
        });

    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(HUD_MARGIN_PX),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            column_gap: Val::Px(HUD_MARGIN_PX),
            ..default()
        })
        .with_children(|parent| {
            for (button, label) in [(HudButton::Capture, "Capture"), (HudButton::Reset, "Reset")] {
                parent
                    .spawn((
                        Button,
                        Node {
                            width: Val::Px(BUTTON_WIDTH_PX),
                            height: Val::Px(BUTTON_HEIGHT_PX),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            ..default()
                        },
                        BackgroundColor(BUTTON_IDLE),
                        button,
                    ))
                    .with_children(|inner| {
                        inner.spawn((
                            Text::new(label),
                            TextFont {
                                font_size: BUTTON_FONT_SIZE,
                                ..default()
                            },
                            TextColor(TEXT_COLOR),
                        ));
                    });
            }
        });
}
