// Constants used in the game, structured into modules.

/// Cube object and its projection
pub mod cube_constants {
    // Starting orientation of the cube, in radians. Angles are f64 since they grow unbounded.
    pub const CUBE_INITIAL_ROTATION_X: f64 = 0.6;
    pub const CUBE_INITIAL_ROTATION_Y: f64 = 0.6;

    // Rotation added to the Y angle every tick; the X angle gets a fraction of it.
    pub const CUBE_INITIAL_SPEED: f64 = 0.012;
    pub const CUBE_X_SPEED_RATIO: f64 = 0.7;

    // Perspective camera distance, in cube units. Must stay above sqrt(3).
    pub const CUBE_CAMERA_DISTANCE: f32 = 3.2;
    // Pixels per cube unit.
    pub const CUBE_SCALE_PX: f32 = 120.0;
}

/// Scoring rules
pub mod scoring_constants {
    // Upper bounds (inclusive, degrees) of each point tier and the points awarded.
    pub const SCORE_TIERS: [(f64, u32); 3] = [(5.0, 100), (10.0, 70), (18.0, 40)];
    // Points when the cube is further than every tier.
    pub const SCORE_FALLBACK_POINTS: u32 = 10;

    // Speed added after every capture.
    pub const SPEED_INCREMENT_PER_ROUND: f64 = 0.004;

    // Post capture window during which further captures are ignored.
    pub const CAPTURE_COOLDOWN_MS: u64 = 400;

    pub const STATUS_READY: &str = "Press \"Capture\" when the cube is aligned.";
}

/// Scene colors and sizes
pub mod render_constants {
    use bevy::prelude::Color;

    // Background wash, rgba(15, 23, 42, 0.35)
    pub const BACKGROUND_WASH: Color = Color::srgba(15.0 / 255.0, 23.0 / 255.0, 42.0 / 255.0, 0.35);
    // Edges, rgba(148, 163, 184, 0.9)
    pub const EDGE_COLOR: Color = Color::srgba(148.0 / 255.0, 163.0 / 255.0, 184.0 / 255.0, 0.9);
    pub const EDGE_WIDTH_PX: f32 = 2.0;
    // Vertex dots, rgba(59, 130, 246, 0.8)
    pub const VERTEX_COLOR: Color = Color::srgba(59.0 / 255.0, 130.0 / 255.0, 246.0 / 255.0, 0.8);
    pub const VERTEX_RADIUS_PX: f32 = 3.0;

    // Alignment gauge (debug overlay)
    pub const GAUGE_RADIUS_PX: f32 = 40.0;
    pub const GAUGE_MARGIN_PX: f32 = 24.0;
    pub const GAUGE_TARGET_COLOR: Color = Color::srgb(0.2, 1.0, 0.3);
    pub const GAUGE_NEEDLE_COLOR: Color = Color::srgb(1.0, 0.2, 0.2);
}

/// HUD layout
pub mod ui_constants {
    use bevy::prelude::Color;

    pub const HUD_FONT_SIZE: f32 = 22.0;
    pub const STATUS_FONT_SIZE: f32 = 18.0;
    pub const HUD_MARGIN_PX: f32 = 12.0;

    pub const BUTTON_WIDTH_PX: f32 = 140.0;
    pub const BUTTON_HEIGHT_PX: f32 = 44.0;
    pub const BUTTON_FONT_SIZE: f32 = 20.0;

    pub const TEXT_COLOR: Color = Color::srgb(0.94, 0.96, 0.98);
    pub const STATUS_COLOR: Color = Color::srgb(0.8, 0.8, 0.8);
    pub const BUTTON_IDLE: Color = Color::srgb(0.15, 0.39, 0.92);
    pub const BUTTON_HOVERED: Color = Color::srgb(0.23, 0.51, 0.96);
    pub const BUTTON_PRESSED: Color = Color::srgb(0.11, 0.31, 0.85);
}

/// Generic game constants
pub mod game_constants {
    pub const REFRESH_RATE_HZ: f64 = 60.0; // Hz

    // Config file looked up in the working directory (native only).
    pub const CONFIG_FILE_NAME: &str = "cube_capture.toml";
}
