//! Start-up for cube_capture, with window, logging, plugins, and resources.

use bevy::{log::LogPlugin, prelude::*, window::*};

use cube_capture::utils::{
    config::{self, ConfigError, GameConfig},
    constants::game_constants::REFRESH_RATE_HZ,
    debug_functions::DebugFunctionsPlugin,
    inputs::InputsPlugin,
    setup::ConfigReport,
    systems_logic::SystemsLogicPlugin,
};

/// Reads `cube_capture.toml` from the working directory; the web build has no file to read.
fn load_config() -> (GameConfig, Option<ConfigError>) {
    #[cfg(not(target_arch = "wasm32"))]
    {
        use cube_capture::utils::constants::game_constants::CONFIG_FILE_NAME;
        config::load_or_default(std::path::Path::new(CONFIG_FILE_NAME))
    }
    #[cfg(target_arch = "wasm32")]
    {
        (GameConfig::default(), None)
    }
}

/// Entry point for the application
fn main() {
    let (config, config_error) = load_config();

    let mut window = Window {
        title: config.window.title.clone(),
        #[cfg(target_arch = "wasm32")]
        canvas: Some("#scene".into()),
        fit_canvas_to_parent: true,
        prevent_default_event_handling: true,
        present_mode: if config.window.vsync {
            PresentMode::AutoVsync
        } else {
            PresentMode::AutoNoVsync
        },
        ..default()
    };
    window.resolution.set(config.window.width, config.window.height);

    let log_plugin = LogPlugin {
        // Already validated, the fallback is never hit
        level: config.log.level().unwrap_or(bevy::log::Level::INFO),
        filter: config.log.filter.clone(),
        ..default()
    };

    let mut app = App::new();
    app.add_plugins((
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(window),
                ..default()
            })
            .set(log_plugin),
        SystemsLogicPlugin,
        InputsPlugin,
    ))
    .insert_resource(Time::<Fixed>::from_hz(REFRESH_RATE_HZ))
    .insert_resource(ConfigReport(config_error.map(|e| e.to_string())));

    if config.debug.enabled {
        app.add_plugins(DebugFunctionsPlugin);
    }

    app.run();
}
