//! Cube Capture: stop a spinning wireframe cube as close as possible to its aligned position.

pub mod utils {
    pub mod config;
    pub mod constants;
    pub mod debug_functions;
    pub mod game_functions;
    pub mod geometry;
    pub mod inputs;
    pub mod objects;
    pub mod scoring;
    pub mod setup;
    pub mod systems_logic;
}
