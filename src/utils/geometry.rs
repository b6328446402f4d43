//! Cube geometry, rotation and perspective projection.
//!
//! Everything here is pure math over `Vec2`/`Vec3`; the systems in
//! `game_functions` feed it the current `CubeTransform` and window size.
use bevy::math::{Vec2, Vec3};

use crate::utils::constants::cube_constants::{CUBE_CAMERA_DISTANCE, CUBE_SCALE_PX};
use crate::utils::scoring::wrap_angle;

/// Corners of the cube, every coordinate in {-1, 1}.
pub const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
];

/// Edges as pairs of indices into `CUBE_VERTICES`: back face, front face, then the connectors.
pub const CUBE_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// Rotates a point about the vertical axis by `rotation_y`, then about the horizontal axis by `rotation_x`.
pub fn rotate(vertex: Vec3, rotation_x: f32, rotation_y: f32) -> Vec3 {
    let (sin_y, cos_y) = rotation_y.sin_cos();
    let (sin_x, cos_x) = rotation_x.sin_cos();

    let dx = vertex.x * cos_y - vertex.z * sin_y;
    let dz = vertex.x * sin_y + vertex.z * cos_y;
    let dy = vertex.y * cos_x - dz * sin_x;
    let dz = vertex.y * sin_x + dz * cos_x;

    Vec3::new(dx, dy, dz)
}

/// Perspective-projects a rotated point onto a canvas of size `viewport`.
///
/// The result is in canvas coordinates: origin at the top-left corner, y growing downwards.
/// Points with `z == CUBE_CAMERA_DISTANCE` have no projection; rotated cube vertices never
/// get there since their `|z|` is at most `sqrt(3)`.
pub fn project(vertex: Vec3, viewport: Vec2) -> Vec2 {
    let perspective = CUBE_CAMERA_DISTANCE / (CUBE_CAMERA_DISTANCE - vertex.z);
    let center = viewport / 2.0;
    center + vertex.truncate() * CUBE_SCALE_PX * perspective
}

/// Converts canvas coordinates into the centred, y-up world space of a 2D camera.
pub fn canvas_to_world(point: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(point.x - viewport.x / 2.0, viewport.y / 2.0 - point.y)
}

/// Rotates and projects every cube vertex, in `CUBE_VERTICES` order.
///
/// The unbounded session angles are wrapped in f64 before narrowing, so the drawn cube stays
/// exact however long the session runs.
pub fn project_cube(rotation_x: f64, rotation_y: f64, viewport: Vec2) -> [Vec2; 8] {
    let rotation_x = wrap_angle(rotation_x) as f32;
    let rotation_y = wrap_angle(rotation_y) as f32;
    CUBE_VERTICES.map(|vertex| project(rotate(vertex, rotation_x, rotation_y), viewport))
}
