//! Built-in demo scene: a walled room with a few interior obstacles.

use glam::vec2;

use crate::world::obstacle::Obstacle;

/// The default obstacle layout: four boundary walls enclosing an
/// 11×11-unit room, plus three interior walls for the fan to wrap around.
pub fn demo_scene() -> Vec<Obstacle> {
    vec![
        // room boundary
        Obstacle::wall(vec2(5.5, -5.5), vec2(5.5, 5.5)),
        Obstacle::wall(vec2(-5.5, -5.5), vec2(-5.5, 5.5)),
        Obstacle::wall(vec2(-5.5, 5.5), vec2(5.5, 5.5)),
        Obstacle::wall(vec2(-5.5, -5.5), vec2(5.5, -5.5)),
        // interior
        Obstacle::wall(vec2(0.5, 1.0), vec2(1.5, 1.0)),
        Obstacle::wall(vec2(-1.5, -1.0), vec2(-0.5, -1.0)),
        Obstacle::wall(vec2(-5.0, 3.0), vec2(-1.0, 3.0)),
    ]
}
