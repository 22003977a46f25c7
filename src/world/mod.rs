mod geometry;
mod light;
mod obstacle;
mod scene;

pub use geometry::{Intersection, PARALLEL_EPS, Ray, ground_pick, intersect_plane};

pub use light::{LightParams, fan_heading, nearest_hit, shine};

pub use obstacle::Obstacle;

pub use scene::demo_scene;
