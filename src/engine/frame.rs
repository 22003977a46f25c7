//! View assembly: one frame's renderable instance list.
//!
//! The only state at this level is the display-mode flag; everything else
//! is a pure function of the frame's parameter and obstacle snapshots.

use glam::{Mat4, Vec2, Vec3};

use crate::engine::projection::project;
use crate::renderer::{Instance, Shape};
use crate::world::{LightParams, Obstacle, shine};

/// Marker tint for the light source and its hit points.
const MARKER_COLOR: Vec3 = Vec3::new(1.0, 0.0, 0.0);

/// Disc diameter of the light-origin marker, world units.
const LIGHT_MARKER_SIZE: f32 = 0.3;

/// Disc diameter of one hit marker, world units.
const HIT_MARKER_SIZE: f32 = 0.2;

/// Which of the two presentations the frame shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    /// Scene from above: obstacles, the light, and raw hit markers.
    TopDownDebug,
    /// The column strip built from the same hit sequence.
    Projected3D,
}

impl DisplayMode {
    pub fn toggle(&mut self) {
        *self = match *self {
            DisplayMode::TopDownDebug => DisplayMode::Projected3D,
            DisplayMode::Projected3D => DisplayMode::TopDownDebug,
        };
    }
}

/// Run the sampler and build the frame's instance list for `mode`.
pub fn assemble(mode: DisplayMode, params: &LightParams, obstacles: &[Obstacle]) -> Vec<Instance> {
    let hits = shine(params, obstacles);
    match mode {
        DisplayMode::TopDownDebug => top_down_instances(params, obstacles, &hits),
        DisplayMode::Projected3D => projected_instances(params, &hits),
    }
}

/// Debug overlay: light marker, every obstacle, one disc per hit.
fn top_down_instances(
    params: &LightParams,
    obstacles: &[Obstacle],
    hits: &[Option<Vec2>],
) -> Vec<Instance> {
    let mut out = Vec::with_capacity(1 + obstacles.len() + hits.len());

    out.push(Instance {
        shape: Shape::Disc,
        world: Mat4::from_translation(params.origin.extend(0.0))
            * Mat4::from_scale(Vec3::new(LIGHT_MARKER_SIZE, LIGHT_MARKER_SIZE, 1.0)),
        color: MARKER_COLOR,
    });

    for obstacle in obstacles {
        out.push(Instance {
            shape: Shape::Quad,
            world: obstacle.transform(),
            color: obstacle.color(),
        });
    }

    // Hit markers sit just under the ground plane so they never z-fight
    // with obstacle footprints; order matches ray order.
    for point in hits.iter().flatten() {
        out.push(Instance {
            shape: Shape::Disc,
            world: Mat4::from_translation(point.extend(-0.01))
                * Mat4::from_scale(Vec3::new(HIT_MARKER_SIZE, HIT_MARKER_SIZE, 1.0)),
            color: MARKER_COLOR,
        });
    }

    out
}

/// Perspective strip: one quad per column, misses included at zero height.
fn projected_instances(params: &LightParams, hits: &[Option<Vec2>]) -> Vec<Instance> {
    project(params.origin, hits)
        .iter()
        .map(|column| column.to_instance())
        .collect()
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::demo_scene;
    use glam::{Vec2, vec2};

    fn centred_params(ray_count: u32) -> LightParams {
        LightParams {
            origin: Vec2::ZERO,
            direction: 0.0,
            fov: 90.0,
            ray_count,
        }
    }

    #[test]
    fn toggle_flips_between_the_two_modes() {
        let mut mode = DisplayMode::TopDownDebug;
        mode.toggle();
        assert_eq!(mode, DisplayMode::Projected3D);
        mode.toggle();
        assert_eq!(mode, DisplayMode::TopDownDebug);
    }

    #[test]
    fn debug_frame_lists_light_obstacles_and_hits() {
        let scene = demo_scene();
        let params = centred_params(16);
        // Inside the demo room every ray lands somewhere.
        let out = assemble(DisplayMode::TopDownDebug, &params, &scene);
        assert_eq!(out.len(), 1 + scene.len() + 16);
        assert_eq!(out[0].shape, Shape::Disc);
    }

    #[test]
    fn debug_frame_skips_markers_for_misses() {
        // One wall only half the fan can reach.
        let scene = vec![Obstacle::wall(vec2(5.0, 0.5), vec2(5.0, 6.0))];
        let params = centred_params(10);
        let hit_count = shine(&params, &scene).iter().flatten().count();
        assert!(hit_count < 10);

        let out = assemble(DisplayMode::TopDownDebug, &params, &scene);
        assert_eq!(out.len(), 1 + 1 + hit_count);
    }

    #[test]
    fn projected_frame_has_one_quad_per_ray() {
        let scene = vec![Obstacle::wall(vec2(5.0, 0.5), vec2(5.0, 6.0))];
        let params = centred_params(12);
        let out = assemble(DisplayMode::Projected3D, &params, &scene);
        // Misses keep their column.
        assert_eq!(out.len(), 12);
        assert!(out.iter().all(|i| i.shape == Shape::Quad));
    }

    #[test]
    fn zero_rays_assemble_empty_strip_but_keep_debug_scene() {
        let scene = demo_scene();
        let params = centred_params(0);
        assert!(assemble(DisplayMode::Projected3D, &params, &scene).is_empty());

        let debug = assemble(DisplayMode::TopDownDebug, &params, &scene);
        assert_eq!(debug.len(), 1 + scene.len());
    }
}
