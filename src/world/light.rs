//! The light sampler: fan generation and nearest-hit selection.
//!
//! Everything here is a pure function of an immutable [`LightParams`]
//! snapshot and the frame's obstacle slice. The UI owns and mutates its own
//! copy of the parameters between frames; the sampler never sees shared
//! mutable state, so a future parallel fan would need no locking.

use glam::Vec2;

use crate::world::geometry::{Intersection, Ray};
use crate::world::obstacle::Obstacle;

/// Per-frame snapshot of the light source.
#[derive(Clone, Copy, Debug)]
pub struct LightParams {
    pub origin: Vec2,
    /// Fan centre heading, degrees, counter-clockwise from +X.
    pub direction: f32,
    /// Angular width of the fan, degrees. Zero or negative values are legal
    /// and collapse the fan onto `direction` (or sweep it backwards); they
    /// are not rejected.
    pub fov: f32,
    /// Number of rays in the fan. Zero casts nothing.
    pub ray_count: u32,
}

impl Default for LightParams {
    fn default() -> Self {
        Self {
            origin: Vec2::ZERO,
            direction: 0.0,
            fov: 90.0,
            ray_count: 100,
        }
    }
}

/// Heading (degrees) of ray `i` in the fan described by `params`.
///
/// A multi-ray fan sweeps `direction - fov/2 ..= direction + fov/2` with
/// *both* edge rays included, so first and last heading differ by exactly
/// `fov`. A single-ray fan points exactly along `direction` — not at the
/// sweep's left edge. Keep this tie-break: it decides the fan's symmetry.
pub fn fan_heading(params: &LightParams, i: u32) -> f32 {
    if params.ray_count <= 1 {
        params.direction
    } else {
        let step = params.fov / (params.ray_count - 1) as f32;
        params.direction - params.fov * 0.5 + step * i as f32
    }
}

/// Nearest in-bounds hit of `ray` over `obstacles`, with the index of the
/// winning obstacle.
///
/// Minimum-`t` scan; the strict `<` keeps the *earliest listed* obstacle on
/// an exact `t` tie. That tie-break is implementation-defined but
/// deliberate: it makes results reproducible for any scene order.
pub fn nearest_hit(ray: &Ray, obstacles: &[Obstacle]) -> Option<(usize, Intersection)> {
    let mut nearest: Option<(usize, Intersection)> = None;
    for (idx, obstacle) in obstacles.iter().enumerate() {
        if let Some(hit) = obstacle.test_ray(ray) {
            if nearest.is_none_or(|(_, best)| hit.t < best.t) {
                nearest = Some((idx, hit));
            }
        }
    }
    nearest
}

/// Cast the whole fan and collect one entry per ray, in fan order: the
/// world-space point of the nearest hit, or `None` where the ray escapes.
///
/// Total for every input: zero rays give an empty sequence, zero obstacles
/// give all misses, degenerate FOVs fall out of [`fan_heading`].
pub fn shine(params: &LightParams, obstacles: &[Obstacle]) -> Vec<Option<Vec2>> {
    (0..params.ray_count)
        .map(|i| {
            let ray = Ray::from_heading(params.origin, fan_heading(params, i));
            nearest_hit(&ray, obstacles).map(|(_, hit)| ray.at(hit.t).truncate())
        })
        .collect()
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    fn params(direction: f32, fov: f32, ray_count: u32) -> LightParams {
        LightParams {
            origin: Vec2::ZERO,
            direction,
            fov,
            ray_count,
        }
    }

    #[test]
    fn fan_edges_span_exactly_the_fov() {
        for &(fov, n) in &[(90.0_f32, 2_u32), (90.0, 3), (120.0, 7), (360.0, 100)] {
            let p = params(10.0, fov, n);
            let first = fan_heading(&p, 0);
            let last = fan_heading(&p, n - 1);
            assert!(
                (last - first - fov).abs() < 1e-4,
                "fov {fov} n {n}: edges span {}",
                last - first
            );
            // Sweep is symmetric around the centre heading.
            assert!((first + last - 2.0 * p.direction).abs() < 1e-4);
        }
    }

    #[test]
    fn single_ray_points_exactly_at_direction() {
        let p = params(123.0, 90.0, 1);
        assert_eq!(fan_heading(&p, 0), 123.0);
    }

    #[test]
    fn zero_fov_collapses_the_fan() {
        let p = params(45.0, 0.0, 5);
        for i in 0..5 {
            assert!((fan_heading(&p, i) - 45.0).abs() < 1e-5);
        }
    }

    #[test]
    fn zero_rays_shine_empty() {
        let walls = vec![Obstacle::wall(vec2(5.0, -5.0), vec2(5.0, 5.0))];
        assert!(shine(&params(0.0, 90.0, 0), &walls).is_empty());
    }

    #[test]
    fn empty_scene_is_all_misses() {
        let hits = shine(&params(0.0, 90.0, 8), &[]);
        assert_eq!(hits.len(), 8);
        assert!(hits.iter().all(Option::is_none));
    }

    #[test]
    fn three_ray_fan_against_a_wall() {
        // Origin (0,0), direction 0°, fov 90°, an infinite-looking wall at
        // x = 5: rays at -45°, 0°, 45° all hit, middle one nearest.
        let walls = vec![Obstacle::wall(vec2(5.0, -6.0), vec2(5.0, 6.0))];
        let hits = shine(&params(0.0, 90.0, 3), &walls);
        assert_eq!(hits.len(), 3);

        let pts: Vec<Vec2> = hits.into_iter().map(|h| h.expect("all three hit")).collect();
        assert!((pts[0] - vec2(5.0, -5.0)).length() < 1e-3);
        assert!((pts[1] - vec2(5.0, 0.0)).length() < 1e-3);
        assert!((pts[2] - vec2(5.0, 5.0)).length() < 1e-3);

        let d: Vec<f32> = pts.iter().map(|p| p.length()).collect();
        assert!((d[0] - 5.0 * 2.0_f32.sqrt()).abs() < 1e-3);
        assert!((d[1] - 5.0).abs() < 1e-3);
        assert!((d[2] - 5.0 * 2.0_f32.sqrt()).abs() < 1e-3);
    }

    #[test]
    fn nearer_obstacle_occludes() {
        let far = Obstacle::wall(vec2(8.0, -2.0), vec2(8.0, 2.0));
        let near = Obstacle::wall(vec2(3.0, -2.0), vec2(3.0, 2.0));
        let ray = Ray::from_heading(Vec2::ZERO, 0.0);

        let (idx, hit) = nearest_hit(&ray, &[far, near]).expect("both walls block the ray");
        assert_eq!(idx, 1);
        assert!((hit.t - 3.0).abs() < 1e-5);
    }

    #[test]
    fn exact_tie_keeps_first_listed_obstacle() {
        // Two walls on the same plane, both crossing the ray at t = 4.
        let a = Obstacle::wall(vec2(4.0, -3.0), vec2(4.0, 3.0));
        let b = Obstacle::wall(vec2(4.0, -1.0), vec2(4.0, 1.0));
        let ray = Ray::from_heading(Vec2::ZERO, 0.0);

        let (idx, _) = nearest_hit(&ray, &[a.clone(), b.clone()]).unwrap();
        assert_eq!(idx, 0, "first-in-list wins an exact t tie");

        // Order reversed: still the first listed.
        let (idx, _) = nearest_hit(&ray, &[b, a]).unwrap();
        assert_eq!(idx, 0);
    }

    #[test]
    fn hit_order_matches_ray_order() {
        // A wall only the fan's left half can see: misses and hits keep
        // their ray indices.
        let walls = vec![Obstacle::wall(vec2(5.0, 0.5), vec2(5.0, 6.0))];
        let hits = shine(&params(0.0, 90.0, 9), &walls);
        assert_eq!(hits.len(), 9);
        // Fan sweeps -45° → +45°; only upward-leaning rays can reach y ≥ 0.5.
        assert!(hits[0].is_none());
        assert!(hits[8].is_some());
        let split = hits.iter().position(Option::is_some).unwrap();
        assert!(hits[..split].iter().all(Option::is_none));
        assert!(hits[split..].iter().all(Option::is_some));
    }
}
