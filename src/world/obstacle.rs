//! Scene obstacles: unit quads carried into world space by a transform.

use glam::{Mat4, Vec2, Vec3};

use crate::world::geometry::{Intersection, Ray, intersect_plane};

/// Local-space corner the plane parameters are anchored at. The canonical
/// quad is the unit square centred on the local origin in the X–Y plane,
/// so `uv ∈ [0,1]²` in the edge basis covers exactly its extent.
const QUAD_ANCHOR: Vec3 = Vec3::new(-0.5, -0.5, 0.0);

/// Default wall colour, matching the scene the engine grew up with.
const WALL_COLOR: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Height of walls built by [`Obstacle::wall`], world units.
const WALL_HEIGHT: f32 = 1.0;

/// One planar obstacle: the canonical unit quad under an arbitrary affine
/// transform, plus the tint the renderer paints it with.
#[derive(Clone, Debug)]
pub struct Obstacle {
    transform: Mat4,
    color: Vec3,
}

impl Obstacle {
    pub fn new(transform: Mat4, color: Vec3) -> Self {
        Self { transform, color }
    }

    /// Upright wall between the 2D points `a` and `b`: spans the segment
    /// horizontally and `z ∈ [-0.5, 0.5]` vertically, so fan rays in the
    /// `z = 0` plane cross it at mid-height. `a == b` builds a collapsed
    /// quad that simply never intersects.
    pub fn wall(a: Vec2, b: Vec2) -> Self {
        let edge = (b - a).extend(0.0);
        let up = Vec3::Z * WALL_HEIGHT;
        let normal = edge.cross(up).normalize_or_zero();
        let center = ((a + b) * 0.5).extend(0.0);

        Self::new(
            Mat4::from_cols(
                edge.extend(0.0),
                up.extend(0.0),
                normal.extend(0.0),
                center.extend(1.0),
            ),
            WALL_COLOR,
        )
    }

    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }

    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    pub fn color(&self) -> Vec3 {
        self.color
    }

    /// World-space plane parameters `(q, i, j)`: the transformed anchor
    /// corner and the two transformed edge vectors. A transform that
    /// collapses the quad makes `i`, `j` linearly dependent, which the
    /// solver rejects through its determinant guard.
    pub fn plane(&self) -> (Vec3, Vec3, Vec3) {
        let q = self.transform.transform_point3(QUAD_ANCHOR);
        let i = self.transform.transform_vector3(Vec3::X);
        let j = self.transform.transform_vector3(Vec3::Y);
        (q, i, j)
    }

    /// Intersection of `ray` with this *finite* quad: the infinite-plane
    /// solution filtered to `uv ∈ [0,1]²`.
    pub fn test_ray(&self, ray: &Ray) -> Option<Intersection> {
        let (q, i, j) = self.plane();
        intersect_plane(ray, q, i, j).filter(Intersection::in_bounds)
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    #[test]
    fn wall_plane_spans_segment_and_height() {
        let (q, i, j) = Obstacle::wall(vec2(5.0, -5.0), vec2(5.0, 5.0)).plane();
        assert!((q - Vec3::new(5.0, -5.0, -0.5)).length() < 1e-5);
        assert!((i - Vec3::new(0.0, 10.0, 0.0)).length() < 1e-5);
        assert!((j - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn aimed_ray_hits_wall_centre() {
        let wall = Obstacle::wall(vec2(5.0, -5.0), vec2(5.0, 5.0));
        let ray = Ray::from_heading(Vec2::ZERO, 0.0);
        let hit = wall.test_ray(&ray).expect("head-on ray must hit");
        assert!((hit.t - 5.0).abs() < 1e-5);
        // Fan rays cross an upright wall at mid-height.
        assert!((hit.uv.y - 0.5).abs() < 1e-5);
        assert!((ray.at(hit.t).truncate() - vec2(5.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn ray_past_wall_end_misses() {
        // Wall covers y ∈ [-1, 1]; aim at y = 2 on the same plane.
        let wall = Obstacle::wall(vec2(4.0, -1.0), vec2(4.0, 1.0));
        let ray = Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::X);
        assert!(wall.test_ray(&ray).is_none());
    }

    #[test]
    fn collapsed_wall_never_hits() {
        let point = Obstacle::wall(vec2(3.0, 0.0), vec2(3.0, 0.0));
        let ray = Ray::from_heading(Vec2::ZERO, 0.0);
        assert!(point.test_ray(&ray).is_none());
    }

    #[test]
    fn flat_scaled_quad_is_rejected_not_crashed() {
        // Scale flattens the quad to a line along X.
        let flat = Obstacle::new(
            Mat4::from_translation(Vec3::new(2.0, 0.0, 0.0))
                * Mat4::from_scale(Vec3::new(1.0, 0.0, 1.0)),
            Vec3::ONE,
        );
        let ray = Ray::from_heading(Vec2::ZERO, 0.0);
        assert!(flat.test_ray(&ray).is_none());
    }
}
