//! Geometric primitives shared by the light sampler and the picker.
//!
//! The only non-trivial piece is [`intersect_plane`]: a direct 3×3 linear
//! solve of a ray against a parallelogram-parameterised plane. It leaves the
//! plane infinite on purpose — finite-quad bounding is the caller's job
//! (see [`Obstacle::test_ray`]), because the picker reuses the same solver
//! against the unbounded ground plane.
//!
//! [`Obstacle::test_ray`]: crate::world::obstacle::Obstacle::test_ray

use glam::{Mat3, Vec2, Vec3, vec2};

/// Determinant magnitude below which a ray counts as parallel to the plane
/// (or the quad as degenerate). Absolute tolerance; scene scale is bounded.
pub const PARALLEL_EPS: f32 = 1e-6;

/// Semi-infinite line `origin + t * direction`, `t ≥ 0`.
///
/// `direction` need not be normalised; `t` is then measured in multiples of
/// its length. Fan rays always carry a unit direction, so for them `t` is a
/// world-space distance.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Ray in the `z = 0` plane from a 2D origin and a heading in degrees
    /// (0° = +X, counter-clockwise). Direction is a unit vector.
    pub fn from_heading(origin: Vec2, heading_deg: f32) -> Self {
        let (s, c) = heading_deg.to_radians().sin_cos();
        Self {
            origin: origin.extend(0.0),
            direction: Vec3::new(c, s, 0.0),
        }
    }

    /// Point at parameter `t`.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
}

/// Solved ray/plane intersection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    /// Ray parameter; never negative when produced by [`intersect_plane`].
    pub t: f32,
    /// Plane coordinates in the edge-vector basis: the hit point is
    /// `q + uv.x * i + uv.y * j`.
    pub uv: Vec2,
}

impl Intersection {
    /// True when the hit lies inside the parallelogram spanned by the two
    /// edge vectors, i.e. inside a finite quad.
    #[inline]
    pub fn in_bounds(&self) -> bool {
        (0.0..=1.0).contains(&self.uv.x) && (0.0..=1.0).contains(&self.uv.y)
    }
}

/// Intersect `ray` with the plane through `q` spanned by edges `i` and `j`.
///
/// Solves `[-dir | i | j] · (t, u, v) = ray.origin - q`. Returns `None` when
/// the system is singular (ray parallel to the plane, or `i`/`j` linearly
/// dependent) or when the solution lies behind the origin (`t < 0`). Both
/// are expected geometric outcomes, not errors.
///
/// `u`, `v` are *not* clamped to `[0, 1]` here.
pub fn intersect_plane(ray: &Ray, q: Vec3, i: Vec3, j: Vec3) -> Option<Intersection> {
    let a = Mat3::from_cols(-ray.direction, i, j);
    if a.determinant().abs() < PARALLEL_EPS {
        return None;
    }

    let x = a.inverse() * (ray.origin - q);
    if x.x < 0.0 {
        return None;
    }

    Some(Intersection {
        t: x.x,
        uv: vec2(x.y, x.z),
    })
}

/// Where `ray` meets the world ground plane (`z = 0`), as 2D coordinates.
///
/// With the basis `(q = 0, i = X, j = Y)` the solver's `uv` *is* the world
/// X–Y position, which is exactly what the viewer stores back into the
/// light origin on a pick. Rays parallel to the ground miss.
pub fn ground_pick(ray: &Ray) -> Option<Vec2> {
    intersect_plane(ray, Vec3::ZERO, Vec3::X, Vec3::Y).map(|hit| hit.uv)
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
