//! Pseudo-3D projection: per-ray hit distances → a strip of screen columns.
//!
//! Each ray of the fan owns one vertical slice of a fixed-width strip; the
//! slice's height is inversely proportional to the hit distance, which is
//! the whole perspective illusion. Misses keep their slice (at zero height)
//! so column index ↔ ray index stays a bijection and the strip width never
//! changes with scene content.

use glam::{Mat4, Vec2, Vec3};

use crate::renderer::{Instance, Shape};

/// Total width of the projected strip, world units.
pub const STRIP_WIDTH: f32 = 24.0;

/// Column height for a hit at distance 1; height falls off as `1/distance`.
pub const STRIP_HEIGHT: f32 = 8.0;

/// Shortest distance the projector will divide by. A hit exactly on the
/// light origin would otherwise blow the column height up to infinity.
const MIN_DISTANCE: f32 = 1e-4;

/// One pseudo-3D slice: an axis-aligned rectangle centred on `y = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Column {
    /// Horizontal centre of the slice, relative to the strip's centre.
    pub offset_x: f32,
    pub width: f32,
    pub height: f32,
}

impl Column {
    /// Renderable quad for this slice, tinted red by proximity
    /// (`height / STRIP_HEIGHT` is exactly `1/distance`).
    pub fn to_instance(&self) -> Instance {
        Instance {
            shape: Shape::Quad,
            world: Mat4::from_translation(Vec3::new(self.offset_x, 0.0, 0.0))
                * Mat4::from_scale(Vec3::new(self.width, self.height, 1.0)),
            color: Vec3::new(self.height / STRIP_HEIGHT, 0.0, 0.0),
        }
    }
}

/// Screen column that ray `i` of an `n`-ray fan lands in.
///
/// The fan sweeps one way while screen columns grow the other, so the
/// mapping mirrors: ray 0, the first angular sample, fills the *rightmost*
/// column. This is the classic raycaster mirroring bug in waiting — it
/// lives here, in one named function, and nowhere else.
#[inline]
pub fn screen_column(i: usize, n: usize) -> usize {
    n - i - 1
}

/// Map a hit sequence to one column per ray.
///
/// Column widths always sum to [`STRIP_WIDTH`]; heights are
/// `STRIP_HEIGHT / distance(origin, hit)` with the distance floored at an
/// epsilon, and zero for misses (an escaped ray is infinitely far away).
/// Empty input produces an empty strip.
pub fn project(origin: Vec2, hits: &[Option<Vec2>]) -> Vec<Column> {
    let n = hits.len();
    if n == 0 {
        return Vec::new();
    }

    let width = STRIP_WIDTH / n as f32;
    // Shift so the whole strip is centred on x = 0.
    let dislocation = STRIP_WIDTH * 0.5 - width * 0.5;

    hits.iter()
        .enumerate()
        .map(|(i, hit)| Column {
            offset_x: width * screen_column(i, n) as f32 - dislocation,
            width,
            height: match hit {
                Some(point) => STRIP_HEIGHT / origin.distance(*point).max(MIN_DISTANCE),
                None => 0.0,
            },
        })
        .collect()
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
