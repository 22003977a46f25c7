//! ---------------------------------------------------------------------------
//! Software (CPU) instance rasteriser
//!
//! * Fills an `&mut [u32]` frame-buffer in **0x00RRGGBB** format.
//! * Fixed orthographic top-down viewport: [`VIEW_SPAN`] world units map
//!   across the frame width, +Y up, world origin at the frame centre. The
//!   same viewport serves both presentations — the debug scene and the
//!   projected strip are both sized to fit it.
//! * Quads are filled as two edge-function triangles plus a Bresenham
//!   outline, so a quad seen edge-on (an upright wall from above) still
//!   shows up as its footprint segment.
//! ---------------------------------------------------------------------------

use glam::{Vec2, Vec3, vec2};

use crate::renderer::{Instance, Renderer, Rgba, Shape};
use crate::world::Ray;

/// World units spanned by the frame width.
pub const VIEW_SPAN: f32 = 26.0;

/// Camera height the pick ray starts from; anything above the ground plane.
const PICK_HEIGHT: f32 = 10.0;

/// Blue-grey clear colour.
const CLEAR_COLOR: Rgba = 0x00_2040_80;

/// Local corners of the unit quad, in convex winding order.
const QUAD_CORNERS: [Vec3; 4] = [
    Vec3::new(-0.5, -0.5, 0.0),
    Vec3::new(0.5, -0.5, 0.0),
    Vec3::new(0.5, 0.5, 0.0),
    Vec3::new(-0.5, 0.5, 0.0),
];

/// Orthographic top-down rasteriser.
#[derive(Default)]
pub struct Software {
    scratch: Vec<Rgba>,
    width: usize,
    height: usize,
}

impl Software {
    #[inline]
    fn px_per_unit(&self) -> f32 {
        self.width as f32 / VIEW_SPAN
    }

    /// World X–Y → pixel coordinates (sub-pixel, +Y flipped).
    #[inline]
    pub fn to_screen(&self, p: Vec2) -> Vec2 {
        let s = self.px_per_unit();
        vec2(
            self.width as f32 * 0.5 + p.x * s,
            self.height as f32 * 0.5 - p.y * s,
        )
    }

    /// Pixel coordinates → world X–Y; inverse of [`Self::to_screen`].
    #[inline]
    pub fn to_world(&self, px: f32, py: f32) -> Vec2 {
        let s = self.px_per_unit();
        vec2(
            (px - self.width as f32 * 0.5) / s,
            (self.height as f32 * 0.5 - py) / s,
        )
    }

    /// Downward world ray through the pixel `(px, py)`, for ground-plane
    /// picking via [`crate::world::ground_pick`].
    pub fn pick_ray(&self, px: f32, py: f32) -> Ray {
        Ray::new(self.to_world(px, py).extend(PICK_HEIGHT), -Vec3::Z)
    }

    #[inline]
    fn put_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if (0..self.width as i32).contains(&x) && (0..self.height as i32).contains(&y) {
            self.scratch[y as usize * self.width + x as usize] = color;
        }
    }

    /// Integer Bresenham line.
    fn draw_line(&mut self, a: Vec2, b: Vec2, color: Rgba) {
        let (mut x0, mut y0) = (a.x as i32, a.y as i32);
        let (x1, y1) = (b.x as i32, b.y as i32);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.put_pixel(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                if x0 == x1 {
                    break;
                }
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                if y0 == y1 {
                    break;
                }
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Edge-function fill; winding-agnostic, samples pixel centres.
    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Rgba) {
        let area = (b - a).perp_dot(c - a);
        if area.abs() < f32::EPSILON {
            return; // zero-area: the outline pass already drew the segment
        }

        let min_x = (a.x.min(b.x).min(c.x).floor().max(0.0)) as i32;
        let max_x = (a.x.max(b.x).max(c.x).ceil()).min(self.width as f32 - 1.0) as i32;
        let min_y = (a.y.min(b.y).min(c.y).floor().max(0.0)) as i32;
        let max_y = (a.y.max(b.y).max(c.y).ceil()).min(self.height as f32 - 1.0) as i32;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = vec2(x as f32 + 0.5, y as f32 + 0.5);
                // Normalising by the signed area makes all three weights
                // non-negative inside, for either winding.
                let w0 = (b - a).perp_dot(p - a) / area;
                let w1 = (c - b).perp_dot(p - b) / area;
                let w2 = (a - c).perp_dot(p - c) / area;
                if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                    self.put_pixel(x, y, color);
                }
            }
        }
    }

    fn draw_quad(&mut self, instance: &Instance, color: Rgba) {
        let corners: [Vec2; 4] = QUAD_CORNERS
            .map(|local| self.to_screen(instance.world.transform_point3(local).truncate()));

        self.fill_triangle(corners[0], corners[1], corners[2], color);
        self.fill_triangle(corners[0], corners[2], corners[3], color);

        for i in 0..4 {
            self.draw_line(corners[i], corners[(i + 1) % 4], color);
        }
    }

    fn draw_disc(&mut self, instance: &Instance, color: Rgba) {
        let center = self.to_screen(instance.world.transform_point3(Vec3::ZERO).truncate());
        let radius =
            instance.world.transform_vector3(Vec3::X).length() * 0.5 * self.px_per_unit();

        let r = radius.ceil() as i32;
        let (cx, cy) = (center.x as i32, center.y as i32);
        for dy in -r..=r {
            for dx in -r..=r {
                let d = vec2(dx as f32, dy as f32);
                if d.length_squared() <= radius * radius {
                    self.put_pixel(cx + dx, cy + dy, color);
                }
            }
        }
    }
}

/// Pack a `[0, 1]` colour into 0x00RRGGBB.
fn pack(color: Vec3) -> Rgba {
    let c = color.clamp(Vec3::ZERO, Vec3::ONE) * 255.0;
    ((c.x as Rgba) << 16) | ((c.y as Rgba) << 8) | (c.z as Rgba)
}

/*──────────────────────── Renderer trait impl ────────────────────────*/
impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize) {
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.scratch.resize(w * h, 0);
        }
        self.scratch.fill(CLEAR_COLOR);
    }

    fn draw_instance(&mut self, instance: &Instance) {
        let color = pack(instance.color);
        match instance.shape {
            Shape::Quad => self.draw_quad(instance, color),
            Shape::Disc => self.draw_disc(instance, color),
        }
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        submit(&self.scratch, self.width, self.height);
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
