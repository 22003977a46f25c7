//! Rendering abstraction layer.
//!
//! *The engine never touches a pixel buffer directly.* Each frame it
//! produces a list of [`Instance`]s (see [`crate::engine::assemble`]) and
//! hands them to a type implementing [`Renderer`]. A blanket impl
//! [`RendererExt`] adds `draw_frame` so call-sites stay one line.
//!
//! Only the software back-end ships here; the trait is the seam for
//! anything else (GL, a headless test sink, …).

use glam::{Mat4, Vec3};

/// Pixel format of the software frame-buffer (0x00RRGGBB).
pub type Rgba = u32;

/// Base mesh an instance is built from. Both are unit-sized in local
/// space: the quad spans `[-0.5, 0.5]²` in X–Y, the disc has diameter 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Quad,
    Disc,
}

/// One renderable transform handed to the back-end: a base shape, its
/// world matrix, and a flat colour tint.
#[derive(Clone, Copy, Debug)]
pub struct Instance {
    pub shape: Shape,
    pub world: Mat4,
    pub color: Vec3,
}

/// A renderer that owns an internal scratch buffer for the whole frame.
///
/// `end_frame` **loans** the finished buffer to a user-supplied closure —
/// the software caller typically forwards it to its window manager.
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution and clear it.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// Rasterise one instance into the internal buffer.
    fn draw_instance(&mut self, instance: &Instance);

    /// Finish the frame and hand the buffer to `submit`, exactly once.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize);
}

/// Convenience blanket-impl with a one-liner `draw_frame` adaptor.
pub trait RendererExt: Renderer {
    fn draw_frame<F>(&mut self, width: usize, height: usize, instances: &[Instance], submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        self.begin_frame(width, height);
        for instance in instances {
            self.draw_instance(instance);
        }
        self.end_frame(submit);
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}

pub mod software;

pub use software::Software;
