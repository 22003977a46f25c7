//! # luxcast
//!
//! A 2D point light casts a fan of rays across a scene of planar quad
//! obstacles. Per ray the nearest intersection is found, and the resulting
//! hit sequence feeds two presentations:
//!
//! * a top-down debug view — obstacles plus one marker per hit, and
//! * a pseudo-3D strip — one screen column per ray, height `1/distance`,
//!   the classic early-first-person-engine projection.
//!
//! The crate splits along the data flow: [`world`] holds the geometry, the
//! obstacles and the sampler; [`engine`] turns hit sequences into renderable
//! instances; [`renderer`] rasterises instances. The interactive viewer
//! lives in `src/bin/view.rs`:
//!
//! ```bash
//! cargo run --release -- --rays 200
//! ```

pub mod engine;
pub mod renderer;
pub mod world;
