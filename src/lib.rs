//! Tilemesh generates the quad mesh for a tiled, nine-sliced UI sprite.
//!
//! Given a draw rectangle, a sliced sprite's border metrics, and its
//! outer/inner texture UV boxes, the generator fills the rectangle with a
//! grid of textured quads: a tiled center region, tiled border strips, and
//! four fixed corner quads. Partial tiles at the far edge are clipped in
//! both position and UV, and alternating rows/columns can flip their UVs
//! horizontally/vertically.
//!
//! # Pipeline overview
//!
//! 1. **Adjust borders**: rescale declared border insets to the
//!    pixel-adjusted rect ([`adjusted_borders`])
//! 2. **Plan tiles**: compute tile counts/dimensions under the hard vertex
//!    ceiling ([`plan_tiles`])
//! 3. **Emit quads**: one quad per tile, strip segment, and corner,
//!    appended to a [`MeshSink`] ([`generate_mesh`])
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: generation is a pure function of its
//!   inputs; identical inputs produce identical vertex/index streams.
//! - **No failure past validation**: degenerate geometry is handled by
//!   policy (zero tile size collapses to one tile, an oversized grid is
//!   coarsened with a warning), never by panicking or erroring mid-pass.
//! - **Bounded output**: at most [`MAX_MESH_VERTICES`] vertices per pass,
//!   enforced before any quad is emitted.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod mesh;
mod sprite;
mod tiling;

pub use foundation::core::{BorderInsets, FlipOptions, Point, Rect, Rgba8, Size, Vec2};
pub use foundation::error::{TilemeshError, TilemeshResult};
pub use mesh::buffer::{MeshBuffer, MeshSink, Vertex};
pub use mesh::quad::add_quad;
pub use sprite::model::{DrawMode, SlicedSprite, TiledImage, WrapMode};
pub use tiling::border::adjusted_borders;
pub use tiling::generator::{MeshStats, generate_mesh};
pub use tiling::planner::{MAX_MESH_VERTICES, TilePlan, plan_tiles};
