//////////////////////////////////////////////////////////////////////
// Robinson triangle (Penrose P2/P3) tilings by recursive
// subdivision, plus the plumbing to hand the result to a renderer
// as flat vertex buffers.

#[macro_use]
extern crate error_chain;

#[macro_use]
extern crate log;

pub mod errors;
pub mod geometry;
pub mod tile;
pub mod seed;
pub mod subdivider;
pub mod export;
pub mod scene;
pub mod preview;

pub use errors::{Error, ErrorKind, Result, ResultExt};
pub use tile::{ColorClass, Triangle};
pub use seed::{Seed, SeedConfig};
pub use subdivider::{checked_depth, subdivide, ColorCounts, Generation, TileSubdivider};
pub use export::{VertexBuffers, ExportOptions};
