//! Core library for packing rectangles into a compact collage layout.
//!
//! - Algorithm: greedy largest-first placement over edge-derived candidate
//!   positions, minimizing the overall bounding-box area (no rotation, no
//!   fixed bin — the layout grows as needed and is normalized to (0, 0))
//! - Pipeline: `pack_images` takes in-memory images and returns the layout
//!   plus a composited RGBA canvas
//! - Data model is serde-serializable; a JSON exporter is provided for the
//!   CLI and other tooling.
//!
//! Quick example:
//! ```ignore
//! use image::ImageReader;
//! use collage_packer_core::{InputImage, pack_images};
//! # fn main() -> anyhow::Result<()> {
//! let img1 = ImageReader::open("a.png")?.decode()?;
//! let img2 = ImageReader::open("b.png")?.decode()?;
//! let inputs = vec![
//!   InputImage { key: "a".into(), image: img1 },
//!   InputImage { key: "b".into(), image: img2 },
//! ];
//! let out = pack_images(inputs)?;
//! println!("canvas: {}x{}", out.collage.width, out.collage.height);
//! # Ok(()) }
//! ```

pub mod compositing;
pub mod error;
pub mod export;
pub mod model;
pub mod packer;
pub mod pipeline;

pub use error::*;
pub use export::*;
pub use model::*;
pub use packer::*;
pub use pipeline::*;

/// Convenience prelude for common types and functions.
/// Importing `collage_packer_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::export::to_json;
    pub use crate::model::{Collage, CollageStats, Frame, Meta, Rect, Size};
    pub use crate::packer::{Packable, pack};
    pub use crate::pipeline::{CollageOutput, InputImage, pack_images, pack_layout};
}
