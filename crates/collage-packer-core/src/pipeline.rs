use image::{DynamicImage, RgbaImage};
use tracing::{debug, instrument};

use crate::compositing::blit_rgba;
use crate::error::{CollageError, Result};
use crate::model::{Collage, CollageStats, Frame, Rect, Size};
use crate::packer::{Packable, pack};

/// In-memory image to pack (key + decoded image).
pub struct InputImage {
    pub key: String,
    pub image: DynamicImage,
}

/// Output of a packing run: the layout and the composited RGBA canvas.
pub struct CollageOutput {
    pub collage: Collage,
    pub rgba: RgbaImage,
}

impl CollageOutput {
    /// Computes packing statistics for this output.
    /// This is a convenience method that delegates to `collage.stats()`.
    pub fn stats(&self) -> CollageStats {
        self.collage.stats()
    }
}

/// Adapter exposing a slice of sizes to the packer and collecting the
/// computed positions.
struct SliceTarget<'a> {
    sizes: &'a [Size],
    positions: Vec<(u32, u32)>,
}

impl<'a> SliceTarget<'a> {
    fn new(sizes: &'a [Size]) -> Self {
        Self {
            sizes,
            positions: vec![(0, 0); sizes.len()],
        }
    }
}

impl Packable for SliceTarget<'_> {
    fn count(&self) -> usize {
        self.sizes.len()
    }
    fn rect(&self, index: usize) -> Size {
        self.sizes[index]
    }
    fn place(&mut self, index: usize, x: u32, y: u32) {
        self.positions[index] = (x, y);
    }
}

#[instrument(skip_all)]
/// Packs `inputs` into a single collage and returns the layout plus the
/// composited RGBA canvas.
///
/// The canvas is exactly the size of the packed layout's bounding box;
/// every input is composited at its recorded position.
pub fn pack_images(inputs: Vec<InputImage>) -> Result<CollageOutput> {
    if inputs.is_empty() {
        return Err(CollageError::Empty);
    }

    let rgbas: Vec<RgbaImage> = inputs.iter().map(|inp| inp.image.to_rgba8()).collect();
    let sizes: Vec<Size> = rgbas
        .iter()
        .map(|img| {
            let (w, h) = img.dimensions();
            Size::new(w, h)
        })
        .collect();

    let mut target = SliceTarget::new(&sizes);
    let (width, height) = pack(&mut target);
    debug!(width, height, frames = sizes.len(), "layout computed");

    let mut canvas = RgbaImage::new(width, height);
    let mut frames = Vec::with_capacity(inputs.len());
    for (i, inp) in inputs.into_iter().enumerate() {
        let (x, y) = target.positions[i];
        blit_rgba(&rgbas[i], &mut canvas, x, y);
        frames.push(Frame {
            key: inp.key,
            frame: Rect::new(x, y, sizes[i].w, sizes[i].h),
        });
    }

    Ok(CollageOutput {
        collage: Collage {
            width,
            height,
            frames,
        },
        rgba: canvas,
    })
}

/// Layout-only variant: packs `(key, width, height)` triples without
/// touching any pixels.
pub fn pack_layout(inputs: Vec<(String, u32, u32)>) -> Result<Collage> {
    if inputs.is_empty() {
        return Err(CollageError::Empty);
    }

    let sizes: Vec<Size> = inputs.iter().map(|&(_, w, h)| Size::new(w, h)).collect();
    let mut target = SliceTarget::new(&sizes);
    let (width, height) = pack(&mut target);

    let frames = inputs
        .into_iter()
        .enumerate()
        .map(|(i, (key, w, h))| {
            let (x, y) = target.positions[i];
            Frame {
                key,
                frame: Rect::new(x, y, w, h),
            }
        })
        .collect();

    Ok(Collage {
        width,
        height,
        frames,
    })
}
