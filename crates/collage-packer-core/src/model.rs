use serde::{Deserialize, Serialize};

/// Rectangle dimensions (pixels), position-agnostic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

impl Size {
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }
    /// Area in pixels, widened so large inputs cannot overflow.
    pub fn area(&self) -> u64 {
        u64::from(self.w) * u64::from(self.h)
    }
}

/// Axis-aligned rectangle (pixels). `x,y` is top-left; `w,h` are sizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
    /// Exclusive right edge coordinate (`x + w`).
    pub fn right(&self) -> u32 {
        self.x + self.w
    }
    /// Exclusive bottom edge coordinate (`y + h`).
    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }
    pub fn area(&self) -> u64 {
        u64::from(self.w) * u64::from(self.h)
    }
    /// Returns true if `self` and `r` overlap. Half-open intervals on both
    /// axes, so rectangles that merely touch at an edge do not overlap.
    pub fn intersects(&self, r: &Rect) -> bool {
        !(self.x >= r.right() || r.x >= self.right() || self.y >= r.bottom() || r.y >= self.bottom())
    }
}

/// A placed input within the collage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame<K = String> {
    /// User-specified key (e.g., filename or asset path).
    pub key: K,
    /// Placed rectangle within the collage canvas.
    pub frame: Rect,
}

/// The packed layout: canvas dimensions plus one frame per input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collage<K = String> {
    pub width: u32,
    pub height: u32,
    pub frames: Vec<Frame<K>>,
}

/// Collage-level metadata embedded in exported layouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    /// Schema version for the JSON layout format. String to allow
    /// non-integer versions like "1.0"; current: "1".
    pub schema_version: String,
    pub app: String,
    pub version: String,
}

impl Meta {
    pub fn new() -> Self {
        Self {
            schema_version: "1".into(),
            app: "collage-packer".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

impl Default for Meta {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about collage packing efficiency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CollageStats {
    /// Number of frames placed on the canvas.
    pub num_frames: usize,
    /// Canvas dimensions.
    pub width: u32,
    pub height: u32,
    /// Canvas area (width * height).
    pub canvas_area: u64,
    /// Area covered by frames (sum of frame width * height).
    pub used_frame_area: u64,
    /// Occupancy ratio: used_frame_area / canvas_area (0.0 to 1.0).
    /// Higher is better (less wasted space).
    pub occupancy: f64,
}

impl<K> Collage<K> {
    /// Computes packing statistics for this collage.
    pub fn stats(&self) -> CollageStats {
        let canvas_area = u64::from(self.width) * u64::from(self.height);
        let used_frame_area = self.frames.iter().map(|f| f.frame.area()).sum();

        let occupancy = if canvas_area > 0 {
            used_frame_area as f64 / canvas_area as f64
        } else {
            0.0
        };

        CollageStats {
            num_frames: self.frames.len(),
            width: self.width,
            height: self.height,
            canvas_area,
            used_frame_area,
            occupancy,
        }
    }
}

impl CollageStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Frames: {}, Canvas: {}x{}, Occupancy: {:.2}%, Canvas Area: {} px², Used Area: {} px²",
            self.num_frames,
            self.width,
            self.height,
            self.occupancy * 100.0,
            self.canvas_area,
            self.used_frame_area,
        )
    }

    /// Returns wasted space in pixels.
    pub fn wasted_area(&self) -> u64 {
        self.canvas_area.saturating_sub(self.used_frame_area)
    }

    /// Returns wasted space as a percentage (0.0 to 100.0).
    pub fn waste_percentage(&self) -> f64 {
        if self.canvas_area > 0 {
            (self.wasted_area() as f64 / self.canvas_area as f64) * 100.0
        } else {
            0.0
        }
    }
}
