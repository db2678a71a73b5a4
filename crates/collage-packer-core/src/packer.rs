use std::collections::BTreeSet;

use crate::model::Size;

/// Capability supplied by the caller: rectangle dimensions in, positions out.
///
/// The packer never owns or copies the caller's collection; it reads
/// dimensions by index and writes each computed position back exactly once.
pub trait Packable {
    /// Number of rectangles in the collection.
    fn count(&self) -> usize;
    /// Dimensions of the rectangle at `index`.
    fn rect(&self, index: usize) -> Size;
    /// Records the computed top-left position for the rectangle at `index`.
    /// Called exactly once per index, in unspecified order, before [`pack`]
    /// returns.
    fn place(&mut self, index: usize, x: u32, y: u32);
}

/// A rectangle fixed at a position while the layout is being built.
///
/// Coordinates are `i64`: the working layout is only shifted to a zero
/// origin at the end of the run.
#[derive(Debug, Clone, Copy)]
struct Placement {
    index: usize,
    x: i64,
    y: i64,
    w: i64,
    h: i64,
}

/// Bounding box of a set of placements.
#[derive(Debug, Clone, Copy)]
struct Bounds {
    min_x: i64,
    min_y: i64,
    max_x: i64,
    max_y: i64,
}

impl Bounds {
    fn width(&self) -> i64 {
        self.max_x - self.min_x
    }
    fn height(&self) -> i64 {
        self.max_y - self.min_y
    }
    fn area(&self) -> i64 {
        self.width() * self.height()
    }
    /// Center point (truncating division).
    fn center(&self) -> (i64, i64) {
        (self.min_x + self.width() / 2, self.min_y + self.height() / 2)
    }
}

/// Arranges rectangles into a compact layout. Larger rectangles are placed
/// first to reduce conflicts. The final layout is shifted so that its
/// top-left corner is at (0, 0). Returns the overall dimensions.
///
/// An empty collection returns (0, 0) without any placement calls.
pub fn pack<P: Packable + ?Sized>(target: &mut P) -> (u32, u32) {
    let count = target.count();
    if count == 0 {
        return (0, 0);
    }

    // Stable sort: equal-area rectangles keep their input order, so
    // repacking the same collection reproduces the same layout.
    let mut order: Vec<usize> = (0..count).collect();
    order.sort_by(|&a, &b| target.rect(b).area().cmp(&target.rect(a).area()));

    let mut placements: Vec<Placement> = Vec::with_capacity(count);
    for index in order {
        let size = target.rect(index);
        let (w, h) = (i64::from(size.w), i64::from(size.h));
        if placements.is_empty() {
            placements.push(Placement {
                index,
                x: 0,
                y: 0,
                w,
                h,
            });
            continue;
        }

        // Derive candidate positions from existing rectangle edges and pick
        // the one that keeps the layout tightest.
        let (xs, ys) = candidate_positions(&placements);
        let bounds = compute_bounds(&placements);
        let placed = match find_best_placement(&xs, &ys, bounds, index, w, h, &placements) {
            Some(p) => p,
            // Every candidate collides: extend to the right edge of the
            // bounding box at its current top.
            None => Placement {
                index,
                x: bounds.max_x,
                y: bounds.min_y,
                w,
                h,
            },
        };
        placements.push(placed);
    }

    // Shift the layout so its top-left corner lands at (0, 0) and hand the
    // final positions back by original index.
    let bounds = compute_bounds(&placements);
    for p in &placements {
        target.place(
            p.index,
            (p.x - bounds.min_x) as u32,
            (p.y - bounds.min_y) as u32,
        );
    }

    (bounds.width() as u32, bounds.height() as u32)
}

/// Expands `b` to include `p`.
fn expand_bounds(mut b: Bounds, p: &Placement) -> Bounds {
    b.min_x = b.min_x.min(p.x);
    b.min_y = b.min_y.min(p.y);
    b.max_x = b.max_x.max(p.x + p.w);
    b.max_y = b.max_y.max(p.y + p.h);
    b
}

/// Minimal bounding box enclosing all placements.
fn compute_bounds(placements: &[Placement]) -> Bounds {
    let first = &placements[0];
    let seed = Bounds {
        min_x: first.x,
        min_y: first.y,
        max_x: first.x + first.w,
        max_y: first.y + first.h,
    };
    placements.iter().fold(seed, |b, p| expand_bounds(b, p))
}

/// Distinct x and y coordinates from the edges of placed rectangles, in
/// ascending order. Sorted iteration keeps the first-best-wins candidate
/// scan reproducible.
fn candidate_positions(placements: &[Placement]) -> (Vec<i64>, Vec<i64>) {
    let mut xs: BTreeSet<i64> = BTreeSet::new();
    let mut ys: BTreeSet<i64> = BTreeSet::new();
    for p in placements {
        xs.insert(p.x);
        xs.insert(p.x + p.w);
        ys.insert(p.y);
        ys.insert(p.y + p.h);
    }
    (xs.into_iter().collect(), ys.into_iter().collect())
}

/// Returns true if `a` and `b` overlap. Half-open intervals on both axes:
/// rectangles that merely touch at an edge do not overlap, and zero-sized
/// rectangles overlap nothing.
#[inline]
fn intersects(a: &Placement, b: &Placement) -> bool {
    !(a.x >= b.x + b.w || b.x >= a.x + a.w || a.y >= b.y + b.h || b.y >= a.y + a.h)
}

/// Checks if `candidate` intersects any existing placement.
fn has_intersection(candidate: &Placement, placements: &[Placement]) -> bool {
    placements.iter().any(|p| intersects(candidate, p))
}

/// Selects the candidate position that minimizes the resulting bounding-box
/// area, favoring positions whose center is closer to the center of the
/// expanded box. The first candidate with the best score wins; later
/// equal-score candidates do not replace it.
fn find_best_placement(
    xs: &[i64],
    ys: &[i64],
    bounds: Bounds,
    index: usize,
    w: i64,
    h: i64,
    placements: &[Placement],
) -> Option<Placement> {
    let mut best: Option<Placement> = None;
    let mut best_area = i64::MAX;
    let mut best_center_dist = i64::MAX;

    for &x in xs {
        for &y in ys {
            let candidate = Placement { index, x, y, w, h };
            if has_intersection(&candidate, placements) {
                continue;
            }

            let expanded = expand_bounds(bounds, &candidate);
            let area = expanded.area();
            let (bx, by) = expanded.center();
            let dx = candidate.x + candidate.w / 2 - bx;
            let dy = candidate.y + candidate.h / 2 - by;
            let center_dist = dx * dx + dy * dy;

            if area < best_area || (area == best_area && center_dist < best_center_dist) {
                best_area = area;
                best_center_dist = center_dist;
                best = Some(candidate);
            }
        }
    }

    best
}
