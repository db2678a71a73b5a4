use collage_packer_core::model::Size;
use collage_packer_core::packer::{Packable, pack};

/// Minimal `Packable` over a list of sizes, recording every placement call.
struct SizeList {
    sizes: Vec<(u32, u32)>,
    placements: Vec<Option<(u32, u32)>>,
}

impl SizeList {
    fn new(sizes: Vec<(u32, u32)>) -> Self {
        let n = sizes.len();
        Self {
            sizes,
            placements: vec![None; n],
        }
    }
}

impl Packable for SizeList {
    fn count(&self) -> usize {
        self.sizes.len()
    }
    fn rect(&self, index: usize) -> Size {
        let (w, h) = self.sizes[index];
        Size::new(w, h)
    }
    fn place(&mut self, index: usize, x: u32, y: u32) {
        assert!(
            self.placements[index].is_none(),
            "index {} placed twice",
            index
        );
        self.placements[index] = Some((x, y));
    }
}

#[test]
fn empty_collection_packs_to_zero() {
    let mut target = SizeList::new(vec![]);
    let (w, h) = pack(&mut target);
    assert_eq!((w, h), (0, 0));
    assert!(target.placements.is_empty());
}

#[test]
fn single_rectangle_lands_at_origin() {
    let mut target = SizeList::new(vec![(100, 200)]);
    let (w, h) = pack(&mut target);
    assert_eq!((w, h), (100, 200));
    assert_eq!(target.placements[0], Some((0, 0)));
}

#[test]
fn every_index_is_placed_exactly_once() {
    let mut target = SizeList::new(vec![(100, 200), (50, 50), (80, 120), (30, 60), (70, 70)]);
    pack(&mut target);
    for (i, p) in target.placements.iter().enumerate() {
        assert!(p.is_some(), "index {} never placed", i);
    }
}

#[test]
fn returned_size_is_the_tight_bounding_box() {
    let mut target = SizeList::new(vec![(100, 200), (50, 50), (80, 120), (30, 60), (70, 70)]);
    let (w, h) = pack(&mut target);

    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_right = 0;
    let mut max_bottom = 0;
    for (i, p) in target.placements.iter().enumerate() {
        let (x, y) = p.expect("placed");
        let (rw, rh) = target.sizes[i];
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_right = max_right.max(x + rw);
        max_bottom = max_bottom.max(y + rh);
    }

    // layout is normalized to a zero origin, so the tight box starts at (0, 0)
    assert_eq!(min_x, 0);
    assert_eq!(min_y, 0);
    assert_eq!(w, max_right);
    assert_eq!(h, max_bottom);
}

#[test]
fn zero_sized_rectangles_occupy_no_area() {
    let mut target = SizeList::new(vec![(0, 0), (10, 10), (0, 5)]);
    let (w, h) = pack(&mut target);
    assert_eq!((w, h), (10, 10));
    for p in &target.placements {
        let (x, y) = p.expect("placed");
        assert!(x <= 10 && y <= 10);
    }
}
