use std::collections::HashMap;

use collage_packer_core::model::Rect;
use collage_packer_core::{InputImage, pack_images, pack_layout};
use image::{DynamicImage, Rgba, RgbaImage};

fn solid(w: u32, h: u32, color: Rgba<u8>) -> DynamicImage {
    let mut img = RgbaImage::new(w, h);
    for px in img.pixels_mut() {
        *px = color;
    }
    DynamicImage::ImageRgba8(img)
}

#[test]
fn layout_and_images_have_same_geometry() {
    let sizes = vec![("a", 40, 20), ("b", 16, 32), ("c", 10, 10), ("d", 8, 48)];

    let layout = pack_layout(
        sizes
            .iter()
            .map(|&(k, w, h)| (k.to_string(), w, h))
            .collect(),
    )
    .expect("layout");

    let inputs: Vec<InputImage> = sizes
        .iter()
        .map(|&(k, w, h)| InputImage {
            key: k.to_string(),
            image: solid(w, h, Rgba([255, 255, 255, 255])),
        })
        .collect();
    let out = pack_images(inputs).expect("images");

    assert_eq!(layout.width, out.collage.width);
    assert_eq!(layout.height, out.collage.height);

    let lm: HashMap<String, Rect> = layout
        .frames
        .iter()
        .map(|f| (f.key.clone(), f.frame))
        .collect();
    let im: HashMap<String, Rect> = out
        .collage
        .frames
        .iter()
        .map(|f| (f.key.clone(), f.frame))
        .collect();

    assert_eq!(lm.len(), im.len());
    for (k, v) in lm {
        let vi = im.get(&k).expect("present");
        assert_eq!(&v, vi, "frame rect mismatch for key={}", k);
    }
}

#[test]
fn canvas_matches_layout_and_pixels_land_in_place() {
    let colors = [
        Rgba([200, 10, 10, 255]),
        Rgba([10, 200, 10, 255]),
        Rgba([10, 10, 200, 255]),
    ];
    let sizes = [(30u32, 50u32), (20, 20), (45, 15)];

    let inputs: Vec<InputImage> = sizes
        .iter()
        .zip(colors.iter())
        .enumerate()
        .map(|(i, (&(w, h), &color))| InputImage {
            key: format!("img_{}", i),
            image: solid(w, h, color),
        })
        .collect();

    let out = pack_images(inputs).expect("pack");

    assert_eq!(out.rgba.dimensions(), (out.collage.width, out.collage.height));

    // each image's color fills its recorded frame
    for (i, f) in out.collage.frames.iter().enumerate() {
        let r = &f.frame;
        assert_eq!(*out.rgba.get_pixel(r.x, r.y), colors[i], "key={}", f.key);
        assert_eq!(
            *out.rgba.get_pixel(r.x + r.w - 1, r.y + r.h - 1),
            colors[i],
            "key={}",
            f.key
        );
    }
}

#[test]
fn empty_input_is_rejected() {
    use collage_packer_core::error::CollageError;

    let result = pack_images(vec![]);
    assert!(matches!(result, Err(CollageError::Empty)));

    let result = pack_layout(vec![]);
    assert!(matches!(result, Err(CollageError::Empty)));
}
