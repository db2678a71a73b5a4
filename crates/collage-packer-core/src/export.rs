use serde_json::{Value, json};

use crate::model::{Collage, Meta};

/// Serialize a `Collage` as a JSON object `{ width, height, frames, meta }`.
/// Frame rects use the same field names as the in-memory model; keys are
/// stringified so any `ToString` key type exports cleanly.
pub fn to_json<K: ToString>(collage: &Collage<K>) -> Value {
    let frames: Vec<Value> = collage
        .frames
        .iter()
        .map(|fr| {
            json!({
                "key": fr.key.to_string(),
                "frame": {"x": fr.frame.x, "y": fr.frame.y, "w": fr.frame.w, "h": fr.frame.h},
            })
        })
        .collect();
    json!({
        "width": collage.width,
        "height": collage.height,
        "frames": frames,
        "meta": Meta::new(),
    })
}
