use collage_packer_core::{pack_layout, to_json};

#[test]
fn export_json_smoke() {
    let items = vec![("a".to_string(), 32, 16), ("b".to_string(), 10, 10)];
    let collage = pack_layout(items).expect("pack");

    let value = to_json(&collage);
    let obj = value.as_object().expect("object");
    assert!(obj.contains_key("width"));
    assert!(obj.contains_key("height"));
    assert!(obj.contains_key("meta"));

    let frames = obj.get("frames").and_then(|v| v.as_array()).expect("frames");
    assert_eq!(frames.len(), 2);
    for fr in frames {
        let fr = fr.as_object().expect("frame object");
        assert!(fr.contains_key("key"));
        let rect = fr.get("frame").and_then(|v| v.as_object()).expect("rect");
        for field in ["x", "y", "w", "h"] {
            assert!(rect.contains_key(field), "missing {}", field);
        }
    }

    let meta = obj.get("meta").and_then(|v| v.as_object()).expect("meta");
    assert_eq!(
        meta.get("app").and_then(|v| v.as_str()),
        Some("collage-packer")
    );
    assert_eq!(
        meta.get("schema_version").and_then(|v| v.as_str()),
        Some("1")
    );
}
