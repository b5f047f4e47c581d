use serde_json::json;

use super::*;

fn make_image(id: &str, width: u32, height: u32) -> GalleryImage {
    GalleryImage {
        id: id.to_string(),
        src: format!("https://example.test/{id}.jpg"),
        width,
        height,
        sizes: BTreeMap::new(),
    }
}

// =============================================================
// GalleryImage serde
// =============================================================

#[test]
fn image_deserialize_minimal() {
    let image: GalleryImage = serde_json::from_value(json!({
        "id": "pm-1",
        "src": "https://example.test/pm-1.jpg",
        "width": 1600,
        "height": 900,
    }))
    .unwrap();
    assert_eq!(image.id, "pm-1");
    assert_eq!(image.width, 1600);
    assert_eq!(image.height, 900);
    assert!(image.sizes.is_empty());
}

#[test]
fn image_deserialize_with_sizes() {
    let image: GalleryImage = serde_json::from_value(json!({
        "id": "pm-2",
        "src": "https://example.test/pm-2.jpg",
        "width": 2048,
        "height": 1365,
        "sizes": {
            "thumbnail": { "url": "https://example.test/pm-2-150.jpg", "width": 150, "height": 100 },
            "large": { "url": "https://example.test/pm-2-1024.jpg", "width": 1024, "height": 683 },
        },
    }))
    .unwrap();
    assert_eq!(image.sizes.len(), 2);
    assert_eq!(image.sizes["thumbnail"].width, 150);
    assert_eq!(image.sizes["large"].url, "https://example.test/pm-2-1024.jpg");
}

#[test]
fn image_deserialize_ignores_unknown_fields() {
    let image: GalleryImage = serde_json::from_value(json!({
        "id": "pm-3",
        "src": "https://example.test/pm-3.jpg",
        "width": 800,
        "height": 600,
        "caption": "a caption the layout never reads",
    }))
    .unwrap();
    assert_eq!(image.id, "pm-3");
}

#[test]
fn image_serde_roundtrip() {
    let mut image = make_image("pm-4", 640, 480);
    image.sizes.insert(
        "medium".to_string(),
        SourceSize {
            url: "https://example.test/pm-4-300.jpg".to_string(),
            width: 300,
            height: 225,
        },
    );
    let json = serde_json::to_string(&image).unwrap();
    let back: GalleryImage = serde_json::from_str(&json).unwrap();
    assert_eq!(back, image);
}

#[test]
fn image_deserialize_missing_id_rejects() {
    let result = serde_json::from_value::<GalleryImage>(json!({
        "src": "https://example.test/x.jpg",
        "width": 10,
        "height": 10,
    }));
    assert!(result.is_err());
}

// =============================================================
// GalleryStore
// =============================================================

#[test]
fn store_starts_empty() {
    let store = GalleryStore::new();
    assert_eq!(store.len(), 0);
    assert!(store.is_empty());
}

#[test]
fn store_insert_and_get() {
    let mut store = GalleryStore::new();
    store.insert(make_image("a", 100, 50));
    assert_eq!(store.len(), 1);
    assert_eq!(store.get("a").unwrap().width, 100);
    assert!(store.get("b").is_none());
}

#[test]
fn store_insert_same_id_overwrites() {
    let mut store = GalleryStore::new();
    store.insert(make_image("a", 100, 50));
    store.insert(make_image("a", 200, 80));
    assert_eq!(store.len(), 1);
    assert_eq!(store.get("a").unwrap().width, 200);
}

#[test]
fn store_remove_returns_image() {
    let mut store = GalleryStore::new();
    store.insert(make_image("a", 100, 50));
    let removed = store.remove("a");
    assert_eq!(removed.unwrap().id, "a");
    assert!(store.is_empty());
}

#[test]
fn store_remove_missing_is_none() {
    let mut store = GalleryStore::new();
    assert!(store.remove("ghost").is_none());
}

#[test]
fn store_load_replaces_contents() {
    let mut store = GalleryStore::new();
    store.insert(make_image("old", 10, 10));
    store.load(vec![make_image("a", 100, 50), make_image("b", 100, 75)]);
    assert_eq!(store.len(), 2);
    assert!(store.get("old").is_none());
    assert!(store.get("a").is_some());
    assert!(store.get("b").is_some());
}

#[test]
fn store_default_is_empty() {
    let store = GalleryStore::default();
    assert!(store.is_empty());
}
