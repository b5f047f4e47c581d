#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

// =============================================================
// Sizing serde
// =============================================================

#[test]
fn sizing_deserialize_auto_string() {
    let sizing: Sizing = serde_json::from_value(json!("auto")).unwrap();
    assert_eq!(sizing, Sizing::Auto);
}

#[test]
fn sizing_deserialize_zero_is_auto() {
    let sizing: Sizing = serde_json::from_value(json!(0)).unwrap();
    assert_eq!(sizing, Sizing::Auto);
}

#[test]
fn sizing_deserialize_pixels() {
    let sizing: Sizing = serde_json::from_value(json!(640)).unwrap();
    assert_eq!(sizing, Sizing::Px(640));
}

#[test]
fn sizing_deserialize_percent() {
    let sizing: Sizing = serde_json::from_value(json!("50%")).unwrap();
    assert_eq!(sizing, Sizing::Percent(0.5));
}

#[test]
fn sizing_deserialize_percent_decimal() {
    let sizing: Sizing = serde_json::from_value(json!("33.3%")).unwrap();
    let Sizing::Percent(fraction) = sizing else {
        panic!("expected percent, got {sizing:?}");
    };
    assert!((fraction - 0.333).abs() < 1e-9);
}

#[test]
fn sizing_deserialize_negative_rejects() {
    assert!(serde_json::from_value::<Sizing>(json!(-5)).is_err());
}

#[test]
fn sizing_deserialize_garbage_string_rejects() {
    assert!(serde_json::from_value::<Sizing>(json!("wide")).is_err());
    assert!(serde_json::from_value::<Sizing>(json!("%")).is_err());
}

#[test]
fn sizing_deserialize_wrong_type_rejects() {
    assert!(serde_json::from_value::<Sizing>(json!(true)).is_err());
    assert!(serde_json::from_value::<Sizing>(json!([640])).is_err());
}

#[test]
fn sizing_serialize_auto() {
    assert_eq!(serde_json::to_value(Sizing::Auto).unwrap(), json!("auto"));
}

#[test]
fn sizing_serialize_pixels() {
    assert_eq!(serde_json::to_value(Sizing::Px(300)).unwrap(), json!(300));
}

#[test]
fn sizing_serialize_percent() {
    assert_eq!(serde_json::to_value(Sizing::Percent(0.5)).unwrap(), json!("50%"));
}

// =============================================================
// ColumnCount serde
// =============================================================

#[test]
fn columns_deserialize_auto() {
    let count: ColumnCount = serde_json::from_value(json!("auto")).unwrap();
    assert_eq!(count, ColumnCount::Auto);
    let count: ColumnCount = serde_json::from_value(json!(0)).unwrap();
    assert_eq!(count, ColumnCount::Auto);
}

#[test]
fn columns_deserialize_fixed() {
    let count: ColumnCount = serde_json::from_value(json!(4)).unwrap();
    assert_eq!(count, ColumnCount::Fixed(4));
}

#[test]
fn columns_deserialize_invalid_rejects() {
    assert!(serde_json::from_value::<ColumnCount>(json!("many")).is_err());
    assert!(serde_json::from_value::<ColumnCount>(json!(-2)).is_err());
}

#[test]
fn columns_serialize_roundtrip() {
    for count in [ColumnCount::Auto, ColumnCount::Fixed(3)] {
        let json = serde_json::to_value(count).unwrap();
        let back: ColumnCount = serde_json::from_value(json).unwrap();
        assert_eq!(back, count);
    }
}

// =============================================================
// Order / LayoutMode serde
// =============================================================

#[test]
fn order_serde_lowercase() {
    assert_eq!(serde_json::to_string(&Order::Gallery).unwrap(), "\"gallery\"");
    assert_eq!(serde_json::to_string(&Order::Random).unwrap(), "\"random\"");
    let back: Order = serde_json::from_str("\"random\"").unwrap();
    assert_eq!(back, Order::Random);
}

#[test]
fn order_default_is_gallery() {
    assert_eq!(Order::default(), Order::Gallery);
}

#[test]
fn layout_mode_serde_lowercase() {
    assert_eq!(serde_json::to_string(&LayoutMode::Columns).unwrap(), "\"columns\"");
    let back: LayoutMode = serde_json::from_str("\"columns\"").unwrap();
    assert_eq!(back, LayoutMode::Columns);
}

// =============================================================
// Options defaults and deserialization
// =============================================================

#[test]
fn options_defaults() {
    let options = Options::default();
    assert_eq!(options.layout, LayoutMode::Columns);
    assert_eq!(options.width, Sizing::Auto);
    assert_eq!(options.height, Sizing::Auto);
    assert_eq!(options.columns, ColumnCount::Auto);
    assert!(options.breakpoints.is_empty());
    assert_eq!(options.padding, 2);
    assert!(!options.prevent_crop);
    assert_eq!(options.order, Order::Gallery);
    assert!(!options.honor_device_pixel_ratio);
}

#[test]
fn options_deserialize_empty_object_is_default() {
    let options: Options = serde_json::from_str("{}").unwrap();
    assert_eq!(options, Options::default());
}

#[test]
fn options_deserialize_full() {
    let options: Options = serde_json::from_value(json!({
        "width": "80%",
        "height": 600,
        "columns": 5,
        "breakpoints": [ { "max_width": 480, "columns": 2 } ],
        "padding": 8,
        "prevent_crop": true,
        "order": "random",
        "honor_device_pixel_ratio": true,
    }))
    .unwrap();
    assert_eq!(options.width, Sizing::Percent(0.8));
    assert_eq!(options.height, Sizing::Px(600));
    assert_eq!(options.columns, ColumnCount::Fixed(5));
    assert_eq!(options.breakpoints, vec![Breakpoint { max_width: 480, columns: 2 }]);
    assert_eq!(options.padding, 8);
    assert!(options.prevent_crop);
    assert_eq!(options.order, Order::Random);
    assert!(options.honor_device_pixel_ratio);
}

// =============================================================
// PartialOptions
// =============================================================

#[test]
fn partial_deserialize_only_present_fields() {
    let partial: PartialOptions = serde_json::from_value(json!({
        "order": "random",
        "padding": 4,
    }))
    .unwrap();
    assert_eq!(partial.order, Some(Order::Random));
    assert_eq!(partial.padding, Some(4));
    assert!(partial.width.is_none());
    assert!(partial.prevent_crop.is_none());
    assert!(partial.breakpoints.is_none());
}

#[test]
fn partial_serialize_skips_absent_fields() {
    let partial = PartialOptions {
        width: Some(Sizing::Px(900)),
        ..Default::default()
    };
    let json = serde_json::to_value(&partial).unwrap();
    assert_eq!(json, json!({ "width": 900 }));
}

#[test]
fn partial_default_is_all_none() {
    assert_eq!(PartialOptions::default(), PartialOptions {
        layout: None,
        width: None,
        height: None,
        columns: None,
        breakpoints: None,
        padding: None,
        prevent_crop: None,
        order: None,
        honor_device_pixel_ratio: None,
    });
}

// =============================================================
// Viewport
// =============================================================

#[test]
fn viewport_default() {
    let viewport = Viewport::default();
    assert_eq!(viewport.container_width, 0.0);
    assert_eq!(viewport.dpr, 1.0);
}
