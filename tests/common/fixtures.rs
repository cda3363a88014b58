//! JSON document builders shared by the integration tests.
//!
//! Field names follow the editor export format the scene crate
//! deserializes, so every fixture runs through the real parser.

use serde_json::{Value, json};

/// A single-page document wrapping the given top-level nodes.
pub fn document(children: Vec<Value>) -> Value {
    json!({
        "id": "0:0",
        "name": "Design",
        "pages": [page("0:1", "Page 1", children)]
    })
}

/// A document with explicit pages, for cross-page scenarios.
pub fn document_with_pages(pages: Vec<Value>) -> Value {
    json!({ "id": "0:0", "name": "Design", "pages": pages })
}

pub fn page(id: &str, name: &str, children: Vec<Value>) -> Value {
    json!({ "id": id, "name": name, "children": children })
}

/// A plain fixed-size frame with no fills and no auto-layout.
pub fn frame(id: &str, name: &str, children: Vec<Value>) -> Value {
    json!({
        "type": "FRAME",
        "id": id,
        "name": name,
        "size": { "width": 100.0, "height": 100.0 },
        "children": children
    })
}

/// A horizontal auto-layout frame: centered main axis, children pushed
/// to the bottom edge.
pub fn row(id: &str, name: &str, children: Vec<Value>) -> Value {
    json!({
        "type": "FRAME",
        "id": id,
        "name": name,
        "size": { "width": 240.0, "height": 60.0 },
        "layoutMode": "HORIZONTAL",
        "primaryAxisAlignItems": "CENTER",
        "counterAxisAlignItems": "MAX",
        "itemSpacing": 8.0,
        "paddingLeft": 12.0,
        "paddingRight": 12.0,
        "paddingTop": 4.0,
        "paddingBottom": 4.0,
        "children": children
    })
}

/// A leaf rectangle with one visible solid fill.
pub fn rectangle(id: &str, name: &str, width: f64, height: f64) -> Value {
    json!({
        "type": "RECTANGLE",
        "id": id,
        "name": name,
        "size": { "width": width, "height": height },
        "fills": [solid_fill(0.2, 0.4, 0.8, true)]
    })
}

pub fn text(id: &str, name: &str, characters: &str) -> Value {
    json!({
        "type": "TEXT",
        "id": id,
        "name": name,
        "size": { "width": 120.0, "height": 20.0 },
        "characters": characters,
        "fills": [solid_fill(0.1, 0.1, 0.1, true)],
        "style": { "fontFamily": "Inter", "fontSize": 16.0 }
    })
}

pub fn instance(id: &str, name: &str, component_id: &str) -> Value {
    json!({
        "type": "INSTANCE",
        "id": id,
        "name": name,
        "size": { "width": 80.0, "height": 32.0 },
        "componentId": component_id,
        "children": []
    })
}

pub fn component(id: &str, name: &str, children: Vec<Value>) -> Value {
    json!({
        "type": "COMPONENT",
        "id": id,
        "name": name,
        "size": { "width": 80.0, "height": 32.0 },
        "children": children
    })
}

pub fn component_set(id: &str, name: &str, variants: Vec<Value>) -> Value {
    json!({
        "type": "COMPONENT_SET",
        "id": id,
        "name": name,
        "size": { "width": 200.0, "height": 40.0 },
        "children": variants
    })
}

pub fn solid_fill(r: f64, g: f64, b: f64, visible: bool) -> Value {
    json!({
        "type": "SOLID",
        "visible": visible,
        "color": { "r": r, "g": g, "b": b }
    })
}

pub fn image_fill(image_ref: &str, scale_mode: &str) -> Value {
    json!({
        "type": "IMAGE",
        "visible": true,
        "scaleMode": scale_mode,
        "imageRef": image_ref
    })
}

pub fn drop_shadow(radius: f64) -> Value {
    json!({
        "type": "DROP_SHADOW",
        "visible": true,
        "radius": radius,
        "color": { "r": 0.0, "g": 0.0, "b": 0.0, "a": 0.4 },
        "offset": { "x": 0.0, "y": 2.0 }
    })
}

pub fn layer_blur(radius: f64) -> Value {
    json!({ "type": "LAYER_BLUR", "visible": true, "radius": radius })
}

/// One layout grid track in export form.
pub fn grid_track(pattern: &str, count: u32, gutter: f64, offset: f64) -> Value {
    json!({
        "pattern": pattern,
        "count": count,
        "gutterSize": gutter,
        "offset": offset,
        "visible": true
    })
}

/// Sets (or replaces) one field on a node fixture.
pub fn with(mut node: Value, key: &str, value: Value) -> Value {
    if let Some(object) = node.as_object_mut() {
        object.insert(key.to_string(), value);
    }
    node
}
