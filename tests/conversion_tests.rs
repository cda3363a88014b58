//! End-to-end conversion: a JSON document in, an element tree out.

mod common;

use common::fixtures::{document, frame, rectangle, text, with};
use common::tree_assertions::node_names;
use common::{TestResult, import_value};
use graft::element::Anchors;
use graft::traits::IdSpriteGenerator;
use graft::{
    ConverterRegistry, DocumentImporter, InMemoryResourceProvider, NodeKind, Severity, Vec2,
};
use serde_json::json;

#[test]
fn test_tree_shape_follows_the_document() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let doc = document(vec![frame(
        "1:0",
        "Screen",
        vec![
            rectangle("1:1", "Background", 100.0, 100.0),
            frame("1:2", "Header", vec![text("1:3", "Title", "Checkout")]),
            rectangle("1:4", "Divider", 100.0, 2.0),
        ],
    )]);

    let imported = import_value(&doc)?;
    assert_clean_import!(imported);

    assert_eq!(imported.pages.len(), 1);
    let page = &imported.pages[0];
    assert_eq!(page.name, "Page 1");
    assert_eq!(page.children.len(), 1);

    let screen = &page.children[0];
    assert_eq!(screen.node_type, NodeKind::Frame);
    assert_eq!(
        node_names(screen),
        ["Screen", "Background", "Header", "Title", "Divider"]
    );
    assert_eq!(page.node_count(), 5);
    Ok(())
}

#[test]
fn test_page_children_are_unanchored() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let doc = document(vec![frame(
        "2:0",
        "Screen",
        vec![rectangle("2:1", "Background", 100.0, 100.0)],
    )]);

    let imported = import_value(&doc)?;
    let screen = &imported.pages[0].children[0];
    assert!(screen.element.anchors.is_none());

    // Default constraints pin nested children to the top-left corner.
    let background = &screen.children[0];
    assert_eq!(background.element.anchors, Some(Anchors::point(0.0, 0.0)));
    Ok(())
}

#[test]
fn test_constraints_pin_anchors() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let pinned = with(
        rectangle("3:1", "Footer", 40.0, 24.0),
        "constraints",
        json!({ "horizontal": "LEFT_RIGHT", "vertical": "BOTTOM" }),
    );
    let doc = document(vec![frame("3:0", "Card", vec![pinned])]);

    let imported = import_value(&doc)?;
    let card = &imported.pages[0].children[0];
    let anchors = card.children[0].element.anchors.ok_or("anchors missing")?;
    assert_eq!(anchors.min, Vec2::new(0.0, 1.0));
    assert_eq!(anchors.max, Vec2::new(1.0, 1.0));
    Ok(())
}

#[test]
fn test_hidden_nodes_stay_in_the_tree_inactive() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let ghost = with(
        rectangle("4:1", "Ghost", 10.0, 10.0),
        "visible",
        json!(false),
    );
    let doc = document(vec![frame("4:0", "Card", vec![ghost])]);

    let imported = import_value(&doc)?;
    let card = &imported.pages[0].children[0];
    assert_eq!(card.children.len(), 1);
    assert!(!card.children[0].element.active);
    assert!(card.element.active);
    Ok(())
}

#[test]
fn test_plugin_keys_override_names_for_lookup() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let keyed = with(
        text("5:2", "Title", "Hello"),
        "pluginData",
        json!({ "bindingKey": "@Heading" }),
    );
    let doc = document(vec![frame("5:0", "Card", vec![keyed])]);

    let imported = import_value(&doc)?;
    let page = &imported.pages[0];
    let found = page.find_by_binding_key("@Heading").ok_or("key missing")?;
    assert_eq!(found.node_id.as_str(), "5:2");

    // The authored key replaces the name for lookup purposes.
    assert!(page.find_by_binding_key("Title").is_none());
    Ok(())
}

#[test]
fn test_unregistered_kinds_skip_with_a_warning() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let doc = document(vec![frame(
        "6:0",
        "Card",
        vec![
            text("6:1", "Label", "Hi"),
            rectangle("6:2", "Fill", 4.0, 4.0),
        ],
    )]);

    let mut registry = ConverterRegistry::standard();
    registry.unregister(NodeKind::Text);
    let sprites = IdSpriteGenerator;
    let resources = InMemoryResourceProvider::new();
    let importer = DocumentImporter::new(&sprites, &resources).with_registry(registry);
    let imported = importer.import_json(&doc.to_string())?;

    assert_diagnostic!(imported, Severity::Warning, "no converter registered");
    let card = &imported.pages[0].children[0];
    assert_eq!(node_names(card), ["Card", "Fill"]);
    Ok(())
}

#[test]
fn test_text_carries_characters_and_typography() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let doc = document(vec![frame(
        "7:0",
        "Card",
        vec![text("7:1", "Title", "Checkout")],
    )]);

    let imported = import_value(&doc)?;
    let card = &imported.pages[0].children[0];
    let title = card.children[0].element.text.as_ref().ok_or("no text")?;
    assert_eq!(title.text, "Checkout");
    assert_eq!(title.font_family.as_deref(), Some("Inter"));
    assert_eq!(title.font_size, 16.0);
    Ok(())
}

#[test]
fn test_groups_pass_children_through_without_layout() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let group = json!({
        "type": "GROUP",
        "id": "8:1",
        "name": "Badge",
        "size": { "width": 32.0, "height": 32.0 },
        "children": [rectangle("8:2", "Dot", 8.0, 8.0)]
    });
    let doc = document(vec![frame("8:0", "Card", vec![group])]);

    let imported = import_value(&doc)?;
    assert_clean_import!(imported);

    let badge = &imported.pages[0].children[0].children[0];
    assert_eq!(badge.node_type, NodeKind::Group);
    assert_eq!(badge.children.len(), 1);
    assert!(badge.element.stack.is_none());
    assert!(badge.element.mask.is_none());
    Ok(())
}

#[test]
fn test_serialized_trees_use_camel_case_keys() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let doc = document(vec![frame(
        "9:0",
        "Card",
        vec![rectangle("9:1", "Fill", 10.0, 10.0)],
    )]);

    let imported = import_value(&doc)?;
    let serialized = serde_json::to_value(&imported.pages[0])?;

    let card = &serialized["children"][0];
    assert_eq!(card["nodeName"], "Card");
    assert_eq!(card["bindingKey"], "Card");
    assert_eq!(card["nodeType"], "FRAME");
    assert!(card["children"][0]["element"].is_object());
    Ok(())
}
