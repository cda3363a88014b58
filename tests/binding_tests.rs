//! Binding resolution against imported trees.

mod common;

use common::fixtures::{document, frame, rectangle, text, with};
use common::{TestResult, import_value};
use graft::{
    BindingDescriptor, BindingError, Bindings, CapabilityKind, InMemoryResourceProvider, NodeId,
    ResourceKind, bind,
};
use serde_json::{Value, json};

fn dialog() -> Value {
    document(vec![frame(
        "1:0",
        "Dialog",
        vec![
            frame("1:1", "Header", vec![text("1:2", "Title", "Settings")]),
            rectangle("1:3", "Icon", 16.0, 16.0),
        ],
    )])
}

#[test]
fn test_unmatched_required_slots_yield_one_error_each() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut imported = import_value(&dialog())?;
    let root = &mut imported.pages[0].children[0];

    let bindings = Bindings::new()
        .with(BindingDescriptor::node("Title"))
        .with(BindingDescriptor::node("Subtitle"));
    let resources = InMemoryResourceProvider::new();
    let result = bind(root, &bindings, &resources);

    assert!(result.has_errors());
    assert_eq!(result.errors().len(), 1);
    assert!(matches!(
        &result.errors()[0],
        BindingError::NodeNotFound { descriptor, .. } if descriptor == "Subtitle"
    ));

    // The matched slot still resolves.
    assert_eq!(result.node("Title").map(NodeId::as_str), Some("1:2"));
    Ok(())
}

#[test]
fn test_optional_misses_stay_silent() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut imported = import_value(&dialog())?;
    let root = &mut imported.pages[0].children[0];

    let bindings = Bindings::new().with(BindingDescriptor::node("Subtitle").optional());
    let resources = InMemoryResourceProvider::new();
    let result = bind(root, &bindings, &resources);

    assert!(!result.has_errors());
    assert!(result.node("Subtitle").is_none());
    Ok(())
}

#[test]
fn test_present_capabilities_bind_in_place() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut imported = import_value(&dialog())?;
    let root = &mut imported.pages[0].children[0];

    let bindings = Bindings::new().with(BindingDescriptor::capability(
        "Title",
        CapabilityKind::Text,
    ));
    let resources = InMemoryResourceProvider::new();
    let result = bind(root, &bindings, &resources);

    assert!(!result.has_errors());
    assert_eq!(result.node("Title").map(NodeId::as_str), Some("1:2"));
    Ok(())
}

#[test]
fn test_missing_capabilities_are_provisioned_on_children() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut imported = import_value(&dialog())?;
    let root = &mut imported.pages[0].children[0];
    let header = root.find_by_binding_key("Header").ok_or("no header")?;
    assert!(header.element.opacity.is_none());

    let bindings = Bindings::new().with(BindingDescriptor::capability(
        "Header",
        CapabilityKind::Opacity,
    ));
    let resources = InMemoryResourceProvider::new();
    let result = bind(root, &bindings, &resources);

    assert!(!result.has_errors());
    assert_eq!(result.node("Header").map(NodeId::as_str), Some("1:1"));

    let header = root.find_by_binding_key("Header").ok_or("no header")?;
    assert!(header.element.opacity.is_some());
    Ok(())
}

#[test]
fn test_root_matches_are_never_provisioned() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut imported = import_value(&dialog())?;
    let root = &mut imported.pages[0].children[0];

    let bindings = Bindings::new().with(BindingDescriptor::capability(
        "Dialog",
        CapabilityKind::Opacity,
    ));
    let resources = InMemoryResourceProvider::new();
    let result = bind(root, &bindings, &resources);

    assert_eq!(result.errors().len(), 1);
    assert!(matches!(
        result.errors()[0],
        BindingError::CapabilityMissing {
            capability: CapabilityKind::Opacity,
            ..
        }
    ));
    assert!(root.element.opacity.is_none());
    Ok(())
}

#[test]
fn test_duplicate_keys_fail_even_optional_slots() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let doc = document(vec![frame(
        "2:0",
        "Dialog",
        vec![
            rectangle("2:1", "Icon", 8.0, 8.0),
            rectangle("2:2", "Icon", 8.0, 8.0),
        ],
    )]);
    let mut imported = import_value(&doc)?;
    let root = &mut imported.pages[0].children[0];

    let bindings = Bindings::new().with(BindingDescriptor::node("Icon").optional());
    let resources = InMemoryResourceProvider::new();
    let result = bind(root, &bindings, &resources);

    assert_eq!(result.errors().len(), 1);
    assert!(matches!(
        &result.errors()[0],
        BindingError::DuplicateKey { key, count: 2, .. } if key == "Icon"
    ));
    Ok(())
}

#[test]
fn test_nested_bindings_live_inside_their_slot() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut imported = import_value(&dialog())?;
    let root = &mut imported.pages[0].children[0];

    let bindings = Bindings::new().with(
        BindingDescriptor::capability("Header", CapabilityKind::Opacity)
            .nested(Bindings::new().with(BindingDescriptor::node("Title"))),
    );
    let resources = InMemoryResourceProvider::new();
    let result = bind(root, &bindings, &resources);

    assert!(!result.has_errors());
    assert_eq!(result.node("Header").map(NodeId::as_str), Some("1:1"));
    assert_eq!(result.node("Header.Title").map(NodeId::as_str), Some("1:2"));
    Ok(())
}

#[test]
fn test_nested_bindings_skip_already_provisioned_slots() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut imported = import_value(&dialog())?;
    let root = &mut imported.pages[0].children[0];

    // Title already carries text, so the slot binds without the
    // provisioning pass and the nested query never runs.
    let bindings = Bindings::new().with(
        BindingDescriptor::capability("Title", CapabilityKind::Text)
            .nested(Bindings::new().with(BindingDescriptor::node("Icon"))),
    );
    let resources = InMemoryResourceProvider::new();
    let result = bind(root, &bindings, &resources);

    assert!(!result.has_errors());
    assert!(result.node("Title").is_some());
    assert!(result.node("Title.Icon").is_none());
    Ok(())
}

#[test]
fn test_resource_slots_load_bytes() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut imported = import_value(&dialog())?;
    let root = &mut imported.pages[0].children[0];

    let resources = InMemoryResourceProvider::new();
    resources.add("fonts/Inter.ttf", ResourceKind::Font, vec![0xF0, 0x0D])?;

    let bindings = Bindings::new()
        .with(BindingDescriptor::resource(
            "Body",
            "fonts/Inter.ttf",
            ResourceKind::Font,
        ))
        .with(
            BindingDescriptor::resource("Fallback", "fonts/missing.ttf", ResourceKind::Font)
                .optional(),
        );
    let result = bind(root, &bindings, &resources);

    assert!(!result.has_errors());
    assert_eq!(
        result.resource("Body").ok_or("no body")?.as_ref(),
        &vec![0xF0, 0x0D]
    );
    assert!(result.resource("Fallback").is_none());
    Ok(())
}

#[test]
fn test_explicit_keys_release_the_descriptor_name() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let keyed = with(
        text("3:2", "Title", "Hello"),
        "pluginData",
        json!({ "bindingKey": "@Heading" }),
    );
    let doc = document(vec![frame("3:0", "Dialog", vec![keyed])]);
    let mut imported = import_value(&doc)?;
    let root = &mut imported.pages[0].children[0];

    let bindings = Bindings::new().with(BindingDescriptor::node("Heading").key("@Heading"));
    let resources = InMemoryResourceProvider::new();
    let result = bind(root, &bindings, &resources);

    assert!(!result.has_errors());
    assert_eq!(result.node("Heading").map(NodeId::as_str), Some("3:2"));
    Ok(())
}
