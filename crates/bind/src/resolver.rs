//! Descriptor resolution against a produced tree.

use std::collections::HashMap;

use graft_convert::ProducedNode;
use graft_element::CapabilityKind;
use graft_traits::{ResourceProvider, SharedResourceData};
use graft_types::NodeId;
use itertools::Itertools;
use log::debug;

use crate::descriptor::{BindingDescriptor, BindingTarget, Bindings};
use crate::error::BindingError;

/// What a resolved descriptor points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundValue {
    /// Id of the matched produced node.
    Node(NodeId),
    /// Bytes loaded through the resource provider.
    Resource(SharedResourceData),
}

/// Outcome of one [`bind`] run: the resolved slots plus every failure
/// in descriptor order. The caller decides whether errors are fatal.
#[derive(Debug, Default)]
pub struct BindingResult {
    bound: HashMap<String, BoundValue>,
    errors: Vec<BindingError>,
}

impl BindingResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[BindingError] {
        &self.errors
    }

    /// All resolved slots by descriptor name. Slots bound through a
    /// nested run appear as `outer.inner`.
    pub fn bound(&self) -> &HashMap<String, BoundValue> {
        &self.bound
    }

    pub fn get(&self, name: &str) -> Option<&BoundValue> {
        self.bound.get(name)
    }

    /// The matched node id for `name`, if the slot resolved to a node.
    pub fn node(&self, name: &str) -> Option<&NodeId> {
        match self.bound.get(name)? {
            BoundValue::Node(id) => Some(id),
            BoundValue::Resource(_) => None,
        }
    }

    /// The loaded bytes for `name`, if the slot resolved to a resource.
    pub fn resource(&self, name: &str) -> Option<&SharedResourceData> {
        match self.bound.get(name)? {
            BoundValue::Resource(data) => Some(data),
            BoundValue::Node(_) => None,
        }
    }

    fn bind_slot(&mut self, name: &str, value: BoundValue) {
        self.bound.insert(name.to_string(), value);
    }

    fn absorb(&mut self, prefix: &str, nested: BindingResult) {
        for (name, value) in nested.bound {
            self.bound.insert(format!("{prefix}.{name}"), value);
        }
        self.errors.extend(nested.errors);
    }
}

/// Resolves every descriptor in `bindings` against the tree rooted at
/// `root`.
///
/// Each descriptor queries the tree by its lookup key. A key matching
/// several nodes is a configuration error and leaves the slot unset; a
/// key matching nothing errors only when the descriptor is required.
/// Resource descriptors skip the tree and go straight to `resources`.
/// The run always completes; nothing here panics.
pub fn bind(
    root: &mut ProducedNode,
    bindings: &Bindings,
    resources: &dyn ResourceProvider,
) -> BindingResult {
    let mut result = BindingResult::default();
    for descriptor in bindings.iter() {
        resolve(root, descriptor, resources, &mut result);
    }
    result
}

fn resolve(
    root: &mut ProducedNode,
    descriptor: &BindingDescriptor,
    resources: &dyn ResourceProvider,
    result: &mut BindingResult,
) {
    match descriptor.target() {
        BindingTarget::Node => {
            if let Some(id) = locate(root, descriptor, result) {
                result.bind_slot(descriptor.name(), BoundValue::Node(id));
            }
        }
        BindingTarget::Capability { kind, nested } => {
            resolve_capability(root, descriptor, *kind, nested.as_ref(), resources, result);
        }
        BindingTarget::Resource { path, kind } => match resources.load(path, *kind) {
            Ok(data) => result.bind_slot(descriptor.name(), BoundValue::Resource(data)),
            Err(_) if descriptor.is_required() => {
                result.errors.push(BindingError::ResourceNotFound {
                    descriptor: descriptor.name().to_string(),
                    path: path.clone(),
                    kind: *kind,
                });
            }
            Err(_) => {}
        },
    }
}

/// Finds the single node matching the descriptor's key. Zero or many
/// matches push the appropriate error and yield `None`.
fn locate(
    root: &ProducedNode,
    descriptor: &BindingDescriptor,
    result: &mut BindingResult,
) -> Option<NodeId> {
    let key = descriptor.lookup_key();
    match root.find_all_by_binding_key(key).into_iter().exactly_one() {
        Ok(node) => Some(node.node_id.clone()),
        Err(others) => {
            let count = others.count();
            if count > 1 {
                result.errors.push(BindingError::DuplicateKey {
                    descriptor: descriptor.name().to_string(),
                    key: key.to_string(),
                    count,
                });
            } else if descriptor.is_required() {
                result.errors.push(BindingError::NodeNotFound {
                    descriptor: descriptor.name().to_string(),
                    key: key.to_string(),
                });
            }
            None
        }
    }
}

fn resolve_capability(
    root: &mut ProducedNode,
    descriptor: &BindingDescriptor,
    kind: CapabilityKind,
    nested: Option<&Bindings>,
    resources: &dyn ResourceProvider,
    result: &mut BindingResult,
) {
    let Some(id) = locate(root, descriptor, result) else {
        return;
    };
    let carries = root
        .find_by_id(&id)
        .is_some_and(|node| node.element.has(kind));

    if carries {
        result.bind_slot(descriptor.name(), BoundValue::Node(id));
        return;
    }

    // Capabilities are provisioned on descendants only; a bare root
    // match counts as missing.
    if id == root.node_id {
        if descriptor.is_required() {
            result.errors.push(BindingError::CapabilityMissing {
                descriptor: descriptor.name().to_string(),
                key: descriptor.lookup_key().to_string(),
                capability: kind,
            });
        }
        return;
    }

    if let Some(node) = root.find_by_binding_key_mut(descriptor.lookup_key()) {
        node.element.ensure(kind);
        debug!(
            "attached default {kind} capability to '{name}' while binding '{slot}'",
            name = node.node_name,
            slot = descriptor.name()
        );
        if let Some(nested) = nested {
            let nested_result = bind(node, nested, resources);
            result.absorb(descriptor.name(), nested_result);
        }
    }
    result.bind_slot(descriptor.name(), BoundValue::Node(id));
}
