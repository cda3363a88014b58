//! Declarative binding descriptors.
//!
//! Downstream code states up front which produced nodes it needs and
//! which external resources back them, then hands the whole set to
//! [`bind`](crate::bind) for one-pass resolution. The set is built
//! once per bindable type, at construction.

use graft_element::CapabilityKind;
use graft_traits::ResourceKind;

/// What a descriptor resolves to.
#[derive(Debug, Clone)]
pub enum BindingTarget {
    /// The matched produced node itself.
    Node,
    /// A capability on the matched node. A node lacking it gets a
    /// default-valued one attached, unless the match is the query root,
    /// which is reported as missing instead.
    Capability {
        kind: CapabilityKind,
        nested: Option<Bindings>,
    },
    /// Bytes loaded through the resource provider rather than the tree.
    Resource { path: String, kind: ResourceKind },
}

/// One named slot to resolve. Descriptors are required by default and
/// query the tree by their own name unless a key overrides it.
#[derive(Debug, Clone)]
pub struct BindingDescriptor {
    name: String,
    key: Option<String>,
    required: bool,
    target: BindingTarget,
}

impl BindingDescriptor {
    /// A descriptor resolving to the produced node itself.
    pub fn node(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: None,
            required: true,
            target: BindingTarget::Node,
        }
    }

    /// A descriptor resolving to a capability carried by the node.
    pub fn capability(name: impl Into<String>, kind: CapabilityKind) -> Self {
        Self {
            name: name.into(),
            key: None,
            required: true,
            target: BindingTarget::Capability { kind, nested: None },
        }
    }

    /// A descriptor loading bytes from the resource provider.
    pub fn resource(name: impl Into<String>, path: impl Into<String>, kind: ResourceKind) -> Self {
        Self {
            name: name.into(),
            key: None,
            required: true,
            target: BindingTarget::Resource {
                path: path.into(),
                kind,
            },
        }
    }

    /// Overrides the lookup key the tree is queried with.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Marks the descriptor optional: an unresolved slot is left unset
    /// instead of producing an error.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Bindings resolved against the matched node right after a
    /// capability is attached to it. Only capability descriptors carry
    /// nested bindings; on other targets this is a no-op.
    pub fn nested(mut self, bindings: Bindings) -> Self {
        if let BindingTarget::Capability { nested, .. } = &mut self.target {
            *nested = Some(bindings);
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The key the tree is queried with: the explicit key when set,
    /// the descriptor name otherwise.
    pub fn lookup_key(&self) -> &str {
        self.key.as_deref().unwrap_or(&self.name)
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn target(&self) -> &BindingTarget {
        &self.target
    }
}

/// An ordered descriptor set.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    descriptors: Vec<BindingDescriptor>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, descriptor: BindingDescriptor) -> Self {
        self.descriptors.push(descriptor);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &BindingDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_key_defaults_to_the_name() {
        let descriptor = BindingDescriptor::node("header");
        assert_eq!(descriptor.lookup_key(), "header");
        assert!(descriptor.is_required());

        let descriptor = BindingDescriptor::node("header").key("@HeaderBar").optional();
        assert_eq!(descriptor.lookup_key(), "@HeaderBar");
        assert_eq!(descriptor.name(), "header");
        assert!(!descriptor.is_required());
    }

    #[test]
    fn nested_bindings_attach_to_capability_targets_only() {
        let nested = Bindings::new().with(BindingDescriptor::node("icon"));
        let descriptor =
            BindingDescriptor::capability("button", CapabilityKind::Image).nested(nested.clone());
        match descriptor.target() {
            BindingTarget::Capability { nested, .. } => {
                assert_eq!(nested.as_ref().map(Bindings::len), Some(1));
            }
            other => panic!("expected a capability target, got {other:?}"),
        }

        let descriptor = BindingDescriptor::node("plain").nested(nested);
        assert!(matches!(descriptor.target(), BindingTarget::Node));
    }

    #[test]
    fn bindings_preserve_declaration_order() {
        let bindings = Bindings::new()
            .with(BindingDescriptor::node("first"))
            .with(BindingDescriptor::resource(
                "second",
                "fonts/body.ttf",
                ResourceKind::Font,
            ));
        let names: Vec<_> = bindings.iter().map(BindingDescriptor::name).collect();
        assert_eq!(names, ["first", "second"]);
        assert_eq!(bindings.len(), 2);
        assert!(!bindings.is_empty());
    }
}
