//! Converter registry and the dispatcher that drives the recursion.

use std::collections::HashMap;

use graft_scene::{NodeKind, SceneNode};

use crate::context::ConvertContext;
use crate::converters::{
    ComponentConverter, ComponentSetConverter, FrameConverter, GroupConverter, InstanceConverter,
    TextConverter, VectorConverter,
};
use crate::error::ConvertError;
use crate::tree::ProducedNode;

/// Converts one kind of scene node into a produced node.
///
/// A converter only ever builds its own node; it recurses into
/// children through the dispatcher it is handed, so a tree of mixed
/// kinds flows through whatever converters are registered.
pub trait NodeConverter: Send + Sync {
    fn convert(
        &self,
        node: &SceneNode,
        parent: Option<&ProducedNode>,
        ctx: &mut ConvertContext<'_>,
        dispatcher: &Dispatcher,
    ) -> Result<ProducedNode, ConvertError>;
}

/// Maps node kinds to their converters. Lookup is by exact kind; there
/// is no fallback between related kinds, so an unregistered kind is
/// skipped even when a sibling kind could have handled it.
pub struct ConverterRegistry {
    converters: HashMap<NodeKind, Box<dyn NodeConverter>>,
}

impl ConverterRegistry {
    /// A registry with nothing in it. Useful for hosts that replace
    /// the whole converter set.
    pub fn empty() -> Self {
        Self {
            converters: HashMap::new(),
        }
    }

    /// The full standard set covering every node kind the engine
    /// understands.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.register(NodeKind::Frame, FrameConverter);
        registry.register(NodeKind::Group, GroupConverter);
        registry.register(NodeKind::Component, ComponentConverter);
        registry.register(NodeKind::ComponentSet, ComponentSetConverter);
        registry.register(NodeKind::Instance, InstanceConverter);
        for kind in [
            NodeKind::Rectangle,
            NodeKind::Ellipse,
            NodeKind::Line,
            NodeKind::Polygon,
            NodeKind::Star,
            NodeKind::Vector,
        ] {
            registry.register(kind, VectorConverter);
        }
        registry.register(NodeKind::Text, TextConverter);
        registry
    }

    /// Registers `converter` for `kind`, replacing any previous entry.
    pub fn register(&mut self, kind: NodeKind, converter: impl NodeConverter + 'static) {
        self.converters.insert(kind, Box::new(converter));
    }

    /// Removes the converter for `kind`. Nodes of that kind are then
    /// skipped with a warning.
    pub fn unregister(&mut self, kind: NodeKind) -> bool {
        self.converters.remove(&kind).is_some()
    }

    pub fn get(&self, kind: NodeKind) -> Option<&dyn NodeConverter> {
        self.converters.get(&kind).map(Box::as_ref)
    }

    pub fn contains(&self, kind: NodeKind) -> bool {
        self.converters.contains_key(&kind)
    }
}

/// Walks a scene tree, routing every node to its registered converter.
///
/// The dispatcher never fails: an unconvertible node is reported to
/// the context's diagnostics and its subtree dropped, while the rest
/// of the run carries on.
pub struct Dispatcher {
    registry: ConverterRegistry,
}

impl Dispatcher {
    pub fn new(registry: ConverterRegistry) -> Self {
        Self { registry }
    }

    /// A dispatcher over the standard converter set.
    pub fn standard() -> Self {
        Self::new(ConverterRegistry::standard())
    }

    /// Converts one node and, through its converter, the subtree under
    /// it. `parent` is the already-converted parent, or `None` at the
    /// top of a page where nothing positions the node.
    pub fn convert(
        &self,
        parent: Option<&ProducedNode>,
        node: &SceneNode,
        ctx: &mut ConvertContext<'_>,
    ) -> Option<ProducedNode> {
        let kind = node.kind();
        let Some(converter) = self.registry.get(kind) else {
            ctx.diagnostics.warn(
                Some(node.id()),
                format!(
                    "no converter registered for {kind} nodes; skipping '{}'",
                    node.name()
                ),
            );
            return None;
        };

        match converter.convert(node, parent, ctx, self) {
            Ok(produced) => Some(produced),
            Err(error) => {
                ctx.diagnostics.error(
                    Some(node.id()),
                    format!("failed to convert '{}': {error}", node.name()),
                );
                None
            }
        }
    }

    pub fn registry(&self) -> &ConverterRegistry {
        &self.registry
    }
}
