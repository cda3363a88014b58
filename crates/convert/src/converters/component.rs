//! Component and component-set conversion.
//!
//! Both convert exactly like frames. Their extra duty is registering
//! ids with the context so instances converted later in the document
//! can resolve their main-component linkage.

use graft_scene::{NodeKind, SceneNode};

use crate::context::ConvertContext;
use crate::converters::frame::convert_frame;
use crate::dispatcher::{Dispatcher, NodeConverter};
use crate::error::ConvertError;
use crate::tree::ProducedNode;

pub struct ComponentConverter;

impl NodeConverter for ComponentConverter {
    fn convert(
        &self,
        node: &SceneNode,
        parent: Option<&ProducedNode>,
        ctx: &mut ConvertContext<'_>,
        dispatcher: &Dispatcher,
    ) -> Result<ProducedNode, ConvertError> {
        let SceneNode::Component(frame) = node else {
            return Err(ConvertError::WrongKind {
                converter: "component converter",
                kind: node.kind(),
                node_id: node.id().clone(),
            });
        };

        ctx.register_component(&frame.base.id, None);
        convert_frame(node, frame, parent, ctx, dispatcher)
    }
}

pub struct ComponentSetConverter;

impl NodeConverter for ComponentSetConverter {
    fn convert(
        &self,
        node: &SceneNode,
        parent: Option<&ProducedNode>,
        ctx: &mut ConvertContext<'_>,
        dispatcher: &Dispatcher,
    ) -> Result<ProducedNode, ConvertError> {
        let SceneNode::ComponentSet(frame) = node else {
            return Err(ConvertError::WrongKind {
                converter: "component set converter",
                kind: node.kind(),
                node_id: node.id().clone(),
            });
        };

        // Register the set and its variants before any child converts,
        // so instances inside the set already resolve.
        ctx.register_component_set(&frame.base.id);
        for child in &frame.children {
            if child.kind() == NodeKind::Component {
                ctx.register_component(child.id(), Some(&frame.base.id));
            }
        }

        convert_frame(node, frame, parent, ctx, dispatcher)
    }
}
