//! Leaf shape conversion.
//!
//! One converter serves every shape kind: the payload is identical
//! across them, and the kind only influences how the rasterized image
//! maps onto the element.

use graft_layout::anchors_for;
use graft_scene::{NodeKind, SceneNode};

use crate::context::ConvertContext;
use crate::dispatcher::{Dispatcher, NodeConverter};
use crate::error::ConvertError;
use crate::styles;
use crate::tree::ProducedNode;

const SHAPE_KINDS: [NodeKind; 6] = [
    NodeKind::Rectangle,
    NodeKind::Ellipse,
    NodeKind::Line,
    NodeKind::Polygon,
    NodeKind::Star,
    NodeKind::Vector,
];

pub struct VectorConverter;

impl NodeConverter for VectorConverter {
    fn convert(
        &self,
        node: &SceneNode,
        parent: Option<&ProducedNode>,
        ctx: &mut ConvertContext<'_>,
        _dispatcher: &Dispatcher,
    ) -> Result<ProducedNode, ConvertError> {
        if !SHAPE_KINDS.contains(&node.kind()) {
            return Err(ConvertError::WrongKind {
                converter: "vector converter",
                kind: node.kind(),
                node_id: node.id().clone(),
            });
        }

        let mut produced = ProducedNode::new(node);
        if parent.is_some() {
            produced.element.anchors = Some(anchors_for(&node.base().constraints));
        }

        produced.styles = styles::leaf_styles(node, ctx)?;
        styles::apply_styles(&mut produced, ctx);
        Ok(produced)
    }
}
