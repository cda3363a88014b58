//! Group conversion: containers without layout behavior of their own.

use graft_layout::anchors_for;
use graft_scene::SceneNode;

use crate::context::ConvertContext;
use crate::dispatcher::{Dispatcher, NodeConverter};
use crate::error::ConvertError;
use crate::styles;
use crate::tree::ProducedNode;

/// Converts `GROUP` nodes. Groups run the container style path but
/// never clip, stack, or grid; children keep their own placement.
pub struct GroupConverter;

impl NodeConverter for GroupConverter {
    fn convert(
        &self,
        node: &SceneNode,
        parent: Option<&ProducedNode>,
        ctx: &mut ConvertContext<'_>,
        dispatcher: &Dispatcher,
    ) -> Result<ProducedNode, ConvertError> {
        let SceneNode::Group(group) = node else {
            return Err(ConvertError::WrongKind {
                converter: "group converter",
                kind: node.kind(),
                node_id: node.id().clone(),
            });
        };

        let mut produced = ProducedNode::new(node);
        if parent.is_some() {
            produced.element.anchors = Some(anchors_for(&group.base.constraints));
        }

        produced.styles = styles::container_styles(node, false, ctx)?;
        styles::apply_styles(&mut produced, ctx);

        for child in &group.children {
            if let Some(converted) = dispatcher.convert(Some(&produced), child, ctx) {
                produced.children.push(converted);
            }
        }
        Ok(produced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graft_scene::{BaseData, GroupNode, VectorNode};
    use graft_traits::{InMemoryResourceProvider, NullSpriteGenerator};

    #[test]
    fn group_converts_children_without_layout() {
        let sprites = NullSpriteGenerator;
        let resources = InMemoryResourceProvider::new();
        let mut ctx = ConvertContext::new(&sprites, &resources);
        let dispatcher = Dispatcher::standard();

        let node = SceneNode::Group(GroupNode {
            base: BaseData::new("1:0", "Icons"),
            children: vec![
                SceneNode::Vector(VectorNode::new(BaseData::new("1:1", "Home"))),
                SceneNode::Vector(VectorNode::new(BaseData::new("1:2", "Search"))),
            ],
        });

        let produced = dispatcher.convert(None, &node, &mut ctx).unwrap();
        assert_eq!(produced.children.len(), 2);
        assert!(produced.element.stack.is_none());
        assert!(produced.element.mask.is_none());
        assert!(produced.element.grid.is_none());
    }
}
