//! Frame conversion: the container path shared by every frame-like kind.

use graft_layout::{anchors_for, arrange_child, content_fit_for, grid_for, stack_for};
use graft_scene::{FrameNode, SceneNode};

use crate::context::ConvertContext;
use crate::dispatcher::{Dispatcher, NodeConverter};
use crate::error::ConvertError;
use crate::styles;
use crate::tree::ProducedNode;

/// Converts `FRAME` nodes. Components, component sets and instances
/// run the same pipeline through [`convert_frame`].
pub struct FrameConverter;

impl NodeConverter for FrameConverter {
    fn convert(
        &self,
        node: &SceneNode,
        parent: Option<&ProducedNode>,
        ctx: &mut ConvertContext<'_>,
        dispatcher: &Dispatcher,
    ) -> Result<ProducedNode, ConvertError> {
        let SceneNode::Frame(frame) = node else {
            return Err(ConvertError::WrongKind {
                converter: "frame converter",
                kind: node.kind(),
                node_id: node.id().clone(),
            });
        };
        convert_frame(node, frame, parent, ctx, dispatcher)
    }
}

/// The full container pipeline for one frame-like node: geometry,
/// inherited constraints, styles, layout translation, children.
pub(crate) fn convert_frame(
    node: &SceneNode,
    frame: &FrameNode,
    parent: Option<&ProducedNode>,
    ctx: &mut ConvertContext<'_>,
    dispatcher: &Dispatcher,
) -> Result<ProducedNode, ConvertError> {
    let mut produced = ProducedNode::new(node);

    // Pages do not position their children; any other parent does.
    if parent.is_some() {
        produced.element.anchors = Some(anchors_for(&frame.base.constraints));
    }

    produced.styles = styles::container_styles(node, frame.clips_content, ctx)?;
    styles::apply_styles(&mut produced, ctx);

    produced.element.stack = stack_for(&frame.layout);
    produced.element.content_fit = content_fit_for(&frame.layout);
    produced.element.grid = grid_for(&frame.layout_grids, frame.base.size);

    build_children(frame, &mut produced, ctx, dispatcher);
    Ok(produced)
}

/// Converts children in source order. Under an auto-layout container
/// each converted child also gets its layout item, and the directives
/// it raises are folded into the container's control flags.
fn build_children(
    frame: &FrameNode,
    produced: &mut ProducedNode,
    ctx: &mut ConvertContext<'_>,
    dispatcher: &Dispatcher,
) {
    for child in &frame.children {
        let Some(mut converted) = dispatcher.convert(Some(&*produced), child, ctx) else {
            continue;
        };

        if let Some(stack) = produced.element.stack.as_mut() {
            let base = child.base();
            let arrangement =
                arrange_child(stack.axis, base.layout_align, base.layout_grow, base.size);
            stack.child_control_width |= arrangement.control_width;
            stack.child_control_height |= arrangement.control_height;
            converted.element.layout_item = Some(arrangement.item);
        }

        produced.children.push(converted);
    }
}
