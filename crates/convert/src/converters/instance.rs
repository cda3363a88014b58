//! Instance conversion: a frame in every respect, plus the linkage
//! back to the component it instantiates.

use graft_scene::SceneNode;
use log::debug;

use crate::context::ConvertContext;
use crate::converters::frame::convert_frame;
use crate::dispatcher::{Dispatcher, NodeConverter};
use crate::error::ConvertError;
use crate::tree::ProducedNode;

pub struct InstanceConverter;

impl NodeConverter for InstanceConverter {
    fn convert(
        &self,
        node: &SceneNode,
        parent: Option<&ProducedNode>,
        ctx: &mut ConvertContext<'_>,
        dispatcher: &Dispatcher,
    ) -> Result<ProducedNode, ConvertError> {
        let SceneNode::Instance(instance) = node else {
            return Err(ConvertError::WrongKind {
                converter: "instance converter",
                kind: node.kind(),
                node_id: node.id().clone(),
            });
        };

        match &instance.component_id {
            None => ctx.diagnostics.warn(
                Some(node.id()),
                format!(
                    "instance '{}' does not reference a main component",
                    instance.frame.base.name
                ),
            ),
            Some(component_id) => {
                if !ctx.is_component_registered(component_id) {
                    ctx.diagnostics.warn(
                        Some(node.id()),
                        format!(
                            "main component '{component_id}' of instance '{}' could not be resolved",
                            instance.frame.base.name
                        ),
                    );
                } else if let Some(set_id) = ctx.component_set_of(component_id).cloned() {
                    debug!(
                        "instance '{}' is a variant of component set '{set_id}'",
                        instance.frame.base.name
                    );
                }
            }
        }

        convert_frame(node, &instance.frame, parent, ctx, dispatcher)
    }
}
