//! Stack container translation.

use graft_element::{Axis, StackLayout};
use graft_scene::{LayoutData, LayoutMode};

use crate::anchor::anchor_for;

/// Builds the stack capability for a container's auto-layout block, or
/// `None` when the container does not flow its children.
///
/// The child-control flags start out false; they are switched on per
/// child by [`arrange_child`](crate::arrange_child) as stretching or
/// growing children are encountered.
pub fn stack_for(layout: &LayoutData) -> Option<StackLayout> {
    let axis = match layout.layout_mode {
        LayoutMode::None => return None,
        LayoutMode::Horizontal => Axis::Horizontal,
        LayoutMode::Vertical => Axis::Vertical,
    };

    Some(StackLayout {
        axis,
        child_alignment: anchor_for(
            axis,
            layout.primary_axis_align_items,
            layout.counter_axis_align_items,
        ),
        padding: layout.padding(),
        spacing: layout.item_spacing,
        child_control_width: false,
        child_control_height: false,
    })
}
