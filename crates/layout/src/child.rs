//! Per-child sizing inside a stack container.

use graft_element::{Axis, LayoutItem};
use graft_scene::LayoutAlign;
use graft_types::Size;

/// What a single child asks of its stack parent.
///
/// The control flags are ORed onto the parent's stack capability; the
/// item is attached to the child. Flags are only ever raised here,
/// never lowered, so one stretching child switches the parent over for
/// all of them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChildArrangement {
    pub control_width: bool,
    pub control_height: bool,
    pub item: LayoutItem,
}

/// Translates a child's align/grow settings under the given flow axis.
///
/// * Stretch on the cross axis hands that axis to the parent and makes
///   the child flexible there; otherwise the child pins its intrinsic
///   cross size as a minimum.
/// * A non-zero grow hands the main axis to the parent with a token
///   1.0 minimum so the child can still shrink; otherwise the child
///   pins its intrinsic main size.
pub fn arrange_child(
    axis: Axis,
    layout_align: LayoutAlign,
    layout_grow: f32,
    intrinsic: Size,
) -> ChildArrangement {
    let mut arrangement = ChildArrangement::default();

    match axis {
        Axis::Horizontal => {
            if layout_align == LayoutAlign::Stretch {
                arrangement.control_height = true;
                arrangement.item.flexible_height = Some(1.0);
            } else {
                arrangement.item.min_height = Some(intrinsic.height);
            }
            if layout_grow != 0.0 {
                arrangement.control_width = true;
                arrangement.item.flexible_width = Some(1.0);
                arrangement.item.min_width = Some(1.0);
            } else {
                arrangement.item.min_width = Some(intrinsic.width);
            }
        }
        Axis::Vertical => {
            if layout_align == LayoutAlign::Stretch {
                arrangement.control_width = true;
                arrangement.item.flexible_width = Some(1.0);
            } else {
                arrangement.item.min_width = Some(intrinsic.width);
            }
            if layout_grow != 0.0 {
                arrangement.control_height = true;
                arrangement.item.flexible_height = Some(1.0);
                arrangement.item.min_height = Some(1.0);
            } else {
                arrangement.item.min_height = Some(intrinsic.height);
            }
        }
    }

    arrangement
}
