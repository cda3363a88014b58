//! Auto-layout, grid and constraint data carried by container nodes.

use graft_types::EdgeInsets;
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Direction of a container's auto-layout flow, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    #[default]
    None,
    Horizontal,
    Vertical,
}

/// Whether an axis takes its size from the design or from its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AxisSizingMode {
    #[default]
    Fixed,
    Auto,
}

/// Child alignment along the flow axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrimaryAxisAlign {
    #[default]
    Min,
    Center,
    Max,
}

/// Child alignment across the flow axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterAxisAlign {
    #[default]
    Min,
    Center,
    Max,
}

/// A child's own cross-axis behavior inside an auto-layout parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutAlign {
    #[default]
    Inherit,
    Stretch,
}

/// The auto-layout block of a frame-like node.
///
/// All fields are meaningful only when `layout_mode` is not `None`;
/// the exporter still writes them with their defaults otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutData {
    #[serde(default)]
    pub layout_mode: LayoutMode,
    #[serde(default)]
    pub primary_axis_sizing_mode: AxisSizingMode,
    #[serde(default)]
    pub counter_axis_sizing_mode: AxisSizingMode,
    #[serde(default)]
    pub primary_axis_align_items: PrimaryAxisAlign,
    #[serde(default)]
    pub counter_axis_align_items: CounterAxisAlign,
    #[serde(default)]
    pub padding_left: f32,
    #[serde(default)]
    pub padding_right: f32,
    #[serde(default)]
    pub padding_top: f32,
    #[serde(default)]
    pub padding_bottom: f32,
    #[serde(default)]
    pub item_spacing: f32,
}

impl LayoutData {
    pub fn is_auto_layout(&self) -> bool {
        self.layout_mode != LayoutMode::None
    }

    pub fn padding(&self) -> EdgeInsets {
        EdgeInsets::new(
            self.padding_left,
            self.padding_right,
            self.padding_top,
            self.padding_bottom,
        )
    }
}

/// Repeating track pattern of a layout grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GridPattern {
    Columns,
    Rows,
    Grid,
}

/// One layout grid definition on a frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridTrack {
    pub pattern: GridPattern,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub gutter_size: f32,
    #[serde(default)]
    pub offset: f32,
    #[serde(default = "default_true")]
    pub visible: bool,
}

/// How a node pins to its parent when the parent resizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    #[serde(default)]
    pub horizontal: HorizontalConstraint,
    #[serde(default)]
    pub vertical: VerticalConstraint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HorizontalConstraint {
    #[default]
    Left,
    Right,
    Center,
    LeftRight,
    Scale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerticalConstraint {
    #[default]
    Top,
    Bottom,
    Center,
    TopBottom,
    Scale,
}
