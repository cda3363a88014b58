//! Layout capabilities: how an element sizes and places its children.

use graft_types::{EdgeInsets, Size, Vec2};
use serde::{Deserialize, Serialize};

use crate::anchors::Anchor;

/// Flow direction of a stack container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

/// Lays children out in a single row or column.
///
/// The `child_control_*` flags hand the matching axis of every child
/// over to the container; children opt into receiving a share of free
/// space through their [`LayoutItem`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StackLayout {
    pub axis: Axis,
    pub child_alignment: Anchor,
    pub padding: EdgeInsets,
    pub spacing: f32,
    pub child_control_width: bool,
    pub child_control_height: bool,
}

/// Per-child sizing hints consumed by the parent's [`StackLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flexible_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flexible_height: Option<f32>,
}

impl LayoutItem {
    pub fn is_empty(&self) -> bool {
        self.min_width.is_none()
            && self.min_height.is_none()
            && self.flexible_width.is_none()
            && self.flexible_height.is_none()
    }
}

/// Resizes the element to hug its content on the chosen axes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentFit {
    pub horizontal: FitMode,
    pub vertical: FitMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FitMode {
    #[default]
    Unconstrained,
    MinSize,
    PreferredSize,
}

/// Lays children out in fixed-size cells.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridLayout {
    pub cell_size: Size,
    pub spacing: Vec2,
    pub padding: EdgeInsets,
}
