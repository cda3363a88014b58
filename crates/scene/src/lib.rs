//! The source scene graph.
//!
//! This crate defines the in-memory representation of a design document
//! as exported by the upstream editor: a tree of typed nodes carrying
//! geometry, paints, effects, auto-layout data and plugin annotations.
//! It is a passive data model; interpretation lives in the conversion
//! and layout crates.

pub mod effect;
pub mod layout;
pub mod node;
pub mod paint;
pub mod plugin;

use graft_types::NodeId;
use serde::{Deserialize, Serialize};

pub use effect::{BlurEffect, Effect, ShadowEffect};
pub use layout::{
    AxisSizingMode, Constraints, CounterAxisAlign, GridPattern, GridTrack, HorizontalConstraint,
    LayoutAlign, LayoutData, LayoutMode, PrimaryAxisAlign, VerticalConstraint,
};
pub use node::{
    BaseData, FrameNode, GroupNode, InstanceNode, NodeKind, PageNode, SceneNode, TextAlignHorizontal,
    TextAlignVertical, TextNode, TypeStyle, VectorNode,
};
pub use paint::{ColorStop, GradientPaint, ImagePaint, Paint, ScaleMode, SolidPaint};
pub use plugin::PluginData;

/// A complete exported document: metadata plus one or more pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDocument {
    pub id: NodeId,
    pub name: String,
    #[serde(default)]
    pub pages: Vec<PageNode>,
}

impl SceneDocument {
    /// Parses a document from its JSON export.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
