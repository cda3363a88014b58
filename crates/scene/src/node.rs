//! Node types making up a scene tree.

use graft_types::{NodeId, Size, Vec2};
use serde::{Deserialize, Serialize};

use crate::effect::Effect;
use crate::layout::{Constraints, GridTrack, LayoutAlign, LayoutData};
use crate::paint::Paint;
use crate::plugin::PluginData;

fn default_true() -> bool {
    true
}

fn default_opacity() -> f32 {
    1.0
}

/// Discriminant of a scene node, mirroring the exporter's `type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Frame,
    Group,
    Component,
    ComponentSet,
    Instance,
    Rectangle,
    Ellipse,
    Line,
    #[serde(rename = "REGULAR_POLYGON")]
    Polygon,
    Star,
    Vector,
    Text,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Frame => "FRAME",
            NodeKind::Group => "GROUP",
            NodeKind::Component => "COMPONENT",
            NodeKind::ComponentSet => "COMPONENT_SET",
            NodeKind::Instance => "INSTANCE",
            NodeKind::Rectangle => "RECTANGLE",
            NodeKind::Ellipse => "ELLIPSE",
            NodeKind::Line => "LINE",
            NodeKind::Polygon => "REGULAR_POLYGON",
            NodeKind::Star => "STAR",
            NodeKind::Vector => "VECTOR",
            NodeKind::Text => "TEXT",
        }
    }

    /// True for the container kinds that carry auto-layout data.
    pub fn is_frame_like(&self) -> bool {
        matches!(
            self,
            NodeKind::Frame | NodeKind::Component | NodeKind::ComponentSet | NodeKind::Instance
        )
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields common to every node below the page level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseData {
    pub id: NodeId,
    pub name: String,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default = "default_opacity")]
    pub opacity: f32,
    /// Position relative to the parent's top-left corner.
    #[serde(default)]
    pub position: Vec2,
    #[serde(default)]
    pub size: Size,
    #[serde(default)]
    pub fills: Vec<Paint>,
    #[serde(default)]
    pub strokes: Vec<Paint>,
    #[serde(default)]
    pub effects: Vec<Effect>,
    #[serde(default)]
    pub constraints: Constraints,
    #[serde(default)]
    pub layout_align: LayoutAlign,
    #[serde(default)]
    pub layout_grow: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin_data: Option<PluginData>,
}

impl BaseData {
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            visible: true,
            opacity: 1.0,
            position: Vec2::default(),
            size: Size::default(),
            fills: Vec::new(),
            strokes: Vec::new(),
            effects: Vec::new(),
            constraints: Constraints::default(),
            layout_align: LayoutAlign::default(),
            layout_grow: 0.0,
            plugin_data: None,
        }
    }

    /// The key other systems address this node by: the authored binding
    /// key when present, otherwise the node's name.
    pub fn binding_key(&self) -> &str {
        self.plugin_data
            .as_ref()
            .and_then(|data| data.binding_key())
            .unwrap_or(&self.name)
    }
}

/// A top-level page. Pages only hold children; they have no geometry
/// or paints of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageNode {
    pub id: NodeId,
    pub name: String,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub children: Vec<SceneNode>,
}

/// A frame-like container: geometry, optional auto-layout, optional
/// layout grids, and children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameNode {
    #[serde(flatten)]
    pub base: BaseData,
    #[serde(flatten)]
    pub layout: LayoutData,
    #[serde(default)]
    pub clips_content: bool,
    #[serde(default)]
    pub layout_grids: Vec<GridTrack>,
    #[serde(default)]
    pub corner_radius: f32,
    #[serde(default)]
    pub children: Vec<SceneNode>,
}

impl FrameNode {
    pub fn new(base: BaseData) -> Self {
        Self {
            base,
            layout: LayoutData::default(),
            clips_content: false,
            layout_grids: Vec::new(),
            corner_radius: 0.0,
            children: Vec::new(),
        }
    }
}

/// An instance of a component, carrying the id of its main component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceNode {
    #[serde(flatten)]
    pub frame: FrameNode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<NodeId>,
}

/// A plain grouping of children with shared geometry but no layout of
/// its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupNode {
    #[serde(flatten)]
    pub base: BaseData,
    #[serde(default)]
    pub children: Vec<SceneNode>,
}

/// A leaf shape node. The concrete shape is carried by the enum tag;
/// the payload is identical across shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorNode {
    #[serde(flatten)]
    pub base: BaseData,
    #[serde(default)]
    pub corner_radius: f32,
}

impl VectorNode {
    pub fn new(base: BaseData) -> Self {
        Self {
            base,
            corner_radius: 0.0,
        }
    }
}

/// A text run with its character content and resolved typography.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextNode {
    #[serde(flatten)]
    pub base: BaseData,
    #[serde(default)]
    pub characters: String,
    #[serde(default, rename = "style")]
    pub type_style: TypeStyle,
}

/// Typography resolved by the editor for a text node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default = "TypeStyle::default_font_size")]
    pub font_size: f32,
    #[serde(default)]
    pub text_align_horizontal: TextAlignHorizontal,
    #[serde(default)]
    pub text_align_vertical: TextAlignVertical,
}

impl TypeStyle {
    fn default_font_size() -> f32 {
        14.0
    }
}

impl Default for TypeStyle {
    fn default() -> Self {
        Self {
            font_family: None,
            font_size: Self::default_font_size(),
            text_align_horizontal: TextAlignHorizontal::default(),
            text_align_vertical: TextAlignVertical::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlignHorizontal {
    #[default]
    Left,
    Center,
    Right,
    Justified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlignVertical {
    #[default]
    Top,
    Center,
    Bottom,
}

/// Any node that can appear below a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SceneNode {
    Frame(FrameNode),
    Group(GroupNode),
    Component(FrameNode),
    ComponentSet(FrameNode),
    Instance(InstanceNode),
    Rectangle(VectorNode),
    Ellipse(VectorNode),
    Line(VectorNode),
    #[serde(rename = "REGULAR_POLYGON")]
    Polygon(VectorNode),
    Star(VectorNode),
    Vector(VectorNode),
    Text(TextNode),
}

impl SceneNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            SceneNode::Frame(_) => NodeKind::Frame,
            SceneNode::Group(_) => NodeKind::Group,
            SceneNode::Component(_) => NodeKind::Component,
            SceneNode::ComponentSet(_) => NodeKind::ComponentSet,
            SceneNode::Instance(_) => NodeKind::Instance,
            SceneNode::Rectangle(_) => NodeKind::Rectangle,
            SceneNode::Ellipse(_) => NodeKind::Ellipse,
            SceneNode::Line(_) => NodeKind::Line,
            SceneNode::Polygon(_) => NodeKind::Polygon,
            SceneNode::Star(_) => NodeKind::Star,
            SceneNode::Vector(_) => NodeKind::Vector,
            SceneNode::Text(_) => NodeKind::Text,
        }
    }

    /// The fields shared by every node kind.
    pub fn base(&self) -> &BaseData {
        match self {
            SceneNode::Frame(frame)
            | SceneNode::Component(frame)
            | SceneNode::ComponentSet(frame) => &frame.base,
            SceneNode::Instance(instance) => &instance.frame.base,
            SceneNode::Group(group) => &group.base,
            SceneNode::Rectangle(vector)
            | SceneNode::Ellipse(vector)
            | SceneNode::Line(vector)
            | SceneNode::Polygon(vector)
            | SceneNode::Star(vector)
            | SceneNode::Vector(vector) => &vector.base,
            SceneNode::Text(text) => &text.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut BaseData {
        match self {
            SceneNode::Frame(frame)
            | SceneNode::Component(frame)
            | SceneNode::ComponentSet(frame) => &mut frame.base,
            SceneNode::Instance(instance) => &mut instance.frame.base,
            SceneNode::Group(group) => &mut group.base,
            SceneNode::Rectangle(vector)
            | SceneNode::Ellipse(vector)
            | SceneNode::Line(vector)
            | SceneNode::Polygon(vector)
            | SceneNode::Star(vector)
            | SceneNode::Vector(vector) => &mut vector.base,
            SceneNode::Text(text) => &mut text.base,
        }
    }

    /// Children in document order; empty for leaf kinds.
    pub fn children(&self) -> &[SceneNode] {
        match self {
            SceneNode::Frame(frame)
            | SceneNode::Component(frame)
            | SceneNode::ComponentSet(frame) => &frame.children,
            SceneNode::Instance(instance) => &instance.frame.children,
            SceneNode::Group(group) => &group.children,
            _ => &[],
        }
    }

    /// The frame payload for frame-like kinds.
    pub fn frame(&self) -> Option<&FrameNode> {
        match self {
            SceneNode::Frame(frame)
            | SceneNode::Component(frame)
            | SceneNode::ComponentSet(frame) => Some(frame),
            SceneNode::Instance(instance) => Some(&instance.frame),
            _ => None,
        }
    }

    /// Auto-layout data, present on frame-like kinds only.
    pub fn layout(&self) -> Option<&LayoutData> {
        self.frame().map(|frame| &frame.layout)
    }

    pub fn id(&self) -> &NodeId {
        &self.base().id
    }

    pub fn name(&self) -> &str {
        &self.base().name
    }

    pub fn binding_key(&self) -> &str {
        self.base().binding_key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutMode;

    #[test]
    fn frame_parses_flattened_fields() {
        let json = r#"{
            "type": "FRAME",
            "id": "1:2",
            "name": "Header",
            "size": { "width": 320.0, "height": 48.0 },
            "layoutMode": "HORIZONTAL",
            "itemSpacing": 8.0,
            "clipsContent": true,
            "children": [
                { "type": "TEXT", "id": "1:3", "name": "Title", "characters": "Hello" }
            ]
        }"#;
        let node: SceneNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.kind(), NodeKind::Frame);
        assert_eq!(node.name(), "Header");
        assert_eq!(node.children().len(), 1);

        let layout = node.layout().unwrap();
        assert_eq!(layout.layout_mode, LayoutMode::Horizontal);
        assert_eq!(layout.item_spacing, 8.0);

        let frame = node.frame().unwrap();
        assert!(frame.clips_content);
        assert_eq!(frame.base.size.width, 320.0);

        match node.children() {
            [SceneNode::Text(text)] => assert_eq!(text.characters, "Hello"),
            other => panic!("expected a single text child, got {other:?}"),
        }
    }

    #[test]
    fn binding_key_prefers_plugin_data() {
        let mut base = BaseData::new("2:1", "SubmitButton");
        assert_eq!(base.binding_key(), "SubmitButton");

        base.plugin_data = Some(PluginData {
            binding_key: Some("@Submit".to_string()),
            ..PluginData::default()
        });
        assert_eq!(base.binding_key(), "@Submit");
    }

    #[test]
    fn instance_carries_component_id() {
        let json = r#"{
            "type": "INSTANCE",
            "id": "3:1",
            "name": "Button",
            "componentId": "2:9"
        }"#;
        let node: SceneNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.kind(), NodeKind::Instance);
        match node {
            SceneNode::Instance(instance) => {
                assert_eq!(instance.component_id.as_ref().map(NodeId::as_str), Some("2:9"));
            }
            other => panic!("expected instance, got {other:?}"),
        }
    }

    #[test]
    fn leaf_kinds_report_wire_names() {
        assert_eq!(NodeKind::Polygon.as_str(), "REGULAR_POLYGON");
        assert_eq!(NodeKind::ComponentSet.as_str(), "COMPONENT_SET");
        assert!(NodeKind::Instance.is_frame_like());
        assert!(!NodeKind::Group.is_frame_like());
    }

    #[test]
    fn kind_serializes_to_wire_name() {
        for kind in [NodeKind::Polygon, NodeKind::ComponentSet, NodeKind::Text] {
            let value = serde_json::to_value(kind).unwrap();
            assert_eq!(value, serde_json::Value::String(kind.as_str().to_string()));
        }
    }

    #[test]
    fn hidden_node_keeps_visibility_flag() {
        let json = r#"{ "type": "RECTANGLE", "id": "4:1", "name": "Backdrop", "visible": false }"#;
        let node: SceneNode = serde_json::from_str(json).unwrap();
        assert!(!node.base().visible);
        assert_eq!(node.base().opacity, 1.0);
    }
}
