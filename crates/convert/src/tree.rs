//! The produced element tree and its query surface.

use graft_element::Element;
use graft_scene::{NodeKind, SceneNode};
use graft_style::Style;
use graft_types::{NodeId, Rect};
use serde::Serialize;

/// One converted node: the native element plus everything other
/// systems need to find and restyle it later.
///
/// Children are stored in source order; that order carries through to
/// paint order and layout order on the host side.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProducedNode {
    pub node_id: NodeId,
    pub node_name: String,
    pub node_type: NodeKind,
    /// The key bind queries address this node by: the authored plugin
    /// key when present, otherwise the node name.
    pub binding_key: String,
    /// Styles synthesized for this node, in application order.
    pub styles: Vec<Style>,
    pub element: Element,
    pub children: Vec<ProducedNode>,
}

impl ProducedNode {
    /// Starts a produced node off a scene node: identity and geometry
    /// are filled in, styles and children are left to the converter.
    pub fn new(node: &SceneNode) -> Self {
        let base = node.base();
        let mut element = Element::new(&base.name);
        element.active = base.visible;
        element.rect = Rect::from_position_size(base.position, base.size);

        Self {
            node_id: base.id.clone(),
            node_name: base.name.clone(),
            node_type: node.kind(),
            binding_key: node.binding_key().to_string(),
            styles: Vec::new(),
            element,
            children: Vec::new(),
        }
    }

    /// Depth-first search for the first node with the given binding
    /// key, including this node itself.
    pub fn find_by_binding_key(&self, key: &str) -> Option<&ProducedNode> {
        if self.binding_key == key {
            return Some(self);
        }
        self.children
            .iter()
            .find_map(|child| child.find_by_binding_key(key))
    }

    /// Mutable variant of [`find_by_binding_key`](Self::find_by_binding_key).
    pub fn find_by_binding_key_mut(&mut self, key: &str) -> Option<&mut ProducedNode> {
        if self.binding_key == key {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_by_binding_key_mut(key))
    }

    /// Every node carrying the given binding key, in document order.
    pub fn find_all_by_binding_key(&self, key: &str) -> Vec<&ProducedNode> {
        let mut matches = Vec::new();
        self.visit(&mut |node| {
            if node.binding_key == key {
                matches.push(node);
            }
        });
        matches
    }

    pub fn find_by_id(&self, id: &NodeId) -> Option<&ProducedNode> {
        if &self.node_id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_by_id(id))
    }

    /// Pre-order traversal over this node and all descendants.
    pub fn visit<'a>(&'a self, visitor: &mut impl FnMut(&'a ProducedNode)) {
        visitor(self);
        for child in &self.children {
            child.visit(visitor);
        }
    }

    /// Merges `source` into the first style of the same variant, or
    /// appends it when this node has none.
    pub fn merge_style(&mut self, source: &Style, force: bool) {
        for style in &mut self.styles {
            if style.merge_from(source, force) {
                return;
            }
        }
        self.styles.push(source.clone());
    }

    /// Total node count of this subtree, itself included.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(ProducedNode::count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graft_scene::{BaseData, FrameNode, TextNode, TypeStyle, VectorNode};
    use graft_style::{MaskStyle, OpacityStyle};

    fn frame(id: &str, name: &str) -> SceneNode {
        SceneNode::Frame(FrameNode::new(BaseData::new(id, name)))
    }

    fn tree() -> ProducedNode {
        let mut root = ProducedNode::new(&frame("1:0", "Root"));
        let mut panel = ProducedNode::new(&frame("1:1", "Panel"));
        panel.children.push(ProducedNode::new(&SceneNode::Text(TextNode {
            base: BaseData::new("1:2", "Label"),
            characters: "Hi".to_string(),
            type_style: TypeStyle::default(),
        })));
        root.children.push(panel);
        root.children.push(ProducedNode::new(&SceneNode::Vector(VectorNode::new(
            BaseData::new("1:3", "Label"),
        ))));
        root
    }

    #[test]
    fn find_by_binding_key_is_depth_first() {
        let root = tree();
        // "Label" appears twice: under Panel and as Root's second child.
        // Depth-first means the nested one wins.
        let found = root.find_by_binding_key("Label").unwrap();
        assert_eq!(found.node_id.as_str(), "1:2");
        assert_eq!(root.find_all_by_binding_key("Label").len(), 2);
        assert!(root.find_by_binding_key("Missing").is_none());
    }

    #[test]
    fn find_by_id_reaches_nested_nodes() {
        let root = tree();
        let id = NodeId::from("1:2");
        assert_eq!(root.find_by_id(&id).unwrap().node_name, "Label");
    }

    #[test]
    fn visit_walks_in_document_order() {
        let root = tree();
        let mut order = Vec::new();
        root.visit(&mut |node| order.push(node.node_id.as_str()));
        assert_eq!(order, ["1:0", "1:1", "1:2", "1:3"]);
        assert_eq!(root.count(), 4);
    }

    #[test]
    fn merge_style_folds_into_matching_variant() {
        let mut node = ProducedNode::new(&frame("2:0", "Card"));
        node.styles.push(Style::Mask(MaskStyle { enabled: false }));

        node.merge_style(&Style::Mask(MaskStyle { enabled: true }), false);
        assert_eq!(node.styles.len(), 1);
        assert!(node.styles[0].enabled());

        node.merge_style(&Style::Opacity(OpacityStyle::new(0.5)), false);
        assert_eq!(node.styles.len(), 2);
    }

    #[test]
    fn new_copies_geometry_and_visibility() {
        let mut base = BaseData::new("3:0", "Ghost");
        base.visible = false;
        base.size = graft_types::Size::new(40.0, 20.0);
        let produced = ProducedNode::new(&SceneNode::Vector(VectorNode::new(base)));

        assert!(!produced.element.active);
        assert_eq!(produced.element.rect.width, 40.0);
        assert_eq!(produced.node_type, NodeKind::Vector);
        assert_eq!(produced.binding_key, "Ghost");
    }
}
