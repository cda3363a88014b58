//! Text conversion. The character content is attached during
//! conversion; typography travels as a text style so later merges can
//! restyle without touching the content.

use graft_element::UiText;
use graft_layout::anchors_for;
use graft_scene::SceneNode;

use crate::context::ConvertContext;
use crate::dispatcher::{Dispatcher, NodeConverter};
use crate::error::ConvertError;
use crate::styles;
use crate::tree::ProducedNode;

pub struct TextConverter;

impl NodeConverter for TextConverter {
    fn convert(
        &self,
        node: &SceneNode,
        parent: Option<&ProducedNode>,
        ctx: &mut ConvertContext<'_>,
        _dispatcher: &Dispatcher,
    ) -> Result<ProducedNode, ConvertError> {
        let SceneNode::Text(text) = node else {
            return Err(ConvertError::WrongKind {
                converter: "text converter",
                kind: node.kind(),
                node_id: node.id().clone(),
            });
        };

        let mut produced = ProducedNode::new(node);
        if parent.is_some() {
            produced.element.anchors = Some(anchors_for(&text.base.constraints));
        }

        produced.element.text = Some(UiText {
            text: text.characters.clone(),
            ..UiText::default()
        });
        produced.styles = styles::text_styles(text);
        styles::apply_styles(&mut produced, ctx);
        Ok(produced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graft_element::TextAlign;
    use graft_scene::{BaseData, TextAlignHorizontal, TextNode, TypeStyle};
    use graft_traits::{InMemoryResourceProvider, NullSpriteGenerator};

    #[test]
    fn characters_and_typography_land_on_the_element() {
        let sprites = NullSpriteGenerator;
        let resources = InMemoryResourceProvider::new();
        let mut ctx = ConvertContext::new(&sprites, &resources);
        let dispatcher = Dispatcher::standard();

        let node = SceneNode::Text(TextNode {
            base: BaseData::new("1:1", "Title"),
            characters: "Checkout".to_string(),
            type_style: TypeStyle {
                font_family: Some("Inter".to_string()),
                font_size: 24.0,
                text_align_horizontal: TextAlignHorizontal::Center,
                ..TypeStyle::default()
            },
        });

        let produced = dispatcher.convert(None, &node, &mut ctx).unwrap();
        let text = produced.element.text.as_ref().unwrap();
        assert_eq!(text.text, "Checkout");
        assert_eq!(text.font_family.as_deref(), Some("Inter"));
        assert_eq!(text.font_size, 24.0);
        assert_eq!(text.align, TextAlign::Center);

        // Text never rasterizes to an image.
        assert!(produced.element.image.is_none());
        assert!(ctx.diagnostics.is_empty());
    }
}
