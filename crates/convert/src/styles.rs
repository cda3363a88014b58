//! Style synthesis: turning a node's paints and effects into styles.
//!
//! Containers and leaves diverge on purpose. A frame folds its own
//! opacity into the background image's tint, while a leaf shape gets a
//! dedicated opacity style; downstream consumers rely on both forms.

use graft_element::{BlurKind, ImageScaleMode, ShadowKind, TextAlign, TextVerticalAlign};
use graft_scene::{
    BlurEffect, Effect, NodeKind, Paint, ScaleMode, SceneNode, ShadowEffect, TextAlignHorizontal,
    TextAlignVertical, TextNode,
};
use graft_style::{BlurStyle, ImageStyle, MaskStyle, OpacityStyle, ShadowStyle, Style, TextStyle};
use graft_traits::{ResourceKind, SpriteOptions};
use graft_types::{AssetHandle, AssetKind, Color};

use crate::context::ConvertContext;
use crate::error::ConvertError;
use crate::tree::ProducedNode;

/// Styles for a frame-like container: one background image when the
/// node carries paints, a mask when it clips, one style per effect.
pub(crate) fn container_styles(
    node: &SceneNode,
    clips_content: bool,
    ctx: &mut ConvertContext<'_>,
) -> Result<Vec<Style>, ConvertError> {
    let mut styles = Vec::new();
    let base = node.base();

    if !base.fills.is_empty() || !base.strokes.is_empty() {
        let options = SpriteOptions {
            sample_count: 8,
            ..SpriteOptions::default()
        };

        // Only one image per node; the first applicable paint set wins.
        let mut image = ImageStyle {
            enabled: any_visible(&base.fills) || any_visible(&base.strokes),
            ..ImageStyle::default()
        };
        image.sprite.set(background_sprite(node, &options, ctx)?);
        image.scale_mode.set(scale_mode_for(node));
        image.color.set(Color::white().with_alpha(base.opacity));
        styles.push(Style::Image(image));
    }

    if clips_content {
        styles.push(Style::Mask(MaskStyle { enabled: true }));
    }

    effect_styles(&base.effects, &mut styles);
    Ok(styles)
}

/// Styles for a leaf shape: the rasterized image, the node's opacity
/// as a group alpha, one style per effect.
pub(crate) fn leaf_styles(
    node: &SceneNode,
    ctx: &mut ConvertContext<'_>,
) -> Result<Vec<Style>, ConvertError> {
    let mut styles = Vec::new();
    let base = node.base();

    if !base.fills.is_empty() || !base.strokes.is_empty() {
        let sprite = shape_sprite(node, ctx)?;

        let mut image = ImageStyle {
            enabled: any_visible(&base.fills) || any_visible(&base.strokes),
            ..ImageStyle::default()
        };
        image.component_enabled.set(sprite.is_some());
        image.sprite.set(sprite);
        image.scale_mode.set(scale_mode_for(node));
        styles.push(Style::Image(image));
    }

    styles.push(Style::Opacity(OpacityStyle::new(base.opacity)));
    effect_styles(&base.effects, &mut styles);
    Ok(styles)
}

/// Styles for a text run: typography, opacity, effects. Text fills
/// color the glyphs, so no image style is synthesized.
pub(crate) fn text_styles(text: &TextNode) -> Vec<Style> {
    let mut style = TextStyle {
        enabled: true,
        ..TextStyle::default()
    };
    if text.type_style.font_family.is_some() {
        style.font_family.set(text.type_style.font_family.clone());
    }
    style.font_size.set(text.type_style.font_size);
    if let Some(color) = text
        .base
        .fills
        .iter()
        .find(|paint| paint.visible())
        .and_then(Paint::solid_color)
    {
        style.color.set(color);
    }
    style
        .align
        .set(text_align(text.type_style.text_align_horizontal));
    style
        .vertical_align
        .set(text_vertical_align(text.type_style.text_align_vertical));

    let mut styles = vec![Style::Text(style)];
    styles.push(Style::Opacity(OpacityStyle::new(text.base.opacity)));
    effect_styles(&text.base.effects, &mut styles);
    styles
}

/// One blur or shadow style per effect. A hidden blur keeps its style
/// with the `visible` property cleared; a hidden shadow disables the
/// whole style.
pub(crate) fn effect_styles(effects: &[Effect], styles: &mut Vec<Style>) {
    for effect in effects {
        match effect {
            Effect::LayerBlur(blur) => styles.push(blur_style(BlurKind::Layer, blur)),
            Effect::BackgroundBlur(blur) => styles.push(blur_style(BlurKind::Background, blur)),
            Effect::DropShadow(shadow) => styles.push(shadow_style(ShadowKind::Drop, shadow)),
            Effect::InnerShadow(shadow) => styles.push(shadow_style(ShadowKind::Inner, shadow)),
        }
    }
}

/// Applies every synthesized style to the produced element. A style
/// whose target capability is missing is skipped with a warning.
pub(crate) fn apply_styles(produced: &mut ProducedNode, ctx: &mut ConvertContext<'_>) {
    for style in &produced.styles {
        if !style.apply(&mut produced.element) {
            ctx.diagnostics.warn(
                Some(&produced.node_id),
                format!(
                    "{} style skipped: '{}' has no {} capability",
                    style.kind(),
                    produced.node_name,
                    style.kind()
                ),
            );
        }
    }
}

fn any_visible(paints: &[Paint]) -> bool {
    paints.iter().any(Paint::visible)
}

/// The background sprite for a container. Image fills resolve through
/// the resource provider first; everything else rasterizes fresh.
fn background_sprite(
    node: &SceneNode,
    options: &SpriteOptions,
    ctx: &mut ConvertContext<'_>,
) -> Result<Option<AssetHandle>, ConvertError> {
    if let Some(handle) = resolve_image_fill(node, ctx) {
        return Ok(Some(handle));
    }
    Ok(ctx.sprites().generate(node, AssetKind::Sprite, options)?)
}

/// The sprite for a leaf shape, shared across duplicate node ids
/// through the run's asset cache.
fn shape_sprite(
    node: &SceneNode,
    ctx: &mut ConvertContext<'_>,
) -> Result<Option<AssetHandle>, ConvertError> {
    if let Some(handle) = resolve_image_fill(node, ctx) {
        return Ok(Some(handle));
    }

    let id = node.id();
    if let Some(handle) = ctx.try_get_asset(id, AssetKind::Sprite) {
        return Ok(Some(handle));
    }

    let generated = ctx
        .sprites()
        .generate(node, AssetKind::Sprite, &SpriteOptions::default())?;
    if let Some(handle) = &generated {
        ctx.add_asset(id.clone(), AssetKind::Sprite, handle.clone());
        ctx.add_asset(
            id.clone(),
            AssetKind::Texture,
            AssetHandle::texture(handle.id()),
        );
    }
    Ok(generated)
}

/// Looks the first visible image fill's export reference up in the
/// resource provider. A miss just leaves the sprite to the generator.
fn resolve_image_fill(node: &SceneNode, ctx: &mut ConvertContext<'_>) -> Option<AssetHandle> {
    let image_ref = node.base().fills.iter().find_map(|paint| match paint {
        Paint::Image(image) if image.visible => image.image_ref.as_deref(),
        _ => None,
    })?;

    if ctx.resources().exists(image_ref, ResourceKind::Image) {
        Some(AssetHandle::texture(image_ref))
    } else {
        ctx.diagnostics.info(
            Some(node.id()),
            format!("image fill '{image_ref}' not found among resources"),
        );
        None
    }
}

/// How the image should map onto the element: an image fill brings its
/// own mode, plain rectangles stretch their nine-sliced background,
/// and irregular shapes keep their aspect.
fn scale_mode_for(node: &SceneNode) -> ImageScaleMode {
    let from_fill = node.base().fills.iter().find_map(|paint| match paint {
        Paint::Image(image) if image.visible => Some(map_scale_mode(image.scale_mode)),
        _ => None,
    });
    from_fill.unwrap_or(match node.kind() {
        NodeKind::Vector | NodeKind::Ellipse | NodeKind::Line | NodeKind::Polygon
        | NodeKind::Star => ImageScaleMode::Fill,
        _ => ImageScaleMode::Stretch,
    })
}

fn map_scale_mode(mode: ScaleMode) -> ImageScaleMode {
    match mode {
        ScaleMode::Fill => ImageScaleMode::Fill,
        ScaleMode::Fit => ImageScaleMode::Fit,
        ScaleMode::Tile => ImageScaleMode::Tile,
        ScaleMode::Stretch => ImageScaleMode::Stretch,
    }
}

fn text_align(align: TextAlignHorizontal) -> TextAlign {
    match align {
        TextAlignHorizontal::Left => TextAlign::Left,
        TextAlignHorizontal::Center => TextAlign::Center,
        TextAlignHorizontal::Right => TextAlign::Right,
        TextAlignHorizontal::Justified => TextAlign::Justified,
    }
}

fn text_vertical_align(align: TextAlignVertical) -> TextVerticalAlign {
    match align {
        TextAlignVertical::Top => TextVerticalAlign::Top,
        TextAlignVertical::Center => TextVerticalAlign::Middle,
        TextAlignVertical::Bottom => TextVerticalAlign::Bottom,
    }
}

fn blur_style(kind: BlurKind, effect: &BlurEffect) -> Style {
    let mut style = BlurStyle {
        enabled: true,
        ..BlurStyle::default()
    };
    style.kind.set(kind);
    style.radius.set(effect.radius);
    style.visible.set(effect.visible);
    Style::Blur(style)
}

fn shadow_style(kind: ShadowKind, effect: &ShadowEffect) -> Style {
    let mut style = ShadowStyle {
        enabled: effect.visible,
        ..ShadowStyle::default()
    };
    style.kind.set(kind);
    style.color.set(effect.color);
    style.offset.set(effect.offset);
    style.radius.set(effect.radius);
    Style::Shadow(style)
}
