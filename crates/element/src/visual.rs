//! Visual capabilities: what an element draws.

use graft_types::{AssetHandle, Color, Vec2};
use serde::{Deserialize, Serialize};

/// A raster or sprite graphic with an optional tint.
///
/// A disabled image still occupies the element (masks and layout need
/// the graphic present) but should not be drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiImage {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprite: Option<AssetHandle>,
    pub scale_mode: ImageScaleMode,
    pub color: Color,
}

impl Default for UiImage {
    fn default() -> Self {
        Self {
            enabled: true,
            sprite: None,
            scale_mode: ImageScaleMode::Fill,
            color: Color::white(),
        }
    }
}

/// How the sprite maps onto the element's rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ImageScaleMode {
    #[default]
    Fill,
    Fit,
    Tile,
    Stretch,
}

/// Clips descendant rendering to this element's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UiMask {}

/// A blur applied to the element's own rendering or to what lies
/// behind it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiBlur {
    pub kind: BlurKind,
    pub radius: f32,
    pub visible: bool,
}

impl Default for UiBlur {
    fn default() -> Self {
        Self {
            kind: BlurKind::Layer,
            radius: 0.0,
            visible: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlurKind {
    #[default]
    Layer,
    Background,
}

/// Group opacity over the element and its subtree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiOpacity {
    pub alpha: f32,
}

impl Default for UiOpacity {
    fn default() -> Self {
        Self { alpha: 1.0 }
    }
}

/// A text run with resolved typography.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiText {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    pub font_size: f32,
    pub color: Color,
    pub align: TextAlign,
    pub vertical_align: TextVerticalAlign,
}

impl Default for UiText {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_family: None,
            font_size: 14.0,
            color: Color::default(),
            align: TextAlign::Left,
            vertical_align: TextVerticalAlign::Top,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextVerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// A shadow cast by or inside the element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiShadow {
    pub kind: ShadowKind,
    pub color: Color,
    pub offset: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShadowKind {
    #[default]
    Drop,
    Inner,
}
