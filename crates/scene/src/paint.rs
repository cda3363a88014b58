//! Fill and stroke paints.

use graft_types::Color;
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

fn default_opacity() -> f32 {
    1.0
}

/// A single paint applied to a node's fill or stroke list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Paint {
    Solid(SolidPaint),
    GradientLinear(GradientPaint),
    Image(ImagePaint),
}

impl Paint {
    pub fn visible(&self) -> bool {
        match self {
            Paint::Solid(paint) => paint.visible,
            Paint::GradientLinear(paint) => paint.visible,
            Paint::Image(paint) => paint.visible,
        }
    }

    pub fn opacity(&self) -> f32 {
        match self {
            Paint::Solid(paint) => paint.opacity,
            Paint::GradientLinear(paint) => paint.opacity,
            Paint::Image(paint) => paint.opacity,
        }
    }

    /// The flat color for solid paints, `None` for gradients and images.
    pub fn solid_color(&self) -> Option<Color> {
        match self {
            Paint::Solid(paint) => Some(paint.color),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolidPaint {
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default = "default_opacity")]
    pub opacity: f32,
    pub color: Color,
}

impl SolidPaint {
    pub fn new(color: Color) -> Self {
        Self {
            visible: true,
            opacity: 1.0,
            color,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientPaint {
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default = "default_opacity")]
    pub opacity: f32,
    #[serde(default)]
    pub gradient_stops: Vec<ColorStop>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorStop {
    pub position: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePaint {
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default = "default_opacity")]
    pub opacity: f32,
    #[serde(default)]
    pub scale_mode: ScaleMode,
    /// Reference into the export's image table, when the host resolved one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
}

/// How an image paint maps onto the node's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScaleMode {
    #[default]
    Fill,
    Fit,
    Tile,
    Stretch,
}
