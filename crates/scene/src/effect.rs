//! Visual effects attached to nodes.

use graft_types::{Color, Vec2};
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Effect {
    LayerBlur(BlurEffect),
    BackgroundBlur(BlurEffect),
    DropShadow(ShadowEffect),
    InnerShadow(ShadowEffect),
}

impl Effect {
    pub fn visible(&self) -> bool {
        match self {
            Effect::LayerBlur(effect) | Effect::BackgroundBlur(effect) => effect.visible,
            Effect::DropShadow(effect) | Effect::InnerShadow(effect) => effect.visible,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlurEffect {
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowEffect {
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub radius: f32,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub offset: Vec2,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effect_deserializes_by_tag() {
        let json = r#"{ "type": "DROP_SHADOW", "radius": 4.0, "offset": { "x": 0.0, "y": 2.0 } }"#;
        let effect: Effect = serde_json::from_str(json).unwrap();
        match effect {
            Effect::DropShadow(shadow) => {
                assert!(shadow.visible);
                assert_eq!(shadow.offset, Vec2 { x: 0.0, y: 2.0 });
            }
            other => panic!("expected drop shadow, got {other:?}"),
        }
    }
}
