//! Style for the shadow capability.

use graft_element::{Element, ShadowKind, UiShadow};
use graft_types::{Color, Vec2};
use serde::{Deserialize, Serialize};

use crate::property::{StyleProperty, apply_property};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowStyle {
    pub enabled: bool,
    #[serde(default)]
    pub kind: StyleProperty<ShadowKind>,
    #[serde(default)]
    pub color: StyleProperty<Color>,
    #[serde(default)]
    pub offset: StyleProperty<Vec2>,
    #[serde(default)]
    pub radius: StyleProperty<f32>,
}

impl ShadowStyle {
    pub fn merge_from(&mut self, other: &Self, force: bool) {
        self.enabled = self.enabled || other.enabled;
        self.kind.overwrite_from(&other.kind, force);
        self.color.overwrite_from(&other.color, force);
        self.offset.overwrite_from(&other.offset, force);
        self.radius.overwrite_from(&other.radius, force);
    }

    pub fn apply(&self, element: &mut Element) -> bool {
        if !self.enabled {
            return true;
        }
        let shadow = element.shadow.get_or_insert_with(UiShadow::default);
        apply_property(&self.kind, &mut shadow.kind);
        apply_property(&self.color, &mut shadow.color);
        apply_property(&self.offset, &mut shadow.offset);
        apply_property(&self.radius, &mut shadow.radius);
        true
    }
}
