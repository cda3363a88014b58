//! Style for the blur capability.

use graft_element::{BlurKind, Element, UiBlur};
use serde::{Deserialize, Serialize};

use crate::property::{StyleProperty, apply_property};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlurStyle {
    pub enabled: bool,
    #[serde(default)]
    pub kind: StyleProperty<BlurKind>,
    #[serde(default)]
    pub radius: StyleProperty<f32>,
    #[serde(default)]
    pub visible: StyleProperty<bool>,
}

impl BlurStyle {
    pub fn merge_from(&mut self, other: &Self, force: bool) {
        self.enabled = self.enabled || other.enabled;
        self.kind.overwrite_from(&other.kind, force);
        self.radius.overwrite_from(&other.radius, force);
        self.visible.overwrite_from(&other.visible, force);
    }

    pub fn apply(&self, element: &mut Element) -> bool {
        if !self.enabled {
            return true;
        }
        let blur = element.blur.get_or_insert_with(UiBlur::default);
        apply_property(&self.kind, &mut blur.kind);
        apply_property(&self.radius, &mut blur.radius);
        apply_property(&self.visible, &mut blur.visible);
        true
    }
}
