//! Style for the group-opacity capability.

use graft_element::{Element, UiOpacity};
use serde::{Deserialize, Serialize};

use crate::property::{StyleProperty, apply_property};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpacityStyle {
    pub enabled: bool,
    #[serde(default)]
    pub alpha: StyleProperty<f32>,
}

impl OpacityStyle {
    pub fn new(alpha: f32) -> Self {
        Self {
            enabled: true,
            alpha: StyleProperty::new(alpha),
        }
    }

    pub fn merge_from(&mut self, other: &Self, force: bool) {
        self.enabled = self.enabled || other.enabled;
        self.alpha.overwrite_from(&other.alpha, force);
    }

    pub fn apply(&self, element: &mut Element) -> bool {
        if !self.enabled {
            return true;
        }
        let opacity = element.opacity.get_or_insert_with(UiOpacity::default);
        apply_property(&self.alpha, &mut opacity.alpha);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_sets_alpha() {
        let mut element = Element::new("Faded");
        OpacityStyle::new(0.4).apply(&mut element);
        assert_eq!(element.opacity.unwrap().alpha, 0.4);
    }
}
