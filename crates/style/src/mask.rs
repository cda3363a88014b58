//! Style for the mask capability.

use graft_element::{Element, UiMask};
use serde::{Deserialize, Serialize};

/// Masks carry no configuration; the style's enabled flag alone decides
/// whether the element clips its descendants.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaskStyle {
    pub enabled: bool,
}

impl MaskStyle {
    pub fn merge_from(&mut self, other: &Self, _force: bool) {
        self.enabled = self.enabled || other.enabled;
    }

    pub fn apply(&self, element: &mut Element) -> bool {
        if self.enabled {
            element.mask.get_or_insert_with(UiMask::default);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_mask_attaches_capability() {
        let mut element = Element::new("Viewport");
        MaskStyle { enabled: true }.apply(&mut element);
        assert!(element.mask.is_some());

        let mut bare = Element::new("Plain");
        MaskStyle { enabled: false }.apply(&mut bare);
        assert!(bare.mask.is_none());
    }
}
