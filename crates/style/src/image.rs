//! Style for the image capability.

use graft_element::{Element, ImageScaleMode, UiImage};
use graft_types::{AssetHandle, Color};
use serde::{Deserialize, Serialize};

use crate::property::{StyleProperty, apply_property};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageStyle {
    pub enabled: bool,
    /// Whether the image graphic itself should draw. A node that only
    /// needs masking or layout keeps the graphic disabled.
    #[serde(default)]
    pub component_enabled: StyleProperty<bool>,
    #[serde(default)]
    pub sprite: StyleProperty<Option<AssetHandle>>,
    #[serde(default)]
    pub scale_mode: StyleProperty<ImageScaleMode>,
    #[serde(default)]
    pub color: StyleProperty<Color>,
}

impl ImageStyle {
    pub fn merge_from(&mut self, other: &Self, force: bool) {
        self.enabled = self.enabled || other.enabled;
        self.component_enabled
            .overwrite_from(&other.component_enabled, force);
        self.sprite.overwrite_from(&other.sprite, force);
        self.scale_mode.overwrite_from(&other.scale_mode, force);
        self.color.overwrite_from(&other.color, force);
    }

    pub fn apply(&self, element: &mut Element) -> bool {
        if !self.enabled {
            return true;
        }
        let image = element.image.get_or_insert_with(UiImage::default);
        apply_property(&self.component_enabled, &mut image.enabled);
        apply_property(&self.sprite, &mut image.sprite);
        apply_property(&self.scale_mode, &mut image.scale_mode);
        apply_property(&self.color, &mut image.color);
        true
    }
}
