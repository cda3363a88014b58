//! Style for the text capability.
//!
//! Unlike the other styles, text styling never creates the capability:
//! character content comes from conversion, and styling a non-text
//! element is a caller mistake reported through the return value.

use graft_element::{Element, TextAlign, TextVerticalAlign};
use graft_types::Color;
use serde::{Deserialize, Serialize};

use crate::property::{StyleProperty, apply_property};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub enabled: bool,
    #[serde(default)]
    pub font_family: StyleProperty<Option<String>>,
    #[serde(default)]
    pub font_size: StyleProperty<f32>,
    #[serde(default)]
    pub color: StyleProperty<Color>,
    #[serde(default)]
    pub align: StyleProperty<TextAlign>,
    #[serde(default)]
    pub vertical_align: StyleProperty<TextVerticalAlign>,
}

impl TextStyle {
    pub fn merge_from(&mut self, other: &Self, force: bool) {
        self.enabled = self.enabled || other.enabled;
        self.font_family.overwrite_from(&other.font_family, force);
        self.font_size.overwrite_from(&other.font_size, force);
        self.color.overwrite_from(&other.color, force);
        self.align.overwrite_from(&other.align, force);
        self.vertical_align
            .overwrite_from(&other.vertical_align, force);
    }

    pub fn apply(&self, element: &mut Element) -> bool {
        if !self.enabled {
            return true;
        }
        let Some(text) = element.text.as_mut() else {
            return false;
        };
        apply_property(&self.font_family, &mut text.font_family);
        apply_property(&self.font_size, &mut text.font_size);
        apply_property(&self.color, &mut text.color);
        apply_property(&self.align, &mut text.align);
        apply_property(&self.vertical_align, &mut text.vertical_align);
        true
    }
}
