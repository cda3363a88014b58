//! The style variants and their shared merge/apply surface.

use graft_element::{CapabilityKind, Element};
use serde::{Deserialize, Serialize};

use crate::blur::BlurStyle;
use crate::image::ImageStyle;
use crate::mask::MaskStyle;
use crate::opacity::OpacityStyle;
use crate::shadow::ShadowStyle;
use crate::text::TextStyle;

/// One styling instruction for a single capability of an element.
///
/// Styles are produced during conversion and stored on the produced
/// node in application order. Merging two styles is only meaningful
/// between identical variants; a mismatch is a no-op.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "camelCase")]
pub enum Style {
    Image(ImageStyle),
    Mask(MaskStyle),
    Blur(BlurStyle),
    Opacity(OpacityStyle),
    Shadow(ShadowStyle),
    Text(TextStyle),
}

impl Style {
    /// The capability this style configures.
    pub fn kind(&self) -> CapabilityKind {
        match self {
            Style::Image(_) => CapabilityKind::Image,
            Style::Mask(_) => CapabilityKind::Mask,
            Style::Blur(_) => CapabilityKind::Blur,
            Style::Opacity(_) => CapabilityKind::Opacity,
            Style::Shadow(_) => CapabilityKind::Shadow,
            Style::Text(_) => CapabilityKind::Text,
        }
    }

    pub fn enabled(&self) -> bool {
        match self {
            Style::Image(style) => style.enabled,
            Style::Mask(style) => style.enabled,
            Style::Blur(style) => style.enabled,
            Style::Opacity(style) => style.enabled,
            Style::Shadow(style) => style.enabled,
            Style::Text(style) => style.enabled,
        }
    }

    /// Merges `other` into this style. Returns `false` (and changes
    /// nothing) when the variants differ.
    pub fn merge_from(&mut self, other: &Style, force: bool) -> bool {
        match (self, other) {
            (Style::Image(target), Style::Image(source)) => target.merge_from(source, force),
            (Style::Mask(target), Style::Mask(source)) => target.merge_from(source, force),
            (Style::Blur(target), Style::Blur(source)) => target.merge_from(source, force),
            (Style::Opacity(target), Style::Opacity(source)) => target.merge_from(source, force),
            (Style::Shadow(target), Style::Shadow(source)) => target.merge_from(source, force),
            (Style::Text(target), Style::Text(source)) => target.merge_from(source, force),
            _ => return false,
        }
        true
    }

    /// Applies the style to an element. Returns `false` when the
    /// element cannot host it (currently only text styles on non-text
    /// elements); callers log and move on.
    pub fn apply(&self, element: &mut Element) -> bool {
        match self {
            Style::Image(style) => style.apply(element),
            Style::Mask(style) => style.apply(element),
            Style::Blur(style) => style.apply(element),
            Style::Opacity(style) => style.apply(element),
            Style::Shadow(style) => style.apply(element),
            Style::Text(style) => style.apply(element),
        }
    }
}
