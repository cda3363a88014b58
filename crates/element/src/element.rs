//! The element record itself.

use graft_types::Rect;
use serde::{Deserialize, Serialize};

use crate::anchors::Anchors;
use crate::layout::{ContentFit, GridLayout, LayoutItem, StackLayout};
use crate::visual::{UiBlur, UiImage, UiMask, UiOpacity, UiShadow, UiText};

/// Discriminant for the optional capabilities an [`Element`] can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CapabilityKind {
    Image,
    Mask,
    Blur,
    Opacity,
    Text,
    Shadow,
    Stack,
    LayoutItem,
    ContentFit,
    Grid,
}

impl CapabilityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CapabilityKind::Image => "Image",
            CapabilityKind::Mask => "Mask",
            CapabilityKind::Blur => "Blur",
            CapabilityKind::Opacity => "Opacity",
            CapabilityKind::Text => "Text",
            CapabilityKind::Shadow => "Shadow",
            CapabilityKind::Stack => "Stack",
            CapabilityKind::LayoutItem => "LayoutItem",
            CapabilityKind::ContentFit => "ContentFit",
            CapabilityKind::Grid => "Grid",
        }
    }
}

impl std::fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node of the produced UI tree: a named rectangle plus whatever
/// capabilities the conversion attached to it. Absent capabilities are
/// simply `None`; there is no registry or dynamic lookup.
///
/// `anchors` is set whenever a parent element positions the node;
/// top-level page children leave it `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Element {
    pub name: String,
    pub active: bool,
    pub rect: Rect,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchors: Option<Anchors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<UiImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask: Option<UiMask>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<UiBlur>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<UiOpacity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<UiText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<UiShadow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<StackLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_item: Option<LayoutItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_fit: Option<ContentFit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridLayout>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            name: String::new(),
            active: true,
            rect: Rect::default(),
            anchors: None,
            image: None,
            mask: None,
            blur: None,
            opacity: None,
            text: None,
            shadow: None,
            stack: None,
            layout_item: None,
            content_fit: None,
            grid: None,
        }
    }
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn has(&self, kind: CapabilityKind) -> bool {
        match kind {
            CapabilityKind::Image => self.image.is_some(),
            CapabilityKind::Mask => self.mask.is_some(),
            CapabilityKind::Blur => self.blur.is_some(),
            CapabilityKind::Opacity => self.opacity.is_some(),
            CapabilityKind::Text => self.text.is_some(),
            CapabilityKind::Shadow => self.shadow.is_some(),
            CapabilityKind::Stack => self.stack.is_some(),
            CapabilityKind::LayoutItem => self.layout_item.is_some(),
            CapabilityKind::ContentFit => self.content_fit.is_some(),
            CapabilityKind::Grid => self.grid.is_some(),
        }
    }

    /// Inserts a default-valued capability of the given kind if the
    /// element does not already carry one.
    pub fn ensure(&mut self, kind: CapabilityKind) {
        match kind {
            CapabilityKind::Image => {
                self.image.get_or_insert_with(UiImage::default);
            }
            CapabilityKind::Mask => {
                self.mask.get_or_insert_with(UiMask::default);
            }
            CapabilityKind::Blur => {
                self.blur.get_or_insert_with(UiBlur::default);
            }
            CapabilityKind::Opacity => {
                self.opacity.get_or_insert_with(UiOpacity::default);
            }
            CapabilityKind::Text => {
                self.text.get_or_insert_with(UiText::default);
            }
            CapabilityKind::Shadow => {
                self.shadow.get_or_insert_with(UiShadow::default);
            }
            CapabilityKind::Stack => {
                self.stack.get_or_insert_with(StackLayout::default);
            }
            CapabilityKind::LayoutItem => {
                self.layout_item.get_or_insert_with(LayoutItem::default);
            }
            CapabilityKind::ContentFit => {
                self.content_fit.get_or_insert_with(ContentFit::default);
            }
            CapabilityKind::Grid => {
                self.grid.get_or_insert_with(GridLayout::default);
            }
        }
    }

    /// The capabilities currently present, in declaration order.
    pub fn capabilities(&self) -> Vec<CapabilityKind> {
        use CapabilityKind::*;
        [
            Image, Mask, Blur, Opacity, Text, Shadow, Stack, LayoutItem, ContentFit, Grid,
        ]
        .into_iter()
        .filter(|kind| self.has(*kind))
        .collect()
    }
}
