//! The produced UI element model.
//!
//! Conversion turns scene nodes into [`Element`] records: a rectangle,
//! normalized anchors, and a fixed set of optional capabilities.
//! Capabilities are plain data; a host runtime maps them onto its own
//! component system.

pub mod anchors;
pub mod element;
pub mod layout;
pub mod visual;

pub use anchors::{Anchor, Anchors};
pub use element::{CapabilityKind, Element};
pub use layout::{Axis, ContentFit, FitMode, GridLayout, LayoutItem, StackLayout};
pub use visual::{
    BlurKind, ImageScaleMode, ShadowKind, TextAlign, TextVerticalAlign, UiBlur, UiImage, UiMask,
    UiOpacity, UiShadow, UiText,
};
