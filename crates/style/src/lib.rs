//! The style model.
//!
//! A style is a bundle of enable-aware properties targeting one
//! capability of a produced element. Conversion synthesizes styles from
//! a node's paints and effects; hosts may merge their own styles over
//! them before application. Merging follows one rule everywhere: a set
//! property wins over an unset one, and force reverses that.

pub mod blur;
pub mod image;
pub mod mask;
pub mod opacity;
pub mod property;
pub mod shadow;
pub mod style;
pub mod text;

pub use blur::BlurStyle;
pub use image::ImageStyle;
pub use mask::MaskStyle;
pub use opacity::OpacityStyle;
pub use property::StyleProperty;
pub use shadow::ShadowStyle;
pub use style::Style;
pub use text::TextStyle;
