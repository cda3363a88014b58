//! The per-kind converters behind the standard registry.

mod component;
mod frame;
mod group;
mod instance;
mod text;
mod vector;

pub use component::{ComponentConverter, ComponentSetConverter};
pub use frame::FrameConverter;
pub use group::GroupConverter;
pub use instance::InstanceConverter;
pub use text::TextConverter;
pub use vector::VectorConverter;
