//! Interfaces to the host's asset machinery.
//!
//! The conversion engine never touches files, textures or renderers
//! directly. Everything it needs from the outside world comes through
//! the two traits defined here: [`ResourceProvider`] for byte
//! resources and [`SpriteGenerator`] for rasterizing vector nodes.

pub mod assets;
pub mod resource;

pub use assets::{
    AssetError, FilterMode, IdSpriteGenerator, NullSpriteGenerator, SpriteGenerator,
    SpriteOptions, WrapMode,
};
pub use resource::{
    InMemoryResourceProvider, ResourceError, ResourceKind, ResourceProvider, SharedResourceData,
};
