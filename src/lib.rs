//! # graft
//!
//! Translation engine turning design-tool scene graphs into native UI
//! element trees.
//!
//! A [`SceneDocument`] is walked page by page through the converter
//! [`Dispatcher`]: converters synthesize [`Style`]s from paints and
//! effects, translate auto-layout metadata into stack, fit and grid
//! directives, and emit a [`ProducedNode`] tree mirroring the source.
//! Downstream code then uses [`bind`] to wire produced nodes to typed
//! slots by stable keys.
//!
//! ## Design principle
//!
//! The engine has no platform dependencies. Rasterization and resource
//! I/O are reached only through the [`SpriteGenerator`] and
//! [`ResourceProvider`] traits, so the host decides what a sprite or a
//! byte stream actually is; everything in here runs the same on any
//! target.

// Re-export foundation crates
pub use graft_element as element;
pub use graft_scene as scene;
pub use graft_style as style;
pub use graft_traits as traits;
pub use graft_types as types;

// Re-export algorithm crates
pub use graft_bind as binding;
pub use graft_convert as convert;
pub use graft_layout as layout;

pub mod importer;

// Re-export commonly used types from foundation crates
pub use element::{CapabilityKind, Element};
pub use scene::{NodeKind, SceneDocument, SceneNode};
pub use style::{Style, StyleProperty};
pub use types::{AssetHandle, AssetKind, Color, NodeId, Rect, Size, Vec2};

// Re-export the conversion and binding surfaces
pub use binding::{BindingDescriptor, BindingError, BindingResult, Bindings, BoundValue, bind};
pub use convert::{
    ConvertContext, ConvertError, ConverterRegistry, Diagnostic, Diagnostics, Dispatcher,
    NodeConverter, ProducedNode, Severity,
};

// Re-export platform abstraction traits
pub use traits::{
    InMemoryResourceProvider, NullSpriteGenerator, ResourceError, ResourceKind, ResourceProvider,
    SharedResourceData, SpriteGenerator, SpriteOptions,
};

pub use importer::{DocumentImporter, ImportError, ImportedDocument, ImportedPage};
