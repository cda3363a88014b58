//! SpriteGenerator trait for rasterizing vector content.
//!
//! Shape nodes carry vector geometry the engine cannot draw itself.
//! A host supplies a generator that renders a node into a sprite or
//! texture and hands back an opaque [`AssetHandle`].

use std::fmt::Debug;
use thiserror::Error;

use graft_scene::SceneNode;
use graft_types::{AssetHandle, AssetKind};

/// Error type for asset generation.
#[derive(Error, Debug, Clone)]
pub enum AssetError {
    #[error("Failed to generate {kind:?} for node '{node_id}': {message}")]
    GenerationFailed {
        node_id: String,
        kind: AssetKind,
        message: String,
    },

    #[error("Unsupported node geometry: {0}")]
    Unsupported(String),
}

/// Texture filtering requested for a generated asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    Point,
    #[default]
    Bilinear,
    Trilinear,
}

/// Texture wrapping requested for a generated asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    #[default]
    Clamp,
    Repeat,
}

/// Rasterization parameters passed along with a generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteOptions {
    pub filter: FilterMode,
    pub wrap: WrapMode,
    /// Multisample count used while rasterizing.
    pub sample_count: u32,
    /// Upper bound for the longest texture edge, in pixels.
    pub texture_size: u32,
}

impl Default for SpriteOptions {
    fn default() -> Self {
        Self {
            filter: FilterMode::Bilinear,
            wrap: WrapMode::Clamp,
            sample_count: 4,
            texture_size: 1024,
        }
    }
}

/// Renders scene nodes into host-side assets.
///
/// Implementations are black boxes to the engine: the returned handle
/// is only ever stored and compared, never dereferenced.
///
/// Returning `Ok(None)` means the node has nothing worth rasterizing
/// (for example a zero-area shape); that is not an error.
pub trait SpriteGenerator: Send + Sync + Debug {
    fn generate(
        &self,
        node: &SceneNode,
        kind: AssetKind,
        options: &SpriteOptions,
    ) -> Result<Option<AssetHandle>, AssetError>;

    /// Returns a human-readable name for this generator (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// A generator that produces nothing. Useful when a host only needs
/// tree structure and layout, not graphics.
#[derive(Debug, Default)]
pub struct NullSpriteGenerator;

impl SpriteGenerator for NullSpriteGenerator {
    fn generate(
        &self,
        _node: &SceneNode,
        _kind: AssetKind,
        _options: &SpriteOptions,
    ) -> Result<Option<AssetHandle>, AssetError> {
        Ok(None)
    }

    fn name(&self) -> &'static str {
        "NullSpriteGenerator"
    }
}

/// A generator that derives the handle from the node id without
/// rendering anything. Deterministic, so repeated calls for the same
/// node agree; mainly used in tests and dry runs.
#[derive(Debug, Default)]
pub struct IdSpriteGenerator;

impl SpriteGenerator for IdSpriteGenerator {
    fn generate(
        &self,
        node: &SceneNode,
        kind: AssetKind,
        _options: &SpriteOptions,
    ) -> Result<Option<AssetHandle>, AssetError> {
        Ok(Some(AssetHandle::new(node.id().as_str(), kind)))
    }

    fn name(&self) -> &'static str {
        "IdSpriteGenerator"
    }
}
