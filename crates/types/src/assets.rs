//! Handles for generated or loaded render assets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// What a handle points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetKind {
    #[default]
    Sprite,
    Texture,
}

/// An opaque, cheaply cloneable reference to an asset produced by the
/// host (a rendered sprite, a decoded texture). The id is meaningful
/// only to the producer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetHandle {
    id: Arc<str>,
    kind: AssetKind,
}

impl AssetHandle {
    pub fn new(id: impl Into<Arc<str>>, kind: AssetKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }

    pub fn sprite(id: impl Into<Arc<str>>) -> Self {
        Self::new(id, AssetKind::Sprite)
    }

    pub fn texture(id: impl Into<Arc<str>>) -> Self {
        Self::new(id, AssetKind::Texture)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> AssetKind {
        self.kind
    }
}

impl fmt::Display for AssetHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}:{}", self.kind, self.id)
    }
}

impl Serialize for AssetHandle {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Repr<'a> {
            id: &'a str,
            kind: AssetKind,
        }
        Repr {
            id: &self.id,
            kind: self.kind,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AssetHandle {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Repr {
            id: String,
            kind: AssetKind,
        }
        let repr = Repr::deserialize(deserializer)?;
        Ok(Self::new(repr.id, repr.kind))
    }
}
