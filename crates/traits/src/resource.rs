//! ResourceProvider trait for abstracting resource loading.
//!
//! This trait lets the engine pull in external resources (image fills,
//! fonts, arbitrary data referenced from bindings) without being tied
//! to filesystem access.

use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;

/// What a requested resource will be used as. Providers may dispatch
/// on it (decode an image, load a font face) or ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Image,
    Font,
    Data,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Image => "image",
            ResourceKind::Font => "font",
            ResourceKind::Data => "data",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for resource loading operations.
#[derive(Error, Debug, Clone)]
pub enum ResourceError {
    #[error("Resource not found: {kind} '{path}'")]
    NotFound { path: String, kind: ResourceKind },

    #[error("Failed to load resource '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("Invalid resource format: {0}")]
    InvalidFormat(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ResourceError {
    fn from(err: std::io::Error) -> Self {
        ResourceError::Io(err.to_string())
    }
}

/// Shared resource data type (reference-counted bytes).
pub type SharedResourceData = Arc<Vec<u8>>;

/// A trait for loading resources from various sources.
///
/// This abstraction allows the engine to work with resources from:
/// - Local filesystem
/// - In-memory storage
/// - Asset bundles managed by the host
///
/// # Example
///
/// ```ignore
/// let provider = InMemoryResourceProvider::new();
/// provider.add("logo.png", ResourceKind::Image, logo_bytes)?;
/// let data = provider.load("logo.png", ResourceKind::Image)?;
/// ```
pub trait ResourceProvider: Send + Sync + Debug {
    /// Load a resource by its path/URI.
    ///
    /// # Arguments
    ///
    /// * `path` - The path or URI of the resource to load
    /// * `kind` - What the caller intends to use the resource as
    ///
    /// # Returns
    ///
    /// The resource data as a shared byte vector, or an error if not found.
    fn load(&self, path: &str, kind: ResourceKind) -> Result<SharedResourceData, ResourceError>;

    /// Check if a resource exists.
    fn exists(&self, path: &str, kind: ResourceKind) -> bool;

    /// Returns a human-readable name for this provider (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// An in-memory resource provider.
///
/// Resources are stored in memory, keyed by `(path, kind)`, and must
/// be pre-populated before use. This is the simplest provider and
/// works in any environment.
#[derive(Debug, Default)]
pub struct InMemoryResourceProvider {
    resources: std::sync::RwLock<std::collections::HashMap<(String, ResourceKind), SharedResourceData>>,
}

impl InMemoryResourceProvider {
    pub fn new() -> Self {
        Self {
            resources: std::sync::RwLock::new(std::collections::HashMap::new()),
        }
    }

    /// Add a resource to the in-memory store.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::LoadFailed` if the internal lock is poisoned.
    pub fn add(
        &self,
        path: impl Into<String>,
        kind: ResourceKind,
        data: Vec<u8>,
    ) -> Result<(), ResourceError> {
        self.add_shared(path, kind, Arc::new(data))
    }

    /// Add a resource from already shared data.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::LoadFailed` if the internal lock is poisoned.
    pub fn add_shared(
        &self,
        path: impl Into<String>,
        kind: ResourceKind,
        data: SharedResourceData,
    ) -> Result<(), ResourceError> {
        let path_string = path.into();
        let mut resources = self
            .resources
            .write()
            .map_err(|_| ResourceError::LoadFailed {
                path: path_string.clone(),
                message: "resource store lock poisoned".to_string(),
            })?;
        resources.insert((path_string, kind), data);
        Ok(())
    }

    /// Remove a resource from the store.
    ///
    /// Returns `None` if the lock is poisoned or the resource doesn't exist.
    pub fn remove(&self, path: &str, kind: ResourceKind) -> Option<SharedResourceData> {
        self.resources
            .write()
            .ok()?
            .remove(&(path.to_string(), kind))
    }

    /// Clear all resources from the store.
    pub fn clear(&self) {
        if let Ok(mut resources) = self.resources.write() {
            resources.clear();
        }
    }

    /// Get the number of resources in the store.
    ///
    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.resources.read().map(|r| r.len()).unwrap_or(0)
    }

    /// Check if the store is empty.
    ///
    /// Returns `true` if the lock is poisoned (safe default).
    pub fn is_empty(&self) -> bool {
        self.resources.read().map(|r| r.is_empty()).unwrap_or(true)
    }
}

impl ResourceProvider for InMemoryResourceProvider {
    fn load(&self, path: &str, kind: ResourceKind) -> Result<SharedResourceData, ResourceError> {
        let resources = self
            .resources
            .read()
            .map_err(|_| ResourceError::LoadFailed {
                path: path.to_string(),
                message: "resource store lock poisoned".to_string(),
            })?;
        resources
            .get(&(path.to_string(), kind))
            .cloned()
            .ok_or_else(|| ResourceError::NotFound {
                path: path.to_string(),
                kind,
            })
    }

    fn exists(&self, path: &str, kind: ResourceKind) -> bool {
        self.resources
            .read()
            .map(|r| r.contains_key(&(path.to_string(), kind)))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "InMemoryResourceProvider"
    }
}
