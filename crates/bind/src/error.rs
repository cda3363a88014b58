//! Binding failures.

use graft_element::CapabilityKind;
use graft_traits::ResourceKind;
use thiserror::Error;

/// One failed descriptor from a [`bind`](crate::bind) run.
///
/// Failures are collected, never thrown: a run reports every miss it
/// encountered, in descriptor order, and the caller decides whether
/// that is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    /// A required descriptor's key matched nothing in the tree.
    #[error("binding of '{descriptor}' failed: no produced node carries the key '{key}'")]
    NodeNotFound { descriptor: String, key: String },

    /// The key matched more than one node. Keys must be unique within
    /// the bound subtree, so this reports even on optional descriptors.
    #[error("binding of '{descriptor}' failed: the key '{key}' matches {count} nodes")]
    DuplicateKey {
        descriptor: String,
        key: String,
        count: usize,
    },

    /// The match is the query root itself and lacks the requested
    /// capability. Capabilities are only provisioned on descendants.
    #[error("binding of '{descriptor}' failed: node '{key}' does not carry the {capability} capability")]
    CapabilityMissing {
        descriptor: String,
        key: String,
        capability: CapabilityKind,
    },

    /// A required resource could not be loaded.
    #[error("binding of '{descriptor}' failed: the {kind} resource '{path}' could not be loaded")]
    ResourceNotFound {
        descriptor: String,
        path: String,
        kind: ResourceKind,
    },
}

impl BindingError {
    /// Name of the descriptor this error belongs to.
    pub fn descriptor(&self) -> &str {
        match self {
            BindingError::NodeNotFound { descriptor, .. }
            | BindingError::DuplicateKey { descriptor, .. }
            | BindingError::CapabilityMissing { descriptor, .. }
            | BindingError::ResourceNotFound { descriptor, .. } => descriptor,
        }
    }
}
