//! Error type for single-node conversion failures.

use graft_scene::NodeKind;
use graft_traits::AssetError;
use graft_types::NodeId;
use thiserror::Error;

/// A failure confined to one node.
///
/// Conversion errors never abort a run. The dispatcher records the
/// error as a diagnostic and drops the offending subtree, so every
/// variant here describes exactly one node.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("the {converter} cannot convert {kind} nodes ('{node_id}')")]
    WrongKind {
        converter: &'static str,
        kind: NodeKind,
        node_id: NodeId,
    },

    #[error("asset generation failed: {0}")]
    Asset(#[from] AssetError),
}
