//! Auto-layout translation.
//!
//! Pure functions mapping the source model's layout vocabulary
//! (auto-layout frames, per-child align/grow, sizing modes, layout
//! grids, constraints) onto the produced element's layout capabilities.
//! No I/O and no tree walking happens here; the conversion crate calls
//! these per node.

pub mod anchor;
pub mod child;
pub mod constraints;
pub mod fit;
pub mod grid;
pub mod stack;

pub use anchor::anchor_for;
pub use child::{ChildArrangement, arrange_child};
pub use constraints::anchors_for;
pub use fit::content_fit_for;
pub use grid::grid_for;
pub use stack::stack_for;
