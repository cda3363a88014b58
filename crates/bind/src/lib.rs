//! Declarative binding of produced trees.
//!
//! Conversion hands back an anonymous tree; downstream code still has
//! to relocate specific nodes in it (the confirm button, the title
//! text) and wire them to typed slots. Each bindable type declares a
//! [`Bindings`] set once, and [`bind`] resolves the whole set against
//! a tree in one pass, collecting every failure instead of stopping at
//! the first.

pub mod descriptor;
pub mod error;
pub mod resolver;

pub use descriptor::{BindingDescriptor, BindingTarget, Bindings};
pub use error::BindingError;
pub use resolver::{BindingResult, BoundValue, bind};
