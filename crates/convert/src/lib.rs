//! Node conversion: a scene tree goes in, an element tree comes out.
//!
//! The dispatcher walks the source tree depth-first, routing every
//! node to the converter registered for its kind. Converters build
//! [`ProducedNode`]s, synthesize styles from paints and effects, and
//! attach the layout translation on auto-layout containers. Failures
//! stay local: a node that cannot convert is reported through the
//! context's diagnostics and skipped, and the run still completes.

pub mod context;
pub mod converters;
pub mod dispatcher;
pub mod error;
mod styles;
pub mod tree;

pub use context::{ConvertContext, Diagnostic, Diagnostics, Severity};
pub use dispatcher::{ConverterRegistry, Dispatcher, NodeConverter};
pub use error::ConvertError;
pub use tree::ProducedNode;
