pub mod assets;
pub mod color;
pub mod geometry;
pub mod ids;

pub use assets::{AssetHandle, AssetKind};
pub use color::Color;
pub use geometry::{EdgeInsets, Rect, Size, Vec2};
pub use ids::NodeId;
