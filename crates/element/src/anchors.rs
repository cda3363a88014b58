//! Anchoring primitives for the produced element tree.

use graft_types::Vec2;
use serde::{Deserialize, Serialize};

/// A nine-position alignment, used for placing children inside a
/// stack container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Anchor {
    #[default]
    UpperLeft,
    UpperCenter,
    UpperRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    LowerLeft,
    LowerCenter,
    LowerRight,
}

/// Normalized anchor rectangle inside the parent, y increasing
/// downward to match `Rect`. `min == max` pins the element to a point;
/// a differing axis stretches it with the parent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anchors {
    pub min: Vec2,
    pub max: Vec2,
}

impl Anchors {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Anchored to a single normalized point.
    pub fn point(x: f32, y: f32) -> Self {
        Self {
            min: Vec2 { x, y },
            max: Vec2 { x, y },
        }
    }

    /// Stretches with the parent on both axes.
    pub fn full() -> Self {
        Self {
            min: Vec2 { x: 0.0, y: 0.0 },
            max: Vec2 { x: 1.0, y: 1.0 },
        }
    }

    pub fn stretches_horizontally(&self) -> bool {
        self.min.x != self.max.x
    }

    pub fn stretches_vertically(&self) -> bool {
        self.min.y != self.max.y
    }
}
