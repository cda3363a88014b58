//! Child alignment table for stack containers.

use graft_element::{Anchor, Axis};
use graft_scene::{CounterAxisAlign, PrimaryAxisAlign};

/// Maps a container's primary/counter alignment pair onto the nine
/// position anchor, taking the flow axis into account.
///
/// For a horizontal flow the primary axis picks the column and the
/// counter axis the row; a vertical flow transposes that.
pub fn anchor_for(axis: Axis, primary: PrimaryAxisAlign, counter: CounterAxisAlign) -> Anchor {
    use CounterAxisAlign as Counter;
    use PrimaryAxisAlign as Primary;

    match axis {
        Axis::Horizontal => match (primary, counter) {
            (Primary::Min, Counter::Min) => Anchor::UpperLeft,
            (Primary::Min, Counter::Center) => Anchor::MiddleLeft,
            (Primary::Min, Counter::Max) => Anchor::LowerLeft,
            (Primary::Center, Counter::Min) => Anchor::UpperCenter,
            (Primary::Center, Counter::Center) => Anchor::MiddleCenter,
            (Primary::Center, Counter::Max) => Anchor::LowerCenter,
            (Primary::Max, Counter::Min) => Anchor::UpperRight,
            (Primary::Max, Counter::Center) => Anchor::MiddleRight,
            (Primary::Max, Counter::Max) => Anchor::LowerRight,
        },
        Axis::Vertical => match (primary, counter) {
            (Primary::Min, Counter::Min) => Anchor::UpperLeft,
            (Primary::Min, Counter::Center) => Anchor::UpperCenter,
            (Primary::Min, Counter::Max) => Anchor::UpperRight,
            (Primary::Center, Counter::Min) => Anchor::MiddleLeft,
            (Primary::Center, Counter::Center) => Anchor::MiddleCenter,
            (Primary::Center, Counter::Max) => Anchor::MiddleRight,
            (Primary::Max, Counter::Min) => Anchor::LowerLeft,
            (Primary::Max, Counter::Center) => Anchor::LowerCenter,
            (Primary::Max, Counter::Max) => Anchor::LowerRight,
        },
    }
}
