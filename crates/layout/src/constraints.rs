//! Constraint to anchor translation.

use graft_element::Anchors;
use graft_scene::{Constraints, HorizontalConstraint, VerticalConstraint};

/// Maps a node's resize constraints onto normalized anchors in the
/// parent, one axis at a time. Both anchor rectangles use the same
/// y-down space as element rects.
pub fn anchors_for(constraints: &Constraints) -> Anchors {
    let (min_x, max_x) = match constraints.horizontal {
        HorizontalConstraint::Left => (0.0, 0.0),
        HorizontalConstraint::Right => (1.0, 1.0),
        HorizontalConstraint::Center => (0.5, 0.5),
        HorizontalConstraint::LeftRight | HorizontalConstraint::Scale => (0.0, 1.0),
    };
    let (min_y, max_y) = match constraints.vertical {
        VerticalConstraint::Top => (0.0, 0.0),
        VerticalConstraint::Bottom => (1.0, 1.0),
        VerticalConstraint::Center => (0.5, 0.5),
        VerticalConstraint::TopBottom | VerticalConstraint::Scale => (0.0, 1.0),
    };

    let mut anchors = Anchors::default();
    anchors.min.x = min_x;
    anchors.max.x = max_x;
    anchors.min.y = min_y;
    anchors.max.y = max_y;
    anchors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constraints(
        horizontal: HorizontalConstraint,
        vertical: VerticalConstraint,
    ) -> Constraints {
        Constraints {
            horizontal,
            vertical,
        }
    }

    #[test]
    fn default_constraints_pin_top_left() {
        let anchors = anchors_for(&Constraints::default());
        assert_eq!(anchors, Anchors::point(0.0, 0.0));
    }

    #[test]
    fn corner_constraints_pin_to_points() {
        let anchors = anchors_for(&constraints(
            HorizontalConstraint::Right,
            VerticalConstraint::Bottom,
        ));
        assert_eq!(anchors, Anchors::point(1.0, 1.0));

        let anchors = anchors_for(&constraints(
            HorizontalConstraint::Center,
            VerticalConstraint::Center,
        ));
        assert_eq!(anchors, Anchors::point(0.5, 0.5));
    }

    #[test]
    fn spanning_constraints_stretch_their_axis() {
        let anchors = anchors_for(&constraints(
            HorizontalConstraint::LeftRight,
            VerticalConstraint::Top,
        ));
        assert!(anchors.stretches_horizontally());
        assert!(!anchors.stretches_vertically());

        let anchors = anchors_for(&constraints(
            HorizontalConstraint::Scale,
            VerticalConstraint::Scale,
        ));
        assert_eq!(anchors, Anchors::full());
    }
}
