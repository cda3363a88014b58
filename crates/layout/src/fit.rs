//! Content hugging translation.

use graft_element::{ContentFit, FitMode};
use graft_scene::{AxisSizingMode, LayoutData, LayoutMode};

/// Builds the content-fit capability for a container whose auto-layout
/// sizes itself from its content on at least one axis.
///
/// The primary sizing mode governs the flow direction and the counter
/// mode the orthogonal one; only `Auto` axes hug.
pub fn content_fit_for(layout: &LayoutData) -> Option<ContentFit> {
    let primary_auto = layout.primary_axis_sizing_mode == AxisSizingMode::Auto;
    let counter_auto = layout.counter_axis_sizing_mode == AxisSizingMode::Auto;
    if !primary_auto && !counter_auto {
        return None;
    }

    let (horizontal_auto, vertical_auto) = match layout.layout_mode {
        LayoutMode::None => return None,
        LayoutMode::Horizontal => (primary_auto, counter_auto),
        LayoutMode::Vertical => (counter_auto, primary_auto),
    };

    let fit = |auto: bool| {
        if auto {
            FitMode::PreferredSize
        } else {
            FitMode::Unconstrained
        }
    };
    Some(ContentFit {
        horizontal: fit(horizontal_auto),
        vertical: fit(vertical_auto),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_axes_need_no_fitter() {
        let layout = LayoutData {
            layout_mode: LayoutMode::Horizontal,
            ..LayoutData::default()
        };
        assert_eq!(content_fit_for(&layout), None);
        assert_eq!(content_fit_for(&LayoutData::default()), None);
    }

    #[test]
    fn primary_auto_hugs_the_flow_axis() {
        let layout = LayoutData {
            layout_mode: LayoutMode::Horizontal,
            primary_axis_sizing_mode: AxisSizingMode::Auto,
            ..LayoutData::default()
        };
        let fit = content_fit_for(&layout).unwrap();
        assert_eq!(fit.horizontal, FitMode::PreferredSize);
        assert_eq!(fit.vertical, FitMode::Unconstrained);
    }

    #[test]
    fn counter_auto_hugs_the_orthogonal_axis() {
        let layout = LayoutData {
            layout_mode: LayoutMode::Vertical,
            counter_axis_sizing_mode: AxisSizingMode::Auto,
            ..LayoutData::default()
        };
        let fit = content_fit_for(&layout).unwrap();
        assert_eq!(fit.horizontal, FitMode::PreferredSize);
        assert_eq!(fit.vertical, FitMode::Unconstrained);
    }

    #[test]
    fn both_auto_hugs_both_axes() {
        let layout = LayoutData {
            layout_mode: LayoutMode::Vertical,
            primary_axis_sizing_mode: AxisSizingMode::Auto,
            counter_axis_sizing_mode: AxisSizingMode::Auto,
            ..LayoutData::default()
        };
        let fit = content_fit_for(&layout).unwrap();
        assert_eq!(fit.horizontal, FitMode::PreferredSize);
        assert_eq!(fit.vertical, FitMode::PreferredSize);
    }
}
