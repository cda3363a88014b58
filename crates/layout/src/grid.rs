//! Layout grid translation.

use graft_element::GridLayout;
use graft_scene::{GridPattern, GridTrack};
use graft_types::Size;
use log::debug;

/// Builds the grid capability from a frame's layout grids.
///
/// Only the exact shape of one column track plus one row track (in
/// either order) translates; anything else is not a grid in the
/// produced model and yields `None`. Cell sizes follow the track
/// arithmetic directly and are deliberately not clamped, so degenerate
/// tracks can produce non-positive cells.
pub fn grid_for(tracks: &[GridTrack], container: Size) -> Option<GridLayout> {
    let (columns, rows) = match tracks {
        [a, b] if a.pattern == GridPattern::Columns && b.pattern == GridPattern::Rows => (a, b),
        [a, b] if a.pattern == GridPattern::Rows && b.pattern == GridPattern::Columns => (b, a),
        _ => {
            if !tracks.is_empty() {
                debug!(
                    "skipping grid translation: {} track(s), need exactly one column and one row track",
                    tracks.len()
                );
            }
            return None;
        }
    };

    let span = |track: &GridTrack| (track.count as f32 - 1.0) * track.gutter_size + 2.0 * track.offset;

    let mut grid = GridLayout::default();
    grid.spacing.x = columns.gutter_size;
    grid.padding.left = columns.offset;
    grid.padding.right = columns.offset;
    grid.cell_size.width = container.width - span(columns);

    grid.spacing.y = rows.gutter_size;
    grid.padding.top = rows.offset;
    grid.padding.bottom = rows.offset;
    grid.cell_size.height = container.height - span(rows);

    Some(grid)
}
