//! Drag-to-reorder engine for the settings list
//!
//! One row at a time can be in the dragging role. On begin the gesture
//! records the grab offset (so the row tracks the pointer at a fixed
//! relative position) and raises the row above its siblings. Every
//! pointer move recomputes the grid layout, reinserts the dragged row at
//! most once when its candidate center overlaps another row's center by
//! more than half that row's height, and then pins the row to the
//! clamped pointer position. Release snaps everything back to the grid;
//! the caller then commits the visual order to the canonical list.
//!
//! Loss of input focus mid-gesture must go through the same finish and
//! commit path, otherwise a row is left at its freeform position.

use tracing::trace;

/// Row-view accessors the engine needs from the host toolkit. The row
/// itself stays opaque.
pub trait DragRow {
    fn name(&self) -> &str;
    fn height(&self) -> f32;
    fn y(&self) -> f32;
    fn set_y(&mut self, y: f32);
    /// Paint this row above its siblings while it is dragged.
    fn set_raised(&mut self, raised: bool);
}

/// Vertical geometry of the list the rows are stacked in.
#[derive(Debug, Clone, Copy)]
pub struct ListGeometry {
    /// Y of the first row's grid position.
    pub top: f32,
    /// Gap between adjacent rows.
    pub spacing: f32,
}

/// Stack every row at its grid position from the top of the list.
pub fn layout_rows(rows: &mut [impl DragRow], geometry: ListGeometry) {
    let mut y = geometry.top;
    for row in rows {
        row.set_y(y);
        y += row.height() + geometry.spacing;
    }
}

/// One in-progress drag of a single row.
pub struct DragGesture {
    index: usize,
    grab_offset_y: f32,
}

impl DragGesture {
    /// Enter the dragging state for the row at `index`.
    pub fn begin(rows: &mut [impl DragRow], index: usize, pointer_y: f32) -> Self {
        let grab_offset_y = rows[index].y() - pointer_y;
        for row in rows.iter_mut() {
            row.set_raised(false);
        }
        rows[index].set_raised(true);
        trace!(index, grab_offset_y, "Drag started");
        Self {
            index,
            grab_offset_y,
        }
    }

    /// Current index of the dragged row within the list.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Handle one pointer-move event.
    ///
    /// At most one reinsertion happens per event: rows are scanned in
    /// list order, the dragged row never matches itself, and the first
    /// overlapping row wins. The dragged row ends the event at the
    /// pointer position clamped to the list bounds.
    pub fn update<R: DragRow>(&mut self, rows: &mut Vec<R>, geometry: ListGeometry, pointer_y: f32) {
        layout_rows(rows, geometry);
        let Some(last) = rows.last() else {
            return;
        };
        let max_y = last.y();

        let desired_y = pointer_y + self.grab_offset_y;
        let mut wants_index = None;
        for (i, row) in rows.iter().enumerate() {
            if i == self.index {
                continue;
            }
            let half_height = row.height() / 2.0;
            let row_middle = row.y() + half_height;
            if (row_middle - (desired_y + half_height)).abs() < half_height {
                wants_index = Some(i);
                break;
            }
        }
        if let Some(target) = wants_index {
            let dragged = rows.remove(self.index);
            rows.insert(target, dragged);
            trace!(from = self.index, to = target, "Reinserted dragged row");
            self.index = target;
            layout_rows(rows, geometry);
        }

        rows[self.index].set_y(desired_y.clamp(geometry.top, max_y));
    }

    /// Leave the dragging state: discard the freeform position and snap
    /// every row back to its grid slot. The caller commits the resulting
    /// order to the canonical list, also when nothing moved.
    pub fn finish(self, rows: &mut [impl DragRow], geometry: ListGeometry) {
        layout_rows(rows, geometry);
        rows[self.index].set_raised(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct TestRow {
        name: &'static str,
        y: f32,
        height: f32,
        raised: bool,
    }

    impl TestRow {
        fn new(name: &'static str) -> Self {
            Self {
                name,
                y: 0.0,
                height: 28.0,
                raised: false,
            }
        }
    }

    impl DragRow for TestRow {
        fn name(&self) -> &str {
            self.name
        }
        fn height(&self) -> f32 {
            self.height
        }
        fn y(&self) -> f32 {
            self.y
        }
        fn set_y(&mut self, y: f32) {
            self.y = y;
        }
        fn set_raised(&mut self, raised: bool) {
            self.raised = raised;
        }
    }

    const GEOMETRY: ListGeometry = ListGeometry {
        top: 10.0,
        spacing: 4.0,
    };

    fn rows() -> Vec<TestRow> {
        let mut rows = vec![
            TestRow::new("Super"),
            TestRow::new("Wifi"),
            TestRow::new("Volume"),
            TestRow::new("Date"),
        ];
        layout_rows(&mut rows, GEOMETRY);
        rows
    }

    fn names(rows: &[TestRow]) -> Vec<&'static str> {
        rows.iter().map(|r| r.name).collect()
    }

    #[test]
    fn test_layout_stacks_rows_with_spacing() {
        let rows = rows();
        assert_eq!(rows[0].y, 10.0);
        assert_eq!(rows[1].y, 42.0);
        assert_eq!(rows[2].y, 74.0);
        assert_eq!(rows[3].y, 106.0);
    }

    #[test]
    fn test_begin_records_offset_and_raises_row() {
        let mut rows = rows();
        // Grab the second row 5px below its top edge
        let gesture = DragGesture::begin(&mut rows, 1, 47.0);
        assert_eq!(gesture.grab_offset_y, -5.0);
        assert!(rows[1].raised);
        assert!(!rows[0].raised && !rows[2].raised && !rows[3].raised);
    }

    #[test]
    fn test_small_move_does_not_reorder() {
        let mut rows = rows();
        let mut gesture = DragGesture::begin(&mut rows, 1, 47.0);
        gesture.update(&mut rows, GEOMETRY, 50.0);
        assert_eq!(names(&rows), vec!["Super", "Wifi", "Volume", "Date"]);
        // Row still tracks the pointer at the grab offset
        assert_eq!(rows[1].y, 45.0);
    }

    #[test]
    fn test_dragging_down_swaps_with_next_row() {
        let mut rows = rows();
        let mut gesture = DragGesture::begin(&mut rows, 1, 42.0);
        // Pointer over the third row's slot
        gesture.update(&mut rows, GEOMETRY, 74.0);
        assert_eq!(names(&rows), vec!["Super", "Volume", "Wifi", "Date"]);
        assert_eq!(gesture.index(), 2);
    }

    #[test]
    fn test_dragging_up_swaps_with_previous_row() {
        let mut rows = rows();
        let mut gesture = DragGesture::begin(&mut rows, 2, 74.0);
        gesture.update(&mut rows, GEOMETRY, 42.0);
        assert_eq!(names(&rows), vec!["Super", "Volume", "Wifi", "Date"]);
        assert_eq!(gesture.index(), 1);
    }

    #[test]
    fn test_at_most_one_reinsertion_per_event() {
        let mut rows = rows();
        let mut gesture = DragGesture::begin(&mut rows, 0, 10.0);
        // Jump straight to the bottom: one splice moves the row to the
        // matched slot, everything in between shifts by a single slot
        gesture.update(&mut rows, GEOMETRY, 106.0);
        assert_eq!(names(&rows), vec!["Wifi", "Volume", "Date", "Super"]);
        assert_eq!(gesture.index(), 3);
        assert_eq!(rows.len(), 4);
    }

    #[test]
    fn test_drag_clamped_to_list_bounds() {
        let mut rows = rows();
        let mut gesture = DragGesture::begin(&mut rows, 0, 10.0);
        gesture.update(&mut rows, GEOMETRY, -500.0);
        assert_eq!(rows[gesture.index()].y, GEOMETRY.top);

        let mut bottom_rows = self::rows();
        let mut gesture = DragGesture::begin(&mut bottom_rows, 3, 106.0);
        gesture.update(&mut bottom_rows, GEOMETRY, 5000.0);
        // Never below the last grid slot
        assert_eq!(bottom_rows[gesture.index()].y, 106.0);
    }

    #[test]
    fn test_drag_preserves_name_multiset() {
        let mut rows = rows();
        let mut gesture = DragGesture::begin(&mut rows, 1, 42.0);
        for pointer_y in [60.0, 80.0, 100.0, 30.0, 12.0] {
            gesture.update(&mut rows, GEOMETRY, pointer_y);
            assert_eq!(rows.len(), 4);
        }
        let mut sorted = names(&rows);
        sorted.sort_unstable();
        assert_eq!(sorted, vec!["Date", "Super", "Volume", "Wifi"]);
    }

    #[test]
    fn test_finish_snaps_rows_to_grid() {
        let mut rows = rows();
        let mut gesture = DragGesture::begin(&mut rows, 1, 42.0);
        gesture.update(&mut rows, GEOMETRY, 81.0);
        let index = gesture.index();
        gesture.finish(&mut rows, GEOMETRY);
        assert_eq!(rows[0].y, 10.0);
        assert_eq!(rows[1].y, 42.0);
        assert_eq!(rows[2].y, 74.0);
        assert_eq!(rows[3].y, 106.0);
        assert!(!rows[index].raised);
    }

    #[test]
    fn test_noop_gesture_leaves_order_unchanged() {
        let mut rows = rows();
        let gesture = DragGesture::begin(&mut rows, 2, 74.0);
        gesture.finish(&mut rows, GEOMETRY);
        assert_eq!(names(&rows), vec!["Super", "Wifi", "Volume", "Date"]);
    }

    #[test]
    fn test_update_on_empty_list_is_harmless() {
        let mut rows: Vec<TestRow> = vec![TestRow::new("Super")];
        let mut gesture = DragGesture::begin(&mut rows, 0, 10.0);
        rows.clear();
        gesture.update(&mut rows, GEOMETRY, 50.0);
    }
}
