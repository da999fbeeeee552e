//! Staff-line and stem erasure.
//!
//! Both passes overwrite ink with background in place: staff lines go by
//! whole rows (driven by the same projection threshold that found them),
//! stems go by long vertical ink runs per column.

use crate::model::BinaryGrid;

use super::staff::row_projection;
use super::RecognizerConfig;

/// Blank every row whose ink count exceeds the staff-line threshold.
pub fn remove_staff_lines(grid: &mut BinaryGrid, config: &RecognizerConfig) {
    let projection = row_projection(grid);
    for (row, &count) in projection.iter().enumerate() {
        if count > config.staff_line_threshold {
            grid.blank_row(row);
        }
    }
}

/// Blank every vertical ink run of at least `stem_erase_min_run` cells.
///
/// Runs are scanned top to bottom per column; a run touching the bottom
/// edge is erased too.
pub fn remove_note_stems(grid: &mut BinaryGrid, config: &RecognizerConfig) {
    let min_run = config.stem_erase_min_run;
    for col in 0..grid.cols() {
        let mut run = 0usize;
        for row in 0..grid.rows() {
            if grid.is_ink(row as i32, col as i32) {
                run += 1;
            } else {
                if run >= min_run {
                    for k in row - run..row {
                        grid.set_blank(k, col);
                    }
                }
                run = 0;
            }
        }
        if run >= min_run {
            for k in grid.rows() - run..grid.rows() {
                grid.set_blank(k, col);
            }
        }
    }
}
