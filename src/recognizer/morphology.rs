//! Morphological operators over binary grids.
//!
//! Dilation and erosion both treat ink as foreground and take a
//! [`StructuringElement`] whose offsets are centered on the probed cell.
//! Closing (dilation then erosion) reconnects noteheads fractured by
//! staff-line removal.

use crate::model::{BinaryGrid, StructuringElement};

/// Dilate: every ink cell stamps the element's offsets around itself.
/// Offsets landing outside the grid are dropped.
pub fn dilate(grid: &BinaryGrid, element: &StructuringElement) -> BinaryGrid {
    let offsets = element.offsets();
    let mut out = BinaryGrid::blank(grid.rows(), grid.cols());
    for row in 0..grid.rows() as i32 {
        for col in 0..grid.cols() as i32 {
            if !grid.is_ink(row, col) {
                continue;
            }
            for &(dr, dc) in &offsets {
                let (r, c) = (row + dr, col + dc);
                if out.in_bounds(r, c) {
                    out.set_ink(r as usize, c as usize);
                }
            }
        }
    }
    out
}

/// Erode: an ink cell survives only if every in-bounds offset around it
/// is also ink. Offsets outside the grid count as satisfied, so ink
/// touching the border is not eaten away from the outside.
pub fn erode(grid: &BinaryGrid, element: &StructuringElement) -> BinaryGrid {
    let offsets = element.offsets();
    let mut out = BinaryGrid::blank(grid.rows(), grid.cols());
    for row in 0..grid.rows() as i32 {
        for col in 0..grid.cols() as i32 {
            if !grid.is_ink(row, col) {
                continue;
            }
            let survives = offsets.iter().all(|&(dr, dc)| {
                let (r, c) = (row + dr, col + dc);
                !grid.in_bounds(r, c) || grid.is_ink(r, c)
            });
            if survives {
                out.set_ink(row as usize, col as usize);
            }
        }
    }
    out
}

/// Closing: dilation followed by erosion with the same element.
pub fn close(grid: &BinaryGrid, element: &StructuringElement) -> BinaryGrid {
    erode(&dilate(grid, element), element)
}
