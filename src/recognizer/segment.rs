//! Connected-component segmentation of the cleaned grid.
//!
//! Flood fill with 8-connectivity; each component's bounding box is
//! gated by notehead geometry before becoming a note candidate.

use std::collections::VecDeque;

use crate::model::{BinaryGrid, BoundingBox, Note};

use super::RecognizerConfig;

const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Label every ink component and keep those whose bounding box passes
/// the notehead size gate. Candidates come back in scan order (top to
/// bottom, left to right by first pixel).
pub fn segment_notes(grid: &BinaryGrid, config: &RecognizerConfig) -> Vec<Note> {
    let rows = grid.rows();
    let cols = grid.cols();
    let mut labels = vec![0u32; rows * cols];
    let mut next_label = 0u32;
    let mut notes = Vec::new();

    for i in 0..rows {
        for j in 0..cols {
            if !grid.is_ink(i as i32, j as i32) || labels[i * cols + j] != 0 {
                continue;
            }
            next_label += 1;

            let mut queue = VecDeque::new();
            queue.push_back((i as i32, j as i32));
            labels[i * cols + j] = next_label;

            let mut min_row = i as i32;
            let mut max_row = i as i32;
            let mut min_col = j as i32;
            let mut max_col = j as i32;

            while let Some((r, c)) = queue.pop_front() {
                for &(dr, dc) in &NEIGHBOR_OFFSETS {
                    let (r2, c2) = (r + dr, c + dc);
                    if !grid.is_ink(r2, c2) {
                        continue;
                    }
                    let idx = r2 as usize * cols + c2 as usize;
                    if labels[idx] != 0 {
                        continue;
                    }
                    labels[idx] = next_label;
                    queue.push_back((r2, c2));
                    min_row = min_row.min(r2);
                    max_row = max_row.max(r2);
                    min_col = min_col.min(c2);
                    max_col = max_col.max(c2);
                }
            }

            let height = max_row - min_row + 2;
            let width = max_col - min_col + 2;

            if height >= config.min_note_height
                && height <= config.max_note_height
                && width >= config.min_note_width
                && height <= config.max_note_dimension
                && width <= config.max_note_dimension
            {
                notes.push(Note::from_bbox(BoundingBox {
                    top: min_row,
                    left: min_col,
                    width,
                    height,
                }));
            }
        }
    }

    notes
}
