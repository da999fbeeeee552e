//! Staff detection from horizontal ink projections.
//!
//! A staff line shows up as a row whose ink count clears the projection
//! threshold. Candidate rows are merged (thick lines span several rows),
//! then grouped into runs of five to form staves.

use crate::model::{BinaryGrid, Staff};

use super::RecognizerConfig;

/// Ink count per row.
pub fn row_projection(grid: &BinaryGrid) -> Vec<u32> {
    let mut projection = vec![0u32; grid.rows()];
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            if grid.is_ink(row as i32, col as i32) {
                projection[row] += 1;
            }
        }
    }
    projection
}

/// Rows whose ink count strictly exceeds the threshold, ascending.
pub fn detect_line_rows(projection: &[u32], threshold: u32) -> Vec<i32> {
    projection
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > threshold)
        .map(|(row, _)| row as i32)
        .collect()
}

/// Collapse rows belonging to one thick line: a candidate is kept only
/// when it sits more than `thickness` rows below the previously kept one.
pub fn merge_close_lines(rows: &[i32], thickness: i32) -> Vec<i32> {
    let mut merged = Vec::new();
    let mut prev = -thickness * 2;
    for &row in rows {
        if row - prev > thickness {
            merged.push(row);
            prev = row;
        }
    }
    merged
}

/// Group merged line rows into staves of five.
///
/// Consecutive rows closer than `gap_limit` accumulate; reaching five
/// emits a staff and starts fresh. A gap at or beyond the limit discards
/// the partial group and restarts from the current row, so stray lines
/// between staves cannot stitch two staves together.
pub fn group_staves(merged: &[i32], gap_limit: i32) -> Vec<[i32; 5]> {
    let mut staves = Vec::new();
    let mut current: Vec<i32> = Vec::new();
    for &row in merged {
        if current.is_empty() || row - current.last().unwrap() < gap_limit {
            current.push(row);
            if current.len() == 5 {
                staves.push([current[0], current[1], current[2], current[3], current[4]]);
                current.clear();
            }
        } else {
            current.clear();
            current.push(row);
        }
    }
    staves
}

/// Mean gap between consecutive lines, excluding gaps beyond the limit
/// from both the sum and the divisor.
pub fn line_spacing(lines: &[i32; 5], gap_limit: i32) -> f64 {
    let mut total = 0i32;
    let mut spaces = lines.len() as i32 - 1;
    for pair in lines.windows(2) {
        let gap = pair[1] - pair[0];
        if gap <= gap_limit {
            total += gap;
        } else {
            spaces -= 1;
        }
    }
    total as f64 / spaces as f64
}

/// Detect every 5-line staff on the page, with per-staff line spacing.
pub fn detect_staves(grid: &BinaryGrid, config: &RecognizerConfig) -> Vec<Staff> {
    let projection = row_projection(grid);
    let rows = detect_line_rows(&projection, config.staff_line_threshold);
    let merged = merge_close_lines(&rows, config.line_merge_thickness);
    group_staves(&merged, config.staff_gap_limit)
        .into_iter()
        .map(|lines| Staff {
            lines,
            line_spacing: line_spacing(&lines, config.staff_gap_limit),
        })
        .collect()
}
