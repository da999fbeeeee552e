//! Note classification against a claiming staff.
//!
//! A staff walks every still-unclaimed candidate; those inside its
//! acceptance window are claimed for good and receive stem, head-fill,
//! duration, and pitch attributes. Later staves never see a claimed note
//! again.

use crate::model::{BinaryGrid, BoundingBox, Note, Staff, StemKind};

use super::RecognizerConfig;

/// Probe for a stem: scan the bounding box extended upward and to the
/// right, column by column, for a vertical ink run of at least
/// `stem_probe_min_run` cells. Out-of-bounds cells break the run.
pub fn has_stem(grid: &BinaryGrid, bbox: &BoundingBox, config: &RecognizerConfig) -> bool {
    let min_run = config.stem_probe_min_run;
    let top = bbox.top - config.stem_probe_extension;
    let right = bbox.right() + config.stem_probe_extension;

    for col in bbox.left..right {
        let mut run = 0usize;
        for row in top..bbox.bottom() {
            if grid.is_ink(row, col) {
                run += 1;
            } else {
                if run >= min_run {
                    return true;
                }
                run = 0;
            }
        }
        if run >= min_run {
            return true;
        }
    }
    false
}

/// Probe the head fill: hollow iff background cells inside the bounding
/// box outnumber ink cells two to one.
pub fn is_hollow(grid: &BinaryGrid, bbox: &BoundingBox) -> bool {
    let mut ink = 0u32;
    let mut blank = 0u32;
    for row in bbox.top..bbox.bottom() {
        for col in bbox.left..bbox.right() {
            if !grid.in_bounds(row, col) {
                continue;
            }
            if grid.is_ink(row, col) {
                ink += 1;
            } else {
                blank += 1;
            }
        }
    }
    blank * 2 > ink
}

/// Duration class from the head fill and stem state.
///
/// 64 whole, 32 half, 16 quarter, 8 eighth (the flagged stem state);
/// any other combination is unresolved (−1).
pub fn duration_class(hollow: bool, stem: StemKind) -> i32 {
    match (hollow, stem) {
        (true, StemKind::Absent) => 64,
        (true, StemKind::Present) => 32,
        (false, StemKind::Present) => 16,
        (_, StemKind::Flagged) => 8,
        _ => -1,
    }
}

/// Resolve the diatonic degree of a note center against the staff.
///
/// The degree tables come from the config so callers can rebind the
/// staff positions without touching the classifier. The rules run in a
/// fixed order; the mix of open intervals and exact bands around ledger
/// positions is deliberate and position-dependent, so do not reorder or
/// symmetrize them. Returns 0 when no rule matches.
pub fn resolve_degree(staff: &Staff, center_row: i32, config: &RecognizerConfig) -> u8 {
    let lines = &staff.lines;
    let spacing = staff.spacing_rounded();
    let tolerance = config.pitch_tolerance;

    // On a line, within tolerance.
    for (i, &line) in lines.iter().enumerate() {
        if (center_row - line).abs() <= tolerance {
            return config.on_line_degrees[i];
        }
    }

    // Strictly between adjacent lines.
    for (i, pair) in lines.windows(2).enumerate() {
        if center_row > pair[0] && center_row < pair[1] {
            return config.between_line_degrees[i];
        }
    }

    // Above the staff: the open space under the first ledger position,
    // then everything past the second ledger position.
    if center_row < lines[0] && center_row > lines[0] - spacing {
        return 5;
    }
    if center_row < lines[0] - spacing && center_row < lines[0] - 2 * spacing {
        return 7;
    }
    for t in -tolerance..=tolerance {
        if center_row == lines[0] - spacing + t {
            return 6;
        }
        if center_row == lines[0] - 2 * spacing + t {
            return 1;
        }
    }

    // Below the staff.
    if center_row > lines[4] && center_row < lines[4] + spacing {
        return 2;
    }
    for t in -tolerance..=tolerance {
        if center_row == lines[4] + spacing + t {
            return 1;
        }
    }

    0
}

/// Whether the staff's acceptance window takes this note: center row
/// strictly inside the staff band widened by the window margin, left
/// edge past the page margin, and a box no taller than it is wide.
fn accepts(staff: &Staff, note: &Note, config: &RecognizerConfig) -> bool {
    note.center_row > staff.first_line() - config.staff_window_margin
        && note.center_row < staff.last_line() + config.staff_window_margin
        && note.bbox.left > config.left_margin
        && note.bbox.height <= note.bbox.width
}

/// Let one staff claim and classify every unclaimed note in its window.
///
/// `grid` must be the post-closing grid with stems still present, since
/// the stem probe reads it. Claimed notes are never revisited.
pub fn claim_notes(
    grid: &BinaryGrid,
    staff: &Staff,
    notes: &mut [Note],
    config: &RecognizerConfig,
) {
    for note in notes.iter_mut() {
        if note.claimed || !accepts(staff, note, config) {
            continue;
        }
        note.claimed = true;

        let stem = if has_stem(grid, &note.bbox, config) {
            StemKind::Present
        } else {
            StemKind::Absent
        };
        let hollow = is_hollow(grid, &note.bbox);

        note.stem = Some(stem);
        note.hollow = Some(hollow);
        note.duration = duration_class(hollow, stem);
        note.degree = resolve_degree(staff, note.center_row, config);
    }
}
