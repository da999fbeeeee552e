//! Recognition pipeline — converts a scanned page into staves and notes.
//!
//! The pipeline binarizes the page, locates 5-line staves from row
//! projections, erases staff lines and stems, segments the remaining ink
//! into note candidates, and classifies each candidate's pitch and
//! duration against the staff that claims it.

pub mod binarize;
pub mod cleanup;
pub mod classify;
mod constants;
pub mod morphology;
pub mod segment;
pub mod sequence;
pub mod staff;

use crate::model::{PixelGrid, Recognition, StructuringElement};
use constants::*;

// ═══════════════════════════════════════════════════════════════════════
// Configuration
// ═══════════════════════════════════════════════════════════════════════

/// Tuning knobs for every pipeline stage.
///
/// The defaults suit scanned pages around 300 dpi. Callers with unusual
/// material (very thick staff lines, oversized noteheads) can override
/// individual fields and pass the result to [`recognize`].
#[derive(Debug, Clone)]
pub struct RecognizerConfig {
    /// Minimum ink count for a row projection to mark a staff line.
    pub staff_line_threshold: u32,
    /// Candidate rows closer than this merge into one line.
    pub line_merge_thickness: i32,
    /// Row gap at or above this resets 5-line grouping and is excluded
    /// from the spacing mean.
    pub staff_gap_limit: i32,
    /// Side of the square element used by the closing step.
    pub closing_element_size: usize,
    /// Vertical ink runs at least this long are erased as stems.
    pub stem_erase_min_run: usize,
    /// Rows/columns the stem probe extends beyond the bounding box.
    pub stem_probe_extension: i32,
    /// Minimum vertical ink run for the stem probe to fire.
    pub stem_probe_min_run: usize,
    /// Notes left of this column are never claimed by a staff.
    pub left_margin: i32,
    /// Acceptance window margin above/below a staff's outer lines.
    pub staff_window_margin: i32,
    /// Half-width of the exact ledger bands in pitch resolution.
    pub pitch_tolerance: i32,
    /// Center-column gap below which notes cluster into a chord.
    pub chord_gap: i32,
    /// Minimum component height for a note candidate.
    pub min_note_height: i32,
    /// Maximum component height for a note candidate.
    pub max_note_height: i32,
    /// Minimum component width for a note candidate.
    pub min_note_width: i32,
    /// Upper bound on either component dimension.
    pub max_note_dimension: i32,
    /// Degrees for centers on a staff line, top line first.
    pub on_line_degrees: [u8; 5],
    /// Degrees for centers between adjacent lines, top gap first.
    pub between_line_degrees: [u8; 4],
    /// Tone frequencies in hertz, indexed by degree − 1.
    pub degree_frequencies_hz: [u32; 7],
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            staff_line_threshold: STAFF_LINE_THRESHOLD,
            line_merge_thickness: LINE_MERGE_THICKNESS,
            staff_gap_limit: STAFF_GAP_LIMIT,
            closing_element_size: CLOSING_ELEMENT_SIZE,
            stem_erase_min_run: STEM_ERASE_MIN_RUN,
            stem_probe_extension: STEM_PROBE_EXTENSION,
            stem_probe_min_run: STEM_PROBE_MIN_RUN,
            left_margin: LEFT_MARGIN,
            staff_window_margin: STAFF_WINDOW_MARGIN,
            pitch_tolerance: PITCH_TOLERANCE,
            chord_gap: CHORD_GAP,
            min_note_height: MIN_NOTE_HEIGHT,
            max_note_height: MAX_NOTE_HEIGHT,
            min_note_width: MIN_NOTE_WIDTH,
            max_note_dimension: MAX_NOTE_DIMENSION,
            on_line_degrees: ON_LINE_DEGREES,
            between_line_degrees: BETWEEN_LINE_DEGREES,
            degree_frequencies_hz: DEGREE_FREQUENCIES_HZ,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Run the full recognition pipeline over one grayscale page.
///
/// Stages run in fixed order: binarization, staff detection, staff-line
/// removal, morphological closing, stem erasure, segmentation, then
/// per-staff classification. Classification probes (stem, hollow head)
/// read the closed grid, which still carries the stems the eraser later
/// strips for segmentation.
///
/// Degenerate pages (no detectable staves) still return every surviving
/// note candidate; those notes simply stay unclaimed.
pub fn recognize(page: &PixelGrid, config: &RecognizerConfig) -> Recognition {
    if page.rows() == 0 || page.cols() == 0 {
        return Recognition::empty(page.rows(), page.cols());
    }

    let binary = binarize::binarize(page);

    let staves = staff::detect_staves(&binary, config);

    let mut cleaned = binary.clone();
    cleanup::remove_staff_lines(&mut cleaned, config);

    let element = StructuringElement::square(config.closing_element_size);
    let closed = morphology::close(&cleaned, &element);

    let mut destemmed = closed.clone();
    cleanup::remove_note_stems(&mut destemmed, config);

    let mut notes = segment::segment_notes(&destemmed, config);

    for staff in &staves {
        classify::claim_notes(&closed, staff, &mut notes, config);
    }

    Recognition { rows: page.rows(), cols: page.cols(), staves, notes }
}
