//! Tuning constants for the recognition pipeline.
//!
//! Values are calibrated for scanned pages around 300 dpi with staves
//! spanning most of the page width. All distances are in grid cells.

// ─── Staff detection ───

/// Minimum ink count in a row projection for the row to count as part of
/// a staff line. The same threshold drives staff-line removal.
pub(super) const STAFF_LINE_THRESHOLD: u32 = 120;

/// Candidate rows closer than this are merged into one line.
pub(super) const LINE_MERGE_THICKNESS: i32 = 5;

/// A gap of this many rows or more between consecutive merged lines
/// resets the 5-line grouping. Gaps at or above it are also excluded
/// from the line-spacing mean.
pub(super) const STAFF_GAP_LIMIT: i32 = 20;

// ─── Cleanup ───

/// Side of the square structuring element used by the closing step.
pub(super) const CLOSING_ELEMENT_SIZE: usize = 3;

/// Vertical ink runs at least this long are erased as stems.
pub(super) const STEM_ERASE_MIN_RUN: usize = 15;

// ─── Segmentation ───

/// Component height must lie in `MIN_NOTE_HEIGHT..=MAX_NOTE_DIMENSION`.
pub(super) const MIN_NOTE_HEIGHT: i32 = 3;

/// Components taller than this are rejected as non-noteheads.
pub(super) const MAX_NOTE_HEIGHT: i32 = 20;

/// Component width must be at least this.
pub(super) const MIN_NOTE_WIDTH: i32 = 8;

/// Neither dimension may exceed this.
pub(super) const MAX_NOTE_DIMENSION: i32 = 50;

// ─── Classification ───

/// The stem probe searches a window extended this far above and to the
/// right of the note's bounding box.
pub(super) const STEM_PROBE_EXTENSION: i32 = 10;

/// Minimum vertical ink run inside the probe window for a stem.
pub(super) const STEM_PROBE_MIN_RUN: usize = 10;

/// Notes left of this column are outside any staff's acceptance window.
pub(super) const LEFT_MARGIN: i32 = 50;

/// A staff claims notes whose center row lies strictly within this many
/// rows of its outer lines.
pub(super) const STAFF_WINDOW_MARGIN: i32 = 20;

/// Half-width of the exact bands used by ledger-position pitch rules.
pub(super) const PITCH_TOLERANCE: i32 = 2;

// ─── Sequencing ───

/// Notes whose center columns differ by less than this belong to the
/// same chord cluster.
pub(super) const CHORD_GAP: i32 = 20;

// ─── Pitch tables ───

/// Degrees for centers sitting on a staff line, top line first:
/// FA, RE, SI, SOL, MI.
pub(super) const ON_LINE_DEGREES: [u8; 5] = [4, 2, 7, 5, 3];

/// Degrees for centers in the gap below each line, top gap first:
/// MI-space (between lines 1-2) down to FA-space (between lines 4-5).
pub(super) const BETWEEN_LINE_DEGREES: [u8; 4] = [3, 1, 6, 4];

/// Tone frequencies in hertz for degrees DO(1) through SI(7).
pub(super) const DEGREE_FREQUENCIES_HZ: [u32; 7] = [261, 293, 329, 349, 392, 440, 493];
