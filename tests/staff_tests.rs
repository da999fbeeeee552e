//! Staff detection and cleanup tests — projections, line merging,
//! grouping, spacing, and the two erasure passes.

use omrlib::model::BinaryGrid;
use omrlib::recognizer::cleanup::{remove_note_stems, remove_staff_lines};
use omrlib::recognizer::staff::{
    detect_line_rows, detect_staves, group_staves, line_spacing, merge_close_lines, row_projection,
};
use omrlib::recognizer::RecognizerConfig;

/// A page with full-width ink rows at the given positions.
fn page_with_lines(rows: usize, cols: usize, lines: &[usize]) -> BinaryGrid {
    let mut grid = BinaryGrid::blank(rows, cols);
    for &line in lines {
        for col in 0..cols {
            grid.set_ink(line, col);
        }
    }
    grid
}

#[test]
fn projection_counts_ink_per_row() {
    let mut grid = BinaryGrid::blank(4, 5);
    grid.set_ink(1, 0);
    grid.set_ink(1, 3);
    grid.set_ink(2, 2);

    assert_eq!(row_projection(&grid), vec![0, 2, 1, 0]);
    println!("✓ row projection counts ink cells per row");
}

#[test]
fn line_detection_is_strictly_above_threshold() {
    let projection = vec![5, 121, 120, 200];
    assert_eq!(
        detect_line_rows(&projection, 120),
        vec![1, 3],
        "A row at exactly the threshold must not count as a line"
    );
    println!("✓ line detection requires counts strictly above the threshold");
}

#[test]
fn merging_collapses_thick_lines() {
    // Two lines each four rows thick.
    let rows = vec![10, 11, 12, 13, 30, 31, 32, 33];
    assert_eq!(merge_close_lines(&rows, 5), vec![10, 30]);

    // Thinner merge distance splits the first cluster.
    assert_eq!(merge_close_lines(&rows, 2), vec![10, 13, 30, 33]);
    println!("✓ merging collapses rows within the thickness distance");
}

#[test]
fn grouping_emits_runs_of_five() {
    assert_eq!(group_staves(&[10, 20, 30, 40, 50], 20), vec![[10, 20, 30, 40, 50]]);

    // A wide gap discards the partial group and restarts.
    assert_eq!(
        group_staves(&[10, 20, 30, 40, 100, 110, 120, 130, 140], 20),
        vec![[100, 110, 120, 130, 140]],
        "Four lines followed by a jump should not stitch into the next staff"
    );

    // Two complete staves.
    assert_eq!(
        group_staves(&[10, 20, 30, 40, 50, 100, 110, 120, 130, 140], 20),
        vec![[10, 20, 30, 40, 50], [100, 110, 120, 130, 140]]
    );
    println!("✓ grouping emits staves of five and resets on wide gaps");
}

#[test]
fn spacing_is_the_mean_gap() {
    assert_eq!(line_spacing(&[10, 20, 30, 40, 50], 20), 10.0);
    assert_eq!(line_spacing(&[10, 22, 30, 40, 50], 20), 10.0, "(12+8+10+10)/4");
    println!("✓ line spacing averages the four gaps");
}

#[test]
fn detect_staves_on_synthetic_page() {
    let grid = page_with_lines(60, 200, &[10, 20, 30, 40, 50]);
    let config = RecognizerConfig::default();

    let staves = detect_staves(&grid, &config);

    assert_eq!(staves.len(), 1, "Should find exactly one staff");
    assert_eq!(staves[0].lines, [10, 20, 30, 40, 50]);
    assert_eq!(staves[0].line_spacing, 10.0);
    assert_eq!(staves[0].spacing_rounded(), 10);
    println!("✓ detect_staves finds one staff with spacing 10");
}

#[test]
fn staff_line_removal_blanks_whole_rows() {
    let mut grid = page_with_lines(60, 200, &[10, 20, 30, 40, 50]);
    // A notehead-sized blob that must survive.
    for row in 34..=37 {
        for col in 80..=90 {
            grid.set_ink(row, col);
        }
    }
    let config = RecognizerConfig::default();

    remove_staff_lines(&mut grid, &config);

    for &line in &[10, 20, 30, 40, 50] {
        for col in 0..200 {
            assert!(!grid.is_ink(line, col), "Row {line} should be fully erased");
        }
    }
    assert!(grid.is_ink(35, 85), "Blob ink off the staff rows must survive");
    println!("✓ staff-line removal blanks projected rows and keeps blobs");
}

#[test]
fn stem_removal_erases_long_vertical_runs() {
    let mut grid = BinaryGrid::blank(40, 20);
    // A 15-cell run: erased.
    for row in 5..20 {
        grid.set_ink(row, 3);
    }
    // A 14-cell run: kept.
    for row in 5..19 {
        grid.set_ink(row, 7);
    }
    // A run touching the bottom edge: erased.
    for row in 24..40 {
        grid.set_ink(row, 11);
    }
    let config = RecognizerConfig::default();

    remove_note_stems(&mut grid, &config);

    assert!((5..20).all(|row| !grid.is_ink(row, 3)), "15-cell run should be erased");
    assert!((5..19).all(|row| grid.is_ink(row, 7)), "14-cell run should be kept");
    assert!((24..40).all(|row| !grid.is_ink(row, 11)), "Run ending at the bottom edge should be erased");
    println!("✓ stem removal erases runs of 15+, including bottom-edge runs");
}
