//! Morphology tests — dilation, erosion, and closing on small grids.

use omrlib::model::{BinaryGrid, StructuringElement};
use omrlib::recognizer::morphology::{close, dilate, erode};

fn ink_cells(grid: &BinaryGrid) -> Vec<(i32, i32)> {
    let mut cells = Vec::new();
    for row in 0..grid.rows() as i32 {
        for col in 0..grid.cols() as i32 {
            if grid.is_ink(row, col) {
                cells.push((row, col));
            }
        }
    }
    cells
}

#[test]
fn dilation_grows_single_cell_to_element() {
    let mut grid = BinaryGrid::blank(7, 7);
    grid.set_ink(3, 3);

    let dilated = dilate(&grid, &StructuringElement::square(3));

    let cells = ink_cells(&dilated);
    assert_eq!(cells.len(), 9, "One cell should grow into the full 3x3 element");
    for row in 2..=4 {
        for col in 2..=4 {
            assert!(dilated.is_ink(row, col), "Cell ({row}, {col}) should be ink");
        }
    }
    println!("✓ dilation grows a single cell into a 3x3 block");
}

#[test]
fn dilation_drops_out_of_bounds_offsets() {
    let mut grid = BinaryGrid::blank(5, 5);
    grid.set_ink(0, 0);

    let dilated = dilate(&grid, &StructuringElement::square(3));

    let cells = ink_cells(&dilated);
    assert_eq!(
        cells,
        vec![(0, 0), (0, 1), (1, 0), (1, 1)],
        "Corner dilation should keep only the in-bounds quarter of the element"
    );
    println!("✓ dilation drops offsets outside the grid");
}

#[test]
fn erosion_removes_isolated_cell() {
    let mut grid = BinaryGrid::blank(5, 5);
    grid.set_ink(2, 2);

    let eroded = erode(&grid, &StructuringElement::square(3));

    assert!(ink_cells(&eroded).is_empty(), "An isolated cell has blank neighbors and must go");
    println!("✓ erosion removes an isolated cell");
}

#[test]
fn erosion_treats_border_as_satisfied() {
    // A grid smaller than the element: every neighborhood cell is either
    // ink or out of bounds, so nothing is eroded.
    let mut grid = BinaryGrid::blank(2, 2);
    for row in 0..2 {
        for col in 0..2 {
            grid.set_ink(row, col);
        }
    }

    let eroded = erode(&grid, &StructuringElement::square(3));

    assert_eq!(
        ink_cells(&eroded).len(),
        4,
        "Out-of-bounds offsets count as satisfied, so border ink survives"
    );
    println!("✓ erosion keeps ink whose missing neighbors are out of bounds");
}

#[test]
fn closing_preserves_interior_block() {
    let mut grid = BinaryGrid::blank(10, 10);
    for row in 2..=5 {
        for col in 2..=5 {
            grid.set_ink(row, col);
        }
    }

    let closed = close(&grid, &StructuringElement::square(3));

    assert_eq!(closed, grid, "A solid block away from the border is a fixed point of closing");
    println!("✓ closing preserves a solid interior block");
}

#[test]
fn closing_bridges_single_cell_gap() {
    let mut grid = BinaryGrid::blank(12, 12);
    for col in 2..=4 {
        grid.set_ink(5, col);
    }
    for col in 6..=8 {
        grid.set_ink(5, col);
    }
    assert!(!grid.is_ink(5, 5), "Gap cell starts blank");

    let closed = close(&grid, &StructuringElement::square(3));

    assert!(closed.is_ink(5, 5), "Closing should bridge the one-cell gap");
    for col in 2..=8 {
        assert!(closed.is_ink(5, col), "Segment cell (5, {col}) should survive closing");
    }
    println!("✓ closing bridges a one-cell gap between segments");
}

#[test]
fn closing_is_idempotent() {
    let element = StructuringElement::square(3);
    let mut grid = BinaryGrid::blank(12, 12);
    // An irregular shape: an L of two bars plus a detached speck.
    for col in 2..=7 {
        grid.set_ink(3, col);
    }
    for row in 3..=8 {
        grid.set_ink(row, 2);
    }
    grid.set_ink(9, 9);

    let once = close(&grid, &element);
    let twice = close(&once, &element);

    assert_eq!(twice, once, "A second closing must not change the grid");
    println!("✓ closing is idempotent");
}
