//! Binarization — global thresholding of the grayscale page.
//!
//! The threshold is chosen by maximizing between-class variance over the
//! intensity histogram, then applied so dark marks become ink and bright
//! paper becomes background.

use crate::model::{BinaryGrid, PixelGrid};

/// Count of each intensity value in the page.
pub fn histogram(page: &PixelGrid) -> [u32; 256] {
    let mut hist = [0u32; 256];
    for row in 0..page.rows() {
        for col in 0..page.cols() {
            hist[page.get(row, col) as usize] += 1;
        }
    }
    hist
}

/// Threshold maximizing between-class variance over the histogram.
///
/// Ties keep the lowest intensity. A uniform page scores no candidate at
/// all and yields 0, which downstream turns into an all-background grid.
pub fn otsu_threshold(hist: &[u32; 256]) -> u8 {
    let total: u64 = hist.iter().map(|&c| c as u64).sum();
    if total == 0 {
        return 0;
    }

    let sum: f64 = hist
        .iter()
        .enumerate()
        .map(|(i, &c)| i as f64 * c as f64)
        .sum();

    let mut weight_bg: u64 = 0;
    let mut sum_bg: f64 = 0.0;
    let mut best_score = f64::NEG_INFINITY;
    let mut best_threshold = 0u8;

    for i in 0..256usize {
        weight_bg += hist[i] as u64;
        if weight_bg == 0 {
            continue;
        }
        let weight_fg = total - weight_bg;
        if weight_fg == 0 {
            break;
        }
        sum_bg += i as f64 * hist[i] as f64;

        let mean_bg = sum_bg / weight_bg as f64;
        let mean_fg = (sum - sum_bg) / weight_fg as f64;
        let score =
            weight_bg as f64 * weight_fg as f64 * (mean_bg - mean_fg) * (mean_bg - mean_fg);

        if score > best_score {
            best_score = score;
            best_threshold = i as u8;
        }
    }

    best_threshold
}

/// Binarize the page: intensities at or above the Otsu threshold become
/// [`BLANK`], everything darker becomes [`INK`].
pub fn binarize(page: &PixelGrid) -> BinaryGrid {
    let threshold = otsu_threshold(&histogram(page));
    let mut grid = BinaryGrid::blank(page.rows(), page.cols());
    for row in 0..page.rows() {
        for col in 0..page.cols() {
            if page.get(row, col) >= threshold {
                grid.set_blank(row, col);
            } else {
                grid.set_ink(row, col);
            }
        }
    }
    grid
}
