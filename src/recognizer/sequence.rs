//! Playback ordering of classified notes.
//!
//! Notes are read left to right; near-vertical groups (chords) play top
//! to bottom. The clustering anchor is the first note of the cluster, so
//! a wide chord cannot creep rightward past the gap limit.

use crate::model::Note;

use super::RecognizerConfig;

/// Indices of claimed notes in playback order.
///
/// Claimed notes are sorted by center column; a scan then groups runs
/// whose center columns stay within `chord_gap` of the run's first note,
/// and each group is reordered by center row.
pub fn playback_order(notes: &[Note], config: &RecognizerConfig) -> Vec<usize> {
    let mut order: Vec<usize> = notes
        .iter()
        .enumerate()
        .filter(|(_, note)| note.claimed)
        .map(|(i, _)| i)
        .collect();
    order.sort_by_key(|&i| notes[i].center_col);

    let mut start = 0;
    while start < order.len() {
        let anchor = notes[order[start]].center_col;
        let mut end = start + 1;
        while end < order.len() && notes[order[end]].center_col - anchor < config.chord_gap {
            end += 1;
        }
        order[start..end].sort_by_key(|&i| notes[i].center_row);
        start = end;
    }

    order
}
