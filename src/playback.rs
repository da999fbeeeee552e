//! Playback events: turns recognized notes into an ordered list of tone
//! events and drives them through a caller-supplied sink.
//!
//! Event derivation is pure; only [`play_events`] touches the outside
//! world, one tone at a time.

use serde::Serialize;

use crate::model::Recognition;
use crate::recognizer::{sequence, RecognizerConfig};

/// Milliseconds a whole note (duration class 64) sounds.
pub const BASE_DURATION_MS: u32 = 1000;

/// One playable tone derived from a classified note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteEvent {
    /// Diatonic degree 1..=7.
    pub degree: u8,
    /// Duration class of the source note (64, 32, 16, 8, or −1).
    pub duration_class: i32,
    /// Tone frequency in hertz.
    pub frequency_hz: u32,
    /// Tone length in milliseconds.
    pub duration_ms: u32,
}

/// Receiver for playback tones. Implementations block until the tone has
/// finished sounding; [`play_events`] relies on that to sequence events.
pub trait ToneSink {
    fn tone(&mut self, frequency_hz: u32, duration_ms: u32);
}

/// Derive playback events from a recognition result.
///
/// Notes are taken in playback order (left to right, chords top to
/// bottom) and pitched from the config's frequency table. Notes that
/// stayed unclaimed or whose pitch never resolved (degree 0) have no
/// frequency and are skipped. An unresolved duration class plays at the
/// whole-note default.
pub fn note_events(recognition: &Recognition, config: &RecognizerConfig) -> Vec<NoteEvent> {
    let order = sequence::playback_order(&recognition.notes, config);

    order
        .into_iter()
        .filter_map(|i| {
            let note = &recognition.notes[i];
            if note.degree < 1 || note.degree > 7 {
                return None;
            }
            let duration_ms = if note.duration > 0 {
                note.duration as u32 * BASE_DURATION_MS / 64
            } else {
                BASE_DURATION_MS
            };
            Some(NoteEvent {
                degree: note.degree,
                duration_class: note.duration,
                frequency_hz: config.degree_frequencies_hz[note.degree as usize - 1],
                duration_ms,
            })
        })
        .collect()
}

/// Play events back to back through the sink.
pub fn play_events(events: &[NoteEvent], sink: &mut dyn ToneSink) {
    for event in events {
        sink.tone(event.frequency_hz, event.duration_ms);
    }
}

/// Serialize events to JSON.
pub fn events_to_json(events: &[NoteEvent]) -> String {
    serde_json::to_string(events).unwrap_or_else(|_| "[]".to_string())
}
