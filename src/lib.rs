//! omrlib — optical music recognition and playback library for scanned
//! sheet music.
//!
//! Takes a scanned page (PNG, JPEG, or BMP), finds the staves and
//! noteheads, classifies pitch and duration, and produces playback
//! events and an SVG annotation overlay.
//!
//! # Example
//! ```no_run
//! use omrlib::{recognize_file, note_events, RecognizerConfig};
//!
//! let recognition = recognize_file("path/to/page.png").unwrap();
//! println!("Staves: {}", recognition.staves.len());
//! let events = note_events(&recognition, &RecognizerConfig::default());
//! println!("Events: {}", events.len());
//! ```

pub mod acquire;
pub mod annotate;
pub mod model;
pub mod playback;
pub mod recognizer;

#[cfg(target_os = "android")]
pub mod android;

pub use annotate::render_annotations_svg;
pub use model::*;
pub use playback::{events_to_json, note_events, play_events, NoteEvent, ToneSink};
pub use recognizer::{recognize, RecognizerConfig};

/// Recognize a scanned page from a file path with the default
/// configuration. Supported formats: PNG, JPEG, BMP.
pub fn recognize_file(path: &str) -> Result<Recognition, String> {
    let page = acquire::load_page(path)?;
    Ok(recognize(&page, &RecognizerConfig::default()))
}

/// Recognize a scanned page from in-memory encoded image bytes with the
/// default configuration.
pub fn recognize_bytes(data: &[u8]) -> Result<Recognition, String> {
    let page = acquire::decode_page(data)?;
    Ok(recognize(&page, &RecognizerConfig::default()))
}

/// Convert a recognition result to a JSON string.
/// Useful for passing data across FFI boundaries.
pub fn recognition_to_json(recognition: &Recognition) -> Result<String, String> {
    serde_json::to_string_pretty(recognition).map_err(|e| format!("JSON serialization error: {e}"))
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Recognize a scanned page file and return the result as a JSON C string.
/// The caller must free the returned string with `omrlib_free_string`.
///
/// # Safety
/// `path` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn omrlib_recognize_file(path: *const c_char) -> *mut c_char {
    if path.is_null() {
        return std::ptr::null_mut();
    }
    let c_str = unsafe { CStr::from_ptr(path) };
    let path_str = match c_str.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    match recognize_file(path_str).and_then(|r| recognition_to_json(&r)) {
        Ok(json) => CString::new(json).unwrap_or_default().into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Recognize a scanned page from encoded image bytes and return the
/// result as a JSON C string. The caller must free the returned string
/// with `omrlib_free_string`.
///
/// # Safety
/// `data` must point to `len` valid bytes.
#[no_mangle]
pub unsafe extern "C" fn omrlib_recognize_bytes(data: *const u8, len: usize) -> *mut c_char {
    if data.is_null() || len == 0 {
        return std::ptr::null_mut();
    }
    let bytes = unsafe { std::slice::from_raw_parts(data, len) };

    match recognize_bytes(bytes).and_then(|r| recognition_to_json(&r)) {
        Ok(json) => CString::new(json).unwrap_or_default().into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Free a string previously returned by omrlib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by an omrlib function, or null.
#[no_mangle]
pub unsafe extern "C" fn omrlib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
