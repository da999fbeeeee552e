//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JByteArray, JClass, JString};
use jni::sys::jstring;
use jni::JNIEnv;

use crate::{recognition_to_json, recognize_bytes, recognize_file};

/// Recognize a scanned page at the given path and return the result as JSON.
///
/// Called from Kotlin as:
///   external fun recognizeFile(path: String): String?
#[no_mangle]
pub extern "system" fn Java_com_omrlib_app_OmrLib_recognizeFile(
    mut env: JNIEnv,
    _class: JClass,
    path: JString,
) -> jstring {
    let path_str: String = match env.get_string(&path) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    match recognize_file(&path_str).and_then(|r| recognition_to_json(&r)) {
        Ok(json) => match env.new_string(&json) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(_) => std::ptr::null_mut(),
    }
}

/// Recognize a scanned page from encoded image bytes and return the
/// result as JSON.
///
/// Called from Kotlin as:
///   external fun recognizeBytes(data: ByteArray): String?
#[no_mangle]
pub extern "system" fn Java_com_omrlib_app_OmrLib_recognizeBytes(
    mut env: JNIEnv,
    _class: JClass,
    data: JByteArray,
) -> jstring {
    let bytes = match env.convert_byte_array(&data) {
        Ok(b) => b,
        Err(_) => return std::ptr::null_mut(),
    };

    match recognize_bytes(&bytes).and_then(|r| recognition_to_json(&r)) {
        Ok(json) => match env.new_string(&json) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(_) => std::ptr::null_mut(),
    }
}
