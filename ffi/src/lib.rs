use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use exercise::{Bin, Operation, SessionEngine};
use wheel::SpinAnimation;

// ============================================================================
// String Management
// ============================================================================

/// Free a string that was allocated by Rust
#[no_mangle]
pub extern "C" fn countinglab_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            drop(CString::from_raw(ptr));
        }
    }
}

/// Helper to convert Rust string to C string
fn to_c_string(s: &str) -> *mut c_char {
    CString::new(s)
        .map(|cs| cs.into_raw())
        .unwrap_or(std::ptr::null_mut())
}

/// Helper to convert C string to Rust string
fn from_c_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ptr).to_str().ok().map(|s| s.to_string()) }
}

fn parse_operation(ptr: *const c_char) -> Option<Operation> {
    from_c_string(ptr).and_then(|s| s.parse().ok())
}

fn parse_bin(ptr: *const c_char) -> Option<Bin> {
    match from_c_string(ptr).as_deref() {
        Some("a") | Some("A") => Some(Bin::A),
        Some("b") | Some("B") => Some(Bin::B),
        _ => None,
    }
}

// ============================================================================
// Session Engine FFI
// ============================================================================

/// Create a session with a fixed seed (reproducible exercises)
#[no_mangle]
pub extern "C" fn session_engine_new(
    seed: u64,
    digit_count: u32,
    operation: *const c_char,
) -> *mut SessionEngine {
    let operation = match parse_operation(operation) {
        Some(op) => op,
        None => return std::ptr::null_mut(),
    };
    Box::into_raw(Box::new(SessionEngine::new(seed, digit_count, operation)))
}

/// Create a session seeded from OS entropy
#[no_mangle]
pub extern "C" fn session_engine_from_entropy(
    digit_count: u32,
    operation: *const c_char,
) -> *mut SessionEngine {
    let operation = match parse_operation(operation) {
        Some(op) => op,
        None => return std::ptr::null_mut(),
    };
    Box::into_raw(Box::new(SessionEngine::from_entropy(digit_count, operation)))
}

/// Free a SessionEngine
#[no_mangle]
pub extern "C" fn session_engine_free(ptr: *mut SessionEngine) {
    if !ptr.is_null() {
        unsafe {
            drop(Box::from_raw(ptr));
        }
    }
}

/// Report a drop-target occupancy change; returns the outcome as JSON
#[no_mangle]
pub extern "C" fn session_engine_on_bin_change(
    ptr: *mut SessionEngine,
    bin: *const c_char,
    count: u32,
) -> *mut c_char {
    if ptr.is_null() {
        return to_c_string(r#"{"error": "null engine pointer"}"#);
    }

    let bin = match parse_bin(bin) {
        Some(b) => b,
        None => return to_c_string(r#"{"error": "invalid bin"}"#),
    };

    let engine = unsafe { &mut *ptr };
    let outcome = engine.on_bin_change(bin, count);

    let json = serde_json::json!({
        "outcome": outcome,
        "state": engine.state(),
        "correct": engine.is_correct(),
    });
    to_c_string(&json.to_string())
}

/// Advance to the next exercise (only valid once solved)
#[no_mangle]
pub extern "C" fn session_engine_next(ptr: *mut SessionEngine) -> *mut c_char {
    if ptr.is_null() {
        return to_c_string(r#"{"error": "null engine pointer"}"#);
    }

    let engine = unsafe { &mut *ptr };
    match engine.on_next() {
        Ok(exercise) => match serde_json::to_string(exercise) {
            Ok(json) => to_c_string(&json),
            Err(e) => to_c_string(&format!(r#"{{"error": "{}"}}"#, e)),
        },
        Err(e) => to_c_string(&format!(r#"{{"error": "{}"}}"#, e)),
    }
}

/// Change the digit count; regenerates unconditionally
#[no_mangle]
pub extern "C" fn session_engine_set_digit_count(
    ptr: *mut SessionEngine,
    digit_count: u32,
) -> *mut c_char {
    if ptr.is_null() {
        return to_c_string(r#"{"error": "null engine pointer"}"#);
    }

    let engine = unsafe { &mut *ptr };
    let exercise = engine.set_digit_count(digit_count);
    match serde_json::to_string(exercise) {
        Ok(json) => to_c_string(&json),
        Err(e) => to_c_string(&format!(r#"{{"error": "{}"}}"#, e)),
    }
}

/// Change the operation mode; regenerates unconditionally
#[no_mangle]
pub extern "C" fn session_engine_set_operation(
    ptr: *mut SessionEngine,
    operation: *const c_char,
) -> *mut c_char {
    if ptr.is_null() {
        return to_c_string(r#"{"error": "null engine pointer"}"#);
    }

    let operation = match parse_operation(operation) {
        Some(op) => op,
        None => return to_c_string(r#"{"error": "invalid operation"}"#),
    };

    let engine = unsafe { &mut *ptr };
    let exercise = engine.set_operation(operation);
    match serde_json::to_string(exercise) {
        Ok(json) => to_c_string(&json),
        Err(e) => to_c_string(&format!(r#"{{"error": "{}"}}"#, e)),
    }
}

/// Place-value groups for the current pool as a JSON array
#[no_mangle]
pub extern "C" fn session_engine_groups(ptr: *const SessionEngine) -> *mut c_char {
    if ptr.is_null() {
        return to_c_string("[]");
    }

    let engine = unsafe { &*ptr };
    match serde_json::to_string(&engine.groups()) {
        Ok(json) => to_c_string(&json),
        Err(_) => to_c_string("[]"),
    }
}

/// Full session snapshot as JSON
#[no_mangle]
pub extern "C" fn session_engine_snapshot(ptr: *const SessionEngine) -> *mut c_char {
    if ptr.is_null() {
        return to_c_string("{}");
    }

    let engine = unsafe { &*ptr };
    to_c_string(&engine.to_json())
}

// ============================================================================
// Spin Wheel FFI
// ============================================================================

/// All frame angles for a spin as a JSON array; the host plays one
/// angle per frame interval
#[no_mangle]
pub extern "C" fn wheel_spin_frames(
    start: f32,
    target: f32,
    duration_ms: u32,
    frame_ms: u32,
) -> *mut c_char {
    let frames: Vec<f32> = SpinAnimation::new(start, target)
        .with_timing(duration_ms, frame_ms)
        .collect();

    match serde_json::to_string(&frames) {
        Ok(json) => to_c_string(&json),
        Err(_) => to_c_string("[]"),
    }
}
