//! C ABI shim over [`crate::IdRing`], for embedding in non-Rust callers that
//! expect the original library's negative-sentinel-on-error convention.
//!
//! Only built with the `ffi` feature. The safe Rust API (`IdRing` itself)
//! never exposes raw pointers or sentinel return codes; this module exists
//! purely as a translation layer at the crate boundary.

use crate::id_ring::IdRing;
use std::ptr;

/// Opaque handle to an [`IdRing`], for C callers.
pub struct UIdRingbuffer(IdRing);

/// Creates an ID ring buffer. Returns null if `capacity` is zero.
///
/// # Safety
///
/// The returned pointer must eventually be passed to
/// [`u_id_ringbuffer_destroy`] exactly once, or leaked deliberately.
#[no_mangle]
pub unsafe extern "C" fn u_id_ringbuffer_create(capacity: u32) -> *mut UIdRingbuffer {
    match IdRing::new(capacity as usize) {
        Ok(ring) => Box::into_raw(Box::new(UIdRingbuffer(ring))),
        Err(_) => ptr::null_mut(),
    }
}

/// Pushes an ID to the back. Returns the backing slot, or `-1` if `uirb` is
/// null.
///
/// # Safety
///
/// `uirb` must be a valid pointer previously returned by
/// [`u_id_ringbuffer_create`] and not yet destroyed.
#[no_mangle]
pub unsafe extern "C" fn u_id_ringbuffer_push_back(uirb: *mut UIdRingbuffer, id: u64) -> i64 {
    if uirb.is_null() {
        return -1;
    }
    (*uirb).0.push_back(id) as i64
}

/// Pops the oldest element, if any.
///
/// # Safety
///
/// `uirb` must be a valid pointer previously returned by
/// [`u_id_ringbuffer_create`] and not yet destroyed.
#[no_mangle]
pub unsafe extern "C" fn u_id_ringbuffer_pop_front(uirb: *mut UIdRingbuffer) {
    if !uirb.is_null() {
        (*uirb).0.pop_front();
    }
}

/// Pops the newest element, if any.
///
/// # Safety
///
/// `uirb` must be a valid pointer previously returned by
/// [`u_id_ringbuffer_create`] and not yet destroyed.
#[no_mangle]
pub unsafe extern "C" fn u_id_ringbuffer_pop_back(uirb: *mut UIdRingbuffer) {
    if !uirb.is_null() {
        (*uirb).0.pop_back();
    }
}

/// Writes the newest ID to `out_id`. Returns the backing slot, or a negative
/// value if empty or `uirb` is null.
///
/// # Safety
///
/// `uirb` must be a valid pointer previously returned by
/// [`u_id_ringbuffer_create`] and not yet destroyed; `out_id` must be
/// writable.
#[no_mangle]
pub unsafe extern "C" fn u_id_ringbuffer_get_back(
    uirb: *mut UIdRingbuffer,
    out_id: *mut u64,
) -> i32 {
    if uirb.is_null() {
        return -1;
    }
    match (*uirb).0.back() {
        Some((slot, id)) => {
            if !out_id.is_null() {
                *out_id = id;
            }
            slot as i32
        }
        None => -1,
    }
}

/// Gets the number of live elements.
///
/// # Safety
///
/// `uirb` must be a valid pointer previously returned by
/// [`u_id_ringbuffer_create`] and not yet destroyed.
#[no_mangle]
pub unsafe extern "C" fn u_id_ringbuffer_get_size(uirb: *const UIdRingbuffer) -> u32 {
    if uirb.is_null() {
        return 0;
    }
    (*uirb).0.len() as u32
}

/// Destroys an ID ring buffer. Does null checks and zeroes the pointer.
///
/// # Safety
///
/// `ptr_to_uirb` must point to a valid `*mut UIdRingbuffer` (possibly null).
#[no_mangle]
pub unsafe extern "C" fn u_id_ringbuffer_destroy(ptr_to_uirb: *mut *mut UIdRingbuffer) {
    if ptr_to_uirb.is_null() || (*ptr_to_uirb).is_null() {
        return;
    }
    drop(Box::from_raw(*ptr_to_uirb));
    *ptr_to_uirb = ptr::null_mut();
}
