//! C ABI for the static and dynamic library builds.
//!
//! Every function returning `i32` returns an [`ErrorCode`]; `0` is success.
//! Out-pointers are only written on success.

use tracing::trace;

use crate::error::GeocodeError;
use crate::geocode::{decode, encode, try_decode, try_encode};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,
    InvalidLatitude = 1,
    InvalidLongitude = 2,
    GeocodeOverflow = 3,
    NullPointer = 4,
}

impl From<&GeocodeError> for ErrorCode {
    fn from(error: &GeocodeError) -> Self {
        match error {
            GeocodeError::InvalidLatitude(_) => ErrorCode::InvalidLatitude,
            GeocodeError::InvalidLongitude(_) => ErrorCode::InvalidLongitude,
            GeocodeError::GeocodeOverflow(_) => ErrorCode::GeocodeOverflow,
        }
    }
}

/// Encode without validation. See [`crate::encode`].
#[no_mangle]
pub extern "C" fn geocode_encode(latitude: f64, longitude: f64) -> u64 {
    encode(latitude, longitude)
}

/// Decode without validation. See [`crate::decode`].
///
/// # Safety
/// - out_latitude and out_longitude must be null or valid for writes of one f64
#[no_mangle]
pub unsafe extern "C" fn geocode_decode(
    geocode: u64,
    out_latitude: *mut f64,
    out_longitude: *mut f64,
) -> i32 {
    if out_latitude.is_null() || out_longitude.is_null() {
        trace!("geocode_decode called with a null out-pointer");
        return ErrorCode::NullPointer as i32;
    }

    let (latitude, longitude) = decode(geocode);
    unsafe {
        *out_latitude = latitude;
        *out_longitude = longitude;
    }
    ErrorCode::Success as i32
}

/// Encode, rejecting coordinates outside the latitude/longitude bounds.
///
/// # Safety
/// - out_geocode must be null or valid for writes of one u64
#[no_mangle]
pub unsafe extern "C" fn geocode_try_encode(
    latitude: f64,
    longitude: f64,
    out_geocode: *mut u64,
) -> i32 {
    if out_geocode.is_null() {
        trace!("geocode_try_encode called with a null out-pointer");
        return ErrorCode::NullPointer as i32;
    }

    match try_encode(latitude, longitude) {
        Ok(code) => {
            unsafe {
                *out_geocode = code.value();
            }
            ErrorCode::Success as i32
        }
        Err(e) => ErrorCode::from(&e) as i32,
    }
}

/// Decode, rejecting geocodes wider than 52 bits.
///
/// # Safety
/// - out_latitude and out_longitude must be null or valid for writes of one f64
#[no_mangle]
pub unsafe extern "C" fn geocode_try_decode(
    geocode: u64,
    out_latitude: *mut f64,
    out_longitude: *mut f64,
) -> i32 {
    if out_latitude.is_null() || out_longitude.is_null() {
        trace!("geocode_try_decode called with a null out-pointer");
        return ErrorCode::NullPointer as i32;
    }

    match try_decode(geocode) {
        Ok(coord) => {
            unsafe {
                *out_latitude = coord.latitude;
                *out_longitude = coord.longitude;
            }
            ErrorCode::Success as i32
        }
        Err(e) => ErrorCode::from(&e) as i32,
    }
}
