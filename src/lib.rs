//! Packs a latitude/longitude pair into a 52-bit integer by interleaving two
//! 26-bit grid indices, and decodes such an integer back to its cell center.
//!
//! ```
//! let code = geocode_int_rs::encode(51.5074, -0.1278);
//! assert_eq!(code, 2163557714755072);
//!
//! let (lat, lon) = geocode_int_rs::decode(code);
//! assert!((lat - 51.5074).abs() < 1e-5 && (lon + 0.1278).abs() < 1e-5);
//! ```
//!
//! [`encode`] and [`decode`] accept anything and never fail. [`try_encode`],
//! [`try_decode`] and the [`Coord`] / [`Geocode`] constructors reject
//! coordinates outside the bounds in [`grid`] and codes wider than 52 bits.

pub mod bits;
pub mod error;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod geocode;
pub mod grid;

pub use error::{GeocodeError, Result};
pub use geocode::{
    decode, encode, try_decode, try_encode, Area, Coord, Direction, Geocode, Neighbors,
};
