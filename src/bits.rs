//! Morton (Z-order) bit interleaving of two grid indices into one geocode.
//!
//! `spread` and `compact` are the "interleave bits by binary magic numbers"
//! construction: each round doubles the width of the bit groups being pulled
//! apart (or pushed together), so a 32-bit value takes five shift/mask steps.
//! See https://graphics.stanford.edu/~seander/bithacks.html#InterleaveBMN

/// Moves bit `i` of `x` to bit `2 * i` of the result. Odd bits are zero.
#[inline]
pub fn spread(x: u32) -> u64 {
    let mut x = x as u64;
    x = (x | (x << 16)) & 0x0000FFFF0000FFFF;
    x = (x | (x << 8)) & 0x00FF00FF00FF00FF;
    x = (x | (x << 4)) & 0x0F0F0F0F0F0F0F0F;
    x = (x | (x << 2)) & 0x3333333333333333;
    x = (x | (x << 1)) & 0x5555555555555555;
    x
}

/// Inverse of [`spread`]: gathers the even bits of `x` into a contiguous u32.
/// Odd bits are ignored.
#[inline]
pub fn compact(mut x: u64) -> u32 {
    x &= 0x5555555555555555;
    x = (x | (x >> 1)) & 0x3333333333333333;
    x = (x | (x >> 2)) & 0x0F0F0F0F0F0F0F0F;
    x = (x | (x >> 4)) & 0x00FF00FF00FF00FF;
    x = (x | (x >> 8)) & 0x0000FFFF0000FFFF;
    x = (x | (x >> 16)) & 0x00000000FFFFFFFF;
    x as u32
}

/// Latitude lands on the even bits, longitude on the odd bits.
#[inline]
pub fn interleave64(lat: u32, lon: u32) -> u64 {
    (spread(lon) << 1) | spread(lat)
}

#[inline]
pub fn deinterleave64(code: u64) -> (u32, u32) {
    (compact(code), compact(code >> 1)) // (lat, lon)
}
