//! Quantization of each coordinate axis onto a 2^26-cell grid.
//!
//! The bounds below are part of the wire format: changing any of them changes
//! every geocode ever produced.

use std::ops::{Range, RangeInclusive};

/// Web Mercator safe latitude span.
pub const MIN_LATITUDE: f64 = -85.05112878;
pub const MAX_LATITUDE: f64 = 85.05112878;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

pub const LATITUDE_RANGE: f64 = MAX_LATITUDE - MIN_LATITUDE;
pub const LONGITUDE_RANGE: f64 = MAX_LONGITUDE - MIN_LONGITUDE;

/// Bits of grid index per axis.
pub const GRID_BITS: u32 = 26;
/// Number of cells along each axis.
pub const GRID_SIZE: u32 = 1 << GRID_BITS;
pub const GEOCODE_BITS: u32 = GRID_BITS * 2;
pub const MAX_GEOCODE: u64 = (1 << GEOCODE_BITS) - 1;

const GRID_SCALE: f64 = GRID_SIZE as f64;

/// Maps `value` to its cell number along an axis starting at `min` and
/// spanning `range`. Truncates toward zero and does not clamp: values outside
/// the axis saturate at `0` / `u32::MAX` instead of landing in `[0, 2^26)`.
#[inline]
pub fn to_grid_index(value: f64, min: f64, range: f64) -> u32 {
    (GRID_SCALE * (value - min) / range) as u32
}

/// Half-open bounds of cell `index` along an axis.
#[inline]
pub fn to_cell_bounds(index: u32, min: f64, range: f64) -> Range<f64> {
    let index = index as f64;
    Range {
        start: min + range * (index / GRID_SCALE),
        end: min + range * ((index + 1.0) / GRID_SCALE),
    }
}

pub trait RangeExtension {
    type Idx;

    fn length(&self) -> Self::Idx;

    fn center(&self) -> Self::Idx;
}

impl RangeExtension for Range<f64> {
    type Idx = f64;

    fn length(&self) -> f64 {
        self.end - self.start
    }

    fn center(&self) -> f64 {
        (self.start + self.end) / 2f64
    }
}

/// One coordinate axis with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub const LATITUDE: Axis = Axis {
        min: MIN_LATITUDE,
        max: MAX_LATITUDE,
    };
    pub const LONGITUDE: Axis = Axis {
        min: MIN_LONGITUDE,
        max: MAX_LONGITUDE,
    };

    #[inline]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Inclusive on both ends. NaN is never contained.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        RangeInclusive::new(self.min, self.max).contains(&value)
    }

    #[inline]
    pub fn grid_index(&self, value: f64) -> u32 {
        to_grid_index(value, self.min, self.range())
    }

    /// Grid index of a value already known to be on this axis. The upper
    /// bound itself belongs to the last cell.
    #[inline]
    pub fn clamped_grid_index(&self, value: f64) -> u32 {
        self.grid_index(value).min(GRID_SIZE - 1)
    }

    #[inline]
    pub fn cell(&self, index: u32) -> Range<f64> {
        to_cell_bounds(index, self.min, self.range())
    }

    /// Width of a single cell in degrees.
    #[inline]
    pub fn cell_width(&self) -> f64 {
        self.range() / GRID_SCALE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_match_the_axis_constants() {
        assert_eq!(Axis::LATITUDE.range(), LATITUDE_RANGE);
        assert_eq!(Axis::LONGITUDE.range(), LONGITUDE_RANGE);
        assert_eq!(MAX_GEOCODE, 4503599627370495);
    }

    #[test]
    fn grid_index_endpoints() {
        let lat = Axis::LATITUDE;
        assert_eq!(lat.grid_index(MIN_LATITUDE), 0);
        assert_eq!(lat.grid_index(MAX_LATITUDE - 1e-9), GRID_SIZE - 1);
        assert_eq!(lat.grid_index(MAX_LATITUDE), GRID_SIZE);
        assert_eq!(lat.clamped_grid_index(MAX_LATITUDE), GRID_SIZE - 1);

        let lon = Axis::LONGITUDE;
        assert_eq!(lon.grid_index(-180.0), 0);
        assert_eq!(lon.grid_index(0.0), GRID_SIZE / 2);
        assert_eq!(lon.grid_index(179.9999999), GRID_SIZE - 1);
    }

    #[test]
    fn grid_index_truncates() {
        let lon = Axis::LONGITUDE;
        let width = lon.cell_width();
        // Just shy of the second cell boundary still belongs to cell 1.
        assert_eq!(lon.grid_index(-180.0 + width * 1.9), 1);
        assert_eq!(lon.grid_index(-180.0 + width * 2.5), 2);
    }

    #[test]
    fn grid_index_saturates_outside_the_axis() {
        let lat = Axis::LATITUDE;
        assert_eq!(lat.grid_index(-90.0), 0);
        assert_eq!(lat.grid_index(f64::NAN), 0);
        assert_eq!(lat.grid_index(1e300), u32::MAX);
        assert!(lat.grid_index(90.0) > GRID_SIZE);
    }

    #[test]
    fn cell_bounds_tile_the_axis() {
        let lon = Axis::LONGITUDE;
        let first = lon.cell(0);
        assert_eq!(first.start, -180.0);
        assert_eq!(first.end, lon.cell(1).start);
        assert_eq!(lon.cell(GRID_SIZE - 1).end, 180.0);
        assert_eq!(lon.cell(GRID_SIZE / 2).start, 0.0);
        assert!((first.length() - lon.cell_width()).abs() < 1e-12);
    }

    #[test]
    fn cell_bounds_never_overflow() {
        let cell = Axis::LONGITUDE.cell(u32::MAX);
        assert!(cell.start.is_finite());
        assert!(cell.end > cell.start);
    }

    #[test]
    fn value_lies_in_its_own_cell() {
        let lat = Axis::LATITUDE;
        for value in [-85.0, -33.8688, 0.0, 13.722, 51.5074, 85.05] {
            let cell = lat.cell(lat.grid_index(value));
            assert!(cell.start <= value && value < cell.end, "{value} not in {cell:?}");
            assert_eq!(lat.grid_index(cell.center()), lat.grid_index(value));
        }
    }

    #[test]
    fn contains_is_inclusive_and_rejects_nan() {
        assert!(Axis::LATITUDE.contains(MAX_LATITUDE));
        assert!(Axis::LATITUDE.contains(MIN_LATITUDE));
        assert!(!Axis::LATITUDE.contains(85.06));
        assert!(!Axis::LONGITUDE.contains(f64::NAN));
        assert!(Axis::LONGITUDE.contains(180.0));
    }
}
