use std::collections::HashMap;
use std::ops::Range;

use tracing::{debug, warn};

use crate::bits::{deinterleave64, interleave64};
use crate::error::{GeocodeError, Result};
use crate::grid::{Axis, RangeExtension, GEOCODE_BITS, GRID_SIZE, MAX_GEOCODE};

/// Encodes a coordinate without validating it.
///
/// Any grid index outside `[0, 2^26)` spills its high bits into the other
/// axis's lane (or past bit 52), so the result decodes to an unrelated
/// location. That covers inputs outside the latitude/longitude bounds and
/// also the top edge of each axis: the bound itself and the float just below
/// it both quantize to `2^26`. Such input is logged at `warn`. Use
/// [`try_encode`] to reject it instead.
pub fn encode(latitude: f64, longitude: f64) -> u64 {
    let lat = Axis::LATITUDE.grid_index(latitude);
    let lon = Axis::LONGITUDE.grid_index(longitude);
    if lat >= GRID_SIZE
        || lon >= GRID_SIZE
        || !Axis::LATITUDE.contains(latitude)
        || !Axis::LONGITUDE.contains(longitude)
    {
        warn!(latitude, longitude, lat, lon, "encoding coordinate outside the grid");
    }
    interleave64(lat, lon)
}

/// Decodes any integer to the center of the cell it names. Bits above 52 are
/// not rejected and move the result outside the coordinate bounds.
pub fn decode(geocode: u64) -> (f64, f64) {
    let center = Area::from_bits(geocode).center();
    (center.latitude, center.longitude)
}

/// Validating counterpart of [`encode`].
pub fn try_encode(latitude: f64, longitude: f64) -> Result<Geocode> {
    let coord = Coord::new(latitude, longitude)?;
    Ok(Geocode::from_coord(&coord))
}

/// Validating counterpart of [`decode`].
pub fn try_decode(geocode: u64) -> Result<Coord> {
    Ok(Geocode::new(geocode)?.center())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];
}

/// A latitude/longitude pair inside the encodable bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coord {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !Axis::LATITUDE.contains(latitude) {
            debug!(latitude, "rejecting latitude");
            return Err(GeocodeError::InvalidLatitude(latitude));
        }
        if !Axis::LONGITUDE.contains(longitude) {
            debug!(longitude, "rejecting longitude");
            return Err(GeocodeError::InvalidLongitude(longitude));
        }
        Ok(Coord {
            latitude,
            longitude,
        })
    }
}

impl TryFrom<(f64, f64)> for Coord {
    type Error = GeocodeError;

    fn try_from((latitude, longitude): (f64, f64)) -> Result<Self> {
        Coord::new(latitude, longitude)
    }
}

/// The grid cell a geocode names.
///
/// `latitude` and `longitude` are the nominal cell bounds. Rounding can put a
/// bound's own value in the neighboring cell, so membership is decided by
/// quantizing, not by comparing against the bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Area {
    pub latitude: Range<f64>,
    pub longitude: Range<f64>,
    index: (u32, u32),
}

impl Area {
    fn from_bits(bits: u64) -> Self {
        let (lat, lon) = deinterleave64(bits);
        Area {
            latitude: Axis::LATITUDE.cell(lat),
            longitude: Axis::LONGITUDE.cell(lon),
            index: (lat, lon),
        }
    }

    pub fn center(&self) -> Coord {
        Coord {
            latitude: self.latitude.center(),
            longitude: self.longitude.center(),
        }
    }

    /// True when `coord` encodes to this cell. The upper bound of each axis
    /// counts as part of the last cell, as in [`Geocode::from_coord`].
    pub fn contains(&self, coord: &Coord) -> bool {
        let (lat, lon) = self.index;
        Axis::LATITUDE.contains(coord.latitude)
            && Axis::LONGITUDE.contains(coord.longitude)
            && Axis::LATITUDE.clamped_grid_index(coord.latitude) == lat
            && Axis::LONGITUDE.clamped_grid_index(coord.longitude) == lon
    }
}

pub type Neighbors = HashMap<Direction, Geocode>;

const LAT_BITS: u64 = 0x5555555555555555;
const LON_BITS: u64 = 0xAAAAAAAAAAAAAAAA;
const UNUSED_BITS: u32 = 64 - GEOCODE_BITS;

/// A geocode known to fit in 52 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Geocode(u64);

impl Geocode {
    pub fn new(bits: u64) -> Result<Self> {
        if bits > MAX_GEOCODE {
            debug!(bits, "rejecting geocode wider than 52 bits");
            return Err(GeocodeError::GeocodeOverflow(bits));
        }
        Ok(Geocode(bits))
    }

    /// The upper bound of each axis is folded into its last cell, so every
    /// valid coordinate yields a code below 2^52.
    pub fn from_coord(coord: &Coord) -> Self {
        let lat = Axis::LATITUDE.clamped_grid_index(coord.latitude);
        let lon = Axis::LONGITUDE.clamped_grid_index(coord.longitude);
        Geocode(interleave64(lat, lon))
    }

    #[inline]
    pub fn value(&self) -> u64 {
        self.0
    }

    /// `(latitude, longitude)` grid indices.
    #[inline]
    pub fn grid_indices(&self) -> (u32, u32) {
        deinterleave64(self.0)
    }

    pub fn area(&self) -> Area {
        Area::from_bits(self.0)
    }

    pub fn center(&self) -> Coord {
        self.area().center()
    }

    // Steps the longitude lane by one cell. Filling the latitude lane with
    // ones lets the carry/borrow ripple straight through it.
    fn move_x(&mut self, west: bool) -> &mut Self {
        let mut lon = self.0 & LON_BITS;
        let lat = self.0 & LAT_BITS;

        let tmp = LAT_BITS >> UNUSED_BITS;
        if west {
            lon |= tmp;
            lon = lon.wrapping_sub(tmp + 1);
        } else {
            lon = lon.wrapping_add(tmp + 1);
        }
        lon &= LON_BITS >> UNUSED_BITS;
        self.0 = lon | lat;
        self
    }

    fn move_y(&mut self, south: bool) -> &mut Self {
        let lon = self.0 & LON_BITS;
        let mut lat = self.0 & LAT_BITS;

        let tmp = LON_BITS >> UNUSED_BITS;
        if south {
            lat |= tmp;
            lat = lat.wrapping_sub(tmp + 1);
        } else {
            lat = lat.wrapping_add(tmp + 1);
        }
        lat &= LAT_BITS >> UNUSED_BITS;
        self.0 = lon | lat;
        self
    }

    pub fn neighbors(&self) -> Neighbors {
        Direction::ALL
            .into_iter()
            .map(|direction| (direction, self.neighbor(direction)))
            .collect()
    }

    /// Adjacent cell in `direction`. Longitude wraps at the antimeridian and
    /// latitude wraps between the first and last rows.
    pub fn neighbor(&self, direction: Direction) -> Geocode {
        let mut code = *self;
        match direction {
            Direction::North => code.move_y(false),
            Direction::East => code.move_x(false),
            Direction::South => code.move_y(true),
            Direction::West => code.move_x(true),
            Direction::NorthEast => code.move_y(false).move_x(false),
            Direction::SouthEast => code.move_y(true).move_x(false),
            Direction::SouthWest => code.move_y(true).move_x(true),
            Direction::NorthWest => code.move_y(false).move_x(true),
        };
        code
    }
}

impl TryFrom<u64> for Geocode {
    type Error = GeocodeError;

    fn try_from(bits: u64) -> Result<Self> {
        Geocode::new(bits)
    }
}

impl From<Geocode> for u64 {
    fn from(code: Geocode) -> u64 {
        code.0
    }
}

impl From<Geocode> for Area {
    fn from(code: Geocode) -> Area {
        code.area()
    }
}

impl From<&Coord> for Geocode {
    fn from(coord: &Coord) -> Geocode {
        Geocode::from_coord(coord)
    }
}
