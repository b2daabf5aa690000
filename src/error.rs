use thiserror::Error;

use crate::grid::{MAX_GEOCODE, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};

pub type Result<T> = std::result::Result<T, GeocodeError>;

/// Input-domain errors raised by the validating entry points.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeocodeError {
    #[error("invalid latitude {0} (must be between {min} and {max})", min = MIN_LATITUDE, max = MAX_LATITUDE)]
    InvalidLatitude(f64),

    #[error("invalid longitude {0} (must be between {min} and {max})", min = MIN_LONGITUDE, max = MAX_LONGITUDE)]
    InvalidLongitude(f64),

    #[error("geocode {0} does not fit in 52 bits (max {max})", max = MAX_GEOCODE)]
    GeocodeOverflow(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_bounds() {
        assert_eq!(
            GeocodeError::InvalidLatitude(90.0).to_string(),
            "invalid latitude 90 (must be between -85.05112878 and 85.05112878)"
        );
        assert_eq!(
            GeocodeError::InvalidLongitude(-181.0).to_string(),
            "invalid longitude -181 (must be between -180 and 180)"
        );
        assert_eq!(
            GeocodeError::GeocodeOverflow(1 << 52).to_string(),
            "geocode 4503599627370496 does not fit in 52 bits (max 4503599627370495)"
        );
    }
}
