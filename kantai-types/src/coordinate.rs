use serde::{Deserialize, Serialize};

/// A geographic coordinate stored as latitude then longitude.
///
/// The source document writes coordinates as `[lat, lng]` arrays, which is
/// the opposite axis order from `geo` (x = longitude, y = latitude). Use the
/// `From` conversions rather than building `geo` points by hand.
///
/// # Examples
///
/// ```
/// use kantai_types::coordinate::Coordinate;
///
/// let yokosuka = Coordinate::new(35.28, 139.67);
/// let point: geo::Point<f64> = yokosuka.into();
/// assert_eq!(point.x(), 139.67);
/// assert_eq!(point.y(), 35.28);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Coordinate {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    #[inline]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    #[inline]
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// True when both axes are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Planar linear interpolation towards `other`.
    ///
    /// Each axis is interpolated independently; this is not a great-circle
    /// path. A ratio of `0.0` or below returns `self` and `1.0` or above
    /// returns `other`, so segment endpoints are reproduced bit-for-bit.
    ///
    /// # Examples
    ///
    /// ```
    /// use kantai_types::coordinate::Coordinate;
    ///
    /// let a = Coordinate::new(10.0, 20.0);
    /// let b = Coordinate::new(30.0, 40.0);
    /// assert_eq!(a.lerp(b, 0.5), Coordinate::new(20.0, 30.0));
    /// assert_eq!(a.lerp(b, 1.0), b);
    /// ```
    pub fn lerp(self, other: Coordinate, ratio: f64) -> Coordinate {
        if ratio <= 0.0 {
            return self;
        }
        if ratio >= 1.0 {
            return other;
        }
        Coordinate {
            lat: self.lat + (other.lat - self.lat) * ratio,
            lng: self.lng + (other.lng - self.lng) * ratio,
        }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(coord: Coordinate) -> Self {
        (coord.lat, coord.lng)
    }
}

impl From<Coordinate> for geo::Point<f64> {
    fn from(coord: Coordinate) -> Self {
        geo::Point::new(coord.lng, coord.lat)
    }
}

impl From<Coordinate> for geo::Coord<f64> {
    fn from(coord: Coordinate) -> Self {
        geo::coord! { x: coord.lng, y: coord.lat }
    }
}

impl From<geo::Point<f64>> for Coordinate {
    fn from(point: geo::Point<f64>) -> Self {
        Self {
            lat: point.y(),
            lng: point.x(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_array_order() {
        let coord: Coordinate = serde_json::from_str("[34.24, 132.55]").unwrap();
        assert_eq!(coord.lat, 34.24);
        assert_eq!(coord.lng, 132.55);

        let json = serde_json::to_string(&coord).unwrap();
        assert_eq!(json, "[34.24,132.55]");
    }

    #[test]
    fn test_lerp_midpoint() {
        let a = Coordinate::new(10.0, 20.0);
        let b = Coordinate::new(30.0, 40.0);
        assert_eq!(a.lerp(b, 0.5), Coordinate::new(20.0, 30.0));
        assert_eq!(a.lerp(b, 0.25), Coordinate::new(15.0, 25.0));
    }

    #[test]
    fn test_lerp_endpoints_exact() {
        let a = Coordinate::new(0.1, -179.9);
        let b = Coordinate::new(0.3, 179.7);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, -2.0), a);
        assert_eq!(a.lerp(b, 3.0), b);
    }

    #[test]
    fn test_geo_conversion_swaps_axes() {
        let coord = Coordinate::new(35.0, 139.0);
        let point: geo::Point<f64> = coord.into();
        assert_eq!((point.x(), point.y()), (139.0, 35.0));
        assert_eq!(Coordinate::from(point), coord);

        let c: geo::Coord<f64> = coord.into();
        assert_eq!((c.x, c.y), (139.0, 35.0));
    }

    #[test]
    fn test_non_finite() {
        assert!(Coordinate::new(1.0, 2.0).is_finite());
        assert!(!Coordinate::new(f64::NAN, 2.0).is_finite());
        assert!(!Coordinate::new(1.0, f64::INFINITY).is_finite());
    }
}
