use std::fmt;

pub type RawCoord = i64;

/// A location on a flat map with integer coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MapPoint {
    x: RawCoord,
    y: RawCoord,
}

impl MapPoint {
    pub const fn new(x: RawCoord, y: RawCoord) -> Self {
        Self { x, y }
    }

    pub const fn x(self) -> RawCoord {
        self.x
    }

    pub const fn y(self) -> RawCoord {
        self.y
    }

    /// Euclidean distance between two points.
    ///
    /// The differences are computed with 128-bit integers and
    /// combined with [`f64::hypot`] so that neither the subtraction
    /// nor the squaring can overflow.
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Distance {
        let dx = (i128::from(p2.x) - i128::from(p1.x)) as f64;
        let dy = (i128::from(p2.y) - i128::from(p1.y)) as f64;
        Distance(dx.hypot(dy))
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(pub f64);

impl Distance {
    pub const fn to_f64(self) -> f64 {
        self.0
    }

    /// Exact comparison without any tolerance:
    /// a distance that equals the radius is within.
    pub fn is_within(self, radius: RawCoord) -> bool {
        self.0 <= radius as f64
    }
}

/// Axis-aligned box, inclusive on all four bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MapBbox {
    min: MapPoint,
    max: MapPoint,
}

impl MapBbox {
    pub const fn new(min: MapPoint, max: MapPoint) -> Self {
        Self { min, max }
    }

    pub const fn min(&self) -> MapPoint {
        self.min
    }

    pub const fn max(&self) -> MapPoint {
        self.max
    }

    /// An inverted box does not contain any point.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    pub fn contains_point(&self, pt: MapPoint) -> bool {
        pt.x >= self.min.x && pt.x <= self.max.x && pt.y >= self.min.y && pt.y <= self.max.y
    }
}

impl fmt::Display for MapBbox {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "[{}]..[{}]", self.min, self.max)
    }
}
