use poidb_entities::{geo::*, point::*};

/// The square of half-width `radius` around `center`.
///
/// Every point within the circle of the same radius is also
/// contained in this box. Bounds saturate at the numeric limits
/// of the coordinates. A negative radius results in an inverted
/// and therefore empty box.
pub fn bbox_around(center: MapPoint, radius: RawCoord) -> MapBbox {
    let min = MapPoint::new(
        center.x().saturating_sub(radius),
        center.y().saturating_sub(radius),
    );
    let max = MapPoint::new(
        center.x().saturating_add(radius),
        center.y().saturating_add(radius),
    );
    MapBbox::new(min, max)
}

pub trait InBBox {
    fn in_bbox(&self, bbox: &MapBbox) -> bool;
}

impl InBBox for PointOfInterest {
    fn in_bbox(&self, bbox: &MapBbox) -> bool {
        bbox.contains_point(self.pos)
    }
}

pub trait InCircle {
    fn in_circle(&self, center: MapPoint, radius: RawCoord) -> bool;
}

impl InCircle for PointOfInterest {
    fn in_circle(&self, center: MapPoint, radius: RawCoord) -> bool {
        MapPoint::distance(center, self.pos).is_within(radius)
    }
}
