use super::*;
use poidb_entities as e;

impl From<e::point::PointOfInterest> for PointOfInterest {
    fn from(from: e::point::PointOfInterest) -> Self {
        let e::point::PointOfInterest { id, name, pos } = from;
        Self {
            id: id.to_raw(),
            name,
            x: pos.x(),
            y: pos.y(),
        }
    }
}

impl From<NewPointOfInterest> for e::point::NewPointOfInterest {
    fn from(from: NewPointOfInterest) -> Self {
        let NewPointOfInterest { name, x, y } = from;
        Self {
            name,
            pos: e::geo::MapPoint::new(x, y),
        }
    }
}
