use crate::{geo::*, id::*};

/// A named location on the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointOfInterest {
    pub id: Id,
    pub name: String,
    pub pos: MapPoint,
}

/// A point of interest that has not been stored yet
/// and therefore has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPointOfInterest {
    pub name: String,
    pub pos: MapPoint,
}

impl NewPointOfInterest {
    pub fn with_id(self, id: Id) -> PointOfInterest {
        let Self { name, pos } = self;
        PointOfInterest { id, name, pos }
    }
}
