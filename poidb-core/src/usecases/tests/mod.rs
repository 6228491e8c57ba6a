use std::cell::{Cell, RefCell};

use crate::{
    bbox::InBBox as _,
    entities::*,
    repositories::{Error as RepoError, *},
};

type RepoResult<T> = std::result::Result<T, RepoError>;

/// In-memory repository that preserves the insertion order.
#[derive(Default)]
pub struct MockDb {
    pub points: RefCell<Vec<PointOfInterest>>,
    last_id: Cell<RawId>,
}

impl MockDb {
    pub fn with_points(points: Vec<PointOfInterest>) -> Self {
        let last_id = points.iter().map(|p| p.id.to_raw()).max().unwrap_or(0);
        Self {
            points: RefCell::new(points),
            last_id: Cell::new(last_id),
        }
    }
}

impl PointOfInterestRepo for MockDb {
    fn create_point(&self, new_point: NewPointOfInterest) -> RepoResult<PointOfInterest> {
        let id = self.last_id.get() + 1;
        self.last_id.set(id);
        let point = new_point.with_id(id.into());
        self.points.borrow_mut().push(point.clone());
        Ok(point)
    }

    fn all_points(&self) -> RepoResult<Vec<PointOfInterest>> {
        Ok(self.points.borrow().clone())
    }

    fn points_in_bbox(&self, bbox: &MapBbox) -> RepoResult<Vec<PointOfInterest>> {
        Ok(self
            .points
            .borrow()
            .iter()
            .filter(|p| p.in_bbox(bbox))
            .cloned()
            .collect())
    }

    fn count_points(&self) -> RepoResult<usize> {
        Ok(self.points.borrow().len())
    }
}

#[test]
fn load_all_points_in_insertion_order() {
    let db = MockDb::default();
    for (name, x) in [("a", 3), ("b", 1), ("c", 2)] {
        let new_point = NewPointOfInterest {
            name: name.into(),
            pos: MapPoint::new(x, 0),
        };
        super::create_point(&db, new_point).unwrap();
    }
    let names: Vec<_> = super::load_all_points(&db)
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(vec!["a", "b", "c"], names);
}
