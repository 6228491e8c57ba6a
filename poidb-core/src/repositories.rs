// Low-level database access traits.
// A repository is responsible for a single entity and
// never modifies or loads another entity.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait PointOfInterestRepo {
    /// Store a new point and return it together with
    /// the id that has been assigned by the storage.
    fn create_point(&self, new_point: NewPointOfInterest) -> Result<PointOfInterest>;

    // No particular order
    fn all_points(&self) -> Result<Vec<PointOfInterest>>;

    /// All points within the bounding box (inclusive).
    /// An empty (inverted) box yields no points.
    fn points_in_bbox(&self, bbox: &MapBbox) -> Result<Vec<PointOfInterest>>;

    fn count_points(&self) -> Result<usize>;
}
