use super::prelude::*;
use crate::bbox::{bbox_around, InCircle as _};

#[derive(Debug, Clone, Copy)]
pub struct NearbyQuery {
    pub center: MapPoint,
    pub radius: RawCoord,
}

/// Find all points within `radius` of `center`.
///
/// This works in two stages: The storage only has to look up
/// the candidates within the surrounding bounding box. These are
/// then filtered by their exact distance to the center. Candidates
/// exactly on the circle are included.
///
/// The points are returned in the order of the storage.
pub fn find_near<R>(repo: &R, query: &NearbyQuery) -> Result<Vec<PointOfInterest>>
where
    R: PointOfInterestRepo,
{
    let NearbyQuery { center, radius } = *query;
    let bbox = bbox_around(center, radius);
    let candidates = repo.points_in_bbox(&bbox)?;
    let candidate_count = candidates.len();
    let points: Vec<_> = candidates
        .into_iter()
        .filter(|p| p.in_circle(center, radius))
        .collect();
    log::debug!(
        "Found {} of {} candidate(s) in {} within radius {} around ({})",
        points.len(),
        candidate_count,
        bbox,
        radius,
        center
    );
    Ok(points)
}
