use super::prelude::*;

/// Store a new point of interest.
///
/// Neither the name nor the coordinates are validated,
/// e.g. an empty name or negative coordinates are fine.
pub fn create_point<R>(repo: &R, new_point: NewPointOfInterest) -> Result<PointOfInterest>
where
    R: PointOfInterestRepo,
{
    let point = repo.create_point(new_point)?;
    log::debug!(
        "Created point of interest {} '{}' at ({})",
        point.id,
        point.name,
        point.pos
    );
    Ok(point)
}
