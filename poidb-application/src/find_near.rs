use super::*;

pub fn find_near(
    connections: &sqlite::Connections,
    query: &usecases::NearbyQuery,
) -> Result<Vec<PointOfInterest>> {
    let db = connections.shared()?;
    let points = usecases::find_near(&db, query)?;
    Ok(points)
}
