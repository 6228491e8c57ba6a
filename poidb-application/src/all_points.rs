use super::*;

pub fn load_all_points(connections: &sqlite::Connections) -> Result<Vec<PointOfInterest>> {
    let db = connections.shared()?;
    Ok(usecases::load_all_points(&db)?)
}
