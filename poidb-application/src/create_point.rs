use super::*;

pub fn create_point(
    connections: &sqlite::Connections,
    new_point: NewPointOfInterest,
) -> Result<PointOfInterest> {
    let point = connections.exclusive()?.transaction(|conn| {
        usecases::create_point(conn, new_point).map_err(|err| {
            warn!("Failed to store new point of interest: {}", err);
            err
        })
    })?;
    info!(
        "Created point of interest {} '{}' at ({})",
        point.id, point.name, point.pos
    );
    Ok(point)
}
