use super::*;

#[post("/pontos-de-interesse", data = "<point>")]
pub fn post_point(
    db: sqlite::Connections,
    point: JsonResult<json::NewPointOfInterest>,
) -> StatusResult {
    let new_point = point?.into_inner().into();
    flows::create_point(&db, new_point)?;
    Ok(Status::Ok)
}

#[get("/listar/pontos-de-interesse")]
pub fn get_points(db: sqlite::Connections) -> Result<Vec<json::PointOfInterest>> {
    let points = flows::load_all_points(&db)?;
    Ok(Json(points.into_iter().map(Into::into).collect()))
}

#[get("/listar/pontos-proximos?<x>&<y>&<raio>")]
pub fn get_nearby_points(
    db: sqlite::Connections,
    x: RawCoord,
    y: RawCoord,
    raio: RawCoord,
) -> Result<Vec<json::PointOfInterest>> {
    let query = usecases::NearbyQuery {
        center: MapPoint::new(x, y),
        radius: raio,
    };
    let points = flows::find_near(&db, &query)?;
    Ok(Json(points.into_iter().map(Into::into).collect()))
}
