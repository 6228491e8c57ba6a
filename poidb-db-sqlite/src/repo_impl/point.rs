use super::*;

impl<'a> PointOfInterestRepo for DbReadWrite<'a> {
    fn create_point(&self, new_point: NewPointOfInterest) -> Result<PointOfInterest> {
        create_point(&mut self.conn.borrow_mut(), new_point)
    }
    fn all_points(&self) -> Result<Vec<PointOfInterest>> {
        all_points(&mut self.conn.borrow_mut())
    }
    fn points_in_bbox(&self, bbox: &MapBbox) -> Result<Vec<PointOfInterest>> {
        points_in_bbox(&mut self.conn.borrow_mut(), bbox)
    }
    fn count_points(&self) -> Result<usize> {
        count_points(&mut self.conn.borrow_mut())
    }
}

impl<'a> PointOfInterestRepo for DbConnection<'a> {
    fn create_point(&self, new_point: NewPointOfInterest) -> Result<PointOfInterest> {
        create_point(&mut self.conn.borrow_mut(), new_point)
    }
    fn all_points(&self) -> Result<Vec<PointOfInterest>> {
        all_points(&mut self.conn.borrow_mut())
    }
    fn points_in_bbox(&self, bbox: &MapBbox) -> Result<Vec<PointOfInterest>> {
        points_in_bbox(&mut self.conn.borrow_mut(), bbox)
    }
    fn count_points(&self) -> Result<usize> {
        count_points(&mut self.conn.borrow_mut())
    }
}

impl<'a> PointOfInterestRepo for DbReadOnly<'a> {
    fn create_point(&self, new_point: NewPointOfInterest) -> Result<PointOfInterest> {
        create_point(&mut self.conn.borrow_mut(), new_point)
    }
    fn all_points(&self) -> Result<Vec<PointOfInterest>> {
        all_points(&mut self.conn.borrow_mut())
    }
    fn points_in_bbox(&self, bbox: &MapBbox) -> Result<Vec<PointOfInterest>> {
        points_in_bbox(&mut self.conn.borrow_mut(), bbox)
    }
    fn count_points(&self) -> Result<usize> {
        count_points(&mut self.conn.borrow_mut())
    }
}

fn create_point(
    conn: &mut SqliteConnection,
    new_point: NewPointOfInterest,
) -> Result<PointOfInterest> {
    use diesel::Connection as _;
    use schema::points_of_interest::dsl;
    let NewPointOfInterest { name, pos } = new_point;
    let insertable = models::NewPointOfInterest {
        name: &name,
        x: pos.x(),
        y: pos.y(),
    };
    // Both statements must be executed within the same
    // transaction for reading back the assigned id.
    let id = conn
        .transaction(|conn| {
            diesel::insert_into(schema::points_of_interest::table)
                .values(&insertable)
                .execute(conn)?;
            schema::points_of_interest::table
                .select(dsl::id)
                .order_by(dsl::id.desc())
                .first::<i64>(conn)
        })
        .map_err(from_diesel_err)?;
    Ok(PointOfInterest {
        id: id.into(),
        name,
        pos,
    })
}

fn all_points(conn: &mut SqliteConnection) -> Result<Vec<PointOfInterest>> {
    use schema::points_of_interest::dsl;
    Ok(schema::points_of_interest::table
        .order_by(dsl::id)
        .load::<models::PointOfInterest>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn points_in_bbox(conn: &mut SqliteConnection, bbox: &MapBbox) -> Result<Vec<PointOfInterest>> {
    use schema::points_of_interest::dsl;
    let (min, max) = (bbox.min(), bbox.max());
    Ok(schema::points_of_interest::table
        .filter(dsl::x.ge(min.x()))
        .filter(dsl::x.le(max.x()))
        .filter(dsl::y.ge(min.y()))
        .filter(dsl::y.le(max.y()))
        .order_by(dsl::id)
        .load::<models::PointOfInterest>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn count_points(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::points_of_interest::dsl;
    Ok(schema::points_of_interest::table
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::in_memory_connections;

    fn new_point(name: &str, x: i64, y: i64) -> NewPointOfInterest {
        NewPointOfInterest {
            name: name.into(),
            pos: MapPoint::new(x, y),
        }
    }

    #[test]
    fn create_and_load_all_points() {
        let connections = in_memory_connections();
        let db = connections.exclusive().unwrap();
        let cafe = db.create_point(new_point("Cafe", 10, 10)).unwrap();
        let shop = db.create_point(new_point("Shop", -3, 7)).unwrap();
        assert_ne!(cafe.id, shop.id);
        assert_eq!(vec![cafe, shop], db.all_points().unwrap());
        assert_eq!(2, db.count_points().unwrap());
    }

    #[test]
    fn ids_are_not_reused() {
        let connections = in_memory_connections();
        let db = connections.exclusive().unwrap();
        let a = db.create_point(new_point("a", 0, 0)).unwrap();
        diesel::delete(schema::points_of_interest::table)
            .execute(&mut **db.sqlite_conn())
            .unwrap();
        let b = db.create_point(new_point("b", 0, 0)).unwrap();
        assert!(b.id > a.id);
    }

    #[test]
    fn load_points_in_bbox_inclusive() {
        let connections = in_memory_connections();
        {
            let db = connections.exclusive().unwrap();
            for (name, x, y) in [
                ("inside", 0, 0),
                ("min corner", -5, -5),
                ("max corner", 5, 5),
                ("outside x", 6, 0),
                ("outside y", 0, -6),
            ] {
                db.create_point(new_point(name, x, y)).unwrap();
            }
        }
        let db = connections.shared().unwrap();
        let bbox = MapBbox::new(MapPoint::new(-5, -5), MapPoint::new(5, 5));
        let names: Vec<_> = db
            .points_in_bbox(&bbox)
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(vec!["inside", "min corner", "max corner"], names);
    }

    #[test]
    fn empty_bbox_contains_no_points() {
        let connections = in_memory_connections();
        connections
            .exclusive()
            .unwrap()
            .create_point(new_point("origin", 0, 0))
            .unwrap();
        let db = connections.shared().unwrap();
        let bbox = MapBbox::new(MapPoint::new(1, 1), MapPoint::new(-1, -1));
        assert!(db.points_in_bbox(&bbox).unwrap().is_empty());
        assert_eq!(1, db.count_points().unwrap());
    }

    #[test]
    fn store_extreme_coordinates() {
        let connections = in_memory_connections();
        let db = connections.exclusive().unwrap();
        let p = db
            .create_point(new_point("far away", i64::MIN, i64::MAX))
            .unwrap();
        assert_eq!(vec![p], db.all_points().unwrap());
    }

    #[test]
    fn roll_back_failed_transaction() {
        let connections = in_memory_connections();
        let res: std::result::Result<(), _> = connections.exclusive().unwrap().transaction(|conn| {
            conn.create_point(new_point("rolled back", 1, 2))?;
            Err(repo::Error::NotFound)
        });
        assert!(matches!(res, Err(uc::Error::Repo(repo::Error::NotFound))));
        assert_eq!(0, connections.shared().unwrap().count_points().unwrap());
    }
}
