pub mod prelude {

    pub use poidb_core::{entities::*, usecases};
    pub use poidb_entities::builders::*;

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::prelude as flows;

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            poidb_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            )
            .unwrap();
            Self { db_connections }
        }

        pub fn create_point(&self, name: &str, x: RawCoord, y: RawCoord) -> PointOfInterest {
            let new_point = NewPointOfInterest::build()
                .name(name)
                .pos(MapPoint::new(x, y))
                .finish();
            flows::create_point(&self.db_connections, new_point).unwrap()
        }

        pub fn find_near(&self, x: RawCoord, y: RawCoord, radius: RawCoord) -> Vec<PointOfInterest> {
            let query = usecases::NearbyQuery {
                center: MapPoint::new(x, y),
                radius,
            };
            flows::find_near(&self.db_connections, &query).unwrap()
        }

        pub fn all_points(&self) -> Vec<PointOfInterest> {
            flows::load_all_points(&self.db_connections).unwrap()
        }
    }
}

mod points {
    use super::prelude::*;
    use rand::Rng as _;

    fn names(points: &[PointOfInterest]) -> Vec<&str> {
        points.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn created_point_appears_unchanged_in_list() {
        let fixture = BackendFixture::new();
        let created = fixture.create_point("Cafe", 10, 10);
        let all = fixture.all_points();
        assert_eq!(vec![created.clone()], all);
        assert_eq!("Cafe", all[0].name);
        assert_eq!(MapPoint::new(10, 10), all[0].pos);
    }

    #[test]
    fn find_points_near_the_origin() {
        let fixture = BackendFixture::new();
        fixture.create_point("origin", 0, 0);
        fixture.create_point("on the circle", 3, 4);
        fixture.create_point("far away", 10, 10);
        assert_eq!(
            vec!["origin", "on the circle"],
            names(&fixture.find_near(0, 0, 5))
        );
    }

    #[test]
    fn find_with_zero_radius() {
        let fixture = BackendFixture::new();
        fixture.create_point("a", 5, -5);
        fixture.create_point("b", 5, -4);
        fixture.create_point("c", 5, -5);
        assert_eq!(vec!["a", "c"], names(&fixture.find_near(5, -5, 0)));
    }

    #[test]
    fn find_with_negative_radius() {
        let fixture = BackendFixture::new();
        fixture.create_point("a", 0, 0);
        assert!(fixture.find_near(0, 0, -10).is_empty());
    }

    #[test]
    fn completeness_and_soundness() {
        let fixture = BackendFixture::new();
        let mut rng = rand::thread_rng();
        let points: Vec<_> = (0..100)
            .map(|i| {
                fixture.create_point(
                    &format!("p{i}"),
                    rng.gen_range(-30..=30),
                    rng.gen_range(-30..=30),
                )
            })
            .collect();
        for _ in 0..20 {
            let center = MapPoint::new(rng.gen_range(-30..=30), rng.gen_range(-30..=30));
            let radius = rng.gen_range(0..=25);
            let found = fixture.find_near(center.x(), center.y(), radius);
            for p in &points {
                let is_within = MapPoint::distance(center, p.pos).to_f64() <= radius as f64;
                assert_eq!(is_within, found.contains(p), "{p:?} {center} {radius}");
            }
        }
    }
}
