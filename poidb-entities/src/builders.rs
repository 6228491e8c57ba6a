pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::point_builder::*;

pub mod point_builder {

    use super::*;
    use crate::{geo::*, id::*, point::*};

    #[derive(Debug)]
    pub struct PointOfInterestBuild {
        point: PointOfInterest,
    }

    impl PointOfInterestBuild {
        pub fn id(mut self, id: RawId) -> Self {
            self.point.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.point.name = name.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.point.pos = pos;
            self
        }
        pub fn finish(self) -> PointOfInterest {
            self.point
        }
    }

    impl Builder for PointOfInterest {
        type Build = PointOfInterestBuild;
        fn build() -> PointOfInterestBuild {
            PointOfInterestBuild {
                point: PointOfInterest {
                    id: Default::default(),
                    name: "".into(),
                    pos: Default::default(),
                },
            }
        }
    }

    #[derive(Debug)]
    pub struct NewPointOfInterestBuild {
        point: NewPointOfInterest,
    }

    impl NewPointOfInterestBuild {
        pub fn name(mut self, name: &str) -> Self {
            self.point.name = name.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.point.pos = pos;
            self
        }
        pub fn finish(self) -> NewPointOfInterest {
            self.point
        }
    }

    impl Builder for NewPointOfInterest {
        type Build = NewPointOfInterestBuild;
        fn build() -> NewPointOfInterestBuild {
            NewPointOfInterestBuild {
                point: NewPointOfInterest {
                    name: "".into(),
                    pos: Default::default(),
                },
            }
        }
    }
}
