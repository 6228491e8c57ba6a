use diesel::{self, prelude::*, result::Error as DieselError};

use poidb_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod point;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        _ => repo::Error::Other(err.into()),
    }
}

impl From<models::PointOfInterest> for PointOfInterest {
    fn from(from: models::PointOfInterest) -> Self {
        let models::PointOfInterest { id, name, x, y } = from;
        Self {
            id: id.into(),
            name,
            pos: MapPoint::new(x, y),
        }
    }
}
