mod create_point;
mod error;
mod find_near;

#[cfg(test)]
pub mod tests;

pub use self::{create_point::*, error::Error, find_near::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
use self::prelude::*;

pub fn load_all_points<R>(repo: &R) -> Result<Vec<PointOfInterest>>
where
    R: PointOfInterestRepo,
{
    Ok(repo.all_points()?)
}
