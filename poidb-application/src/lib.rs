#[macro_use]
extern crate log;

mod all_points;
mod create_point;
mod find_near;

pub mod prelude {
    pub use super::{all_points::*, create_point::*, find_near::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use poidb_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use poidb_db_sqlite::Connections;
}
