pub mod bbox;
pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use poidb_entities::{geo::*, id::*, point::*};
}

pub use self::repositories::Error as RepoError;
