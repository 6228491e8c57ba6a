pub use poidb_core::repositories;

pub mod entities {
    pub use poidb_core::entities::*;
}

pub mod usecases {
    pub use poidb_core::usecases::*;
}

pub mod prelude {
    pub use super::{entities::*, repositories::*};
}
