#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # poidb-entities
//!
//! Reusable, agnostic domain entities for poidb.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod geo;
pub mod id;
pub mod point;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
