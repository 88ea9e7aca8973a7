//! Data models for the SWAPI people endpoint.
//!
//! The upstream API is treated as an opaque mapping with a handful of known
//! fields: everything we don't recognize is ignored, and known fields that
//! are missing fall back to defaults so a partial payload never fails to
//! deserialize.

mod film;
mod page;
mod person;

pub use film::Film;
pub use page::PeoplePage;
pub use person::Person;
