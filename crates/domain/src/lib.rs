//! Domain layer for Weatheryze
//!
//! Contains the weather data model, value objects, domain errors and the
//! daily forecast aggregation. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use services::aggregate_daily;
pub use value_objects::*;
