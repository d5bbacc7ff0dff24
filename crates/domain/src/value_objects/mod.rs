//! Value Objects - Immutable, identity-less domain primitives

mod bucketing_zone;
mod city_name;
mod humidity;
mod kelvin;

pub use bucketing_zone::BucketingZone;
pub use city_name::CityName;
pub use humidity::{Humidity, InvalidHumidity};
pub use kelvin::Kelvin;
