//! Application layer - Use cases and orchestration
//!
//! Defines the ports the lookup use case depends on and the state container
//! the presentation layer renders from.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
