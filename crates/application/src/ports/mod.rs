//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure and presentation layers
//! implement these ports.

mod notifier_port;
mod weather_port;

#[cfg(any(test, feature = "test-utils"))]
pub use notifier_port::MockNotifierPort;
pub use notifier_port::{Notification, NotificationLevel, NotifierPort};
#[cfg(any(test, feature = "test-utils"))]
pub use weather_port::MockWeatherPort;
pub use weather_port::WeatherPort;
