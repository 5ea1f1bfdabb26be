//! Ride booking wizard: location entry, ride-option selection, confirmation.
//!
//! [BookingFlow] is the entry point. Catalogs and configuration come in through
//! [BookingSetup]; navigation and notifications go out through the [Navigator]
//! and [Notifier] collaborators.

pub mod catalog;
pub mod clock;
pub mod collaborators;
pub mod config;
pub mod error;
pub mod flow;
pub mod routes;
pub mod runner;
pub mod session;
pub mod systems;
pub mod view;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;

pub use catalog::{DriverRoster, Fare, NearbyDriver, RideCatalog, RideOption, RideOptionId};
pub use collaborators::{Navigator, Notice, Notifier, Severity};
pub use config::{BookingSetup, FlowConfig};
pub use error::{BookingError, ConfigError};
pub use flow::BookingFlow;
pub use routes::AppRoute;
pub use session::{BookingSession, BookingStage};
pub use view::BookingView;
