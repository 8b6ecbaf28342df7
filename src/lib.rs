pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FixedClock, SystemClock};
pub use app::report::{render_selection, ReportFormat};
pub use config::FleetConfig;
pub use domain::agency::RentalAgency;
pub use domain::client::Client;
pub use domain::criteria::{AnyVehicle, BrandCriterion, Criterion, MaxPriceCriterion};
pub use domain::model::{VehicleKind, VehicleSummary};
pub use domain::ports::{SharedClock, TimeProvider};
pub use domain::vehicle::{Car, Motorbike, Rentable, Vehicle};
pub use utils::error::{AgencyError, ErrorCategory, Result};
