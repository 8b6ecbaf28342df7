pub mod fleet_config;

pub use fleet_config::FleetConfig;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
pub mod cli {
    use crate::app::report::ReportFormat;
    use crate::domain::criteria::{AnyVehicle, BrandCriterion, Criterion, MaxPriceCriterion};
    use crate::utils::error::{AgencyError, Result};
    use crate::utils::validation::{validate_non_empty_string, Validate};
    use clap::Parser;
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "rental-agency")]
    #[command(about = "Inspect a vehicle rental agency described by a fleet file")]
    pub struct CliConfig {
        #[arg(long, help = "Path to the TOML fleet file")]
        pub fleet: PathBuf,

        #[arg(long, help = "Only show vehicles of this brand")]
        pub brand: Option<String>,

        #[arg(long, help = "Only show vehicles at or below this daily price")]
        pub max_price: Option<f64>,

        #[arg(long, default_value = "text", help = "Output format: text, json or csv")]
        pub format: ReportFormat,

        #[arg(long, help = "Pin the current year instead of reading the system clock")]
        pub current_year: Option<i32>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub json_logs: bool,
    }

    impl CliConfig {
        /// Builds the selection criterion from the brand and price filters.
        pub fn criterion(&self) -> Box<dyn Criterion> {
            let brand = self.brand.clone().map(BrandCriterion::new);
            let max_price = self.max_price.map(MaxPriceCriterion::new);
            match (brand, max_price) {
                (Some(brand), Some(max_price)) => Box::new(brand.and(max_price)),
                (Some(brand), None) => Box::new(brand),
                (None, Some(max_price)) => Box::new(max_price),
                (None, None) => Box::new(AnyVehicle),
            }
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Some(brand) = &self.brand {
                validate_non_empty_string("brand", brand)?;
            }
            if let Some(max_price) = self.max_price {
                if !max_price.is_finite() || max_price < 0.0 {
                    return Err(AgencyError::ConfigError {
                        field: "max_price".to_string(),
                        message: format!("Price must be a non-negative number, got {}", max_price),
                    });
                }
            }
            Ok(())
        }
    }

}
