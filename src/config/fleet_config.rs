use crate::adapters::clock::{FixedClock, SystemClock};
use crate::domain::agency::RentalAgency;
use crate::domain::client::Client;
use crate::domain::ports::SharedClock;
use crate::domain::vehicle::{Car, Motorbike, Rentable, Vehicle};
use crate::utils::error::{AgencyError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Initial state of an agency, read from a TOML fleet file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetConfig {
    pub agency: AgencySettings,
    #[serde(default)]
    pub vehicles: Vec<VehicleSpec>,
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub rentals: Vec<RentalSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgencySettings {
    pub name: String,
    /// Pins the calendar year instead of reading the system clock.
    pub current_year: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VehicleSpec {
    Car {
        brand: String,
        model: String,
        production_year: i32,
        seats: i32,
    },
    Motorbike {
        brand: String,
        model: String,
        production_year: i32,
        cylinder_capacity: i32,
    },
}

/// A rental to replay when the agency is built. The client is referenced by
/// full name, the vehicle by brand, model and production year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentalSpec {
    pub client: String,
    pub brand: String,
    pub model: String,
    pub production_year: i32,
}

impl VehicleSpec {
    fn brand(&self) -> &str {
        match self {
            VehicleSpec::Car { brand, .. } | VehicleSpec::Motorbike { brand, .. } => brand,
        }
    }

    fn model(&self) -> &str {
        match self {
            VehicleSpec::Car { model, .. } | VehicleSpec::Motorbike { model, .. } => model,
        }
    }

    pub fn build(&self, clock: SharedClock) -> Result<Vehicle> {
        let vehicle: Vehicle = match self {
            VehicleSpec::Car {
                brand,
                model,
                production_year,
                seats,
            } => Car::with_clock(brand.as_str(), model.as_str(), *production_year, *seats, clock)?.into(),
            VehicleSpec::Motorbike {
                brand,
                model,
                production_year,
                cylinder_capacity,
            } => Motorbike::with_clock(
                brand.as_str(),
                model.as_str(),
                *production_year,
                *cylinder_capacity,
                clock,
            )?
            .into(),
        };
        Ok(vehicle)
    }
}

impl RentalSpec {
    fn matches(&self, vehicle: &Vehicle) -> bool {
        vehicle.brand() == self.brand
            && vehicle.model() == self.model
            && vehicle.production_year() == self.production_year
    }
}

impl FleetConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AgencyError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the value of the environment variable. Unset
    /// variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AgencyError::ConfigError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Clock for the agency: an explicit year wins over the file's
    /// `current_year`, which wins over the system clock.
    pub fn clock(&self, year_override: Option<i32>) -> SharedClock {
        match year_override.or(self.agency.current_year) {
            Some(year) => FixedClock::shared(year),
            None => SystemClock::shared(),
        }
    }

    pub fn find_client(&self, full_name: &str) -> Result<&Client> {
        self.clients
            .iter()
            .find(|client| client.full_name() == full_name)
            .ok_or_else(|| AgencyError::UnknownClient {
                client: full_name.to_string(),
            })
    }

    /// Builds every vehicle, stocks the agency, then replays the rentals.
    pub fn build_agency(&self, clock: SharedClock) -> Result<RentalAgency> {
        let mut agency = RentalAgency::new();
        for spec in &self.vehicles {
            let vehicle = spec.build(clock.clone())?;
            if !agency.add(vehicle) {
                tracing::warn!(
                    "Duplicate vehicle in fleet '{}': {} {}",
                    self.agency.name,
                    spec.brand(),
                    spec.model()
                );
            }
        }

        for rental in &self.rentals {
            let client = self.find_client(&rental.client)?;
            let vehicle = agency
                .vehicles()
                .iter()
                .find(|vehicle| rental.matches(vehicle))
                .cloned()
                .ok_or_else(|| AgencyError::UnknownVehicle {
                    vehicle: format!("{} {} {}", rental.brand, rental.model, rental.production_year),
                })?;
            agency.rent_vehicle(client, &vehicle)?;
        }

        tracing::info!(
            "Agency '{}' ready with {} vehicles and {} active rentals",
            self.agency.name,
            agency.len(),
            agency.all_rented_vehicles().len()
        );
        Ok(agency)
    }
}

impl Validate for FleetConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("agency.name", &self.agency.name)?;

        for (index, spec) in self.vehicles.iter().enumerate() {
            validate_non_empty_string(&format!("vehicles[{}].brand", index), spec.brand())?;
            validate_non_empty_string(&format!("vehicles[{}].model", index), spec.model())?;
        }

        for (index, client) in self.clients.iter().enumerate() {
            validate_non_empty_string(&format!("clients[{}].first_name", index), client.first_name())?;
            validate_non_empty_string(&format!("clients[{}].last_name", index), client.last_name())?;
        }

        for rental in &self.rentals {
            self.find_client(&rental.client)?;
        }

        Ok(())
    }
}
