//! Vehicles offered by the agency.
//!
//! [`Car`] and [`Motorbike`] share a validated [`VehicleInfo`] core and each
//! carry their own pricing rule. [`Vehicle`] is the sum type the agency stores.
//!
//! Equality only looks at the concrete kind, brand, model and production
//! year: two Corollas from 2019 are the same vehicle whatever their seat count.

use crate::adapters::clock::SystemClock;
use crate::domain::model::{format_price, VehicleKind, VehicleSummary};
use crate::domain::ports::SharedClock;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_at_least, validate_production_year, MIN_CYLINDER_CAPACITY, MIN_SEATS,
};
use std::fmt;

/// A car is new while it is at most this many years old.
pub const NEW_CAR_MAX_AGE: i32 = 5;
pub const NEW_CAR_PRICE_PER_SEAT: f64 = 40.0;
pub const USED_CAR_PRICE_PER_SEAT: f64 = 20.0;
pub const MOTORBIKE_PRICE_PER_CM3: f64 = 0.25;

/// Capabilities every rentable vehicle exposes.
pub trait Rentable {
    fn brand(&self) -> &str;
    fn model(&self) -> &str;
    fn production_year(&self) -> i32;
    fn daily_rental_price(&self) -> f64;
    /// `<Type> <brand> <model> <year> (<detail>) : <price>€`
    fn describe(&self) -> String;
}

#[derive(Debug, Clone)]
struct VehicleInfo {
    brand: String,
    model: String,
    production_year: i32,
    clock: SharedClock,
}

impl VehicleInfo {
    fn new(brand: String, model: String, production_year: i32, clock: SharedClock) -> Result<Self> {
        validate_production_year(production_year, clock.current_year())?;
        Ok(Self {
            brand,
            model,
            production_year,
            clock,
        })
    }

    fn age(&self) -> i32 {
        self.clock.current_year() - self.production_year
    }

    fn describe(&self, kind: VehicleKind, detail: &str, price: f64) -> String {
        format!(
            "{} {} {} {} ({}) : {}€",
            kind,
            self.brand,
            self.model,
            self.production_year,
            detail,
            format_price(price)
        )
    }
}

impl PartialEq for VehicleInfo {
    fn eq(&self, other: &Self) -> bool {
        self.brand == other.brand
            && self.model == other.model
            && self.production_year == other.production_year
    }
}

impl Eq for VehicleInfo {}

#[derive(Debug, Clone)]
pub struct Car {
    info: VehicleInfo,
    number_of_seats: i32,
}

impl Car {
    /// Builds a car checked against the system clock.
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        production_year: i32,
        number_of_seats: i32,
    ) -> Result<Self> {
        Self::with_clock(brand, model, production_year, number_of_seats, SystemClock::shared())
    }

    pub fn with_clock(
        brand: impl Into<String>,
        model: impl Into<String>,
        production_year: i32,
        number_of_seats: i32,
        clock: SharedClock,
    ) -> Result<Self> {
        let info = VehicleInfo::new(brand.into(), model.into(), production_year, clock)?;
        validate_at_least(
            "number_of_seats",
            number_of_seats,
            MIN_SEATS,
            "Number of seats must be at least 1",
        )?;
        Ok(Self {
            info,
            number_of_seats,
        })
    }

    pub fn number_of_seats(&self) -> i32 {
        self.number_of_seats
    }

    /// Whether the car is at most five years old, as of now.
    pub fn is_new(&self) -> bool {
        self.info.age() <= NEW_CAR_MAX_AGE
    }

    fn detail(&self) -> String {
        let plural = if self.number_of_seats > 1 { "s" } else { "" };
        format!("{} seat{}", self.number_of_seats, plural)
    }
}

// Seat count is not part of a car's identity.
impl PartialEq for Car {
    fn eq(&self, other: &Self) -> bool {
        self.info == other.info
    }
}

impl Eq for Car {}

impl Rentable for Car {
    fn brand(&self) -> &str {
        &self.info.brand
    }

    fn model(&self) -> &str {
        &self.info.model
    }

    fn production_year(&self) -> i32 {
        self.info.production_year
    }

    fn daily_rental_price(&self) -> f64 {
        let per_seat = if self.is_new() {
            NEW_CAR_PRICE_PER_SEAT
        } else {
            USED_CAR_PRICE_PER_SEAT
        };
        f64::from(self.number_of_seats) * per_seat
    }

    fn describe(&self) -> String {
        self.info
            .describe(VehicleKind::Car, &self.detail(), self.daily_rental_price())
    }
}

#[derive(Debug, Clone)]
pub struct Motorbike {
    info: VehicleInfo,
    cylinder_capacity: i32,
}

impl Motorbike {
    /// Builds a motorbike checked against the system clock.
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        production_year: i32,
        cylinder_capacity: i32,
    ) -> Result<Self> {
        Self::with_clock(brand, model, production_year, cylinder_capacity, SystemClock::shared())
    }

    pub fn with_clock(
        brand: impl Into<String>,
        model: impl Into<String>,
        production_year: i32,
        cylinder_capacity: i32,
        clock: SharedClock,
    ) -> Result<Self> {
        let info = VehicleInfo::new(brand.into(), model.into(), production_year, clock)?;
        validate_at_least(
            "cylinder_capacity",
            cylinder_capacity,
            MIN_CYLINDER_CAPACITY,
            "Cylinder capacity must be at least 50",
        )?;
        Ok(Self {
            info,
            cylinder_capacity,
        })
    }

    pub fn cylinder_capacity(&self) -> i32 {
        self.cylinder_capacity
    }

    fn detail(&self) -> String {
        format!("{}cm3", self.cylinder_capacity)
    }
}

impl PartialEq for Motorbike {
    fn eq(&self, other: &Self) -> bool {
        self.info == other.info
    }
}

impl Eq for Motorbike {}

impl Rentable for Motorbike {
    fn brand(&self) -> &str {
        &self.info.brand
    }

    fn model(&self) -> &str {
        &self.info.model
    }

    fn production_year(&self) -> i32 {
        self.info.production_year
    }

    fn daily_rental_price(&self) -> f64 {
        f64::from(self.cylinder_capacity) * MOTORBIKE_PRICE_PER_CM3
    }

    fn describe(&self) -> String {
        self.info.describe(
            VehicleKind::Motorbike,
            &self.detail(),
            self.daily_rental_price(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Vehicle {
    Car(Car),
    Motorbike(Motorbike),
}

impl Vehicle {
    pub fn kind(&self) -> VehicleKind {
        match self {
            Vehicle::Car(_) => VehicleKind::Car,
            Vehicle::Motorbike(_) => VehicleKind::Motorbike,
        }
    }

    fn as_rentable(&self) -> &dyn Rentable {
        match self {
            Vehicle::Car(car) => car,
            Vehicle::Motorbike(motorbike) => motorbike,
        }
    }

    pub fn summary(&self, rented: bool) -> VehicleSummary {
        let detail = match self {
            Vehicle::Car(car) => car.detail(),
            Vehicle::Motorbike(motorbike) => motorbike.detail(),
        };
        VehicleSummary {
            kind: self.kind(),
            brand: self.brand().to_string(),
            model: self.model().to_string(),
            production_year: self.production_year(),
            detail,
            daily_rental_price: self.daily_rental_price(),
            rented,
        }
    }
}

impl Rentable for Vehicle {
    fn brand(&self) -> &str {
        self.as_rentable().brand()
    }

    fn model(&self) -> &str {
        self.as_rentable().model()
    }

    fn production_year(&self) -> i32 {
        self.as_rentable().production_year()
    }

    fn daily_rental_price(&self) -> f64 {
        self.as_rentable().daily_rental_price()
    }

    fn describe(&self) -> String {
        self.as_rentable().describe()
    }
}

impl From<Car> for Vehicle {
    fn from(car: Car) -> Self {
        Vehicle::Car(car)
    }
}

impl From<Motorbike> for Vehicle {
    fn from(motorbike: Motorbike) -> Self {
        Vehicle::Motorbike(motorbike)
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
