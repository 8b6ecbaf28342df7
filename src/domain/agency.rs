//! The rental agency aggregate.
//!
//! # Invariants
//!
//! - The inventory never holds two equal vehicles.
//! - A client holds at most one vehicle and a vehicle has at most one renter.
//! - Every rented vehicle is part of the inventory: a rented vehicle cannot be
//!   removed until it is returned.
//!
//! Both collections are private; every change goes through the methods below,
//! each of which either applies fully or leaves the agency untouched.

use crate::domain::client::Client;
use crate::domain::criteria::Criterion;
use crate::domain::model::VehicleSummary;
use crate::domain::vehicle::{Rentable, Vehicle};
use crate::utils::error::{AgencyError, Result};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct RentalAgency {
    vehicles: Vec<Vehicle>,
    rented_vehicles: HashMap<Client, Vehicle>,
}

impl RentalAgency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an agency stocked with the given vehicles. Duplicates are dropped.
    pub fn with_vehicles<I>(vehicles: I) -> Self
    where
        I: IntoIterator<Item = Vehicle>,
    {
        let mut agency = Self::new();
        for vehicle in vehicles {
            agency.add(vehicle);
        }
        agency
    }

    /// Adds a vehicle unless an equal one is already in stock.
    pub fn add(&mut self, vehicle: Vehicle) -> bool {
        if self.contains(&vehicle) {
            tracing::debug!("Skipping duplicate vehicle: {}", vehicle);
            return false;
        }
        tracing::debug!("Adding vehicle: {}", vehicle);
        self.vehicles.push(vehicle);
        true
    }

    pub fn remove(&mut self, vehicle: &Vehicle) -> Result<Vehicle> {
        let Some(index) = self.vehicles.iter().position(|v| v == vehicle) else {
            tracing::warn!("Cannot remove unknown vehicle: {}", vehicle);
            return Err(unknown_vehicle(vehicle));
        };
        if self.vehicle_is_rented(vehicle) {
            tracing::warn!("Cannot remove rented vehicle: {}", vehicle);
            return Err(AgencyError::VehicleRented {
                vehicle: vehicle.describe(),
            });
        }
        let removed = self.vehicles.remove(index);
        tracing::debug!("Removed vehicle: {}", removed);
        Ok(removed)
    }

    pub fn contains(&self, vehicle: &Vehicle) -> bool {
        self.vehicles.contains(vehicle)
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Vehicles satisfying `criterion`, in inventory order.
    pub fn select<C>(&self, criterion: &C) -> Vec<&Vehicle>
    where
        C: Criterion + ?Sized,
    {
        self.vehicles
            .iter()
            .filter(|vehicle| criterion.test(vehicle))
            .collect()
    }

    /// One description line per selected vehicle.
    pub fn describe_selected<C>(&self, criterion: &C) -> Vec<String>
    where
        C: Criterion + ?Sized,
    {
        self.select(criterion)
            .into_iter()
            .map(Rentable::describe)
            .collect()
    }

    pub fn summaries<C>(&self, criterion: &C) -> Vec<VehicleSummary>
    where
        C: Criterion + ?Sized,
    {
        self.select(criterion)
            .into_iter()
            .map(|vehicle| vehicle.summary(self.vehicle_is_rented(vehicle)))
            .collect()
    }

    pub fn a_vehicle_is_rented_by(&self, client: &Client) -> bool {
        self.rented_vehicles.contains_key(client)
    }

    pub fn vehicle_is_rented(&self, vehicle: &Vehicle) -> bool {
        self.rented_vehicles.values().any(|rented| rented == vehicle)
    }

    pub fn rental_of(&self, client: &Client) -> Option<&Vehicle> {
        self.rented_vehicles.get(client)
    }

    /// Rents `vehicle` to `client` and returns its current daily price.
    pub fn rent_vehicle(&mut self, client: &Client, vehicle: &Vehicle) -> Result<f64> {
        let Some(stocked) = self.vehicles.iter().find(|v| *v == vehicle) else {
            tracing::warn!("Cannot rent unknown vehicle: {}", vehicle);
            return Err(unknown_vehicle(vehicle));
        };
        if self.a_vehicle_is_rented_by(client) {
            tracing::warn!("Client {} already has a rented vehicle", client);
            return Err(AgencyError::ClientAlreadyRenting {
                client: client.to_string(),
            });
        }
        if self.vehicle_is_rented(vehicle) {
            tracing::warn!("Vehicle {} is already rented", vehicle);
            return Err(AgencyError::VehicleAlreadyRented {
                vehicle: vehicle.describe(),
            });
        }

        let stocked = stocked.clone();
        let price = stocked.daily_rental_price();
        tracing::info!("Client {} rents {} for {}€/day", client, stocked, price);
        self.rented_vehicles.insert(client.clone(), stocked);
        Ok(price)
    }

    /// Ends the client's rental, if any.
    pub fn return_vehicle(&mut self, client: &Client) -> Option<Vehicle> {
        let returned = self.rented_vehicles.remove(client);
        match &returned {
            Some(vehicle) => tracing::debug!("Client {} returned {}", client, vehicle),
            None => tracing::debug!("Client {} had no vehicle to return", client),
        }
        returned
    }

    /// Snapshot of the rented vehicles, in inventory order.
    pub fn all_rented_vehicles(&self) -> Vec<&Vehicle> {
        self.vehicles
            .iter()
            .filter(|vehicle| self.vehicle_is_rented(vehicle))
            .collect()
    }
}

fn unknown_vehicle(vehicle: &Vehicle) -> AgencyError {
    AgencyError::UnknownVehicle {
        vehicle: vehicle.describe(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;
    use crate::domain::criteria::{BrandCriterion, MaxPriceCriterion};
    use crate::domain::ports::SharedClock;
    use crate::domain::vehicle::{Car, Motorbike};
    use crate::utils::error::ErrorCategory;

    struct Fixture {
        agency: RentalAgency,
        car1: Vehicle,
        car2: Vehicle,
        car3: Vehicle,
        motorbike1: Vehicle,
        motorbike2: Vehicle,
        client1: Client,
        client2: Client,
    }

    fn clock() -> SharedClock {
        FixedClock::shared(2024)
    }

    fn car(brand: &str, model: &str, year: i32, seats: i32) -> Vehicle {
        Car::with_clock(brand, model, year, seats, clock()).unwrap().into()
    }

    fn motorbike(brand: &str, model: &str, year: i32, capacity: i32) -> Vehicle {
        Motorbike::with_clock(brand, model, year, capacity, clock()).unwrap().into()
    }

    fn fixture() -> Fixture {
        let car1 = car("Toyota", "Corolla", 2018, 4);
        let car2 = car("Toyota", "Yaris", 2018, 4);
        let car3 = car("Ford", "Fiesta", 2017, 4);
        let motorbike1 = motorbike("Honda", "CBR", 2020, 500);
        let motorbike2 = motorbike("Yamaha", "R1", 2021, 1000);
        let agency = RentalAgency::with_vehicles([
            car1.clone(),
            car2.clone(),
            car3.clone(),
            motorbike1.clone(),
            motorbike2.clone(),
        ]);
        Fixture {
            agency,
            car1,
            car2,
            car3,
            motorbike1,
            motorbike2,
            client1: Client::new("John", "Doe", 1998),
            client2: Client::new("Jane", "Smith", 2000),
        }
    }

    #[test]
    fn test_with_vehicles_keeps_all() {
        let f = fixture();
        assert_eq!(f.agency.len(), 5);
        for vehicle in [&f.car1, &f.car2, &f.car3, &f.motorbike1, &f.motorbike2] {
            assert!(f.agency.contains(vehicle));
        }
    }

    #[test]
    fn test_with_vehicles_drops_duplicates() {
        let agency = RentalAgency::with_vehicles([
            car("Toyota", "Corolla", 2019, 4),
            car("Toyota", "Corolla", 2019, 7),
        ]);
        assert_eq!(agency.len(), 1);
    }

    #[test]
    fn test_add_vehicle() {
        let mut f = fixture();
        assert!(f.agency.add(car("Ford", "Ka", 2005, 2)));
        assert!(!f.agency.add(f.car1.clone()));
        assert!(!f.agency.add(car("Toyota", "Corolla", 2018, 9)));
        assert_eq!(f.agency.len(), 6);
        assert!(f.agency.contains(&f.car2));
        assert!(f.agency.contains(&f.motorbike2));
    }

    #[test]
    fn test_select_by_brand_preserves_order() {
        let f = fixture();
        let toyotas = f.agency.select(&BrandCriterion::new("Toyota"));
        assert_eq!(toyotas, vec![&f.car1, &f.car2]);
        assert_eq!(f.agency.select(&BrandCriterion::new("Ford")), vec![&f.car3]);
        assert!(f.agency.select(&BrandCriterion::new("Renault")).is_empty());
    }

    #[test]
    fn test_select_by_max_price() {
        let f = fixture();
        // used cars at 80, motorbikes at 125 and 250
        assert_eq!(f.agency.select(&MaxPriceCriterion::new(100.0)).len(), 3);
        assert_eq!(f.agency.select(&MaxPriceCriterion::new(300.0)).len(), 5);
    }

    #[test]
    fn test_select_with_combined_criteria() {
        let f = fixture();
        let criterion = BrandCriterion::new("Honda").or(BrandCriterion::new("Ford"));
        assert_eq!(f.agency.select(&criterion), vec![&f.car3, &f.motorbike1]);
    }

    #[test]
    fn test_describe_selected() {
        let f = fixture();
        let lines = f.agency.describe_selected(&BrandCriterion::new("Toyota"));
        assert_eq!(
            lines,
            vec![
                "Car Toyota Corolla 2018 (4 seats) : 80.0€".to_string(),
                "Car Toyota Yaris 2018 (4 seats) : 80.0€".to_string(),
            ]
        );
    }

    #[test]
    fn test_remove_vehicle() {
        let mut f = fixture();
        let removed = f.agency.remove(&f.car1).unwrap();
        assert_eq!(removed, f.car1);
        assert_eq!(f.agency.len(), 4);
        assert!(!f.agency.contains(&f.car1));

        let err = f.agency.remove(&f.car1).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::UnknownVehicle);
    }

    #[test]
    fn test_remove_never_added_vehicle() {
        let mut f = fixture();
        let err = f.agency.remove(&car("Renault", "Zoe", 2019, 4)).unwrap_err();
        assert!(matches!(err, AgencyError::UnknownVehicle { .. }));
        assert_eq!(f.agency.len(), 5);
    }

    #[test]
    fn test_remove_rented_vehicle_is_rejected() {
        let mut f = fixture();
        f.agency.rent_vehicle(&f.client1, &f.car1).unwrap();

        let err = f.agency.remove(&f.car1).unwrap_err();
        assert!(matches!(err, AgencyError::VehicleRented { .. }));
        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert!(f.agency.contains(&f.car1));
        assert!(f.agency.vehicle_is_rented(&f.car1));

        f.agency.return_vehicle(&f.client1);
        assert!(f.agency.remove(&f.car1).is_ok());
        assert!(f.agency.all_rented_vehicles().is_empty());
    }

    #[test]
    fn test_rent_vehicle_returns_price() {
        let mut f = fixture();
        assert_eq!(f.agency.rent_vehicle(&f.client1, &f.car1).unwrap(), 80.0);
        assert_eq!(f.agency.rent_vehicle(&f.client2, &f.motorbike1).unwrap(), 125.0);
        assert!(f.agency.a_vehicle_is_rented_by(&f.client1));
        assert!(f.agency.vehicle_is_rented(&f.car1));
        assert_eq!(f.agency.rental_of(&f.client2), Some(&f.motorbike1));
    }

    #[test]
    fn test_rent_unknown_vehicle() {
        let mut f = fixture();
        let err = f
            .agency
            .rent_vehicle(&f.client1, &car("Renault", "Zoe", 2019, 4))
            .unwrap_err();
        assert!(matches!(err, AgencyError::UnknownVehicle { .. }));
        assert!(!f.agency.a_vehicle_is_rented_by(&f.client1));
    }

    #[test]
    fn test_rent_already_rented_vehicle() {
        let mut f = fixture();
        f.agency.rent_vehicle(&f.client1, &f.car1).unwrap();
        let err = f.agency.rent_vehicle(&f.client2, &f.car1).unwrap_err();
        assert!(matches!(err, AgencyError::VehicleAlreadyRented { .. }));
        assert!(!f.agency.a_vehicle_is_rented_by(&f.client2));
    }

    #[test]
    fn test_rent_when_client_already_renting() {
        let mut f = fixture();
        f.agency.rent_vehicle(&f.client1, &f.car1).unwrap();
        let err = f.agency.rent_vehicle(&f.client1, &f.car2).unwrap_err();
        assert!(matches!(err, AgencyError::ClientAlreadyRenting { .. }));
        assert!(!f.agency.vehicle_is_rented(&f.car2));
        assert_eq!(f.agency.rental_of(&f.client1), Some(&f.car1));
    }

    #[test]
    fn test_rent_matches_by_equality() {
        let mut f = fixture();
        // same brand, model and year as car1, different seat count
        let lookalike = car("Toyota", "Corolla", 2018, 7);
        assert_eq!(f.agency.rent_vehicle(&f.client1, &lookalike).unwrap(), 80.0);
        assert!(f.agency.vehicle_is_rented(&f.car1));
    }

    #[test]
    fn test_add_and_remove_match_motorbikes_by_equality() {
        let mut f = fixture();
        assert!(!f.agency.add(motorbike("Honda", "CBR", 2020, 600)));
        assert_eq!(f.agency.len(), 5);

        let removed = f.agency.remove(&motorbike("Honda", "CBR", 2020, 750)).unwrap();
        assert_eq!(removed.daily_rental_price(), 125.0);
        assert!(!f.agency.contains(&f.motorbike1));
    }

    #[test]
    fn test_return_vehicle() {
        let mut f = fixture();
        f.agency.rent_vehicle(&f.client1, &f.car1).unwrap();
        assert!(f.agency.a_vehicle_is_rented_by(&f.client1));
        assert_eq!(f.agency.return_vehicle(&f.client1), Some(f.car1.clone()));
        assert!(!f.agency.a_vehicle_is_rented_by(&f.client1));
        assert!(!f.agency.vehicle_is_rented(&f.car1));

        // returning twice is harmless
        assert_eq!(f.agency.return_vehicle(&f.client1), None);
        assert_eq!(f.agency.rent_vehicle(&f.client2, &f.car1).unwrap(), 80.0);
    }

    #[test]
    fn test_all_rented_vehicles() {
        let mut f = fixture();
        assert!(f.agency.all_rented_vehicles().is_empty());
        f.agency.rent_vehicle(&f.client2, &f.motorbike2).unwrap();
        f.agency.rent_vehicle(&f.client1, &f.car1).unwrap();
        assert_eq!(f.agency.all_rented_vehicles(), vec![&f.car1, &f.motorbike2]);
    }

    #[test]
    fn test_summaries_flag_rented_vehicles() {
        let mut f = fixture();
        f.agency.rent_vehicle(&f.client1, &f.car2).unwrap();
        let summaries = f.agency.summaries(&BrandCriterion::new("Toyota"));
        assert_eq!(summaries.len(), 2);
        assert!(!summaries[0].rented);
        assert!(summaries[1].rented);
        assert_eq!(summaries[1].model, "Yaris");
    }
}
