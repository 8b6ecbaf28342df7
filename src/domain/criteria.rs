//! Predicates used to filter an agency's inventory.

use crate::domain::vehicle::{Rentable, Vehicle};

pub trait Criterion {
    fn test(&self, vehicle: &Vehicle) -> bool;

    fn and<C: Criterion>(self, other: C) -> And<Self, C>
    where
        Self: Sized,
    {
        And(self, other)
    }

    fn or<C: Criterion>(self, other: C) -> Or<Self, C>
    where
        Self: Sized,
    {
        Or(self, other)
    }

    fn not(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not(self)
    }
}

impl<F> Criterion for F
where
    F: Fn(&Vehicle) -> bool,
{
    fn test(&self, vehicle: &Vehicle) -> bool {
        self(vehicle)
    }
}

/// Matches vehicles whose brand is exactly the given one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandCriterion {
    brand: String,
}

impl BrandCriterion {
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
        }
    }
}

impl Criterion for BrandCriterion {
    fn test(&self, vehicle: &Vehicle) -> bool {
        vehicle.brand() == self.brand
    }
}

/// Matches vehicles whose current daily price does not exceed the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxPriceCriterion {
    max_price: f64,
}

impl MaxPriceCriterion {
    pub fn new(max_price: f64) -> Self {
        Self { max_price }
    }
}

impl Criterion for MaxPriceCriterion {
    fn test(&self, vehicle: &Vehicle) -> bool {
        vehicle.daily_rental_price() <= self.max_price
    }
}

#[derive(Debug, Clone)]
pub struct And<A, B>(A, B);

impl<A: Criterion, B: Criterion> Criterion for And<A, B> {
    fn test(&self, vehicle: &Vehicle) -> bool {
        self.0.test(vehicle) && self.1.test(vehicle)
    }
}

#[derive(Debug, Clone)]
pub struct Or<A, B>(A, B);

impl<A: Criterion, B: Criterion> Criterion for Or<A, B> {
    fn test(&self, vehicle: &Vehicle) -> bool {
        self.0.test(vehicle) || self.1.test(vehicle)
    }
}

#[derive(Debug, Clone)]
pub struct Not<A>(A);

impl<A: Criterion> Criterion for Not<A> {
    fn test(&self, vehicle: &Vehicle) -> bool {
        !self.0.test(vehicle)
    }
}

/// Accepts every vehicle.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyVehicle;

impl Criterion for AnyVehicle {
    fn test(&self, _vehicle: &Vehicle) -> bool {
        true
    }
}
