use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    Car,
    Motorbike,
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleKind::Car => f.write_str("Car"),
            VehicleKind::Motorbike => f.write_str("Motorbike"),
        }
    }
}

/// Flat, serializable view of a vehicle as used by reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSummary {
    pub kind: VehicleKind,
    pub brand: String,
    pub model: String,
    pub production_year: i32,
    pub detail: String,
    pub daily_rental_price: f64,
    pub rented: bool,
}

/// Formats a price the way descriptions show it: always at least one
/// decimal digit (`80.0`, `12.75`).
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{:.1}", price)
    } else {
        format!("{}", price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(80.0), "80.0");
        assert_eq!(format_price(125.0), "125.0");
        assert_eq!(format_price(12.75), "12.75");
        assert_eq!(format_price(12.5), "12.5");
    }

    #[test]
    fn test_vehicle_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&VehicleKind::Motorbike).unwrap(), "\"motorbike\"");
        assert_eq!(VehicleKind::Car.to_string(), "Car");
    }
}
