use crate::utils::error::{AgencyError, Result};

pub const MIN_PRODUCTION_YEAR: i32 = 1900;
pub const MIN_SEATS: i32 = 1;
pub const MIN_CYLINDER_CAPACITY: i32 = 50;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_production_year(year: i32, current_year: i32) -> Result<()> {
    validate_range(
        "production_year",
        year,
        MIN_PRODUCTION_YEAR,
        current_year,
        "Production year must be between 1900 and the current year",
    )
}

pub fn validate_at_least(field_name: &'static str, value: i32, min_value: i32, reason: &str) -> Result<()> {
    if value < min_value {
        return Err(AgencyError::ValidationError {
            field: field_name,
            value: value.into(),
            reason: reason.to_string(),
        });
    }
    Ok(())
}

pub fn validate_range(
    field_name: &'static str,
    value: i32,
    min: i32,
    max: i32,
    reason: &str,
) -> Result<()> {
    if value < min || value > max {
        return Err(AgencyError::ValidationError {
            field: field_name,
            value: value.into(),
            reason: reason.to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AgencyError::ConfigError {
            field: field_name.to_string(),
            message: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
