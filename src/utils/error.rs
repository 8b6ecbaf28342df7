use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgencyError {
    #[error("{reason}. {value} is invalid.")]
    ValidationError {
        field: &'static str,
        value: i64,
        reason: String,
    },

    #[error("Unknown vehicle: {vehicle}")]
    UnknownVehicle { vehicle: String },

    #[error("Client {client} already has a rented vehicle.")]
    ClientAlreadyRenting { client: String },

    #[error("Vehicle {vehicle} is already rented.")]
    VehicleAlreadyRented { vehicle: String },

    #[error("Vehicle {vehicle} is currently rented and cannot be removed.")]
    VehicleRented { vehicle: String },

    #[error("Unknown client: {client}")]
    UnknownClient { client: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    UnknownVehicle,
    Conflict,
    Configuration,
    Io,
}

impl AgencyError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AgencyError::ValidationError { .. } => ErrorCategory::Validation,
            AgencyError::UnknownVehicle { .. } => ErrorCategory::UnknownVehicle,
            AgencyError::ClientAlreadyRenting { .. }
            | AgencyError::VehicleAlreadyRented { .. }
            | AgencyError::VehicleRented { .. } => ErrorCategory::Conflict,
            AgencyError::UnknownClient { .. }
            | AgencyError::ConfigError { .. }
            | AgencyError::TomlError(_) => ErrorCategory::Configuration,
            AgencyError::IoError(_)
            | AgencyError::CsvError(_)
            | AgencyError::SerializationError(_) => ErrorCategory::Io,
        }
    }

    /// Process exit code used by the binary for this error.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Validation => 2,
            ErrorCategory::UnknownVehicle => 3,
            ErrorCategory::Conflict => 4,
            ErrorCategory::Configuration => 5,
            ErrorCategory::Io => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, AgencyError>;
