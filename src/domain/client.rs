use serde::{Deserialize, Serialize};
use std::fmt;

/// A customer of the agency. Fields are free-form and can be changed after
/// creation; the agency keys rentals on the client's value at rental time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Client {
    first_name: String,
    last_name: String,
    birth_year: i32,
}

impl Client {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, birth_year: i32) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_year,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn birth_year(&self) -> i32 {
        self.birth_year
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
    }

    pub fn set_birth_year(&mut self, birth_year: i32) {
        self.birth_year = birth_year;
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.first_name, self.last_name, self.birth_year)
    }
}
