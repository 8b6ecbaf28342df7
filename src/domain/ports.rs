use std::fmt::Debug;
use std::sync::Arc;

/// Source of the current calendar year.
///
/// Vehicles consult it both when validating their production year and every
/// time a price is computed, so swapping the provider changes prices without
/// rebuilding the vehicles.
pub trait TimeProvider: Debug + Send + Sync {
    fn current_year(&self) -> i32;
}

pub type SharedClock = Arc<dyn TimeProvider>;
