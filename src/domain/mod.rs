// Domain layer: vehicles, clients, criteria and the agency aggregate, plus
// the ports they depend on. No IO.

pub mod agency;
pub mod client;
pub mod criteria;
pub mod model;
pub mod ports;
pub mod vehicle;
