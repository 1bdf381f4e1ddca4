pub mod analysis;
pub mod comparison;
pub mod location;
pub mod observation;
pub mod period;
