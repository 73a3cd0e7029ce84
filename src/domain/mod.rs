//! Domain aggregates exposed by the clinic service layer.

pub mod owner;
pub mod types;
