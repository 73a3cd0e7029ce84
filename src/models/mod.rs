//! Database models shared across the clinic repository.

pub mod config;
pub mod owner;
