//! # Landlord Shared
//! 
//! Shared configuration, telemetry, constants, and types for the landlord record keeper.

pub mod constants;
pub mod types;
pub mod telemetry;
pub mod config;
pub mod error;

pub use types::*;
pub use error::AppError;
