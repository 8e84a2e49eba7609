//! `TripPlan` - Rule-based travel itinerary generator
//!
//! This library turns a free-text travel request into a day-by-day plan over
//! a catalog of Indian tourist attractions: trip parameters are extracted by
//! keyword matching, then matching attractions are ranked and spread across
//! the trip days.

pub mod builder;
pub mod catalog;
pub mod config;
pub mod error;
pub mod extractor;
pub mod logging;
pub mod models;
pub mod planner;

// Re-export core types for public API
pub use builder::{build, build_with};
pub use catalog::Catalog;
pub use crate::config::{PlannerConfig, TripPlanConfig};
pub use error::TripPlanError;
pub use extractor::{extract, extract_with};
pub use models::{Attraction, DayPlan, Itinerary, TargetMatch, TripRequest};
pub use planner::TripPlanner;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TripPlanError>;
