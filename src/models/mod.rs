//! Data models for the TripPlan application
//!
//! This module contains the core domain models organized by concern:
//! - Attraction: one catalog row describing a tourist site
//! - TripRequest: trip parameters extracted from free text
//! - Itinerary: the day-by-day plan handed to the presentation layer

pub mod attraction;
pub mod itinerary;
pub mod trip_request;

// Re-export all public types for convenient access
pub use attraction::Attraction;
pub use itinerary::{DayPlan, Itinerary};
pub use trip_request::{TargetMatch, TripRequest};
