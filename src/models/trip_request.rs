//! Structured trip parameters extracted from a free-text request

use chrono::Month;
use serde::{Deserialize, Serialize};

/// Trip length used when the request names none
pub const DEFAULT_DAYS: u32 = 3;
/// Travel month used when the request names none
pub const DEFAULT_MONTH: Month = Month::October;
/// Destination used when no known locality or region is mentioned
pub const FALLBACK_TARGET: &str = "Delhi";

/// Which scan produced [`TripRequest::target`]
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TargetMatch {
    /// A known locality appeared in the text
    Locality,
    /// A known region appeared in the text (overrides a locality)
    Region,
    /// Nothing matched; the fallback target was used
    Fallback,
}

/// Trip parameters consumed by the itinerary builder
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TripRequest {
    /// Trip length in days
    pub days: u32,
    /// Month of travel
    pub month: Month,
    /// Locality or region name to plan for
    pub target: String,
    /// How `target` was chosen. Informational only: the builder selects
    /// candidates from `target` alone, so a fallback and an explicit mention
    /// of the same name plan identically.
    pub target_match: TargetMatch,
}

impl TripRequest {
    /// Create a request for an explicitly chosen target
    ///
    /// The target is marked as a [`TargetMatch::Locality`]; use
    /// [`TripRequest::with_target_match`] for regions or the fallback.
    #[must_use]
    pub fn new(days: u32, month: Month, target: impl Into<String>) -> Self {
        Self {
            days,
            month,
            target: target.into(),
            target_match: TargetMatch::Locality,
        }
    }

    /// Replace how the target was chosen
    #[must_use]
    pub fn with_target_match(mut self, target_match: TargetMatch) -> Self {
        self.target_match = target_match;
        self
    }

    /// Month name as shown to users, e.g. "October"
    #[must_use]
    pub fn month_name(&self) -> &'static str {
        self.month.name()
    }
}

impl Default for TripRequest {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            month: DEFAULT_MONTH,
            target: FALLBACK_TARGET.to_string(),
            target_match: TargetMatch::Fallback,
        }
    }
}
