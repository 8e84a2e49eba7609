//! Trip planning service
//!
//! Runs the two planning steps in sequence over a borrowed catalog: extract
//! trip parameters from the request text, then build the itinerary.

use tracing::{info, instrument, warn};

use crate::builder;
use crate::catalog::Catalog;
use crate::config::PlannerConfig;
use crate::extractor;
use crate::models::{Itinerary, TripRequest};

/// Trip planning service over a loaded catalog
pub struct TripPlanner<'a> {
    catalog: &'a Catalog,
    settings: PlannerConfig,
    known_localities: Vec<&'a str>,
    known_regions: Vec<&'a str>,
}

impl<'a> TripPlanner<'a> {
    /// Create a planner with the built-in settings
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_settings(catalog, PlannerConfig::default())
    }

    /// Create a planner with explicit settings
    #[must_use]
    pub fn with_settings(catalog: &'a Catalog, settings: PlannerConfig) -> Self {
        Self {
            catalog,
            settings,
            known_localities: catalog.known_localities(),
            known_regions: catalog.known_regions(),
        }
    }

    /// Extract trip parameters from free text
    #[must_use]
    pub fn extract(&self, text: &str) -> TripRequest {
        extractor::extract_with(
            text,
            &self.known_localities,
            &self.known_regions,
            &self.settings,
        )
    }

    /// Build the itinerary for an already extracted request
    #[must_use]
    pub fn build(&self, request: &TripRequest) -> Itinerary {
        builder::build_with(request, self.catalog.attractions(), &self.settings)
    }

    /// Turn a free-text travel request into an itinerary
    #[instrument(name = "plan_trip", level = "info", skip(self))]
    #[must_use]
    pub fn plan(&self, text: &str) -> Itinerary {
        let request = self.extract(text);
        let itinerary = self.build(&request);

        info!(
            "Planned {}-day trip to {} in {} with {} attractions",
            request.days,
            request.target,
            request.month_name(),
            itinerary.attraction_count()
        );
        if itinerary.is_empty() && request.days > 0 {
            warn!("No attractions matched '{}'", request.target);
        }

        itinerary
    }
}
