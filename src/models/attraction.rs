//! Attraction model for a single catalog row

use serde::{Deserialize, Serialize};

/// Rating shown when the catalog has none for an attraction
pub const DEFAULT_DISPLAY_RATING: f64 = 4.0;
/// Visit time in hours shown when the catalog has none
pub const DEFAULT_DISPLAY_VISIT_HOURS: f64 = 2.0;
/// Significance shown when the catalog has none
pub const DEFAULT_SIGNIFICANCE: &str = "Popular tourist destination";

/// A tourist site from the catalog
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Attraction {
    /// Attraction name
    pub name: String,
    /// City the attraction is in
    pub locality: String,
    /// State the attraction is in
    pub region: String,
    /// Kind of site (Temple, Fort, Beach, ...)
    pub category: String,
    /// Google review rating, 0-5
    pub rating: Option<f64>,
    /// Number of Google reviews, in lakhs
    pub review_volume: Option<f64>,
    /// Time needed to visit, in hours
    pub visit_hours: Option<f64>,
    /// Entrance fee in INR, 0 when unknown
    pub entrance_fee: f64,
    /// Why the site is worth a visit
    pub significance: Option<String>,
    /// Geographic zone (Northern, Southern, ...)
    pub zone: Option<String>,
    /// Day of the week the site is closed
    pub weekly_off: Option<String>,
    /// Preferred time of day to visit
    pub best_time_to_visit: Option<String>,
}

impl Attraction {
    /// Create an attraction with only the identifying fields set
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        locality: impl Into<String>,
        region: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            locality: locality.into(),
            region: region.into(),
            category: category.into(),
            rating: None,
            review_volume: None,
            visit_hours: None,
            entrance_fee: 0.0,
            significance: None,
            zone: None,
            weekly_off: None,
            best_time_to_visit: None,
        }
    }

    /// Set the Google review rating
    #[must_use]
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Set the review count, in lakhs
    #[must_use]
    pub fn with_review_volume(mut self, review_volume: f64) -> Self {
        self.review_volume = Some(review_volume);
        self
    }

    /// Set the visit time in hours
    #[must_use]
    pub fn with_visit_hours(mut self, visit_hours: f64) -> Self {
        self.visit_hours = Some(visit_hours);
        self
    }

    /// Set the entrance fee in INR
    #[must_use]
    pub fn with_entrance_fee(mut self, entrance_fee: f64) -> Self {
        self.entrance_fee = entrance_fee;
        self
    }

    /// Set the significance text
    #[must_use]
    pub fn with_significance(mut self, significance: impl Into<String>) -> Self {
        self.significance = Some(significance.into());
        self
    }

    /// Rating used for display
    #[must_use]
    pub fn display_rating(&self) -> f64 {
        self.rating.unwrap_or(DEFAULT_DISPLAY_RATING)
    }

    /// Visit time in hours used for display
    #[must_use]
    pub fn display_visit_hours(&self) -> f64 {
        self.visit_hours.unwrap_or(DEFAULT_DISPLAY_VISIT_HOURS)
    }

    /// Whole-rupee entrance fee used for display
    #[must_use]
    pub fn display_fee(&self) -> i64 {
        // truncation toward zero matches how fees are printed in the plan
        self.entrance_fee as i64
    }

    /// Significance used for display
    #[must_use]
    pub fn display_significance(&self) -> &str {
        self.significance.as_deref().unwrap_or(DEFAULT_SIGNIFICANCE)
    }
}
