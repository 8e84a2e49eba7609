//! Attraction catalog loading
//!
//! Reads the "Top Indian Places to Visit" CSV dataset into an immutable
//! in-memory [`Catalog`]. Numeric columns are parsed leniently: anything that
//! does not parse to a finite number becomes missing, except the entrance
//! fee, which falls back to 0.
//!
//! The dataset is typically loaded once per process through [`init`] and read
//! back with [`global`]; the planning functions themselves always take the
//! catalog as a parameter.

use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, info, warn};

use crate::models::Attraction;
use crate::{Result, TripPlanError};

static GLOBAL_CATALOG: OnceLock<Catalog> = OnceLock::new();

/// One CSV row as it appears in the dataset
#[derive(Debug, Deserialize)]
struct CatalogRecord {
    #[serde(rename = "Zone", default)]
    zone: Option<String>,
    #[serde(rename = "State")]
    state: String,
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "time needed to visit in hrs", default)]
    visit_hours: Option<String>,
    #[serde(rename = "Google review rating", default)]
    rating: Option<String>,
    #[serde(rename = "Entrance Fee in INR", default)]
    entrance_fee: Option<String>,
    #[serde(rename = "Weekly Off", default)]
    weekly_off: Option<String>,
    #[serde(rename = "Significance", default)]
    significance: Option<String>,
    #[serde(rename = "Number of google review in lakhs", default)]
    review_volume: Option<String>,
    #[serde(rename = "Best Time to visit", default)]
    best_time_to_visit: Option<String>,
}

impl CatalogRecord {
    fn into_attraction(self) -> Attraction {
        Attraction {
            name: self.name,
            locality: self.city,
            region: self.state,
            category: self.kind,
            rating: parse_number(self.rating.as_deref()),
            review_volume: parse_number(self.review_volume.as_deref()),
            visit_hours: parse_number(self.visit_hours.as_deref()),
            entrance_fee: parse_number(self.entrance_fee.as_deref()).unwrap_or(0.0),
            significance: non_blank(self.significance),
            zone: non_blank(self.zone),
            weekly_off: non_blank(self.weekly_off),
            best_time_to_visit: non_blank(self.best_time_to_visit),
        }
    }
}

/// Parse a numeric cell; blanks, garbage and non-finite values are missing
fn parse_number(raw: Option<&str>) -> Option<f64> {
    raw.map(str::trim)
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Distinct values in first-seen order
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|value| seen.insert(*value)).collect()
}

/// Read-only collection of attractions in dataset row order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    attractions: Vec<Attraction>,
}

impl Catalog {
    /// Wrap already-built attractions, keeping their order
    #[must_use]
    pub fn new(attractions: Vec<Attraction>) -> Self {
        Self { attractions }
    }

    /// Load the catalog from a CSV file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading attraction catalog from {}", path.display());

        if !path.exists() {
            return Err(TripPlanError::catalog(format!(
                "dataset not found at {}",
                path.display()
            )));
        }

        let file = std::fs::File::open(path)?;
        let catalog = Self::from_reader(file)?;
        info!(
            "Loaded {} attractions from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Load the catalog from any CSV source with a header row
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut attractions = Vec::new();
        for (index, record) in reader.deserialize::<CatalogRecord>().enumerate() {
            let record = record.map_err(|e| {
                if matches!(e.kind(), csv::ErrorKind::Deserialize { .. }) {
                    TripPlanError::catalog(format!("row {}: {e}", index + 1))
                } else {
                    TripPlanError::from(e)
                }
            })?;
            attractions.push(record.into_attraction());
        }

        if attractions.is_empty() {
            warn!("Attraction catalog is empty");
        }

        Ok(Self { attractions })
    }

    /// All attractions in dataset order
    #[must_use]
    pub fn attractions(&self) -> &[Attraction] {
        &self.attractions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attractions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attractions.is_empty()
    }

    /// Distinct city names in the order they first appear in the dataset
    #[must_use]
    pub fn known_localities(&self) -> Vec<&str> {
        distinct(self.attractions.iter().map(|a| a.locality.as_str()))
    }

    /// Distinct state names in the order they first appear in the dataset
    #[must_use]
    pub fn known_regions(&self) -> Vec<&str> {
        distinct(self.attractions.iter().map(|a| a.region.as_str()))
    }
}

/// Load the process-wide catalog. **Must be called once before [`global`].**
pub fn init(path: impl AsRef<Path>) -> Result<&'static Catalog> {
    let catalog = Catalog::from_path(path)?;
    GLOBAL_CATALOG
        .set(catalog)
        .map_err(|_| TripPlanError::catalog("catalog already initialized"))?;
    global()
}

/// Returns the process-wide catalog loaded by [`init`]
pub fn global() -> Result<&'static Catalog> {
    GLOBAL_CATALOG
        .get()
        .ok_or_else(|| TripPlanError::catalog("catalog not initialized, call catalog::init first"))
}
