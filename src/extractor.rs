//! Trip parameter extraction from free text
//!
//! Keyword matching only: the request is scanned for a trip length, a month
//! name and a known destination. Every field has a default, so extraction
//! never fails.

use chrono::Month;
use tracing::debug;

use crate::config::PlannerConfig;
use crate::models::{TargetMatch, TripRequest};

/// Spelled-out trip lengths that are recognized
const DURATION_WORDS: [(&str, u32); 5] = [
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
];

/// Extract trip parameters using the built-in defaults
#[must_use]
pub fn extract(text: &str, known_localities: &[&str], known_regions: &[&str]) -> TripRequest {
    extract_with(
        text,
        known_localities,
        known_regions,
        &PlannerConfig::default(),
    )
}

/// Extract trip parameters, falling back to the configured defaults
#[must_use]
pub fn extract_with(
    text: &str,
    known_localities: &[&str],
    known_regions: &[&str],
    settings: &PlannerConfig,
) -> TripRequest {
    let lowered = text.to_lowercase();

    let days = find_days(&lowered).unwrap_or(settings.default_days);
    let month = find_month(&lowered).unwrap_or(settings.default_month);
    let (target, target_match) = match find_target(&lowered, known_localities, known_regions) {
        Some((name, kind)) => (name.to_string(), kind),
        None => (settings.fallback_target.clone(), TargetMatch::Fallback),
    };

    debug!(
        days,
        month = month.name(),
        target = %target,
        ?target_match,
        "Extracted trip request"
    );

    TripRequest {
        days,
        month,
        target,
        target_match,
    }
}

/// Trip length from the first digit token, else the last duration word seen
///
/// The first digit token always ends the scan. One too large for a day count
/// yields `None`, so the configured default applies rather than any later token.
fn find_days(lowered: &str) -> Option<u32> {
    let mut days = None;
    for token in lowered.split_whitespace() {
        if token.bytes().all(|b| b.is_ascii_digit()) {
            return token.parse::<u32>().ok();
        } else if let Some(&(_, value)) = DURATION_WORDS.iter().find(|(word, _)| *word == token) {
            days = Some(value);
        }
    }
    days
}

/// First calendar month (January first) whose name occurs in the text
fn find_month(lowered: &str) -> Option<Month> {
    (1..=12u8)
        .filter_map(|number| Month::try_from(number).ok())
        .find(|month| lowered.contains(&month.name().to_lowercase()))
}

/// Known destination mentioned in the text; a region beats a locality
fn find_target<'a>(
    lowered: &str,
    known_localities: &[&'a str],
    known_regions: &[&'a str],
) -> Option<(&'a str, TargetMatch)> {
    let mentioned = |name: &str| !name.is_empty() && lowered.contains(&name.to_lowercase());

    let region = known_regions
        .iter()
        .copied()
        .find(|name| mentioned(name))
        .map(|name| (name, TargetMatch::Region));
    let locality = known_localities
        .iter()
        .copied()
        .find(|name| mentioned(name))
        .map(|name| (name, TargetMatch::Locality));

    region.or(locality)
}
