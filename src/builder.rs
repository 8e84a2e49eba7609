//! Itinerary building: candidate selection, ranking and day assignment

use std::cmp::Ordering;

use tracing::debug;

use crate::config::PlannerConfig;
use crate::models::{Attraction, DayPlan, Itinerary, TripRequest};

/// Build an itinerary using the built-in planner settings
#[must_use]
pub fn build(request: &TripRequest, catalog: &[Attraction]) -> Itinerary {
    build_with(request, catalog, &PlannerConfig::default())
}

/// Build an itinerary for `request` from `catalog`
///
/// Candidates are the attractions in the target locality, else in the target
/// region, else every attraction rated at least `fallback_min_rating`. They are
/// ranked by rating then review volume (both descending, missing values last)
/// and handed out `stops_per_day` at a time, so later days can come up short
/// or empty. Never fails, even for an empty catalog.
///
/// One `DayPlan` is allocated per requested day with no upper bound, so a
/// request for billions of days exhausts memory.
#[must_use]
pub fn build_with(
    request: &TripRequest,
    catalog: &[Attraction],
    settings: &PlannerConfig,
) -> Itinerary {
    let mut candidates =
        select_candidates(&request.target, catalog, settings.fallback_min_rating);
    candidates.sort_by(|a, b| rank(a, b));

    let stops_per_day = settings.stops_per_day.max(1);
    let wanted = (request.days as usize).saturating_mul(stops_per_day);
    candidates.truncate(wanted);

    debug!(
        target = %request.target,
        scheduled = candidates.len(),
        "Selected attractions for itinerary"
    );

    let mut ranked = candidates.into_iter();
    let days = (1..=request.days)
        .map(|day_number| DayPlan {
            day_number,
            attractions: ranked.by_ref().take(stops_per_day).cloned().collect(),
        })
        .collect();

    Itinerary {
        target: request.target.clone(),
        month: request.month,
        days,
        advisory: advisory(request),
    }
}

/// Attractions eligible for the target, in catalog order
fn select_candidates<'a>(
    target: &str,
    catalog: &'a [Attraction],
    fallback_min_rating: f64,
) -> Vec<&'a Attraction> {
    if catalog.iter().any(|a| a.locality == target) {
        catalog.iter().filter(|a| a.locality == target).collect()
    } else if catalog.iter().any(|a| a.region == target) {
        catalog.iter().filter(|a| a.region == target).collect()
    } else {
        catalog
            .iter()
            .filter(|a| a.rating.is_some_and(|rating| rating >= fallback_min_rating))
            .collect()
    }
}

/// Rating descending, then review volume descending
fn rank(a: &Attraction, b: &Attraction) -> Ordering {
    descending(a.rating, b.rating).then_with(|| descending(a.review_volume, b.review_volume))
}

/// Larger values first, missing values after every present one
fn descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn advisory(request: &TripRequest) -> Vec<String> {
    vec![
        format!(
            "Best time to visit {}: {}",
            request.target,
            request.month_name()
        ),
        "Book tickets online for popular attractions".to_string(),
        "Carry water and comfortable shoes".to_string(),
        "Check weekly off days before visiting".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TargetMatch;
    use chrono::Month;
    use rstest::rstest;

    fn place(name: &str, city: &str, state: &str, rating: Option<f64>) -> Attraction {
        let attraction = Attraction::new(name, city, state, "Sight");
        match rating {
            Some(rating) => attraction.with_rating(rating),
            None => attraction,
        }
    }

    fn request(days: u32, target: &str) -> TripRequest {
        TripRequest::new(days, Month::October, target)
    }

    fn names(itinerary: &Itinerary) -> Vec<Vec<&str>> {
        itinerary
            .days
            .iter()
            .map(|day| day.attractions.iter().map(|a| a.name.as_str()).collect())
            .collect()
    }

    #[test]
    fn test_region_target_restricts_candidates() {
        let catalog = vec![
            place("Backwaters", "Alleppey", "Kerala", Some(4.5)),
            place("Taj Mahal", "Agra", "Uttar Pradesh", Some(4.9)),
            place("Tea Gardens", "Munnar", "Kerala", Some(4.4)),
            place("Kerala Cafe", "Bengaluru", "Karnataka", Some(5.0)),
        ];
        let kerala = request(3, "Kerala").with_target_match(TargetMatch::Region);
        let itinerary = build(&kerala, &catalog);
        assert!(itinerary.attractions().all(|a| a.region == "Kerala"));
        assert_eq!(names(&itinerary)[0], vec!["Backwaters", "Tea Gardens"]);
    }

    #[test]
    fn test_locality_takes_precedence_over_region() {
        let catalog = vec![
            place("Red Fort", "Delhi", "Delhi", Some(4.5)),
            place("Qutub Minar", "New Delhi", "Delhi", Some(4.6)),
        ];
        let itinerary = build(&request(1, "Delhi"), &catalog);
        assert_eq!(names(&itinerary), vec![vec!["Red Fort"]]);
    }

    #[test]
    fn test_unmatched_target_uses_high_rated_fallback() {
        let catalog = vec![
            place("A", "Pune", "Maharashtra", Some(4.5)),
            place("B", "Pune", "Maharashtra", Some(3.9)),
            place("C", "Agra", "Uttar Pradesh", Some(4.0)),
            place("D", "Agra", "Uttar Pradesh", None),
        ];
        let itinerary = build(&request(3, "Atlantis"), &catalog);
        let scheduled: Vec<&str> = itinerary.attractions().map(|a| a.name.as_str()).collect();
        assert_eq!(scheduled, vec!["A", "C"]);
    }

    #[test]
    fn test_target_match_is_case_sensitive() {
        let catalog = vec![place("Fort", "Pune", "Maharashtra", Some(3.0))];
        let itinerary = build(&request(2, "pune"), &catalog);
        assert!(itinerary.is_empty());
    }

    #[test]
    fn test_ranking_ties_and_missing_values() {
        let catalog = vec![
            place("no rating", "Goa", "Goa", None),
            place("4.2 few", "Goa", "Goa", Some(4.2)).with_review_volume(0.1),
            place("4.2 unknown", "Goa", "Goa", Some(4.2)),
            place("4.7", "Goa", "Goa", Some(4.7)),
            place("4.2 many", "Goa", "Goa", Some(4.2)).with_review_volume(1.5),
            place("no rating, reviews", "Goa", "Goa", None).with_review_volume(9.0),
        ];
        let itinerary = build(&request(3, "Goa"), &catalog);
        assert_eq!(
            names(&itinerary),
            vec![
                vec!["4.7", "4.2 many"],
                vec!["4.2 few", "4.2 unknown"],
                vec!["no rating, reviews", "no rating"],
            ]
        );
    }

    #[test]
    fn test_full_ties_keep_catalog_order() {
        let catalog = vec![
            place("first", "Goa", "Goa", Some(4.0)),
            place("second", "Goa", "Goa", Some(4.0)),
            place("third", "Goa", "Goa", Some(4.0)),
        ];
        let itinerary = build(&request(2, "Goa"), &catalog);
        assert_eq!(names(&itinerary), vec![vec!["first", "second"], vec!["third"]]);
    }

    #[test]
    fn test_pagination_two_per_day_in_rank_order() {
        let catalog: Vec<Attraction> = (1..=6)
            .map(|i| {
                let rating = 5.0 - f64::from(i) * 0.1;
                place(&format!("rank {i}"), "Jaipur", "Rajasthan", Some(rating))
            })
            .collect();
        let itinerary = build(&request(3, "Jaipur"), &catalog);
        assert_eq!(
            names(&itinerary),
            vec![
                vec!["rank 1", "rank 2"],
                vec!["rank 3", "rank 4"],
                vec!["rank 5", "rank 6"],
            ]
        );
    }

    #[rstest]
    #[case(3, 10, vec![2, 2, 2])]
    #[case(4, 5, vec![2, 2, 1, 0])]
    #[case(2, 0, vec![0, 0])]
    #[case(1, 1, vec![1])]
    #[case(0, 4, vec![])]
    fn test_day_sizes(#[case] days: u32, #[case] available: usize, #[case] sizes: Vec<usize>) {
        let catalog: Vec<Attraction> = (0..available)
            .map(|i| place(&format!("site {i}"), "Mysuru", "Karnataka", Some(4.1)))
            .collect();
        let itinerary = build(&request(days, "Mysuru"), &catalog);

        let actual: Vec<usize> = itinerary.days.iter().map(|d| d.attractions.len()).collect();
        assert_eq!(actual, sizes);
        let numbers: Vec<u32> = itinerary.days.iter().map(|d| d.day_number).collect();
        assert_eq!(numbers, (1..=days).collect::<Vec<_>>());
        assert_eq!(
            itinerary.attraction_count(),
            (days as usize * 2).min(available)
        );
    }

    #[test]
    fn test_no_attraction_repeats() {
        let catalog: Vec<Attraction> = (0..9)
            .map(|i| {
                let rating = 4.0 + f64::from(i) / 10.0;
                place(&format!("site {i}"), "Hampi", "Karnataka", Some(rating))
            })
            .collect();
        let itinerary = build(&request(7, "Hampi"), &catalog);
        let mut seen: Vec<&str> = itinerary.attractions().map(|a| a.name.as_str()).collect();
        let total = seen.len();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), total);
        assert_eq!(total, 9);
    }

    #[test]
    fn test_empty_candidate_set_yields_empty_days() {
        let catalog = vec![place("Low", "Pune", "Maharashtra", Some(3.2))];
        let itinerary = build(&request(3, "Nowhere"), &catalog);
        assert_eq!(itinerary.days.len(), 3);
        assert!(itinerary.days.iter().all(|d| d.attractions.is_empty()));

        let itinerary = build(&request(3, "Delhi"), &[]);
        assert_eq!(itinerary.days.len(), 3);
        assert!(itinerary.is_empty());
    }

    #[test]
    fn test_advisory_mentions_target_and_month() {
        let itinerary = build(&TripRequest::new(2, Month::December, "Goa"), &[]);
        assert_eq!(itinerary.advisory[0], "Best time to visit Goa: December");
        assert_eq!(itinerary.advisory.len(), 4);
        assert_eq!(itinerary.target, "Goa");
        assert_eq!(itinerary.month, Month::December);
    }

    #[test]
    fn test_build_is_deterministic() {
        let catalog = vec![
            place("A", "Goa", "Goa", Some(4.3)).with_review_volume(0.4),
            place("B", "Goa", "Goa", Some(4.3)).with_review_volume(0.4),
            place("C", "Goa", "Goa", None),
        ];
        let request = request(2, "Goa");
        assert_eq!(build(&request, &catalog), build(&request, &catalog));
    }

    #[test]
    fn test_catalog_is_not_modified() {
        let catalog = vec![place("Unrated", "Goa", "Goa", None)];
        let before = catalog.clone();
        let itinerary = build(&request(1, "Goa"), &catalog);
        assert_eq!(catalog, before);
        assert_eq!(itinerary.days[0].attractions[0].rating, None);
    }

    #[test]
    fn test_configured_stops_per_day() {
        let catalog: Vec<Attraction> = (0..5)
            .map(|i| place(&format!("site {i}"), "Goa", "Goa", Some(4.0)))
            .collect();
        let settings = PlannerConfig {
            stops_per_day: 3,
            ..PlannerConfig::default()
        };
        let itinerary = build_with(&request(2, "Goa"), &catalog, &settings);
        let sizes: Vec<usize> = itinerary.days.iter().map(|d| d.attractions.len()).collect();
        assert_eq!(sizes, vec![3, 2]);
    }
}
