//! Day-by-day itinerary produced by the builder

use std::fmt::{self, Display};

use chrono::Month;
use serde::{Deserialize, Serialize};

use super::Attraction;

/// Attractions assigned to one day of the trip
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DayPlan {
    /// 1-based day number
    pub day_number: u32,
    /// Attractions in rank order; may be empty when candidates ran out
    pub attractions: Vec<Attraction>,
}

/// A complete plan for a trip
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Itinerary {
    /// Locality or region the plan is for
    pub target: String,
    /// Month of travel
    pub month: Month,
    /// One entry per trip day, numbered from 1
    pub days: Vec<DayPlan>,
    /// Generic travel tips appended after the daily plans
    pub advisory: Vec<String>,
}

impl Itinerary {
    /// Number of attractions scheduled across all days
    #[must_use]
    pub fn attraction_count(&self) -> usize {
        self.days.iter().map(|day| day.attractions.len()).sum()
    }

    /// All scheduled attractions in visiting order
    pub fn attractions(&self) -> impl Iterator<Item = &Attraction> {
        self.days.iter().flat_map(|day| day.attractions.iter())
    }

    /// True when no day has any attraction scheduled
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attraction_count() == 0
    }
}

impl Display for DayPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "**Day {}:**", self.day_number)?;
        for attraction in &self.attractions {
            writeln!(f, "• **{}** ({})", attraction.name, attraction.category)?;
            writeln!(
                f,
                "  - Rating: {:.1}⭐ | Time: {}hrs | Fee: ₹{}",
                attraction.display_rating(),
                attraction.display_visit_hours(),
                attraction.display_fee()
            )?;
            writeln!(f, "  - {}", attraction.display_significance())?;
        }
        Ok(())
    }
}

impl Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "🎯 **{}-Day Travel Plan for {} in {}**",
            self.days.len(),
            self.target,
            self.month.name()
        )?;
        writeln!(f)?;

        for day in &self.days {
            writeln!(f, "{day}")?;
        }

        writeln!(f, "**💡 Travel Tips:**")?;
        for tip in &self.advisory {
            writeln!(f, "• {tip}")?;
        }
        Ok(())
    }
}
