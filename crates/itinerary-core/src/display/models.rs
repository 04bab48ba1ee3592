//! Display implementations for domain models.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Day, DayWithStops, Review, Stop, TravelPlan, TravelPlanDetails};

impl fmt::Display for TravelPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.plan_name)?;
        writeln!(f)?;
        writeln!(f, "- Destination: {}", self.destination)?;
        writeln!(f, "- Dates: {} to {}", self.start_date, self.end_date)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Day {}", self.day_number)
    }
}

impl Stop {
    /// `HH:MM-HH:MM`, `HH:MM-` or `-HH:MM`, skipping blank times.
    fn time_window(&self) -> Option<String> {
        let arrival = self.arrival_time.as_deref().filter(|t| !t.trim().is_empty());
        let departure = self
            .departure_time
            .as_deref()
            .filter(|t| !t.trim().is_empty());

        match (arrival, departure) {
            (None, None) => None,
            (arrival, departure) => Some(format!(
                "{}-{}",
                arrival.unwrap_or_default(),
                departure.unwrap_or_default()
            )),
        }
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", u64::from(self.order_index) + 1, self.location_name)?;
        if let Some(window) = self.time_window() {
            write!(f, " ({window})")?;
        }
        writeln!(f)?;

        if let Some(address) = self.address.as_deref().filter(|a| !a.is_empty()) {
            writeln!(f, "   - Address: {address}")?;
        }
        if let Some(notes) = self.notes.as_deref().filter(|n| !n.is_empty()) {
            writeln!(f, "   - Notes: {notes}")?;
        }
        if !self.media_urls.is_empty() {
            writeln!(f, "   - Media: {}", self.media_urls.len())?;
        }
        Ok(())
    }
}

impl fmt::Display for Review {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Rating: {}/5 ({})",
            self.rating,
            LocalDateTime(&self.timestamp)
        )?;
        if let Some(comment) = &self.comment {
            writeln!(f, "{comment}")?;
        }
        Ok(())
    }
}

impl fmt::Display for DayWithStops {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.day)?;
        if self.stops.is_empty() {
            return writeln!(f, "No stops planned.");
        }
        for stop in &self.stops {
            write!(f, "{stop}")?;
        }
        Ok(())
    }
}

impl fmt::Display for TravelPlanDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.plan)?;

        if self.days.is_empty() {
            return writeln!(f, "\nNo days in this plan.");
        }
        for day in &self.days {
            writeln!(f)?;
            write!(f, "{day}")?;
        }
        Ok(())
    }
}
