//! Establishment configuration types.
//!
//! The restaurant record is a singleton: exactly one exists per process,
//! loaded once at startup and enforced at the storage boundary. Peak-hour
//! rules are read-only inputs to slot validation.

use serde::{Deserialize, Serialize};

use crate::reservation::ValidationError;
use crate::slot::TimeOfDay;

/// The establishment's configuration record.
///
/// Carries the operating hours used by every slot validation and the
/// ceiling on how many tables may be provisioned.
///
/// # Examples
///
/// ```
/// use maitred::Restaurant;
///
/// let restaurant = Restaurant::new(
///     "Chez Test",
///     "09:00".parse().unwrap(),
///     "22:00".parse().unwrap(),
///     20,
/// )
/// .unwrap();
/// assert_eq!(restaurant.opening().to_string(), "09:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    name: String,
    opening: TimeOfDay,
    closing: TimeOfDay,
    max_tables: u32,
}

impl Restaurant {
    /// Creates a restaurant configuration record.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is empty after trimming whitespace
    /// - The closing time is not after the opening time
    /// - The table ceiling is zero
    pub fn new(
        name: impl Into<String>,
        opening: TimeOfDay,
        closing: TimeOfDay,
        max_tables: u32,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError {
                field: "name".into(),
                message: "restaurant name must be non-empty".into(),
            });
        }
        if closing <= opening {
            return Err(ValidationError {
                field: "closing_time".into(),
                message: "closing time must be after opening time".into(),
            });
        }
        if max_tables == 0 {
            return Err(ValidationError {
                field: "max_tables".into(),
                message: "table ceiling must be a positive integer".into(),
            });
        }
        Ok(Self {
            name,
            opening,
            closing,
            max_tables,
        })
    }

    /// Returns the establishment's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the opening time.
    #[must_use]
    pub const fn opening(&self) -> TimeOfDay {
        self.opening
    }

    /// Returns the closing time.
    #[must_use]
    pub const fn closing(&self) -> TimeOfDay {
        self.closing
    }

    /// Returns the ceiling on provisioned tables.
    #[must_use]
    pub const fn max_tables(&self) -> u32 {
        self.max_tables
    }
}

/// A peak-hour rule capping reservation duration.
///
/// Many rules may apply per day; a rule constrains a request when the
/// request starts on the rule's weekday inside the rule's window
/// (inclusive of both endpoints).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakRule {
    id: i64,
    day_of_week: u8,
    window_start: TimeOfDay,
    window_end: TimeOfDay,
    max_duration_minutes: u32,
}

impl PeakRule {
    /// Creates a peak-hour rule.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `day_of_week` is not 0-6 (0 = Sunday)
    /// - The window end is before the window start
    /// - The duration cap is zero
    pub fn new(
        id: i64,
        day_of_week: u8,
        window_start: TimeOfDay,
        window_end: TimeOfDay,
        max_duration_minutes: u32,
    ) -> Result<Self, ValidationError> {
        if day_of_week > 6 {
            return Err(ValidationError {
                field: "day_of_week".into(),
                message: "day of week must be 0-6".into(),
            });
        }
        if window_end < window_start {
            return Err(ValidationError {
                field: "end_hour".into(),
                message: "window end must not be before window start".into(),
            });
        }
        if max_duration_minutes == 0 {
            return Err(ValidationError {
                field: "max_duration_minutes".into(),
                message: "duration cap must be a positive integer".into(),
            });
        }
        Ok(Self {
            id,
            day_of_week,
            window_start,
            window_end,
            max_duration_minutes,
        })
    }

    /// Returns the rule identifier.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Returns the weekday this rule applies to (0 = Sunday).
    #[must_use]
    pub const fn day_of_week(&self) -> u8 {
        self.day_of_week
    }

    /// Returns the start of the peak window.
    #[must_use]
    pub const fn window_start(&self) -> TimeOfDay {
        self.window_start
    }

    /// Returns the end of the peak window.
    #[must_use]
    pub const fn window_end(&self) -> TimeOfDay {
        self.window_end
    }

    /// Returns the maximum duration in minutes this window allows.
    #[must_use]
    pub const fn max_duration_minutes(&self) -> u32 {
        self.max_duration_minutes
    }

    /// Checks whether a request starting at `start` inside this rule's
    /// window is constrained by the rule. Window containment is inclusive
    /// of both endpoints.
    #[must_use]
    pub fn constrains(&self, start: TimeOfDay) -> bool {
        self.window_start <= start && start <= self.window_end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tod(text: &str) -> TimeOfDay {
        text.parse().unwrap()
    }

    #[test]
    fn test_restaurant_new() {
        let restaurant = Restaurant::new("Chez Test", tod("09:00"), tod("22:00"), 20).unwrap();
        assert_eq!(restaurant.name(), "Chez Test");
        assert_eq!(restaurant.opening(), tod("09:00"));
        assert_eq!(restaurant.closing(), tod("22:00"));
        assert_eq!(restaurant.max_tables(), 20);
    }

    #[test]
    fn test_restaurant_trims_name() {
        let restaurant = Restaurant::new("  Chez Test  ", tod("09:00"), tod("22:00"), 20).unwrap();
        assert_eq!(restaurant.name(), "Chez Test");
    }

    #[test]
    fn test_restaurant_rejects_empty_name() {
        let result = Restaurant::new("   ", tod("09:00"), tod("22:00"), 20);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().field, "name");
    }

    #[test]
    fn test_restaurant_rejects_inverted_hours() {
        let result = Restaurant::new("Chez Test", tod("22:00"), tod("09:00"), 20);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().field, "closing_time");

        let result = Restaurant::new("Chez Test", tod("09:00"), tod("09:00"), 20);
        assert!(result.is_err());
    }

    #[test]
    fn test_restaurant_rejects_zero_ceiling() {
        let result = Restaurant::new("Chez Test", tod("09:00"), tod("22:00"), 0);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().field, "max_tables");
    }

    #[test]
    fn test_peak_rule_new() {
        let rule = PeakRule::new(1, 5, tod("18:00"), tod("21:00"), 60).unwrap();
        assert_eq!(rule.day_of_week(), 5);
        assert_eq!(rule.max_duration_minutes(), 60);
    }

    #[test]
    fn test_peak_rule_rejects_bad_day() {
        let result = PeakRule::new(1, 7, tod("18:00"), tod("21:00"), 60);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().field, "day_of_week");
    }

    #[test]
    fn test_peak_rule_rejects_inverted_window() {
        let result = PeakRule::new(1, 5, tod("21:00"), tod("18:00"), 60);
        assert!(result.is_err());
    }

    #[test]
    fn test_peak_rule_rejects_zero_cap() {
        let result = PeakRule::new(1, 5, tod("18:00"), tod("21:00"), 0);
        assert!(result.is_err());
    }

    #[test]
    fn test_peak_rule_constrains() {
        let rule = PeakRule::new(1, 5, tod("18:00"), tod("21:00"), 60).unwrap();

        // Inclusive at both window endpoints.
        assert!(rule.constrains(tod("18:00")));
        assert!(rule.constrains(tod("19:30")));
        assert!(rule.constrains(tod("21:00")));

        assert!(!rule.constrains(tod("17:59")));
        assert!(!rule.constrains(tod("21:01")));
    }
}
