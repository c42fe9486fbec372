//! User-adjustable inputs
//!
//! Holds the three values the user controls. The range and step constraints
//! live here so every control path (steppers, keyboard) goes through the
//! same clamping.

use chrono::NaiveTime;

/// Minimum desired sleep, in hours
pub const SLEEP_HOURS_MIN: f64 = 4.0;
/// Maximum desired sleep, in hours
pub const SLEEP_HOURS_MAX: f64 = 12.0;
/// Stepper increment for desired sleep
pub const SLEEP_HOURS_STEP: f64 = 0.25;

/// Minimum daily coffee intake, in cups
pub const COFFEE_CUPS_MIN: u32 = 1;
/// Maximum daily coffee intake, in cups
pub const COFFEE_CUPS_MAX: u32 = 10;

/// The three user-adjustable values driving a prediction
#[derive(Debug, Clone, PartialEq)]
pub struct UserInputs {
    /// Desired sleep duration in hours, clamped to [4, 12] in 0.25 steps
    pub sleep_hours: f64,
    /// Daily coffee intake in cups, clamped to [1, 10]
    pub coffee_cups: u32,
    /// Desired wake-up time of day
    pub wake_time: NaiveTime,
}

impl Default for UserInputs {
    fn default() -> Self {
        Self {
            sleep_hours: 8.0,
            coffee_cups: 1,
            // Midnight fallback can only trigger if 07:00 stops being a
            // valid time of day.
            wake_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap_or_default(),
        }
    }
}

impl UserInputs {
    /// Create inputs with the application defaults (8h sleep, 1 cup, 07:00)
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp to [4, 12] and snap to the nearest 0.25 step
    pub fn clamp_sleep_hours(hours: f64) -> f64 {
        let snapped = (hours / SLEEP_HOURS_STEP).round() * SLEEP_HOURS_STEP;
        snapped.clamp(SLEEP_HOURS_MIN, SLEEP_HOURS_MAX)
    }

    /// Clamp to [1, 10]
    pub fn clamp_coffee_cups(cups: u32) -> u32 {
        cups.clamp(COFFEE_CUPS_MIN, COFFEE_CUPS_MAX)
    }

    /// Label for the coffee stepper ("1 cup of coffee" / "N cups of coffee")
    pub fn coffee_label(&self) -> String {
        if self.coffee_cups == 1 {
            format!("{} cup of coffee", self.coffee_cups)
        } else {
            format!("{} cups of coffee", self.coffee_cups)
        }
    }

    /// Label for the sleep stepper
    pub fn sleep_label(&self) -> String {
        format!("{} hours", self.sleep_hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let inputs = UserInputs::new();
        assert_eq!(inputs.sleep_hours, 8.0);
        assert_eq!(inputs.coffee_cups, 1);
        assert_eq!(inputs.wake_time, NaiveTime::from_hms_opt(7, 0, 0).unwrap());
    }

    #[test]
    fn test_sleep_hours_clamped_to_range() {
        assert_eq!(UserInputs::clamp_sleep_hours(3.0), 4.0);
        assert_eq!(UserInputs::clamp_sleep_hours(13.5), 12.0);
        assert_eq!(UserInputs::clamp_sleep_hours(8.25), 8.25);
    }

    #[test]
    fn test_sleep_hours_snapped_to_quarter_steps() {
        assert_eq!(UserInputs::clamp_sleep_hours(8.1), 8.0);
        assert_eq!(UserInputs::clamp_sleep_hours(8.2), 8.25);
        assert_eq!(UserInputs::clamp_sleep_hours(7.875), 8.0);
    }

    #[test]
    fn test_coffee_cups_clamped_to_range() {
        assert_eq!(UserInputs::clamp_coffee_cups(0), 1);
        assert_eq!(UserInputs::clamp_coffee_cups(11), 10);
        assert_eq!(UserInputs::clamp_coffee_cups(5), 5);
    }

    #[test]
    fn test_coffee_label_singular_plural() {
        let mut inputs = UserInputs::new();
        assert_eq!(inputs.coffee_label(), "1 cup of coffee");
        inputs.coffee_cups = 3;
        assert_eq!(inputs.coffee_label(), "3 cups of coffee");
    }
}
