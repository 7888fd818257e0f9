//! Configuration for timestamp normalization.
//!
//! Plain structs with builder-style setters, no CLI framework dependencies.
//!
//! # Example
//!
//! ```rust
//! use ddpack::config::{DayOrder, EpochUnit, TimestampConfig};
//! use ddpack::timestamp::TimestampNormalizer;
//!
//! let config = TimestampConfig::new()
//!     .with_epoch_unit(EpochUnit::Milliseconds)
//!     .with_day_order(DayOrder::DayFirst);
//!
//! let normalizer = TimestampNormalizer::with_config(config);
//! assert_eq!(normalizer.normalize("03/04/2024"), "2024-04-03T00:00:00+00:00");
//! ```

use serde::{Deserialize, Serialize};

/// Unit of bare numeric timestamps.
///
/// The normalizer never guesses the unit from the magnitude of the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EpochUnit {
    /// Seconds since 1970-01-01 UTC
    #[default]
    Seconds,
    /// Milliseconds since 1970-01-01 UTC
    Milliseconds,
}

/// How an all-numeric date such as `03/04/2024` is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayOrder {
    /// `03/04/2024` is March 4th
    #[default]
    MonthFirst,
    /// `03/04/2024` is April 3rd
    DayFirst,
}

/// Configuration for [`TimestampNormalizer`](crate::timestamp::TimestampNormalizer).
///
/// The defaults reproduce the behavior exports are usually written for:
/// epoch seconds, month-first numeric dates, localized month names enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimestampConfig {
    /// Unit of bare numbers (default: seconds)
    pub epoch_unit: EpochUnit,

    /// Ambiguous numeric date resolution (default: month first)
    pub day_order: DayOrder,

    /// Rewrite localized month abbreviations before parsing (default: true)
    pub localized_months: bool,
}

impl Default for TimestampConfig {
    fn default() -> Self {
        Self {
            epoch_unit: EpochUnit::Seconds,
            day_order: DayOrder::MonthFirst,
            localized_months: true,
        }
    }
}

impl TimestampConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the unit of bare numeric timestamps.
    #[must_use]
    pub fn with_epoch_unit(mut self, unit: EpochUnit) -> Self {
        self.epoch_unit = unit;
        self
    }

    /// Sets how ambiguous numeric dates are read.
    #[must_use]
    pub fn with_day_order(mut self, order: DayOrder) -> Self {
        self.day_order = order;
        self
    }

    /// Enables or disables localized month-name substitution.
    #[must_use]
    pub fn with_localized_months(mut self, enabled: bool) -> Self {
        self.localized_months = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TimestampConfig::default();
        assert_eq!(config.epoch_unit, EpochUnit::Seconds);
        assert_eq!(config.day_order, DayOrder::MonthFirst);
        assert!(config.localized_months);
        assert_eq!(TimestampConfig::new(), config);
    }

    #[test]
    fn test_builder() {
        let config = TimestampConfig::new()
            .with_epoch_unit(EpochUnit::Milliseconds)
            .with_day_order(DayOrder::DayFirst)
            .with_localized_months(false);

        assert_eq!(config.epoch_unit, EpochUnit::Milliseconds);
        assert_eq!(config.day_order, DayOrder::DayFirst);
        assert!(!config.localized_months);
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = TimestampConfig::new().with_day_order(DayOrder::DayFirst);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"day_first\""));
        let back: TimestampConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let config: TimestampConfig = serde_json::from_str(r#"{"epoch_unit":"milliseconds"}"#).unwrap();
        assert_eq!(config.epoch_unit, EpochUnit::Milliseconds);
        assert_eq!(config.day_order, DayOrder::MonthFirst);
        assert!(config.localized_months);
    }
}
