use std::env;
use std::str::FromStr;

use chrono::Weekday;
use thiserror::Error;
use tracing::warn;

use shared_models::ClinicianType;

pub const DEFAULT_ASSESSMENT_DURATION_MINUTES: i64 = 90;
pub const DEFAULT_ASSESSMENT_WINDOW_DAYS: i64 = 7;
/// A single assessment session never runs past one day.
pub const MAX_ASSESSMENT_DURATION_MINUTES: i64 = 24 * 60;
/// Clinician work weeks run Sunday through Saturday.
pub const DEFAULT_WEEK_START: Weekday = Weekday::Sun;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Assessment duration must be positive, got {0} minutes")]
    InvalidDuration(i64),

    #[error("Assessment duration must be at most {max} minutes, got {got} minutes")]
    DurationTooLong { got: i64, max: i64 },

    #[error("Assessment window must not be negative, got {0} days")]
    InvalidWindow(i64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SchedulingConfig {
    pub assessment_duration_minutes: i64,
    pub assessment_window_days: i64,
    pub week_start: Weekday,
    pub assessment_clinician_type: ClinicianType,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            assessment_duration_minutes: DEFAULT_ASSESSMENT_DURATION_MINUTES,
            assessment_window_days: DEFAULT_ASSESSMENT_WINDOW_DAYS,
            week_start: DEFAULT_WEEK_START,
            assessment_clinician_type: ClinicianType::Psychologist,
        }
    }
}

impl SchedulingConfig {
    pub fn from_env() -> Self {
        let config = Self {
            assessment_duration_minutes: env_or(
                "ASSESSMENT_DURATION_MINUTES",
                DEFAULT_ASSESSMENT_DURATION_MINUTES,
            ),
            assessment_window_days: env_or(
                "ASSESSMENT_WINDOW_DAYS",
                DEFAULT_ASSESSMENT_WINDOW_DAYS,
            ),
            week_start: env_or("ASSESSMENT_WEEK_START", DEFAULT_WEEK_START),
            assessment_clinician_type: ClinicianType::Psychologist,
        };

        if let Err(e) = config.validate() {
            warn!("Scheduling configuration is invalid: {}", e);
        }

        config
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.assessment_duration_minutes <= 0 {
            return Err(ConfigError::InvalidDuration(self.assessment_duration_minutes));
        }
        if self.assessment_duration_minutes > MAX_ASSESSMENT_DURATION_MINUTES {
            return Err(ConfigError::DurationTooLong {
                got: self.assessment_duration_minutes,
                max: MAX_ASSESSMENT_DURATION_MINUTES,
            });
        }
        if self.assessment_window_days < 0 {
            return Err(ConfigError::InvalidWindow(self.assessment_window_days));
        }
        Ok(())
    }
}

fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Debug,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has unparsable value {:?}, using default {:?}", key, raw, default);
            default
        }),
        Err(_) => {
            warn!("{} not set, using default {:?}", key, default);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_clinic_rules() {
        let config = SchedulingConfig::default();

        assert_eq!(config.assessment_duration_minutes, 90);
        assert_eq!(config.assessment_window_days, 7);
        assert_eq!(config.week_start, Weekday::Sun);
        assert_eq!(config.assessment_clinician_type, ClinicianType::Psychologist);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_duration() {
        let config = SchedulingConfig {
            assessment_duration_minutes: 0,
            ..SchedulingConfig::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::InvalidDuration(0)));
    }

    #[test]
    fn test_validate_rejects_duration_longer_than_a_day() {
        let config = SchedulingConfig {
            assessment_duration_minutes: 200_000_000_000,
            ..SchedulingConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::DurationTooLong {
                got: 200_000_000_000,
                max: MAX_ASSESSMENT_DURATION_MINUTES,
            })
        );
    }

    #[test]
    fn test_validate_accepts_full_day_duration() {
        let config = SchedulingConfig {
            assessment_duration_minutes: MAX_ASSESSMENT_DURATION_MINUTES,
            ..SchedulingConfig::default()
        };

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_window() {
        let config = SchedulingConfig {
            assessment_window_days: -1,
            ..SchedulingConfig::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::InvalidWindow(-1)));
    }

    #[test]
    fn test_env_or_falls_back_on_garbage() {
        env::set_var("SCHEDULING_CONFIG_TEST_GARBAGE", "not-a-number");
        let value: i64 = env_or("SCHEDULING_CONFIG_TEST_GARBAGE", 42);
        env::remove_var("SCHEDULING_CONFIG_TEST_GARBAGE");

        assert_eq!(value, 42);
    }

    #[test]
    fn test_env_or_parses_weekday() {
        env::set_var("SCHEDULING_CONFIG_TEST_WEEKDAY", "mon");
        let value: Weekday = env_or("SCHEDULING_CONFIG_TEST_WEEKDAY", Weekday::Sun);
        env::remove_var("SCHEDULING_CONFIG_TEST_WEEKDAY");

        assert_eq!(value, Weekday::Mon);
    }
}
