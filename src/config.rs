//! Generator configuration.
//!
//! Defaults reproduce the documented Antarctic ranges. Hosts may override any
//! subset of fields through JSON; unspecified fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// Largest magnitude accepted for bounds of integer draws.
pub const MAX_INTEGER_BOUND: f64 = i32::MAX as f64;

/// Station id that draws from the extreme climate by default.
pub const DEFAULT_EXTREME_STATION_ID: &str = "station-3";

/// Closed numeric range used for uniform draws.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn validate(&self, field: &str) -> Result<(), DashboardError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(DashboardError::Config(format!(
                "{field} bounds must be finite, got {}..{}",
                self.min, self.max
            )));
        }
        if self.min > self.max {
            return Err(DashboardError::InvalidRange {
                field: field.to_string(),
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    fn validate_integer(&self, field: &str) -> Result<(), DashboardError> {
        self.validate(field)?;
        if self.min.abs() > MAX_INTEGER_BOUND || self.max.abs() > MAX_INTEGER_BOUND {
            return Err(DashboardError::Config(format!(
                "{field} bounds must lie within ±{MAX_INTEGER_BOUND}, got {}..{}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Temperature and wind ranges for one class of station.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct StationClimate {
    /// Celsius
    pub temperature_c: ValueRange,
    /// m/s
    pub wind_speed_ms: ValueRange,
}

/// Thresholds for the critical-conditions flag. All comparisons are strict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, uniffi::Record)]
#[serde(default)]
pub struct CriticalThresholds {
    /// Critical when temperature is below this value.
    pub min_temperature_c: f64,
    /// Critical when wind speed is above this value.
    pub max_wind_speed_ms: f64,
    /// Critical when visibility is below this value.
    pub min_visibility_km: f64,
}

impl Default for CriticalThresholds {
    fn default() -> Self {
        Self {
            min_temperature_c: -50.0,
            max_wind_speed_ms: 35.0,
            min_visibility_km: 0.5,
        }
    }
}

impl CriticalThresholds {
    pub fn is_critical(&self, temperature_c: f64, wind_speed_ms: f64, visibility_km: f64) -> bool {
        temperature_c < self.min_temperature_c
            || wind_speed_ms > self.max_wind_speed_ms
            || visibility_km < self.min_visibility_km
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, uniffi::Record)]
#[serde(default)]
pub struct GeneratorConfig {
    pub extreme_station_id: String,
    pub standard: StationClimate,
    pub extreme: StationClimate,
    pub pressure_hpa: ValueRange,
    pub humidity_pct: ValueRange,
    pub visibility_km: ValueRange,
    pub snow_depth_cm: ValueRange,
    /// Integer draw, inclusive.
    pub uv_index: ValueRange,
    /// Integer draw in degrees, inclusive.
    pub wind_direction_deg: ValueRange,
    pub thresholds: CriticalThresholds,
    /// Half-width of the uniform jitter added to historical temperature and wind.
    pub history_jitter: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            extreme_station_id: DEFAULT_EXTREME_STATION_ID.to_string(),
            standard: StationClimate {
                temperature_c: ValueRange::new(-40.0, -5.0),
                wind_speed_ms: ValueRange::new(5.0, 30.0),
            },
            extreme: StationClimate {
                temperature_c: ValueRange::new(-70.0, -40.0),
                wind_speed_ms: ValueRange::new(15.0, 45.0),
            },
            pressure_hpa: ValueRange::new(970.0, 1020.0),
            humidity_pct: ValueRange::new(30.0, 90.0),
            visibility_km: ValueRange::new(0.1, 15.0),
            snow_depth_cm: ValueRange::new(0.0, 200.0),
            uv_index: ValueRange::new(0.0, 8.0),
            wind_direction_deg: ValueRange::new(0.0, 359.0),
            thresholds: CriticalThresholds::default(),
            history_jitter: 5.0,
        }
    }
}

impl GeneratorConfig {
    /// Parse a (possibly partial) JSON document and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, DashboardError> {
        let config: GeneratorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DashboardError> {
        let ranges = [
            ("standard.temperature_c", &self.standard.temperature_c),
            ("standard.wind_speed_ms", &self.standard.wind_speed_ms),
            ("extreme.temperature_c", &self.extreme.temperature_c),
            ("extreme.wind_speed_ms", &self.extreme.wind_speed_ms),
            ("pressure_hpa", &self.pressure_hpa),
            ("humidity_pct", &self.humidity_pct),
            ("visibility_km", &self.visibility_km),
            ("snow_depth_cm", &self.snow_depth_cm),
        ];
        for (field, range) in ranges {
            range.validate(field)?;
        }
        self.uv_index.validate_integer("uv_index")?;
        self.wind_direction_deg.validate_integer("wind_direction_deg")?;

        if !self.history_jitter.is_finite() || self.history_jitter < 0.0 {
            return Err(DashboardError::Config(format!(
                "history_jitter must be a non-negative number, got {}",
                self.history_jitter
            )));
        }
        if self.extreme_station_id.trim().is_empty() {
            return Err(DashboardError::Config(
                "extreme_station_id must not be blank".to_string(),
            ));
        }
        Ok(())
    }

    /// Climate for the given station.
    pub fn climate_for(&self, station_id: &str) -> &StationClimate {
        if station_id == self.extreme_station_id {
            &self.extreme
        } else {
            &self.standard
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.extreme_station_id, "station-3");
        assert_eq!(config.history_jitter, 5.0);
    }

    #[test]
    fn test_climate_for_extreme_station() {
        let config = GeneratorConfig::default();
        assert_eq!(config.climate_for("station-3").temperature_c.min, -70.0);
        assert_eq!(config.climate_for("station-1").temperature_c.min, -40.0);
        assert_eq!(config.climate_for("nowhere").wind_speed_ms.max, 30.0);
    }

    #[test]
    fn test_thresholds_strict() {
        let t = CriticalThresholds::default();
        assert!(!t.is_critical(-50.0, 10.0, 5.0));
        assert!(t.is_critical(-50.01, 10.0, 5.0));
        assert!(!t.is_critical(-20.0, 35.0, 5.0));
        assert!(t.is_critical(-20.0, 35.01, 5.0));
        assert!(!t.is_critical(-20.0, 10.0, 0.5));
        assert!(t.is_critical(-20.0, 10.0, 0.49));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GeneratorConfig::from_json_str(
            r#"{ "extreme_station_id": "station-4", "history_jitter": 2.5 }"#,
        )
        .unwrap();
        assert_eq!(config.extreme_station_id, "station-4");
        assert_eq!(config.history_jitter, 2.5);
        assert_eq!(config.pressure_hpa, ValueRange::new(970.0, 1020.0));
        assert_eq!(config.thresholds, CriticalThresholds::default());
    }

    #[test]
    fn test_partial_thresholds_keep_defaults() {
        let config =
            GeneratorConfig::from_json_str(r#"{ "thresholds": { "max_wind_speed_ms": 40.0 } }"#)
                .unwrap();
        assert_eq!(config.thresholds.max_wind_speed_ms, 40.0);
        assert_eq!(config.thresholds.min_temperature_c, -50.0);
    }

    #[test]
    fn test_reversed_range_rejected() {
        let err =
            GeneratorConfig::from_json_str(r#"{ "pressure_hpa": { "min": 1020.0, "max": 970.0 } }"#)
                .unwrap_err();
        assert_eq!(
            err,
            DashboardError::InvalidRange {
                field: "pressure_hpa".to_string(),
                min: 1020.0,
                max: 970.0,
            }
        );
    }

    #[test]
    fn test_huge_integer_bounds_rejected() {
        let err = GeneratorConfig::from_json_str(r#"{"uv_index":{"min":-1e300,"max":1e300}}"#)
            .unwrap_err();
        assert!(matches!(err, DashboardError::Config(ref msg) if msg.contains("uv_index")));

        let err = GeneratorConfig::from_json_str(
            r#"{"wind_direction_deg":{"min":0.0,"max":3e9}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, DashboardError::Config(ref msg) if msg.contains("wind_direction_deg")));

        let config =
            GeneratorConfig::from_json_str(r#"{"uv_index":{"min":-2147483647.0,"max":2147483647.0}}"#)
                .unwrap();
        assert_eq!(config.uv_index.max, MAX_INTEGER_BOUND);
    }

    #[test]
    fn test_non_finite_bounds_rejected() {
        let mut config = GeneratorConfig::default();
        config.pressure_hpa.max = f64::INFINITY;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, DashboardError::Config(ref msg) if msg.contains("pressure_hpa")));
    }

    #[test]
    fn test_negative_jitter_rejected() {
        let err = GeneratorConfig::from_json_str(r#"{ "history_jitter": -1.0 }"#).unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = GeneratorConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
    }
}
