//! Statistics over weather series.
//!
//! Pure functions over plain readings; nothing here draws random values.

use serde::{Deserialize, Serialize};

use crate::models::WeatherData;

/// Temperature bands used by the distribution chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, uniffi::Enum)]
pub enum TemperatureBand {
    /// Below -50°C
    Extreme,
    /// -50°C to -40°C
    Severe,
    /// -40°C to -30°C
    VeryCold,
    /// -30°C to -20°C
    Cold,
    /// -20°C and above
    Mild,
}

impl TemperatureBand {
    pub const ALL: [TemperatureBand; 5] = [
        TemperatureBand::Extreme,
        TemperatureBand::Severe,
        TemperatureBand::VeryCold,
        TemperatureBand::Cold,
        TemperatureBand::Mild,
    ];

    pub fn from_celsius(temp: f64) -> Self {
        if temp < -50.0 {
            TemperatureBand::Extreme
        } else if temp < -40.0 {
            TemperatureBand::Severe
        } else if temp < -30.0 {
            TemperatureBand::VeryCold
        } else if temp < -20.0 {
            TemperatureBand::Cold
        } else {
            TemperatureBand::Mild
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TemperatureBand::Extreme => "Below -50°C",
            TemperatureBand::Severe => "-50°C to -40°C",
            TemperatureBand::VeryCold => "-40°C to -30°C",
            TemperatureBand::Cold => "-30°C to -20°C",
            TemperatureBand::Mild => "Above -20°C",
        }
    }
}

/// Wind-speed bands in 5 m/s steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, uniffi::Enum)]
pub enum WindBand {
    Calm,
    Light,
    Moderate,
    Fresh,
    Strong,
    Gale,
}

impl WindBand {
    pub const ALL: [WindBand; 6] = [
        WindBand::Calm,
        WindBand::Light,
        WindBand::Moderate,
        WindBand::Fresh,
        WindBand::Strong,
        WindBand::Gale,
    ];

    /// Negative speeds (possible after jitter) fall into `Calm`.
    pub fn from_speed_ms(speed: f64) -> Self {
        if speed < 5.0 {
            WindBand::Calm
        } else if speed < 10.0 {
            WindBand::Light
        } else if speed < 15.0 {
            WindBand::Moderate
        } else if speed < 20.0 {
            WindBand::Fresh
        } else if speed < 25.0 {
            WindBand::Strong
        } else {
            WindBand::Gale
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WindBand::Calm => "0-5 m/s",
            WindBand::Light => "5-10 m/s",
            WindBand::Moderate => "10-15 m/s",
            WindBand::Fresh => "15-20 m/s",
            WindBand::Strong => "20-25 m/s",
            WindBand::Gale => "25+ m/s",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, uniffi::Enum)]
pub enum VisibilityBand {
    Whiteout,
    Poor,
    Moderate,
    Good,
}

impl VisibilityBand {
    pub const ALL: [VisibilityBand; 4] = [
        VisibilityBand::Whiteout,
        VisibilityBand::Poor,
        VisibilityBand::Moderate,
        VisibilityBand::Good,
    ];

    pub fn from_km(km: f64) -> Self {
        if km < 1.0 {
            VisibilityBand::Whiteout
        } else if km < 5.0 {
            VisibilityBand::Poor
        } else if km < 10.0 {
            VisibilityBand::Moderate
        } else {
            VisibilityBand::Good
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VisibilityBand::Whiteout => "0-1 km",
            VisibilityBand::Poor => "1-5 km",
            VisibilityBand::Moderate => "5-10 km",
            VisibilityBand::Good => "10+ km",
        }
    }
}

/// One histogram bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct BandCount {
    pub label: String,
    pub count: u32,
}

fn histogram<B: Copy + PartialEq>(
    bands: &[B],
    label: impl Fn(&B) -> &'static str,
    classify: impl Fn(&WeatherData) -> B,
    readings: &[WeatherData],
) -> Vec<BandCount> {
    bands
        .iter()
        .map(|band| BandCount {
            label: label(band).to_string(),
            count: readings.iter().filter(|&r| classify(r) == *band).count() as u32,
        })
        .collect()
}

pub fn temperature_distribution(readings: &[WeatherData]) -> Vec<BandCount> {
    histogram(
        TemperatureBand::ALL.as_slice(),
        TemperatureBand::label,
        |r| TemperatureBand::from_celsius(r.temperature_c),
        readings,
    )
}

pub fn wind_distribution(readings: &[WeatherData]) -> Vec<BandCount> {
    histogram(
        WindBand::ALL.as_slice(),
        WindBand::label,
        |r| WindBand::from_speed_ms(r.wind_speed_ms),
        readings,
    )
}

pub fn visibility_distribution(readings: &[WeatherData]) -> Vec<BandCount> {
    histogram(
        VisibilityBand::ALL.as_slice(),
        VisibilityBand::label,
        |r| VisibilityBand::from_km(r.visibility_km),
        readings,
    )
}

/// Summary of a weather series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct SeriesStats {
    pub sample_count: u32,
    pub min_temp_c: f64,
    /// Timestamp of the first reading at the minimum
    pub min_temp_at_unix: i64,
    pub max_temp_c: f64,
    /// Timestamp of the first reading at the maximum
    pub max_temp_at_unix: i64,
    pub avg_temp_c: f64,
    /// max - min
    pub temp_range_c: f64,
    pub avg_wind_speed_ms: f64,
    pub max_wind_speed_ms: f64,
    pub avg_pressure_hpa: f64,
    pub avg_humidity_pct: f64,
    pub critical_count: u32,
}

impl SeriesStats {
    pub fn compute(readings: &[WeatherData]) -> Self {
        let Some(first) = readings.first() else {
            return Self::empty();
        };

        let mut min = first;
        let mut max = first;
        let mut temp_sum = 0.0;
        let mut wind_sum = 0.0;
        let mut max_wind = f64::MIN;
        let mut pressure_sum = 0.0;
        let mut humidity_sum = 0.0;
        let mut critical_count: u32 = 0;

        for r in readings {
            if r.temperature_c < min.temperature_c {
                min = r;
            }
            if r.temperature_c > max.temperature_c {
                max = r;
            }
            temp_sum += r.temperature_c;
            wind_sum += r.wind_speed_ms;
            if r.wind_speed_ms > max_wind {
                max_wind = r.wind_speed_ms;
            }
            pressure_sum += r.pressure_hpa;
            humidity_sum += r.humidity_pct;
            if r.is_critical {
                critical_count += 1;
            }
        }

        let n = readings.len() as f64;
        SeriesStats {
            sample_count: readings.len() as u32,
            min_temp_c: min.temperature_c,
            min_temp_at_unix: min.timestamp_unix,
            max_temp_c: max.temperature_c,
            max_temp_at_unix: max.timestamp_unix,
            avg_temp_c: temp_sum / n,
            temp_range_c: max.temperature_c - min.temperature_c,
            avg_wind_speed_ms: wind_sum / n,
            max_wind_speed_ms: max_wind,
            avg_pressure_hpa: pressure_sum / n,
            avg_humidity_pct: humidity_sum / n,
            critical_count,
        }
    }

    fn empty() -> Self {
        SeriesStats {
            sample_count: 0,
            min_temp_c: 0.0,
            min_temp_at_unix: 0,
            max_temp_c: 0.0,
            max_temp_at_unix: 0,
            avg_temp_c: 0.0,
            temp_range_c: 0.0,
            avg_wind_speed_ms: 0.0,
            max_wind_speed_ms: 0.0,
            avg_pressure_hpa: 0.0,
            avg_humidity_pct: 0.0,
            critical_count: 0,
        }
    }
}
