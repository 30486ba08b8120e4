//! Synthetic weather for the station network.
//!
//! Every reading is an independent uniform draw; the historical series adds
//! jitter on top of fresh draws and carries no memory between points.

use log::debug;

use crate::config::GeneratorConfig;
use crate::models::{
    AlertKind, Coordinates, StationId, StationStatus, WeatherAlert, WeatherData, WeatherStation,
};
use crate::random::{random_float, random_int, RandomSource};
use crate::time::{days_before, DAY_SECS, HOUR_SECS};

struct StationSeed {
    id: &'static str,
    name: &'static str,
    location: &'static str,
    lat: f64,
    lng: f64,
    status: StationStatus,
    /// How long before `now` the station last reported.
    last_update_age_secs: i64,
}

const STATIONS: [StationSeed; 5] = [
    StationSeed {
        id: "station-1",
        name: "Alpha Base",
        location: "Ross Ice Shelf",
        lat: -78.5,
        lng: 166.75,
        status: StationStatus::Online,
        last_update_age_secs: 0,
    },
    StationSeed {
        id: "station-2",
        name: "Bravo Outpost",
        location: "Antarctic Peninsula",
        lat: -64.8,
        lng: -62.6,
        status: StationStatus::Online,
        last_update_age_secs: 0,
    },
    StationSeed {
        id: "station-3",
        name: "Charlie Point",
        location: "South Pole",
        lat: -90.0,
        lng: 0.0,
        status: StationStatus::Maintenance,
        last_update_age_secs: DAY_SECS,
    },
    StationSeed {
        id: "station-4",
        name: "Delta Ridge",
        location: "Transantarctic Mountains",
        lat: -84.2,
        lng: 160.7,
        status: StationStatus::Offline,
        last_update_age_secs: 2 * DAY_SECS,
    },
    StationSeed {
        id: "station-5",
        name: "Echo Valley",
        location: "Marie Byrd Land",
        lat: -80.1,
        lng: -115.0,
        status: StationStatus::Online,
        last_update_age_secs: 0,
    },
];

/// The fixed station network, with last-update times relative to `now`.
pub fn stations(now_unix: i64) -> Vec<WeatherStation> {
    STATIONS
        .iter()
        .map(|s| WeatherStation {
            id: StationId::new(s.id),
            name: s.name.to_string(),
            location: s.location.to_string(),
            coordinates: Coordinates {
                lat: s.lat,
                lng: s.lng,
            },
            status: s.status,
            last_update_unix: now_unix - s.last_update_age_secs,
        })
        .collect()
}

pub fn station_by_id(now_unix: i64, id: &str) -> Option<WeatherStation> {
    stations(now_unix).into_iter().find(|s| s.id.as_str() == id)
}

pub fn online_station_count(stations: &[WeatherStation]) -> usize {
    stations
        .iter()
        .filter(|s| s.status == StationStatus::Online)
        .count()
}

// ============================================================================
// Generation
// ============================================================================

/// Draw one reading for `station_id`, stamped `now_unix`.
///
/// Draw order is fixed: temperature, wind speed, pressure, humidity,
/// visibility, snow depth, UV index, wind direction.
pub fn generate_reading<R: RandomSource + ?Sized>(
    station_id: &StationId,
    now_unix: i64,
    config: &GeneratorConfig,
    rng: &mut R,
) -> WeatherData {
    let climate = config.climate_for(station_id.as_str());

    let temperature_c = random_float(
        rng,
        climate.temperature_c.min,
        climate.temperature_c.max,
    );
    let wind_speed_ms = random_float(
        rng,
        climate.wind_speed_ms.min,
        climate.wind_speed_ms.max,
    );
    let pressure_hpa = random_float(rng, config.pressure_hpa.min, config.pressure_hpa.max);
    let humidity_pct = random_float(rng, config.humidity_pct.min, config.humidity_pct.max);
    let visibility_km = random_float(rng, config.visibility_km.min, config.visibility_km.max);
    let snow_depth_cm = random_float(rng, config.snow_depth_cm.min, config.snow_depth_cm.max);
    let uv_index = random_int(
        rng,
        config.uv_index.min.round() as i64,
        config.uv_index.max.round() as i64,
    );
    let wind_direction_deg = random_int(
        rng,
        config.wind_direction_deg.min.round() as i64,
        config.wind_direction_deg.max.round() as i64,
    );

    let is_critical = config
        .thresholds
        .is_critical(temperature_c, wind_speed_ms, visibility_km);

    WeatherData {
        station_id: station_id.clone(),
        timestamp_unix: now_unix,
        temperature_c,
        wind_speed_ms,
        wind_direction_deg,
        pressure_hpa,
        humidity_pct,
        visibility_km,
        snow_depth_cm,
        uv_index,
        is_critical,
    }
}

/// One fresh reading per station, in station order.
pub fn current_readings<R: RandomSource + ?Sized>(
    now_unix: i64,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<WeatherData> {
    let readings: Vec<WeatherData> = stations(now_unix)
        .iter()
        .map(|s| generate_reading(&s.id, now_unix, config, rng))
        .collect();
    debug!(
        "event=weather_refresh module=weather stations={} critical={}",
        readings.len(),
        readings.iter().filter(|r| r.is_critical).count()
    );
    readings
}

/// Longest history a single call will build.
pub const MAX_HISTORY_DAYS: u32 = 3_650;

/// `days + 1` readings, oldest first, one per day ending at `now_unix`.
/// `days` is clamped to [`MAX_HISTORY_DAYS`].
///
/// Each point is a fresh draw with uniform jitter of `±config.history_jitter`
/// added to temperature and wind speed. The critical flag is re-derived after
/// jitter.
pub fn historical_series<R: RandomSource + ?Sized>(
    station_id: &StationId,
    days: u32,
    now_unix: i64,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<WeatherData> {
    let days = days.min(MAX_HISTORY_DAYS);
    let jitter = config.history_jitter;
    let series: Vec<WeatherData> = (0..=days)
        .rev()
        .map(|offset| {
            let timestamp_unix = days_before(now_unix, offset as i64);
            let base = generate_reading(station_id, timestamp_unix, config, rng);
            let temperature_c = base.temperature_c + random_float(rng, -jitter, jitter);
            let wind_speed_ms = base.wind_speed_ms + random_float(rng, -jitter, jitter);
            WeatherData {
                temperature_c,
                wind_speed_ms,
                is_critical: config.thresholds.is_critical(
                    temperature_c,
                    wind_speed_ms,
                    base.visibility_km,
                ),
                ..base
            }
        })
        .collect();
    debug!(
        "event=weather_history module=weather station={} days={} points={}",
        station_id,
        days,
        series.len()
    );
    series
}

/// First reading flagged critical, if any.
pub fn first_critical(readings: &[WeatherData]) -> Option<&WeatherData> {
    readings.iter().find(|r| r.is_critical)
}

// ============================================================================
// Alerts
// ============================================================================

/// Standing alerts, with timestamps relative to `now`.
pub fn weather_alerts(now_unix: i64) -> Vec<WeatherAlert> {
    vec![
        WeatherAlert {
            id: "alert-1".to_string(),
            kind: AlertKind::Warning,
            title: "Blizzard Warning".to_string(),
            message: "Blizzard conditions expected at Alpha Base within 24 hours. Wind speeds exceeding 40 knots with visibility below 100 meters.".to_string(),
            timestamp_unix: now_unix + HOUR_SECS,
            affected_stations: vec![StationId::new("station-1")],
        },
        WeatherAlert {
            id: "alert-2".to_string(),
            kind: AlertKind::Error,
            title: "Extreme Cold".to_string(),
            message: "Dangerous temperature drop at Charlie Point. Expected to reach -72°C within 12 hours. All outdoor activities suspended.".to_string(),
            timestamp_unix: now_unix + 2 * HOUR_SECS,
            affected_stations: vec![StationId::new("station-3")],
        },
        WeatherAlert {
            id: "alert-3".to_string(),
            kind: AlertKind::Info,
            title: "Maintenance Complete".to_string(),
            message: "Scheduled maintenance on Delta Ridge weather station completed. Systems back online and calibrated.".to_string(),
            timestamp_unix: now_unix - HOUR_SECS,
            affected_stations: vec![StationId::new("station-4")],
        },
    ]
}

/// Alerts that name the station, plus network-wide alerts.
pub fn alerts_for_station(alerts: &[WeatherAlert], station_id: &str) -> Vec<WeatherAlert> {
    alerts
        .iter()
        .filter(|a| {
            a.affected_stations.is_empty()
                || a.affected_stations.iter().any(|s| s.as_str() == station_id)
        })
        .cloned()
        .collect()
}
