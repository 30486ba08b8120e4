//! Host-facing API exported through uniffi.
//!
//! # Responsibility
//! - Wrap the pure query/generation functions with the wall clock, the thread
//!   RNG and the default generator config.
//! - Keep argument types binding-friendly (owned strings, plain records).
//!
//! # Invariants
//! - Exported functions never panic across the FFI boundary.
//! - Lookups return `None` and searches return empty lists instead of errors.

use crate::comms;
use crate::config::GeneratorConfig;
use crate::error::DashboardError;
use crate::guides;
use crate::logging;
use crate::models::{
    Announcement, AnnouncementPriority, Contact, EmergencyChannel, FormattedUpdate,
    GuideCategory, Message, ResearchProject, ResearchUpdate, StationId, StationInventory,
    SupplyCategory, SupplyDrop, SupplyItem, SupplyStatus, SurvivalGuide, WeatherAlert,
    WeatherData, WeatherStation,
};
use crate::overview::DashboardOverview;
use crate::random::RngSource;
use crate::research;
use crate::stats::{self, BandCount, SeriesStats};
use crate::supply;
use crate::time::{format_relative, now_unix};
use crate::weather;

#[uniffi::export]
pub fn core_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Initializes file logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - A blank `level` uses the build's default (`debug` or `info`).
/// - Reconfiguration with a different level or directory returns an error.
#[uniffi::export]
pub fn init_core_logging(level: String, log_dir: String) -> Result<(), DashboardError> {
    logging::init_logging(&level, &log_dir)
}

// ============================================================================
// Weather
// ============================================================================

#[uniffi::export]
pub fn list_weather_stations() -> Vec<WeatherStation> {
    weather::stations(now_unix())
}

#[uniffi::export]
pub fn find_weather_station(station_id: String) -> Option<WeatherStation> {
    weather::station_by_id(now_unix(), &station_id)
}

/// Fresh readings for every station. Each call is a new random draw.
#[uniffi::export]
pub fn current_weather() -> Vec<WeatherData> {
    weather::current_readings(now_unix(), &GeneratorConfig::default(), &mut RngSource::thread())
}

/// Like [`current_weather`], with generator ranges overridden by `config_json`.
#[uniffi::export]
pub fn current_weather_with_config(config_json: String) -> Result<Vec<WeatherData>, DashboardError> {
    let config = GeneratorConfig::from_json_str(&config_json)?;
    Ok(weather::current_readings(
        now_unix(),
        &config,
        &mut RngSource::thread(),
    ))
}

/// `days + 1` daily readings ending now, oldest first. `days` is capped at
/// ten years.
#[uniffi::export]
pub fn historical_weather(station_id: String, days: u32) -> Vec<WeatherData> {
    weather::historical_series(
        &StationId::new(station_id),
        days,
        now_unix(),
        &GeneratorConfig::default(),
        &mut RngSource::thread(),
    )
}

#[uniffi::export]
pub fn weather_alerts_for_station(station_id: String) -> Vec<WeatherAlert> {
    weather::alerts_for_station(&weather::weather_alerts(now_unix()), &station_id)
}

#[uniffi::export]
pub fn all_weather_alerts() -> Vec<WeatherAlert> {
    weather::weather_alerts(now_unix())
}

#[uniffi::export]
pub fn weather_series_stats(readings: Vec<WeatherData>) -> SeriesStats {
    SeriesStats::compute(&readings)
}

#[uniffi::export]
pub fn temperature_histogram(readings: Vec<WeatherData>) -> Vec<BandCount> {
    stats::temperature_distribution(&readings)
}

#[uniffi::export]
pub fn wind_histogram(readings: Vec<WeatherData>) -> Vec<BandCount> {
    stats::wind_distribution(&readings)
}

#[uniffi::export]
pub fn visibility_histogram(readings: Vec<WeatherData>) -> Vec<BandCount> {
    stats::visibility_distribution(&readings)
}

// ============================================================================
// Supplies
// ============================================================================

/// Drops matching `query`, in tracker order. An empty query lists every drop.
#[uniffi::export]
pub fn tracked_supply_drops(query: String) -> Vec<SupplyDrop> {
    let drops = supply::supply_drops(now_unix());
    supply::sorted_supply_drops(&supply::search_supply_drops(&drops, &query))
}

#[uniffi::export]
pub fn pending_supply_drops() -> Vec<SupplyDrop> {
    supply::pending_drops(&supply::supply_drops(now_unix()))
}

#[uniffi::export]
pub fn delivered_supply_drops() -> Vec<SupplyDrop> {
    supply::delivered_drops(&supply::supply_drops(now_unix()))
}

#[uniffi::export]
pub fn supply_items_in_category(category: SupplyCategory) -> Vec<SupplyItem> {
    supply::items_by_category(&supply::supply_drops(now_unix()), category)
}

#[uniffi::export]
pub fn find_supply_drop(drop_id: String) -> Option<SupplyDrop> {
    let drops = supply::supply_drops(now_unix());
    supply::supply_drop_by_id(&drops, &drop_id).cloned()
}

#[uniffi::export]
pub fn drop_destination(drop_id: String) -> Option<WeatherStation> {
    let now = now_unix();
    let drops = supply::supply_drops(now);
    let stations = weather::stations(now);
    let target = supply::supply_drop_by_id(&drops, &drop_id)?;
    supply::station_for_drop(target, &stations).cloned()
}

#[uniffi::export]
pub fn station_inventory() -> Vec<StationInventory> {
    supply::inventory_levels()
}

#[uniffi::export]
pub fn station_supply_status(station_id: String) -> Option<SupplyStatus> {
    supply::supply_status(&station_id, &mut RngSource::thread())
}

// ============================================================================
// Research
// ============================================================================

#[uniffi::export]
pub fn find_research_projects(query: String) -> Vec<ResearchProject> {
    research::search_projects(&research::research_projects(), &query)
}

#[uniffi::export]
pub fn find_research_project(project_id: String) -> Option<ResearchProject> {
    research::project_by_id(&research::research_projects(), &project_id).cloned()
}

#[uniffi::export]
pub fn research_project_updates(project_id: String) -> Vec<ResearchUpdate> {
    research::updates_for_project(&research::research_updates(), &project_id)
}

/// Formatted update feed filtered by `query`.
#[uniffi::export]
pub fn research_feed(query: String) -> Vec<FormattedUpdate> {
    let formatted =
        research::formatted_updates(&research::research_updates(), &research::research_projects());
    research::search_updates(&formatted, &query)
}

// ============================================================================
// Guides
// ============================================================================

#[uniffi::export]
pub fn find_survival_guides(query: String) -> Vec<SurvivalGuide> {
    guides::search_guides(&guides::survival_guides(), &query)
}

#[uniffi::export]
pub fn survival_guides_in_category(category: GuideCategory) -> Vec<SurvivalGuide> {
    guides::guides_by_category(&guides::survival_guides(), category)
}

#[uniffi::export]
pub fn find_survival_guide(guide_id: String) -> Option<SurvivalGuide> {
    guides::guide_by_id(&guides::survival_guides(), &guide_id).cloned()
}

#[uniffi::export]
pub fn emergency_protocols() -> Vec<SurvivalGuide> {
    guides::critical_guides(&guides::survival_guides())
}

// ============================================================================
// Communications
// ============================================================================

#[uniffi::export]
pub fn find_contacts(query: String) -> Vec<Contact> {
    comms::search_contacts(&comms::contacts(), &query)
}

#[uniffi::export]
pub fn team_announcements() -> Vec<Announcement> {
    comms::announcements()
}

#[uniffi::export]
pub fn team_messages() -> Vec<Message> {
    comms::message_threads()
}

#[uniffi::export]
pub fn emergency_contacts() -> Vec<EmergencyChannel> {
    comms::emergency_channels()
}

/// Validates and stamps a message; `existing` is the host's current thread list.
#[uniffi::export]
pub fn post_message(
    existing: Vec<Message>,
    author: String,
    content: String,
) -> Result<Message, DashboardError> {
    comms::compose_message(&existing, &author, &content, now_unix())
}

#[uniffi::export]
pub fn post_announcement(
    existing: Vec<Announcement>,
    author: String,
    title: String,
    content: String,
    priority: AnnouncementPriority,
) -> Result<Announcement, DashboardError> {
    comms::compose_announcement(&existing, &author, &title, &content, priority, now_unix())
}

/// "Today at HH:MM", "Yesterday at HH:MM" or "YYYY-MM-DD at HH:MM".
/// Out-of-range timestamps render as the epoch.
#[uniffi::export]
pub fn describe_timestamp(timestamp_unix: i64) -> String {
    format_relative(timestamp_unix, now_unix())
}

// ============================================================================
// Overview
// ============================================================================

#[uniffi::export]
pub fn dashboard_overview() -> DashboardOverview {
    DashboardOverview::build(
        now_unix(),
        &GeneratorConfig::default(),
        &mut RngSource::thread(),
    )
}
