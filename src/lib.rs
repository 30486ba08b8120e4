//! Stateless compute core for the polar research network dashboard.
//!
//! Synthetic weather readings, supply tracking, research updates, survival
//! guides and team comms. Everything is static seed data or freshly generated;
//! callers pass in the current time and a random source.

pub mod api;
pub mod comms;
pub mod config;
pub mod error;
pub mod guides;
pub mod logging;
pub mod models;
pub mod overview;
pub mod random;
pub mod refresh;
pub mod research;
pub mod search;
pub mod stats;
pub mod supply;
pub mod time;
pub mod weather;

uniffi::setup_scaffolding!("polarnet");

pub use config::{CriticalThresholds, GeneratorConfig, StationClimate, ValueRange};
pub use error::DashboardError;
pub use logging::{default_log_level, init_logging, logging_status};
pub use models::{
    AlertKind, Announcement, AnnouncementPriority, Attachment, Contact, Coordinates,
    DropPriority, DropStatus, EmergencyChannel, FormattedUpdate, GuideCategory, GuideId,
    GuidePriority, InventoryCategory, InventoryLevel, Message, Presence, ProjectId,
    ProjectStatus, Reply, ResearchProject, ResearchUpdate, StationId, StationInventory,
    StationStatus, SupplyCategory, SupplyDrop, SupplyDropId, SupplyItem, SupplyStatus,
    SurvivalGuide, WeatherAlert, WeatherData, WeatherStation,
};
pub use overview::DashboardOverview;
pub use random::{random_float, random_int, RandomSource, RngSource, SequenceSource};
pub use refresh::{RefreshGuard, RefreshTicket};
pub use stats::{BandCount, SeriesStats, TemperatureBand, VisibilityBand, WindBand};
