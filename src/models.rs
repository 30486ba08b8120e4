use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub String);

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplyDropId(pub String);

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub String);

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuideId(pub String);

uniffi::custom_newtype!(StationId, String);
uniffi::custom_newtype!(SupplyDropId, String);
uniffi::custom_newtype!(ProjectId, String);
uniffi::custom_newtype!(GuideId, String);

macro_rules! impl_id {
    ($($id:ident),*) => {
        $(
            impl $id {
                pub fn new(value: impl Into<String>) -> Self {
                    Self(value.into())
                }

                pub fn as_str(&self) -> &str {
                    &self.0
                }
            }

            impl std::fmt::Display for $id {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&self.0)
                }
            }
        )*
    };
}

impl_id!(StationId, SupplyDropId, ProjectId, GuideId);

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

// ============================================================================
// Weather
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "kebab-case")]
pub enum StationStatus {
    Online,
    Offline,
    Maintenance,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct WeatherStation {
    pub id: StationId,
    pub name: String,
    pub location: String,
    pub coordinates: Coordinates,
    pub status: StationStatus,
    pub last_update_unix: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct WeatherData {
    pub station_id: StationId,
    pub timestamp_unix: i64,
    /// Celsius
    pub temperature_c: f64,
    /// m/s
    pub wind_speed_ms: f64,
    /// Degrees, 0-359
    pub wind_direction_deg: i64,
    /// hPa
    pub pressure_hpa: f64,
    /// Percent
    pub humidity_pct: f64,
    /// km
    pub visibility_km: f64,
    /// cm
    pub snow_depth_cm: f64,
    pub uv_index: i64,
    pub is_critical: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "kebab-case")]
pub enum AlertKind {
    Info,
    Warning,
    Error,
    Success,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct WeatherAlert {
    pub id: String,
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
    pub timestamp_unix: i64,
    /// Empty means the alert applies network-wide.
    pub affected_stations: Vec<StationId>,
}

// ============================================================================
// Supplies
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "kebab-case")]
pub enum DropStatus {
    Scheduled,
    InTransit,
    Delivered,
    Delayed,
}

impl DropStatus {
    /// Display order on the tracker: in-transit, scheduled, delayed, delivered.
    pub fn rank(&self) -> u8 {
        match self {
            DropStatus::InTransit => 0,
            DropStatus::Scheduled => 1,
            DropStatus::Delayed => 2,
            DropStatus::Delivered => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "kebab-case")]
pub enum DropPriority {
    Routine,
    Urgent,
    Emergency,
}

impl DropPriority {
    pub fn rank(&self) -> u8 {
        match self {
            DropPriority::Emergency => 0,
            DropPriority::Urgent => 1,
            DropPriority::Routine => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "kebab-case")]
pub enum SupplyCategory {
    Food,
    Fuel,
    Medical,
    Equipment,
    Research,
    Communications,
}

impl SupplyCategory {
    pub const ALL: [SupplyCategory; 6] = [
        SupplyCategory::Food,
        SupplyCategory::Fuel,
        SupplyCategory::Medical,
        SupplyCategory::Equipment,
        SupplyCategory::Research,
        SupplyCategory::Communications,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SupplyCategory::Food => "food",
            SupplyCategory::Fuel => "fuel",
            SupplyCategory::Medical => "medical",
            SupplyCategory::Equipment => "equipment",
            SupplyCategory::Research => "research",
            SupplyCategory::Communications => "communications",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct SupplyItem {
    pub id: String,
    pub name: String,
    pub category: SupplyCategory,
    pub quantity: u32,
    pub unit: String,
    pub critical: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct SupplyDrop {
    pub id: SupplyDropId,
    pub name: String,
    pub status: DropStatus,
    pub priority: DropPriority,
    pub scheduled_unix: i64,
    pub estimated_arrival_unix: Option<i64>,
    pub actual_arrival_unix: Option<i64>,
    pub coordinates: Coordinates,
    pub contents: Vec<SupplyItem>,
}

impl SupplyDrop {
    /// Estimated arrival, falling back to the scheduled date.
    pub fn effective_arrival_unix(&self) -> i64 {
        self.estimated_arrival_unix.unwrap_or(self.scheduled_unix)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "kebab-case")]
pub enum InventoryCategory {
    Food,
    Fuel,
    Medical,
    Equipment,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct InventoryLevel {
    pub category: InventoryCategory,
    pub current: u32,
    pub target: u32,
    pub unit: String,
}

impl InventoryLevel {
    /// Current level as a percentage of target. Zero target reads as 0%.
    pub fn fill_percent(&self) -> f64 {
        if self.target == 0 {
            return 0.0;
        }
        self.current as f64 / self.target as f64 * 100.0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct StationInventory {
    pub station_id: StationId,
    pub levels: Vec<InventoryLevel>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct SupplyStatus {
    pub station_id: StationId,
    pub levels: Vec<InventoryLevel>,
    pub overall: u32,
}

// ============================================================================
// Research
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Planning,
    Active,
    Completed,
    OnHold,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Planning,
        ProjectStatus::Active,
        ProjectStatus::Completed,
        ProjectStatus::OnHold,
    ];
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct ResearchProject {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub lead: String,
    pub team: Vec<String>,
    pub status: ProjectStatus,
    pub start_unix: i64,
    pub end_unix: Option<i64>,
    pub location: String,
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct Attachment {
    pub name: String,
    pub mime_type: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct ResearchUpdate {
    pub id: String,
    /// Lookup-only reference; may not resolve.
    pub project_id: ProjectId,
    pub author: String,
    pub timestamp_unix: i64,
    pub content: String,
    pub attachments: Vec<Attachment>,
}

/// A research update joined with its project title for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct FormattedUpdate {
    pub update: ResearchUpdate,
    pub project_title: String,
    pub formatted_date: String,
}

// ============================================================================
// Guides
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "kebab-case")]
pub enum GuideCategory {
    Emergency,
    Medical,
    Equipment,
    Survival,
    Navigation,
}

impl GuideCategory {
    pub const ALL: [GuideCategory; 5] = [
        GuideCategory::Emergency,
        GuideCategory::Medical,
        GuideCategory::Equipment,
        GuideCategory::Survival,
        GuideCategory::Navigation,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "kebab-case")]
pub enum GuidePriority {
    Critical,
    High,
    Medium,
    Low,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct SurvivalGuide {
    pub id: GuideId,
    pub title: String,
    pub category: GuideCategory,
    pub summary: String,
    /// Markdown source, not rendered here.
    pub content: String,
    pub priority: GuidePriority,
    pub last_updated_unix: i64,
    pub tags: Vec<String>,
}

// ============================================================================
// Communications
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "kebab-case")]
pub enum Presence {
    Online,
    Away,
    Offline,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct Contact {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub station: String,
    pub presence: Presence,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "kebab-case")]
pub enum AnnouncementPriority {
    Normal,
    Important,
    Urgent,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct Announcement {
    pub id: u32,
    pub title: String,
    pub content: String,
    pub author: String,
    pub timestamp_unix: i64,
    pub priority: AnnouncementPriority,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct Reply {
    pub id: u32,
    pub content: String,
    pub author: String,
    pub timestamp_unix: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct Message {
    pub id: u32,
    pub content: String,
    pub author: String,
    pub timestamp_unix: i64,
    pub replies: Vec<Reply>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct EmergencyChannel {
    pub name: String,
    pub contact: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_ranks_are_distinct() {
        let statuses = [
            DropStatus::InTransit,
            DropStatus::Scheduled,
            DropStatus::Delayed,
            DropStatus::Delivered,
        ];
        let ranks: Vec<u8> = statuses.iter().map(|s| s.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3]);

        assert!(DropPriority::Emergency.rank() < DropPriority::Urgent.rank());
        assert!(DropPriority::Urgent.rank() < DropPriority::Routine.rank());
    }

    #[test]
    fn test_effective_arrival_falls_back_to_scheduled() {
        let mut drop = SupplyDrop {
            id: SupplyDropId::new("drop-x"),
            name: "Test".to_string(),
            status: DropStatus::Scheduled,
            priority: DropPriority::Routine,
            scheduled_unix: 100,
            estimated_arrival_unix: None,
            actual_arrival_unix: None,
            coordinates: Coordinates { lat: 0.0, lng: 0.0 },
            contents: vec![],
        };
        assert_eq!(drop.effective_arrival_unix(), 100);
        drop.estimated_arrival_unix = Some(250);
        assert_eq!(drop.effective_arrival_unix(), 250);
    }

    #[test]
    fn test_fill_percent() {
        let level = InventoryLevel {
            category: InventoryCategory::Fuel,
            current: 45,
            target: 90,
            unit: "days".to_string(),
        };
        assert_eq!(level.fill_percent(), 50.0);

        let empty_target = InventoryLevel {
            target: 0,
            ..level
        };
        assert_eq!(empty_target.fill_percent(), 0.0);
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        let json = serde_json::to_string(&DropStatus::InTransit).unwrap();
        assert_eq!(json, "\"in-transit\"");
        let json = serde_json::to_string(&ProjectStatus::OnHold).unwrap();
        assert_eq!(json, "\"on-hold\"");
    }

    #[test]
    fn test_id_display_and_serde() {
        let id = StationId::new("station-1");
        assert_eq!(id.to_string(), "station-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"station-1\"");
    }
}
