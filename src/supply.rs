//! Supply drops and station inventory.
//!
//! Wherever a drop's date is compared, the estimated arrival is used and the
//! scheduled date stands in when no estimate exists.

use log::debug;

use crate::models::{
    Coordinates, DropPriority, DropStatus, InventoryCategory, InventoryLevel, StationId,
    StationInventory, SupplyCategory, SupplyDrop, SupplyDropId, SupplyItem, SupplyStatus,
    WeatherStation,
};
use crate::random::{random_int, RandomSource};
use crate::search::matches_any;
use crate::time::{DAY_SECS, HOUR_SECS};

fn item(
    id: &str,
    name: &str,
    category: SupplyCategory,
    quantity: u32,
    unit: &str,
    critical: bool,
) -> SupplyItem {
    SupplyItem {
        id: id.to_string(),
        name: name.to_string(),
        category,
        quantity,
        unit: unit.to_string(),
        critical,
    }
}

/// The seeded drop schedule, dated relative to `now`.
pub fn supply_drops(now_unix: i64) -> Vec<SupplyDrop> {
    let days = |n: i64| now_unix + n * DAY_SECS;
    vec![
        SupplyDrop {
            id: SupplyDropId::new("drop-1"),
            name: "Monthly Resupply Alpha".to_string(),
            status: DropStatus::Delivered,
            priority: DropPriority::Routine,
            scheduled_unix: days(-7),
            estimated_arrival_unix: Some(days(-2)),
            actual_arrival_unix: Some(days(-2) + HOUR_SECS),
            coordinates: Coordinates { lat: -78.5, lng: 166.75 },
            contents: vec![
                item("item-1", "Freeze-dried meals", SupplyCategory::Food, 500, "packs", false),
                item("item-2", "Diesel fuel", SupplyCategory::Fuel, 2000, "liters", true),
                item("item-3", "Medical supplies", SupplyCategory::Medical, 10, "boxes", true),
            ],
        },
        SupplyDrop {
            id: SupplyDropId::new("drop-2"),
            name: "Research Equipment Bravo".to_string(),
            status: DropStatus::InTransit,
            priority: DropPriority::Urgent,
            scheduled_unix: days(-2),
            estimated_arrival_unix: Some(now_unix + 12 * HOUR_SECS),
            actual_arrival_unix: None,
            coordinates: Coordinates { lat: -64.8, lng: -62.6 },
            contents: vec![
                item("item-4", "Ice core drills", SupplyCategory::Research, 2, "units", false),
                item("item-5", "Spectrometer", SupplyCategory::Research, 1, "unit", false),
                item("item-6", "Sample containers", SupplyCategory::Research, 200, "units", false),
            ],
        },
        SupplyDrop {
            id: SupplyDropId::new("drop-3"),
            name: "Emergency Medical Charlie".to_string(),
            status: DropStatus::Scheduled,
            priority: DropPriority::Emergency,
            scheduled_unix: days(1),
            estimated_arrival_unix: Some(days(2)),
            actual_arrival_unix: None,
            coordinates: Coordinates { lat: -90.0, lng: 0.0 },
            contents: vec![
                item("item-7", "Antibiotics", SupplyCategory::Medical, 50, "packs", true),
                item("item-8", "Surgical equipment", SupplyCategory::Medical, 1, "kit", true),
            ],
        },
        SupplyDrop {
            id: SupplyDropId::new("drop-4"),
            name: "Communications Upgrade Delta".to_string(),
            status: DropStatus::Delayed,
            priority: DropPriority::Urgent,
            scheduled_unix: days(-3),
            estimated_arrival_unix: Some(days(4)),
            actual_arrival_unix: None,
            coordinates: Coordinates { lat: -84.2, lng: 160.7 },
            contents: vec![
                item("item-9", "Satellite phone", SupplyCategory::Communications, 5, "units", true),
                item("item-10", "Radio equipment", SupplyCategory::Communications, 3, "sets", true),
                item("item-11", "Antenna parts", SupplyCategory::Communications, 15, "units", false),
            ],
        },
        SupplyDrop {
            id: SupplyDropId::new("drop-5"),
            name: "Quarterly Resupply Echo".to_string(),
            status: DropStatus::Scheduled,
            priority: DropPriority::Routine,
            scheduled_unix: days(10),
            estimated_arrival_unix: Some(days(12)),
            actual_arrival_unix: None,
            coordinates: Coordinates { lat: -80.1, lng: -115.0 },
            contents: vec![
                item("item-12", "Food supplies", SupplyCategory::Food, 1000, "kg", true),
                item("item-13", "Heating fuel", SupplyCategory::Fuel, 5000, "liters", true),
                item("item-14", "Winter clothing", SupplyCategory::Equipment, 20, "sets", false),
                item("item-15", "Spare parts", SupplyCategory::Equipment, 50, "boxes", false),
            ],
        },
    ]
}

pub fn supply_drop_by_id<'a>(drops: &'a [SupplyDrop], id: &str) -> Option<&'a SupplyDrop> {
    drops.iter().find(|d| d.id.as_str() == id)
}

/// Stable sort: status rank, then priority rank, then effective arrival.
pub fn sort_supply_drops(drops: &mut [SupplyDrop]) {
    drops.sort_by_key(|d| (d.status.rank(), d.priority.rank(), d.effective_arrival_unix()));
}

/// Sorted copy of `drops`.
pub fn sorted_supply_drops(drops: &[SupplyDrop]) -> Vec<SupplyDrop> {
    let mut sorted = drops.to_vec();
    sort_supply_drops(&mut sorted);
    sorted
}

/// Case-insensitive match against the drop name, item names and item categories.
pub fn search_supply_drops(drops: &[SupplyDrop], query: &str) -> Vec<SupplyDrop> {
    let found: Vec<SupplyDrop> = drops
        .iter()
        .filter(|d| {
            matches_any(query, [d.name.as_str()])
                || d.contents.iter().any(|i| {
                    matches_any(query, [i.name.as_str(), i.category.label()])
                })
        })
        .cloned()
        .collect();
    debug!(
        "event=search module=supply total={} matched={}",
        drops.len(),
        found.len()
    );
    found
}

/// Drops not yet delivered, in tracker order.
pub fn pending_drops(drops: &[SupplyDrop]) -> Vec<SupplyDrop> {
    sorted_supply_drops(drops)
        .into_iter()
        .filter(|d| d.status != DropStatus::Delivered)
        .collect()
}

/// Delivered drops, in tracker order.
pub fn delivered_drops(drops: &[SupplyDrop]) -> Vec<SupplyDrop> {
    sorted_supply_drops(drops)
        .into_iter()
        .filter(|d| d.status == DropStatus::Delivered)
        .collect()
}

/// Scheduled or in-transit drops, soonest first.
pub fn upcoming_drops(drops: &[SupplyDrop]) -> Vec<SupplyDrop> {
    let mut upcoming: Vec<SupplyDrop> = drops
        .iter()
        .filter(|d| matches!(d.status, DropStatus::Scheduled | DropStatus::InTransit))
        .cloned()
        .collect();
    upcoming.sort_by_key(SupplyDrop::effective_arrival_unix);
    upcoming
}

/// Items across all drops in the given category, in drop order.
pub fn items_by_category(drops: &[SupplyDrop], category: SupplyCategory) -> Vec<SupplyItem> {
    drops
        .iter()
        .flat_map(|d| d.contents.iter())
        .filter(|i| i.category == category)
        .cloned()
        .collect()
}

/// Station whose coordinates equal the drop's target, if any.
pub fn station_for_drop<'a>(
    drop: &SupplyDrop,
    stations: &'a [WeatherStation],
) -> Option<&'a WeatherStation> {
    stations.iter().find(|s| s.coordinates == drop.coordinates)
}

// ============================================================================
// Inventory
// ============================================================================

/// (station, food, fuel, medical %, equipment %)
const INVENTORY: [(&str, u32, u32, u32, u32); 5] = [
    ("station-1", 75, 60, 85, 90),
    ("station-2", 45, 30, 70, 85),
    ("station-3", 90, 85, 40, 95),
    ("station-4", 20, 15, 60, 70),
    ("station-5", 65, 50, 80, 85),
];

fn level(category: InventoryCategory, current: u32, target: u32, unit: &str) -> InventoryLevel {
    InventoryLevel {
        category,
        current,
        target,
        unit: unit.to_string(),
    }
}

pub fn inventory_levels() -> Vec<StationInventory> {
    INVENTORY
        .iter()
        .map(|&(station, food, fuel, medical, equipment)| StationInventory {
            station_id: StationId::new(station),
            levels: vec![
                level(InventoryCategory::Food, food, 100, "days"),
                level(InventoryCategory::Fuel, fuel, 90, "days"),
                level(InventoryCategory::Medical, medical, 100, "%"),
                level(InventoryCategory::Equipment, equipment, 100, "%"),
            ],
        })
        .collect()
}

/// Levels for a station plus an `overall` score drawn uniformly between the
/// lowest and highest current level. `None` for unknown stations.
pub fn supply_status<R: RandomSource + ?Sized>(
    station_id: &str,
    rng: &mut R,
) -> Option<SupplyStatus> {
    let inventory = inventory_levels()
        .into_iter()
        .find(|inv| inv.station_id.as_str() == station_id)?;

    let lowest = inventory.levels.iter().map(|l| l.current).min()?;
    let highest = inventory.levels.iter().map(|l| l.current).max()?;
    let overall = random_int(rng, lowest as i64, highest as i64) as u32;

    Some(SupplyStatus {
        station_id: inventory.station_id,
        levels: inventory.levels,
        overall,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{RngSource, SequenceSource};
    use crate::weather::stations;

    const NOW: i64 = 1_705_000_000;

    fn drop_with(id: &str, status: DropStatus, priority: DropPriority, at: i64) -> SupplyDrop {
        SupplyDrop {
            id: SupplyDropId::new(id),
            name: format!("Drop {id}"),
            status,
            priority,
            scheduled_unix: at,
            estimated_arrival_unix: None,
            actual_arrival_unix: None,
            coordinates: Coordinates { lat: 0.0, lng: 0.0 },
            contents: vec![],
        }
    }

    fn ids(drops: &[SupplyDrop]) -> Vec<&str> {
        drops.iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn test_sort_by_status_rank() {
        let mut drops = vec![
            drop_with("a", DropStatus::Delivered, DropPriority::Routine, 0),
            drop_with("b", DropStatus::InTransit, DropPriority::Routine, 0),
            drop_with("c", DropStatus::Scheduled, DropPriority::Routine, 0),
            drop_with("d", DropStatus::Delayed, DropPriority::Routine, 0),
        ];
        sort_supply_drops(&mut drops);
        let statuses: Vec<DropStatus> = drops.iter().map(|d| d.status).collect();
        assert_eq!(
            statuses,
            vec![
                DropStatus::InTransit,
                DropStatus::Scheduled,
                DropStatus::Delayed,
                DropStatus::Delivered
            ]
        );
    }

    #[test]
    fn test_sort_priority_then_date() {
        let mut drops = vec![
            drop_with("late-routine", DropStatus::Scheduled, DropPriority::Routine, 50),
            drop_with("urgent", DropStatus::Scheduled, DropPriority::Urgent, 900),
            drop_with("early-routine", DropStatus::Scheduled, DropPriority::Routine, 10),
            drop_with("emergency", DropStatus::Scheduled, DropPriority::Emergency, 999),
        ];
        sort_supply_drops(&mut drops);
        assert_eq!(
            ids(&drops),
            vec!["emergency", "urgent", "early-routine", "late-routine"]
        );
    }

    #[test]
    fn test_sort_uses_estimate_before_schedule() {
        let mut estimated = drop_with("estimated", DropStatus::Scheduled, DropPriority::Routine, 10);
        estimated.estimated_arrival_unix = Some(500);
        let scheduled_only = drop_with("scheduled", DropStatus::Scheduled, DropPriority::Routine, 100);

        let mut drops = vec![estimated, scheduled_only];
        sort_supply_drops(&mut drops);
        assert_eq!(ids(&drops), vec!["scheduled", "estimated"]);
    }

    #[test]
    fn test_sort_is_stable_on_full_ties() {
        let mut drops = vec![
            drop_with("first", DropStatus::Delayed, DropPriority::Urgent, 42),
            drop_with("second", DropStatus::Delayed, DropPriority::Urgent, 42),
            drop_with("third", DropStatus::Delayed, DropPriority::Urgent, 42),
        ];
        sort_supply_drops(&mut drops);
        assert_eq!(ids(&drops), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_seeded_drops_tracker_order() {
        let drops = sorted_supply_drops(&supply_drops(NOW));
        assert_eq!(
            ids(&drops),
            vec!["drop-2", "drop-3", "drop-5", "drop-4", "drop-1"]
        );
    }

    #[test]
    fn test_pending_and_delivered_partition() {
        let drops = supply_drops(NOW);
        let pending = pending_drops(&drops);
        let delivered = delivered_drops(&drops);
        assert_eq!(pending.len() + delivered.len(), drops.len());
        assert_eq!(ids(&delivered), vec!["drop-1"]);
        assert_eq!(ids(&pending), vec!["drop-2", "drop-3", "drop-5", "drop-4"]);
    }

    #[test]
    fn test_upcoming_drops() {
        let drops = supply_drops(NOW);
        let upcoming = upcoming_drops(&drops);
        assert_eq!(ids(&upcoming), vec!["drop-2", "drop-3", "drop-5"]);
    }

    #[test]
    fn test_search_supply_drops() {
        let drops = supply_drops(NOW);

        let by_name = search_supply_drops(&drops, "echo");
        assert_eq!(ids(&by_name), vec!["drop-5"]);

        let by_item = search_supply_drops(&drops, "ANTIBIOTICS");
        assert_eq!(ids(&by_item), vec!["drop-3"]);

        let by_category = search_supply_drops(&drops, "fuel");
        assert_eq!(ids(&by_category), vec!["drop-1", "drop-5"]);

        assert!(search_supply_drops(&drops, "helicopter").is_empty());
        assert_eq!(search_supply_drops(&drops, "").len(), drops.len());
    }

    #[test]
    fn test_supply_drop_by_id() {
        let drops = supply_drops(NOW);
        let found = supply_drop_by_id(&drops, "drop-4").unwrap();
        assert_eq!(found.name, "Communications Upgrade Delta");
        assert!(supply_drop_by_id(&drops, "drop-42").is_none());
    }

    #[test]
    fn test_items_by_category_partition() {
        let drops = supply_drops(NOW);
        let total: usize = drops.iter().map(|d| d.contents.len()).sum();
        let partitioned: usize = SupplyCategory::ALL
            .iter()
            .map(|c| items_by_category(&drops, *c).len())
            .sum();
        assert_eq!(partitioned, total);
        assert_eq!(items_by_category(&drops, SupplyCategory::Research).len(), 3);
    }

    #[test]
    fn test_station_for_drop() {
        let drops = supply_drops(NOW);
        let stations = stations(NOW);
        let station = station_for_drop(&drops[2], &stations).unwrap();
        assert_eq!(station.name, "Charlie Point");

        let stray = drop_with("stray", DropStatus::Scheduled, DropPriority::Routine, 0);
        assert!(station_for_drop(&stray, &stations).is_none());
    }

    #[test]
    fn test_inventory_levels() {
        let inventory = inventory_levels();
        assert_eq!(inventory.len(), 5);
        let delta = &inventory[3];
        assert_eq!(delta.station_id.as_str(), "station-4");
        assert_eq!(delta.levels[1].category, InventoryCategory::Fuel);
        assert_eq!(delta.levels[1].current, 15);
        assert_eq!(delta.levels[1].target, 90);
    }

    #[test]
    fn test_supply_status_overall_bounds() {
        let mut rng = RngSource::seeded(4);
        for _ in 0..200 {
            let status = supply_status("station-3", &mut rng).unwrap();
            assert!((40..=95).contains(&status.overall));
            assert_eq!(status.levels.len(), 4);
        }

        let mut low = SequenceSource::new(vec![0.0]);
        assert_eq!(supply_status("station-4", &mut low).unwrap().overall, 15);
    }

    #[test]
    fn test_supply_status_unknown_station() {
        let mut rng = SequenceSource::new(vec![0.5]);
        assert!(supply_status("station-9", &mut rng).is_none());
    }
}
