use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::guides::{critical_guides, survival_guides};
use crate::models::{ResearchProject, SupplyDrop, SurvivalGuide, WeatherData};
use crate::random::RandomSource;
use crate::research::{active_projects, research_projects};
use crate::supply::{supply_drops, upcoming_drops};
use crate::weather::{current_readings, first_critical, online_station_count, stations};

/// Everything the landing page shows, computed in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct DashboardOverview {
    pub generated_at_unix: i64,
    pub online_stations: u32,
    pub readings: Vec<WeatherData>,
    pub critical_reading: Option<WeatherData>,
    pub upcoming_drops: Vec<SupplyDrop>,
    pub active_projects: Vec<ResearchProject>,
    pub critical_guides: Vec<SurvivalGuide>,
}

impl DashboardOverview {
    pub fn build<R: RandomSource + ?Sized>(
        now_unix: i64,
        config: &GeneratorConfig,
        rng: &mut R,
    ) -> Self {
        let readings = current_readings(now_unix, config, rng);
        let critical_reading = first_critical(&readings).cloned();

        DashboardOverview {
            generated_at_unix: now_unix,
            online_stations: online_station_count(&stations(now_unix)) as u32,
            critical_reading,
            readings,
            upcoming_drops: upcoming_drops(&supply_drops(now_unix)),
            active_projects: active_projects(&research_projects()),
            critical_guides: critical_guides(&survival_guides()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{RngSource, SequenceSource};

    const NOW: i64 = 1_705_000_000;

    #[test]
    fn test_overview_counts() {
        let mut rng = RngSource::seeded(12);
        let overview = DashboardOverview::build(NOW, &GeneratorConfig::default(), &mut rng);
        assert_eq!(overview.generated_at_unix, NOW);
        assert_eq!(overview.online_stations, 3);
        assert_eq!(overview.readings.len(), 5);
        assert_eq!(overview.upcoming_drops.len(), 3);
        assert_eq!(overview.active_projects.len(), 3);
        assert_eq!(overview.critical_guides.len(), 3);
    }

    #[test]
    fn test_overview_surfaces_critical_reading() {
        // every draw at the bottom of its range: visibility 0.1 km is critical everywhere
        let mut rng = SequenceSource::new(vec![0.0]);
        let overview = DashboardOverview::build(NOW, &GeneratorConfig::default(), &mut rng);
        let critical = overview.critical_reading.unwrap();
        assert_eq!(critical.station_id.as_str(), "station-1");
    }

    #[test]
    fn test_overview_without_critical_reading() {
        // mild temperature, light wind, clear visibility for every station
        let mut rng = SequenceSource::new(vec![0.9, 0.1, 0.5, 0.5, 0.9, 0.5, 0.5, 0.5]);
        let overview = DashboardOverview::build(NOW, &GeneratorConfig::default(), &mut rng);
        assert!(overview.critical_reading.is_none());
    }
}
