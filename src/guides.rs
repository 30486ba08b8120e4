use log::debug;

use crate::models::{GuideCategory, GuideId, GuidePriority, SurvivalGuide};
use crate::search::matches_any;
use crate::time::utc_timestamp;

struct GuideSeed {
    id: &'static str,
    title: &'static str,
    category: GuideCategory,
    summary: &'static str,
    content: &'static str,
    priority: GuidePriority,
    last_updated: (i32, u32, u32),
    tags: &'static [&'static str],
}

const GUIDES: [GuideSeed; 5] = [
    GuideSeed {
        id: "guide-1",
        title: "Blizzard Survival Protocol",
        category: GuideCategory::Emergency,
        summary: "Essential procedures for surviving extreme blizzard conditions when stranded outside base.",
        content: include_str!("../data/guides/blizzard_survival.md"),
        priority: GuidePriority::Critical,
        last_updated: (2023, 11, 15),
        tags: &["blizzard", "shelter", "emergency", "survival"],
    },
    GuideSeed {
        id: "guide-2",
        title: "Crevasse Rescue Procedures",
        category: GuideCategory::Emergency,
        summary: "Step-by-step procedures for rescuing team members who have fallen into a crevasse.",
        content: include_str!("../data/guides/crevasse_rescue.md"),
        priority: GuidePriority::Critical,
        last_updated: (2023, 10, 28),
        tags: &["crevasse", "rescue", "emergency", "climbing"],
    },
    GuideSeed {
        id: "guide-3",
        title: "Frostbite Treatment and Prevention",
        category: GuideCategory::Medical,
        summary: "Medical procedures for identifying, treating, and preventing frostbite in extreme cold environments.",
        content: include_str!("../data/guides/frostbite.md"),
        priority: GuidePriority::High,
        last_updated: (2023, 9, 12),
        tags: &["frostbite", "medical", "cold injury", "treatment"],
    },
    GuideSeed {
        id: "guide-4",
        title: "Generator Maintenance and Troubleshooting",
        category: GuideCategory::Equipment,
        summary: "Procedures for maintaining and troubleshooting diesel generators in extreme cold environments.",
        content: include_str!("../data/guides/generator_maintenance.md"),
        priority: GuidePriority::Medium,
        last_updated: (2023, 11, 5),
        tags: &["generator", "maintenance", "equipment", "power"],
    },
    GuideSeed {
        id: "guide-5",
        title: "Emergency Communication Protocols",
        category: GuideCategory::Emergency,
        summary: "Procedures for establishing emergency communications when primary systems fail.",
        content: include_str!("../data/guides/emergency_communication.md"),
        priority: GuidePriority::Critical,
        last_updated: (2023, 12, 1),
        tags: &["communication", "emergency", "radio", "satellite"],
    },
];

pub fn survival_guides() -> Vec<SurvivalGuide> {
    GUIDES
        .iter()
        .map(|g| {
            let (year, month, day) = g.last_updated;
            SurvivalGuide {
                id: GuideId::new(g.id),
                title: g.title.to_string(),
                category: g.category,
                summary: g.summary.to_string(),
                content: g.content.to_string(),
                priority: g.priority,
                last_updated_unix: utc_timestamp(year, month, day, 0, 0),
                tags: g.tags.iter().map(|t| t.to_string()).collect(),
            }
        })
        .collect()
}

pub fn guide_by_id<'a>(guides: &'a [SurvivalGuide], id: &str) -> Option<&'a SurvivalGuide> {
    guides.iter().find(|g| g.id.as_str() == id)
}

pub fn guides_by_category(guides: &[SurvivalGuide], category: GuideCategory) -> Vec<SurvivalGuide> {
    guides
        .iter()
        .filter(|g| g.category == category)
        .cloned()
        .collect()
}

pub fn guides_by_priority(guides: &[SurvivalGuide], priority: GuidePriority) -> Vec<SurvivalGuide> {
    guides
        .iter()
        .filter(|g| g.priority == priority)
        .cloned()
        .collect()
}

/// Guides surfaced on the emergency page.
pub fn critical_guides(guides: &[SurvivalGuide]) -> Vec<SurvivalGuide> {
    guides_by_priority(guides, GuidePriority::Critical)
}

/// Matches title, summary, full content and tags.
pub fn search_guides(guides: &[SurvivalGuide], query: &str) -> Vec<SurvivalGuide> {
    let found: Vec<SurvivalGuide> = guides
        .iter()
        .filter(|g| {
            matches_any(
                query,
                [g.title.as_str(), g.summary.as_str(), g.content.as_str()]
                    .into_iter()
                    .chain(g.tags.iter().map(String::as_str)),
            )
        })
        .cloned()
        .collect();
    debug!(
        "event=search module=guides total={} matched={}",
        guides.len(),
        found.len()
    );
    found
}
