use log::debug;

use crate::models::{
    Attachment, FormattedUpdate, ProjectId, ProjectStatus, ResearchProject, ResearchUpdate,
};
use crate::search::matches_any;
use crate::time::{format_date_time, utc_timestamp};

/// Title shown when an update references a project that does not exist.
pub const UNKNOWN_PROJECT: &str = "Unknown Project";

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn attachment(name: &str, mime_type: &str) -> Attachment {
    Attachment {
        name: name.to_string(),
        mime_type: mime_type.to_string(),
        url: "#".to_string(),
    }
}

pub fn research_projects() -> Vec<ResearchProject> {
    vec![
        ResearchProject {
            id: ProjectId::new("project-1"),
            title: "Ice Core Analysis: Climate History".to_string(),
            description: "Extracting and analyzing ice cores to study historical climate patterns over the past 10,000 years.".to_string(),
            lead: "Dr. Sarah Chen".to_string(),
            team: names(&["Dr. Sarah Chen", "Dr. Michael Rodriguez", "Dr. Emma Wilson", "James Peterson"]),
            status: ProjectStatus::Active,
            start_unix: utc_timestamp(2023, 6, 15, 0, 0),
            end_unix: Some(utc_timestamp(2024, 9, 30, 0, 0)),
            location: "Alpha Base".to_string(),
            tags: names(&["climate", "ice cores", "paleoclimatology"]),
        },
        ResearchProject {
            id: ProjectId::new("project-2"),
            title: "Microbiome of Antarctic Lakes".to_string(),
            description: "Studying microbial communities in subglacial lakes to understand extremophile adaptations.".to_string(),
            lead: "Dr. Michael Rodriguez".to_string(),
            team: names(&["Dr. Michael Rodriguez", "Dr. Lisa Kumar", "Alex Thompson"]),
            status: ProjectStatus::Active,
            start_unix: utc_timestamp(2023, 9, 1, 0, 0),
            end_unix: Some(utc_timestamp(2024, 8, 31, 0, 0)),
            location: "Bravo Outpost".to_string(),
            tags: names(&["microbiology", "extremophiles", "subglacial lakes"]),
        },
        ResearchProject {
            id: ProjectId::new("project-3"),
            title: "Atmospheric Ozone Monitoring".to_string(),
            description: "Continuous monitoring of the ozone layer above Antarctica to track recovery patterns.".to_string(),
            lead: "Dr. Emma Wilson".to_string(),
            team: names(&["Dr. Emma Wilson", "Dr. Thomas Lee", "Sophia Martinez"]),
            status: ProjectStatus::Active,
            start_unix: utc_timestamp(2023, 3, 10, 0, 0),
            end_unix: None,
            location: "Charlie Point".to_string(),
            tags: names(&["ozone", "atmosphere", "climate change"]),
        },
        ResearchProject {
            id: ProjectId::new("project-4"),
            title: "Penguin Population Dynamics".to_string(),
            description: "Tracking Adélie penguin populations to understand impacts of changing sea ice conditions.".to_string(),
            lead: "Dr. Thomas Lee".to_string(),
            team: names(&["Dr. Thomas Lee", "Dr. Sarah Chen", "James Peterson"]),
            status: ProjectStatus::OnHold,
            start_unix: utc_timestamp(2023, 11, 5, 0, 0),
            end_unix: None,
            location: "Delta Ridge".to_string(),
            tags: names(&["wildlife", "penguins", "population ecology"]),
        },
        ResearchProject {
            id: ProjectId::new("project-5"),
            title: "Glacial Movement Patterns".to_string(),
            description: "Using satellite imagery and ground sensors to measure glacial movement rates and predict future changes.".to_string(),
            lead: "Dr. Lisa Kumar".to_string(),
            team: names(&["Dr. Lisa Kumar", "Alex Thompson", "Sophia Martinez"]),
            status: ProjectStatus::Planning,
            start_unix: utc_timestamp(2024, 2, 1, 0, 0),
            end_unix: Some(utc_timestamp(2025, 1, 31, 0, 0)),
            location: "Echo Valley".to_string(),
            tags: names(&["glaciology", "remote sensing", "climate change"]),
        },
    ]
}

pub fn research_updates() -> Vec<ResearchUpdate> {
    vec![
        ResearchUpdate {
            id: "update-1".to_string(),
            project_id: ProjectId::new("project-1"),
            author: "Dr. Sarah Chen".to_string(),
            timestamp_unix: utc_timestamp(2023, 12, 15, 9, 30),
            content: "Successfully extracted a 200m ice core from site Alpha-3. Initial visual inspection shows excellent preservation with clear annual layers. Core sections have been photographed, logged, and stored in the cold room for processing.".to_string(),
            attachments: vec![
                attachment("ice_core_extraction.jpg", "image/jpeg"),
                attachment("core_log_dec15.pdf", "application/pdf"),
            ],
        },
        ResearchUpdate {
            id: "update-2".to_string(),
            project_id: ProjectId::new("project-1"),
            author: "Dr. Michael Rodriguez".to_string(),
            timestamp_unix: utc_timestamp(2023, 12, 18, 14, 45),
            content: "Completed initial isotope analysis on sections 15-20 of the Alpha-3 core. Results show interesting fluctuations around the 5,000-year mark that may correlate with previously identified climate anomalies. Will need to run additional tests to confirm.".to_string(),
            attachments: vec![],
        },
        ResearchUpdate {
            id: "update-3".to_string(),
            project_id: ProjectId::new("project-2"),
            author: "Dr. Lisa Kumar".to_string(),
            timestamp_unix: utc_timestamp(2023, 12, 10, 11, 15),
            content: "Water samples collected from Lake Vostok access point show promising microbial diversity. Initial PCR results indicate at least 15 distinct bacterial species, including 3 that don't match our reference database. Preparing samples for metagenomic sequencing.".to_string(),
            attachments: vec![attachment(
                "pcr_results_dec10.xlsx",
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            )],
        },
        ResearchUpdate {
            id: "update-4".to_string(),
            project_id: ProjectId::new("project-3"),
            author: "Dr. Emma Wilson".to_string(),
            timestamp_unix: utc_timestamp(2023, 12, 20, 8, 0),
            content: "Monthly ozone measurements complete. Data shows continued improvement in ozone levels compared to same period last year (+3.2%). However, we observed unusual fluctuations during the Nov 28-Dec 5 period that correlate with stratospheric temperature anomalies.".to_string(),
            attachments: vec![
                attachment("ozone_dec2023.csv", "text/csv"),
                attachment("stratospheric_temp_anomaly.png", "image/png"),
            ],
        },
        ResearchUpdate {
            id: "update-5".to_string(),
            project_id: ProjectId::new("project-4"),
            author: "Dr. Thomas Lee".to_string(),
            timestamp_unix: utc_timestamp(2023, 12, 5, 16, 20),
            content: "Project temporarily on hold due to equipment failure. The automated camera system at colony site D-7 has malfunctioned due to extreme cold conditions. Replacement parts have been requested in the next supply drop. Manual observations will continue on a limited schedule.".to_string(),
            attachments: vec![],
        },
    ]
}

pub fn project_by_id<'a>(projects: &'a [ResearchProject], id: &str) -> Option<&'a ResearchProject> {
    projects.iter().find(|p| p.id.as_str() == id)
}

pub fn projects_by_status(projects: &[ResearchProject], status: ProjectStatus) -> Vec<ResearchProject> {
    projects
        .iter()
        .filter(|p| p.status == status)
        .cloned()
        .collect()
}

pub fn active_projects(projects: &[ResearchProject]) -> Vec<ResearchProject> {
    projects_by_status(projects, ProjectStatus::Active)
}

/// Matches title, description, lead, team members and tags.
pub fn search_projects(projects: &[ResearchProject], query: &str) -> Vec<ResearchProject> {
    let found: Vec<ResearchProject> = projects
        .iter()
        .filter(|p| {
            matches_any(
                query,
                [p.title.as_str(), p.description.as_str(), p.lead.as_str()]
                    .into_iter()
                    .chain(p.team.iter().map(String::as_str))
                    .chain(p.tags.iter().map(String::as_str)),
            )
        })
        .cloned()
        .collect();
    debug!(
        "event=search module=research target=projects total={} matched={}",
        projects.len(),
        found.len()
    );
    found
}

/// Updates for one project, newest first.
pub fn updates_for_project(updates: &[ResearchUpdate], project_id: &str) -> Vec<ResearchUpdate> {
    let mut matched: Vec<ResearchUpdate> = updates
        .iter()
        .filter(|u| u.project_id.as_str() == project_id)
        .cloned()
        .collect();
    matched.sort_by(|a, b| b.timestamp_unix.cmp(&a.timestamp_unix));
    matched
}

/// Updates joined with their project title, in input order.
pub fn formatted_updates(
    updates: &[ResearchUpdate],
    projects: &[ResearchProject],
) -> Vec<FormattedUpdate> {
    updates
        .iter()
        .map(|u| FormattedUpdate {
            update: u.clone(),
            project_title: project_by_id(projects, u.project_id.as_str())
                .map(|p| p.title.clone())
                .unwrap_or_else(|| UNKNOWN_PROJECT.to_string()),
            formatted_date: format_date_time(u.timestamp_unix),
        })
        .collect()
}

/// Matches update content, author and the joined project title.
pub fn search_updates(updates: &[FormattedUpdate], query: &str) -> Vec<FormattedUpdate> {
    updates
        .iter()
        .filter(|f| {
            matches_any(
                query,
                [
                    f.update.content.as_str(),
                    f.update.author.as_str(),
                    f.project_title.as_str(),
                ],
            )
        })
        .cloned()
        .collect()
}
