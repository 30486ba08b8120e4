//! Team messaging, announcements and emergency channels.
//!
//! Composing a message or announcement validates and stamps a new record; it
//! is up to the host to keep it.

use log::debug;

use crate::error::DashboardError;
use crate::models::{
    Announcement, AnnouncementPriority, Contact, EmergencyChannel, Message, Presence, Reply,
};
use crate::search::matches_any;
use crate::time::utc_timestamp;

const CONTACTS: [(u32, &str, &str, &str, Presence); 8] = [
    (1, "Dr. Sarah Chen", "Lead Researcher", "Alpha Base", Presence::Online),
    (2, "Dr. Michael Rodriguez", "Microbiologist", "Bravo Outpost", Presence::Online),
    (3, "Dr. Emma Wilson", "Atmospheric Scientist", "Charlie Point", Presence::Offline),
    (4, "Dr. Thomas Lee", "Wildlife Biologist", "Delta Ridge", Presence::Away),
    (5, "James Peterson", "Field Technician", "Alpha Base", Presence::Online),
    (6, "Alex Thompson", "Equipment Specialist", "Echo Valley", Presence::Online),
    (7, "Dr. Lisa Kumar", "Glaciologist", "Bravo Outpost", Presence::Offline),
    (8, "Sophia Martinez", "Communications Officer", "Alpha Base", Presence::Online),
];

pub fn contacts() -> Vec<Contact> {
    CONTACTS
        .iter()
        .map(|&(id, name, role, station, presence)| Contact {
            id,
            name: name.to_string(),
            role: role.to_string(),
            station: station.to_string(),
            presence,
        })
        .collect()
}

pub fn contact_by_id(contacts: &[Contact], id: u32) -> Option<&Contact> {
    contacts.iter().find(|c| c.id == id)
}

/// Matches name, role and station.
pub fn search_contacts(contacts: &[Contact], query: &str) -> Vec<Contact> {
    let found: Vec<Contact> = contacts
        .iter()
        .filter(|c| matches_any(query, [c.name.as_str(), c.role.as_str(), c.station.as_str()]))
        .cloned()
        .collect();
    debug!(
        "event=search module=comms total={} matched={}",
        contacts.len(),
        found.len()
    );
    found
}

pub fn announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            id: 1,
            title: "Monthly Supply Schedule Update".to_string(),
            content: "The next supply drop has been rescheduled from January 15th to January 18th due to forecasted weather conditions. Please adjust your inventory planning accordingly.".to_string(),
            author: "Dr. Sarah Chen".to_string(),
            timestamp_unix: utc_timestamp(2024, 1, 10, 9, 30),
            priority: AnnouncementPriority::Normal,
        },
        Announcement {
            id: 2,
            title: "Communication System Maintenance".to_string(),
            content: "The satellite communication system will undergo scheduled maintenance on January 12th from 08:00 to 12:00 UTC. During this time, please use the backup HF radio system for any urgent communications.".to_string(),
            author: "Alex Thompson".to_string(),
            timestamp_unix: utc_timestamp(2024, 1, 8, 14, 15),
            priority: AnnouncementPriority::Important,
        },
        Announcement {
            id: 3,
            title: "New Research Team Arrival".to_string(),
            content: "Please welcome the glaciology research team from University of Cambridge who will be arriving at Alpha Base on January 20th. They will be conducting ice core sampling for the next three months.".to_string(),
            author: "Dr. Emma Wilson".to_string(),
            timestamp_unix: utc_timestamp(2024, 1, 5, 11, 45),
            priority: AnnouncementPriority::Normal,
        },
        Announcement {
            id: 4,
            title: "Emergency Protocol Update".to_string(),
            content: "The emergency evacuation protocol has been updated with new extraction points and procedures. All personnel must review the updated document in the Emergency Protocols section by January 15th.".to_string(),
            author: "Dr. Thomas Lee".to_string(),
            timestamp_unix: utc_timestamp(2024, 1, 3, 16, 20),
            priority: AnnouncementPriority::Urgent,
        },
    ]
}

fn reply(id: u32, content: &str, author: &str, timestamp_unix: i64) -> Reply {
    Reply {
        id,
        content: content.to_string(),
        author: author.to_string(),
        timestamp_unix,
    }
}

pub fn message_threads() -> Vec<Message> {
    vec![
        Message {
            id: 1,
            content: "Has anyone received the latest ice core analysis results from the lab?".to_string(),
            author: "Dr. Sarah Chen".to_string(),
            timestamp_unix: utc_timestamp(2024, 1, 10, 15, 30),
            replies: vec![
                reply(
                    101,
                    "Yes, I just uploaded them to the shared drive. The results show some interesting anomalies around the 2000-year mark.",
                    "Dr. Michael Rodriguez",
                    utc_timestamp(2024, 1, 10, 15, 45),
                ),
                reply(
                    102,
                    "Thanks Michael. I'll take a look at them now. Can we discuss the findings during tomorrow's meeting?",
                    "Dr. Sarah Chen",
                    utc_timestamp(2024, 1, 10, 16, 0),
                ),
            ],
        },
        Message {
            id: 2,
            content: "The weather station at Echo Valley is showing some unusual temperature fluctuations. Can someone check if the sensors are calibrated correctly?".to_string(),
            author: "James Peterson".to_string(),
            timestamp_unix: utc_timestamp(2024, 1, 9, 10, 15),
            replies: vec![reply(
                201,
                "I'll head over there this afternoon to check. It might be related to the solar panel issues we've been having.",
                "Alex Thompson",
                utc_timestamp(2024, 1, 9, 10, 30),
            )],
        },
        Message {
            id: 3,
            content: "Reminder: All research teams need to submit their monthly progress reports by the end of this week.".to_string(),
            author: "Dr. Emma Wilson".to_string(),
            timestamp_unix: utc_timestamp(2024, 1, 8, 9, 0),
            replies: vec![],
        },
    ]
}

pub fn emergency_channels() -> Vec<EmergencyChannel> {
    [
        (
            "Satellite Phone",
            "+870-773-110-911",
            "Available 24/7 for emergency communications",
        ),
        (
            "Emergency Radio",
            "Channel 16 (156.8 MHz)",
            "International distress frequency, monitored continuously",
        ),
        (
            "Emergency Beacon",
            "EPIRB/PLB Activation",
            "Located in emergency cabinets at all stations",
        ),
    ]
    .into_iter()
    .map(|(name, contact, description)| EmergencyChannel {
        name: name.to_string(),
        contact: contact.to_string(),
        description: description.to_string(),
    })
    .collect()
}

fn require(field: &str, value: &str) -> Result<String, DashboardError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DashboardError::EmptyField(field.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Next free id: one past the largest id in use.
fn next_id(kind: &str, ids: impl Iterator<Item = u32>) -> Result<u32, DashboardError> {
    match ids.max() {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .ok_or_else(|| DashboardError::IdExhausted(format!("{kind} {max}"))),
    }
}

/// Build a new thread message. Content is trimmed; blank content is rejected.
pub fn compose_message(
    existing: &[Message],
    author: &str,
    content: &str,
    now_unix: i64,
) -> Result<Message, DashboardError> {
    let author = require("author", author)?;
    let content = require("content", content)?;
    let message = Message {
        id: next_id("message", existing.iter().map(|m| m.id))?,
        content,
        author,
        timestamp_unix: now_unix,
        replies: vec![],
    };
    debug!("event=compose module=comms kind=message id={}", message.id);
    Ok(message)
}

/// Build a new announcement. Title and content are trimmed; either blank is rejected.
pub fn compose_announcement(
    existing: &[Announcement],
    author: &str,
    title: &str,
    content: &str,
    priority: AnnouncementPriority,
    now_unix: i64,
) -> Result<Announcement, DashboardError> {
    let title = require("title", title)?;
    let content = require("content", content)?;
    let author = require("author", author)?;
    let announcement = Announcement {
        id: next_id("announcement", existing.iter().map(|a| a.id))?,
        title,
        content,
        author,
        timestamp_unix: now_unix,
        priority,
    };
    debug!(
        "event=compose module=comms kind=announcement id={}",
        announcement.id
    );
    Ok(announcement)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_705_000_000;

    fn names(contacts: &[Contact]) -> Vec<&str> {
        contacts.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_search_contacts_by_station() {
        let all = contacts();
        assert_eq!(
            names(&search_contacts(&all, "alpha base")),
            vec!["Dr. Sarah Chen", "James Peterson", "Sophia Martinez"]
        );
    }

    #[test]
    fn test_search_contacts_by_role() {
        let all = contacts();
        assert_eq!(names(&search_contacts(&all, "GLACIO")), vec!["Dr. Lisa Kumar"]);
        assert!(search_contacts(&all, "pilot").is_empty());
        assert_eq!(search_contacts(&all, "").len(), 8);
    }

    #[test]
    fn test_contact_by_id() {
        let all = contacts();
        assert_eq!(contact_by_id(&all, 4).unwrap().presence, Presence::Away);
        assert!(contact_by_id(&all, 40).is_none());
    }

    #[test]
    fn test_seeded_threads() {
        let threads = message_threads();
        assert_eq!(threads.len(), 3);
        assert_eq!(threads[0].replies.len(), 2);
        assert!(threads[2].replies.is_empty());
        assert_eq!(announcements()[3].priority, AnnouncementPriority::Urgent);
        assert_eq!(emergency_channels()[1].contact, "Channel 16 (156.8 MHz)");
    }

    #[test]
    fn test_compose_message() {
        let threads = message_threads();
        let message = compose_message(&threads, "James Peterson", "  Generator fixed.  ", NOW).unwrap();
        assert_eq!(message.id, 4);
        assert_eq!(message.content, "Generator fixed.");
        assert_eq!(message.timestamp_unix, NOW);

        let first = compose_message(&[], "James Peterson", "hello", NOW).unwrap();
        assert_eq!(first.id, 1);
    }

    #[test]
    fn test_compose_message_rejects_blank() {
        let err = compose_message(&[], "James Peterson", "   \n", NOW).unwrap_err();
        assert_eq!(err, DashboardError::EmptyField("content".to_string()));
    }

    #[test]
    fn test_compose_rejects_exhausted_ids() {
        let mut threads = message_threads();
        threads[1].id = u32::MAX;
        let err = compose_message(&threads, "James Peterson", "hello", NOW).unwrap_err();
        assert_eq!(err, DashboardError::IdExhausted("message 4294967295".to_string()));

        let mut existing = announcements();
        existing[0].id = u32::MAX;
        let err = compose_announcement(
            &existing,
            "Sophia Martinez",
            "Radio check",
            "body",
            AnnouncementPriority::Normal,
            NOW,
        )
        .unwrap_err();
        assert!(matches!(err, DashboardError::IdExhausted(_)));
    }

    #[test]
    fn test_compose_announcement() {
        let existing = announcements();
        let posted = compose_announcement(
            &existing,
            "Sophia Martinez",
            "Radio check",
            "Daily radio check moves to 07:00.",
            AnnouncementPriority::Important,
            NOW,
        )
        .unwrap();
        assert_eq!(posted.id, 5);
        assert_eq!(posted.priority, AnnouncementPriority::Important);

        let err = compose_announcement(
            &existing,
            "Sophia Martinez",
            " ",
            "body",
            AnnouncementPriority::Normal,
            NOW,
        )
        .unwrap_err();
        assert_eq!(err, DashboardError::EmptyField("title".to_string()));
    }
}
