//! Startup Demo Data
//!
//! Loads a small fleet of example tickets so a fresh server has something
//! to show. Ticket 2 gets telemetry events, maintenance history and a few
//! seeded reactions, mirroring the data the dashboard demos against.

use chrono::{DateTime, TimeZone, Utc};

use crate::backend::reactions::store::ReactionStore;
use crate::backend::tickets::store::TicketStore;
use crate::shared::event::NewChargerEvent;
use crate::shared::maintenance::NewMaintenanceRecord;
use crate::shared::ticket::NewTicket;

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

fn datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

#[allow(clippy::too_many_arguments)]
fn ticket(
    title: &str,
    description: &str,
    location: &str,
    location_details: &str,
    status: &str,
    priority: &str,
    charger_model: &str,
    charger_type: &str,
    serial: &str,
    reported_by: &str,
    assigned_to: &str,
) -> NewTicket {
    NewTicket {
        title: title.to_string(),
        description: description.to_string(),
        location: location.to_string(),
        location_details: location_details.to_string(),
        status: status.to_string(),
        priority: priority.to_string(),
        charger_model: charger_model.to_string(),
        charger_type: charger_type.to_string(),
        charger_serial_number: serial.to_string(),
        reported_by: reported_by.to_string(),
        assigned_to: Some(assigned_to.to_string()),
        installed_at: None,
        last_maintenance: None,
        firmware_version: None,
        connectivity: None,
        site_contact: None,
        contact_phone: None,
        operating_hours: None,
    }
}

/// Populate the stores with demo tickets, telemetry and reactions
pub fn load_demo_data(tickets: &TicketStore, reactions: &ReactionStore) {
    let mut first = ticket(
        "Charger not powering on",
        "Unit shows no power indication. Customer reports breaker has not tripped. \
         Last maintenance was 3 months ago.",
        "Parkside Apartments",
        "4502 Main St",
        "in-progress",
        "normal",
        "PowerFlow AC200",
        "Level 2 Charger",
        "PF-2022-45678",
        "Jane Smith",
        "Technician #08",
    );
    first.installed_at = Some(date(2022, 1, 15));
    first.last_maintenance = Some(date(2022, 10, 20));
    first.firmware_version = Some("v2.1.3".to_string());
    first.connectivity = Some("WiFi".to_string());
    first.site_contact = Some("Mark Johnson".to_string());
    first.contact_phone = Some("(555) 789-0123".to_string());
    first.operating_hours = Some("6:00 AM - 10:00 PM".to_string());
    tickets.create_ticket(first);

    let mut second = ticket(
        "Connection errors during charging",
        "Unit is showing intermittent connection errors during charging sessions. \
         Error code E-304 appears on display. Multiple customer complaints.",
        "Metro Charging Hub",
        "123 Electric Ave",
        "open",
        "high",
        "PowerFlow DC5000",
        "DC Fast Charger",
        "PF-2023-76548",
        "Michael Chen",
        "Technician #14",
    );
    second.installed_at = Some(date(2022, 3, 15));
    second.last_maintenance = Some(date(2023, 1, 10));
    second.firmware_version = Some("v3.2.1".to_string());
    second.connectivity = Some("WiFi + Cellular Backup".to_string());
    second.site_contact = Some("Sarah Johnson".to_string());
    second.contact_phone = Some("(555) 123-4567".to_string());
    second.operating_hours = Some("24/7 Access".to_string());
    let second = tickets.create_ticket(second);

    let mut third = ticket(
        "Display screen flickering",
        "Display screen is flickering and sometimes goes blank during charging \
         sessions. Charging functionality appears to be working normally.",
        "Downtown Parking Garage",
        "78 Pine St",
        "open",
        "normal",
        "PowerFlow AC300",
        "Level 2 Charger",
        "PF-2022-34567",
        "David Wilson",
        "Technician #05",
    );
    third.installed_at = Some(date(2022, 5, 10));
    third.last_maintenance = Some(date(2022, 11, 15));
    third.firmware_version = Some("v2.3.0".to_string());
    third.connectivity = Some("WiFi".to_string());
    third.site_contact = Some("Robert Taylor".to_string());
    third.contact_phone = Some("(555) 456-7890".to_string());
    third.operating_hours = Some("24/7 Access".to_string());
    tickets.create_ticket(third);

    let mut fourth = ticket(
        "Incorrect charging rate",
        "Customers reporting unit delivers lower charging rate than advertised. \
         Should deliver 50kW but appears to max out at 30kW.",
        "Riverfront Mall",
        "890 Waterside Dr",
        "resolved",
        "normal",
        "PowerFlow DC3000",
        "DC Fast Charger",
        "PF-2021-56789",
        "Emma Rodriguez",
        "Technician #11",
    );
    fourth.installed_at = Some(date(2021, 11, 20));
    fourth.last_maintenance = Some(date(2022, 9, 5));
    fourth.firmware_version = Some("v3.0.2".to_string());
    fourth.connectivity = Some("WiFi + Ethernet".to_string());
    fourth.site_contact = Some("Lisa Brown".to_string());
    fourth.contact_phone = Some("(555) 987-6543".to_string());
    fourth.operating_hours = Some("9:00 AM - 9:00 PM".to_string());
    tickets.create_ticket(fourth);

    // Telemetry captured around the E-304 complaints on ticket 2.
    let events = [
        (datetime(2023, 5, 12, 8, 23), "Power On", "System Check: Pass", "Normal"),
        (datetime(2023, 5, 12, 9, 15), "Charging Session #1458", "Connection Established", "Normal"),
        (datetime(2023, 5, 12, 9, 24), "Charging Session #1458", "Error E-304", "Error"),
        (datetime(2023, 5, 12, 10, 5), "System Diagnostic", "Auto-Reset Completed", "Warning"),
        (datetime(2023, 5, 12, 11, 32), "Charging Session #1459", "Error E-187", "Error"),
    ];
    for (timestamp, event_type, value, status) in events {
        tickets.create_event(
            second.id,
            NewChargerEvent {
                timestamp: Some(timestamp),
                event_type: event_type.to_string(),
                value: value.to_string(),
                status: status.to_string(),
            },
        );
    }

    let histories = [
        (
            "Scheduled Maintenance",
            "Performed firmware update to v3.2.1, cleaned connectors, tested power \
             output across all ports. All systems functioning normally.",
            "Alex Rodriguez",
            date(2023, 1, 10),
        ),
        (
            "Repair Visit",
            "Replaced damaged charging cable on port #2. Calibrated voltage sensor. \
             Verified stable operation under load.",
            "Marcus Johnson",
            date(2022, 10, 5),
        ),
        (
            "Initial Installation",
            "Completed installation and commissioning of DC Fast Charger. Connected \
             to network and verified remote monitoring functionality.",
            "Installation Team: Alpha Group",
            date(2022, 3, 15),
        ),
    ];
    for (title, description, performed_by, performed_at) in histories {
        tickets.create_maintenance(
            second.id,
            NewMaintenanceRecord {
                title: title.to_string(),
                description: description.to_string(),
                performed_by: performed_by.to_string(),
                performed_at,
            },
        );
    }

    // A few reactions on the busiest ticket.
    reactions.add_voter(second.id, "👍", "Michael Chen");
    reactions.add_voter(second.id, "👍", "Sarah Johnson");
    reactions.add_voter(second.id, "🔧", "Technician #14");
    reactions.add_voter(second.id, "⚡", "Sarah Johnson");
    reactions.add_voter(second.id, "⚡", "Michael Chen");
    reactions.add_voter(second.id, "⚡", "Technician #14");

    tracing::info!("Demo data loaded: 4 tickets, ticket {} fully populated", second.id);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_data_shape() {
        let tickets = TicketStore::new();
        let reactions = ReactionStore::new();
        load_demo_data(&tickets, &reactions);

        assert_eq!(tickets.list_tickets().len(), 4);
        assert_eq!(tickets.events_for(2).len(), 5);
        assert_eq!(tickets.maintenance_for(2).len(), 3);

        let seeded = reactions.list(2);
        assert_eq!(seeded.len(), 3);
        assert_eq!(seeded[0].emoji, "👍");
        assert_eq!(seeded[0].count, 2);
        assert_eq!(seeded[2].emoji, "⚡");
        assert_eq!(seeded[2].count, 3);
    }
}
