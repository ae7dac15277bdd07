//! Static sample bookings for the demo binary

use crate::data::datatable::DataRow;

pub const BOOKING_HEADERS: [&str; 6] = [
    "TIMESTAMP",
    "PURCHASE ID",
    "MAIL",
    "NAME",
    "SOURCE",
    "STATUS",
];

const NAMES: [&str; 12] = [
    "Ada Lovelace",
    "Grace Hopper",
    "Alan Turing",
    "Edsger Dijkstra",
    "Barbara Liskov",
    "Donald Knuth",
    "Frances Allen",
    "Ken Thompson",
    "Margaret Hamilton",
    "Dennis Ritchie",
    "Radia Perlman",
    "John Backus",
];

const SOURCES: [&str; 3] = ["Website", "Mobile App", "Partner"];

const STATUSES: [&str; 4] = ["Failed", "Waiting", "Paid", "Paid"];

pub fn booking_headers() -> Vec<String> {
    BOOKING_HEADERS.iter().map(|h| h.to_string()).collect()
}

/// Twenty-four bookings; status cycles Failed, Waiting, Paid, Paid
pub fn bookings() -> Vec<DataRow> {
    (0..24)
        .map(|i| {
            let name = NAMES[i % NAMES.len()];
            let mail = format!(
                "{}@example.com",
                name.to_lowercase().replace(' ', ".")
            );
            // Timestamps run backwards so the unsorted data is newest first
            let day = 28 - i;
            DataRow::from_strings([
                format!("2023-03-{:02} {:02}:{:02}", day, 8 + i % 10, (i * 7) % 60),
                format!("#{}", 20_460 + i * 17),
                mail,
                name.to_string(),
                SOURCES[i % SOURCES.len()].to_string(),
                STATUSES[i % STATUSES.len()].to_string(),
            ])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bookings_shape() {
        let rows = bookings();
        assert_eq!(rows.len(), 24);
        assert!(rows.iter().all(|r| r.len() == BOOKING_HEADERS.len()));
        assert_eq!(rows[0].status().unwrap().to_string(), "Failed");
        assert_eq!(rows[3].status().unwrap().to_string(), "Paid");
        assert_eq!(
            rows[0].get(2).unwrap().to_string(),
            "ada.lovelace@example.com"
        );
    }
}
