use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Index of a rentable resource in the resource list (calendar row).
pub type ResourceIndex = usize;

/// Inclusive calendar date range. `end >= start` for a valid range, but nothing
/// here rejects an inverted one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every date from start to end inclusive. Empty when the range is inverted.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Provisional,
    Maintenance,
}

impl BookingStatus {
    /// Display label used by the admin console.
    pub fn label(&self) -> &str {
        match self {
            BookingStatus::Confirmed => "Uthyrd",
            BookingStatus::Provisional => "Preliminär",
            BookingStatus::Maintenance => "Service",
        }
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "confirmed" => Ok(BookingStatus::Confirmed),
            "provisional" => Ok(BookingStatus::Provisional),
            "maintenance" => Ok(BookingStatus::Maintenance),
            other => Err(format!("unknown booking status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Booking {
    pub id: String,
    pub resource: ResourceIndex,
    pub range: DateRange,
    pub status: BookingStatus,
    pub customer: String,
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub agreement_signed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<NaiveDate>,
}

/// Booking as stored by the mock data: dates as day offsets from "today".
/// Converted into a [`Booking`] once, before entering the core.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BookingSeed {
    pub id: String,
    pub resource: ResourceIndex,
    pub start_day: i64,
    pub end_day: i64,
    pub status: BookingStatus,
    pub customer: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub agreement_signed: bool,
    pub estimated_delivery_time: Option<String>,
    /// Days relative to today the booking was made (negative = in the past).
    pub created_day: i64,
}

pub fn offset_date(today: NaiveDate, offset: i64) -> NaiveDate {
    let days = Days::new(offset.unsigned_abs());
    let shifted = if offset >= 0 {
        today.checked_add_days(days)
    } else {
        today.checked_sub_days(days)
    };
    shifted.unwrap_or(today)
}

impl BookingSeed {
    pub fn resolve(&self, today: NaiveDate) -> Booking {
        Booking {
            id: self.id.clone(),
            resource: self.resource,
            range: DateRange::new(
                offset_date(today, self.start_day),
                offset_date(today, self.end_day),
            ),
            status: self.status,
            customer: self.customer.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            agreement_signed: self.agreement_signed,
            estimated_delivery_time: self.estimated_delivery_time.clone(),
            created_on: Some(offset_date(today, self.created_day)),
        }
    }
}

/// Resolve a batch of seeds against a single captured `today`.
pub fn resolve_seeds(seeds: &[BookingSeed], today: NaiveDate) -> Vec<Booking> {
    seeds.iter().map(|s| s.resolve(today)).collect()
}

fn seed(
    id: &str,
    resource: ResourceIndex,
    (start_day, end_day): (i64, i64),
    status: BookingStatus,
    (customer, phone, email, address): (&str, &str, &str, &str),
    delivery: Option<&str>,
    created_day: i64,
) -> BookingSeed {
    BookingSeed {
        id: id.to_string(),
        resource,
        start_day,
        end_day,
        status,
        customer: customer.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        address: address.to_string(),
        agreement_signed: status == BookingStatus::Confirmed,
        estimated_delivery_time: delivery.map(String::from),
        created_day,
    }
}

/// Demo bookings shown by the admin console until a real booking store exists.
pub fn demo_seeds() -> Vec<BookingSeed> {
    vec![
        seed(
            "b1",
            0,
            (2, 4),
            BookingStatus::Confirmed,
            (
                "Bygg AB",
                "070-123 45 67",
                "bestallning@byggab.se",
                "Industrigatan 12, 451 00 Uddevalla",
            ),
            Some("08:00–10:00"),
            -5,
        ),
        seed(
            "b2",
            1,
            (5, 5),
            BookingStatus::Provisional,
            (
                "Anna Andersson",
                "073-987 65 43",
                "anna.andersson@example.com",
                "Storgatan 5, 451 50 Vänersborg",
            ),
            None,
            -2,
        ),
        seed(
            "b3",
            2,
            (1, 3),
            BookingStatus::Confirmed,
            (
                "Event & Fest AB",
                "076-555 12 34",
                "bokning@eventfest.se",
                "Festvägen 1, 451 00 Uddevalla",
            ),
            Some("09:00–12:00"),
            -1,
        ),
        seed(
            "b4",
            0,
            (8, 9),
            BookingStatus::Maintenance,
            ("—", "—", "—", "—"),
            None,
            -10,
        ),
        seed(
            "b5",
            1,
            (0, 2),
            BookingStatus::Confirmed,
            (
                "Gröntan AB",
                "070-111 22 33",
                "info@grontan.se",
                "Trädgårdsvägen 8, 451 00 Uddevalla",
            ),
            Some("07:30–09:00"),
            -3,
        ),
    ]
}

/// Calendar rows, indexed by [`ResourceIndex`].
pub const DEMO_RESOURCES: [&str; 3] = [
    "Minigrävare 1.8 ton",
    "Hjuldumper Batteri",
    "Mobil Bastuvagn Lyx",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_range_days_crosses_month_boundary() {
        let range = DateRange::new(date(2025, 1, 30), date(2025, 2, 2));
        let days: Vec<_> = range.days().collect();
        assert_eq!(
            days,
            vec![
                date(2025, 1, 30),
                date(2025, 1, 31),
                date(2025, 2, 1),
                date(2025, 2, 2)
            ]
        );
    }

    #[test]
    fn test_inverted_range_has_no_days() {
        let range = DateRange::new(date(2025, 1, 10), date(2025, 1, 9));
        assert_eq!(range.days().count(), 0);
        assert!(!range.contains(date(2025, 1, 10)));
    }

    #[test]
    fn test_seed_resolves_against_today() {
        let today = date(2025, 3, 30);
        let bookings = resolve_seeds(&demo_seeds(), today);

        let b1 = &bookings[0];
        assert_eq!(b1.range, DateRange::new(date(2025, 4, 1), date(2025, 4, 3)));
        assert_eq!(b1.created_on, Some(date(2025, 3, 25)));

        let b5 = &bookings[4];
        assert_eq!(b5.range.start, today);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(
            "provisional".parse::<BookingStatus>(),
            Ok(BookingStatus::Provisional)
        );
        assert!("cancelled".parse::<BookingStatus>().is_err());
    }
}
