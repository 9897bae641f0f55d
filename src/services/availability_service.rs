//! Availability aggregation over a booking list.
//!
//! Everything here is a pure function of its inputs: callers resolve
//! offset-based bookings into absolute dates and capture "today" once, then
//! pass both in. Nothing reads the wall clock.
//!
//! Overlapping bookings for the same resource are not detected. When two
//! bookings cover the same (resource, date) slot the one later in the input
//! list wins.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::bookings::{Booking, BookingStatus, ResourceIndex};

const RECENT_BOOKINGS_WINDOW_DAYS: u64 = 7;
const YEAR_OPTIONS_SPAN: i32 = 5;

/// Lookup from (resource, date) to the booking occupying that slot.
#[derive(Debug, Default, Clone)]
pub struct OccupancyMap<'a> {
    slots: HashMap<(ResourceIndex, NaiveDate), &'a Booking>,
}

impl<'a> OccupancyMap<'a> {
    pub fn get(&self, resource: ResourceIndex, date: NaiveDate) -> Option<&'a Booking> {
        self.slots.get(&(resource, date)).copied()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Booking start, the machine goes out to the customer
    Delivery,
    /// Booking end, the machine comes back
    Pickup,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NextEvent<'a> {
    pub date: NaiveDate,
    pub bookings: Vec<&'a Booking>,
}

/// One calendar cell's worth of booking data, for tooltips and status colors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarCell {
    pub booking_id: String,
    pub status: BookingStatus,
    pub label: String,
    pub customer: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarRow {
    pub resource: ResourceIndex,
    pub name: String,
    pub cells: Vec<Option<CalendarCell>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarGrid {
    pub days: Vec<NaiveDate>,
    pub rows: Vec<CalendarRow>,
}

pub struct AvailabilityService;

impl AvailabilityService {
    pub fn build_occupancy(bookings: &[Booking]) -> OccupancyMap<'_> {
        let mut slots = HashMap::new();
        for booking in bookings {
            for day in booking.range.days() {
                slots.insert((booking.resource, day), booking);
            }
        }
        log::debug!(
            "Built occupancy map with {} slots from {} bookings",
            slots.len(),
            bookings.len()
        );
        OccupancyMap { slots }
    }

    pub fn occupancy_at<'a>(
        map: &OccupancyMap<'a>,
        resource: ResourceIndex,
        date: NaiveDate,
    ) -> Option<&'a Booking> {
        map.get(resource, date)
    }

    /// Bookings whose range contains `today`.
    pub fn active_count(bookings: &[Booking], today: NaiveDate) -> usize {
        bookings.iter().filter(|b| b.range.contains(today)).count()
    }

    /// Earliest date strictly after `today` on which a booking starts
    /// (delivery) or ends (pickup), together with every booking sharing it.
    pub fn next_event_by_kind(
        bookings: &[Booking],
        today: NaiveDate,
        kind: EventKind,
    ) -> Option<NextEvent<'_>> {
        let event_date = |b: &Booking| match kind {
            EventKind::Delivery => b.range.start,
            EventKind::Pickup => b.range.end,
        };

        let date = bookings
            .iter()
            .map(event_date)
            .filter(|d| *d > today)
            .min()?;

        Some(NextEvent {
            date,
            bookings: bookings.iter().filter(|b| event_date(*b) == date).collect(),
        })
    }

    /// Bookings created on or after `today - window_days`.
    pub fn recent_bookings(
        bookings: &[Booking],
        today: NaiveDate,
        window_days: u64,
    ) -> Vec<&Booking> {
        let cutoff = today
            .checked_sub_days(Days::new(window_days))
            .unwrap_or(NaiveDate::MIN);
        bookings
            .iter()
            .filter(|b| b.created_on.map_or(false, |c| c >= cutoff))
            .collect()
    }

    pub fn new_bookings_count(bookings: &[Booking], today: NaiveDate) -> usize {
        Self::recent_bookings(bookings, today, RECENT_BOOKINGS_WINDOW_DAYS).len()
    }

    /// Every date of the month, or nothing for an invalid year/month.
    pub fn days_in_month(year: i32, month: u32) -> Vec<NaiveDate> {
        let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
            return Vec::new();
        };
        first
            .iter_days()
            .take_while(|d| d.month() == month)
            .collect()
    }

    /// `count` consecutive dates starting at `today`.
    pub fn next_days(today: NaiveDate, count: usize) -> Vec<NaiveDate> {
        today.iter_days().take(count).collect()
    }

    pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
        if month <= 1 {
            (year - 1, 12)
        } else {
            (year, month - 1)
        }
    }

    pub fn next_month(year: i32, month: u32) -> (i32, u32) {
        if month >= 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        }
    }

    /// Years selectable in the calendar view, centred on today's year.
    pub fn year_options(today: NaiveDate) -> Vec<i32> {
        let first = today.year() - YEAR_OPTIONS_SPAN / 2;
        (first..first + YEAR_OPTIONS_SPAN).collect()
    }

    pub fn calendar_grid<S: AsRef<str>>(
        resources: &[S],
        map: &OccupancyMap<'_>,
        days: Vec<NaiveDate>,
    ) -> CalendarGrid {
        let rows = resources
            .iter()
            .enumerate()
            .map(|(index, name)| CalendarRow {
                resource: index,
                name: name.as_ref().to_string(),
                cells: days
                    .iter()
                    .map(|day| {
                        map.get(index, *day).map(|b| CalendarCell {
                            booking_id: b.id.clone(),
                            status: b.status,
                            label: b.status.label().to_string(),
                            customer: b.customer.clone(),
                            phone: b.phone.clone(),
                        })
                    })
                    .collect(),
            })
            .collect();

        CalendarGrid { days, rows }
    }
}
