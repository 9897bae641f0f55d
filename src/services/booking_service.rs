use chrono::NaiveDate;
use serde::Serialize;

use crate::errors::BookingError;
use crate::models::bookings::{Booking, BookingStatus, DEMO_RESOURCES};

pub const DEFAULT_DELIVERY_TIME: &str = "09:00–12:00";
const MAX_ADMIN_EVENTS: usize = 12;
const NEW_BOOKING_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminEventType {
    NewBooking,
    Delivery,
    Pickup,
    Provisional,
    Maintenance,
}

impl AdminEventType {
    fn label(&self) -> &str {
        match self {
            AdminEventType::NewBooking => "Ny bokning",
            AdminEventType::Delivery => "Leverans",
            AdminEventType::Pickup => "Hämtning",
            AdminEventType::Provisional => "Preliminär bokning",
            AdminEventType::Maintenance => "Service",
        }
    }
}

/// Entry in the admin overview timeline.
#[derive(Debug, Clone, Serialize)]
pub struct AdminEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AdminEventType,
    pub date: NaiveDate,
    /// Negative for past events
    pub days_from_today: i64,
    pub label: String,
    pub subtitle: String,
    pub product: String,
    pub booking_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Confirmation {
    pub booking: Booking,
    pub message: String,
}

pub struct BookingService;

impl BookingService {
    pub fn find<'a>(bookings: &'a [Booking], id: &str) -> Result<&'a Booking, BookingError> {
        bookings
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| BookingError::NotFound(id.to_string()))
    }

    pub fn filter_by_status(bookings: &[Booking], status: Option<BookingStatus>) -> Vec<Booking> {
        match status {
            Some(status) => bookings
                .iter()
                .filter(|b| b.status == status)
                .cloned()
                .collect(),
            None => bookings.to_vec(),
        }
    }

    /// Provisional -> Confirmed. Stamps the default delivery window when the
    /// booking has none and returns the confirmation SMS text.
    pub fn confirm(booking: &mut Booking) -> Result<String, BookingError> {
        if booking.status != BookingStatus::Provisional {
            return Err(BookingError::InvalidTransition {
                id: booking.id.clone(),
                status: booking.status,
            });
        }

        let delivery_time = booking
            .estimated_delivery_time
            .get_or_insert_with(|| DEFAULT_DELIVERY_TIME.to_string())
            .clone();
        booking.status = BookingStatus::Confirmed;

        Ok(format!(
            "SMS skickat till {} med bekräftelse och beräknad leveranstid {}. Bokningen är nu godkänd.",
            booking.phone, delivery_time
        ))
    }

    pub fn confirm_by_id(bookings: &mut [Booking], id: &str) -> Result<Confirmation, BookingError> {
        let booking = bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| BookingError::NotFound(id.to_string()))?;
        let message = Self::confirm(booking)?;
        log::info!("Booking {} confirmed", id);
        Ok(Confirmation {
            booking: booking.clone(),
            message,
        })
    }

    /// Overview timeline: new bookings from the last week, upcoming deliveries
    /// and pickups, and provisional/maintenance markers, soonest first.
    pub fn admin_events(bookings: &[Booking], today: NaiveDate) -> Vec<AdminEvent> {
        let mut events = Vec::new();

        for b in bookings {
            let product = DEMO_RESOURCES
                .get(b.resource)
                .map(|s| s.to_string())
                .unwrap_or_else(|| format!("Resurs {}", b.resource));
            let subtitle = format!("{} – {}", product, b.customer);
            let mut push = |kind: AdminEventType, date: NaiveDate, subtitle: String| {
                let suffix = match kind {
                    AdminEventType::NewBooking => "ny",
                    AdminEventType::Delivery => "lev",
                    AdminEventType::Pickup => "hamt",
                    AdminEventType::Provisional => "prel",
                    AdminEventType::Maintenance => "serv",
                };
                events.push(AdminEvent {
                    id: format!("{}-{}", b.id, suffix),
                    kind,
                    date,
                    days_from_today: (date - today).num_days(),
                    label: kind.label().to_string(),
                    subtitle,
                    product: product.clone(),
                    booking_id: b.id.clone(),
                });
            };

            if let Some(created) = b.created_on {
                if (created - today).num_days() >= -NEW_BOOKING_WINDOW_DAYS {
                    push(AdminEventType::NewBooking, created, subtitle.clone());
                }
            }
            if b.range.start > today {
                push(AdminEventType::Delivery, b.range.start, subtitle.clone());
            }
            if b.range.end >= today {
                push(AdminEventType::Pickup, b.range.end, subtitle.clone());
            }
            match b.status {
                BookingStatus::Provisional => push(
                    AdminEventType::Provisional,
                    b.range.start,
                    format!("{} (väntar bekräftelse)", subtitle),
                ),
                BookingStatus::Maintenance => push(
                    AdminEventType::Maintenance,
                    b.range.start,
                    format!("{} planerad", product),
                ),
                BookingStatus::Confirmed => {}
            }
        }

        events.sort_by_key(|e| e.date);
        events.truncate(MAX_ADMIN_EVENTS);
        events
    }
}
