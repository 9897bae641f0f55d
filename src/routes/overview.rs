use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::Serialize;

use crate::models::bookings::Booking;
use crate::services::availability_service::{AvailabilityService, EventKind, NextEvent};
use crate::services::booking_service::{AdminEvent, BookingService};
use crate::state::AppState;

#[derive(Serialize)]
struct UpcomingEvent {
    date: NaiveDate,
    bookings: Vec<Booking>,
}

impl From<NextEvent<'_>> for UpcomingEvent {
    fn from(event: NextEvent<'_>) -> Self {
        Self {
            date: event.date,
            bookings: event.bookings.into_iter().cloned().collect(),
        }
    }
}

#[derive(Serialize)]
struct Overview {
    today: NaiveDate,
    active_rentals: usize,
    next_delivery: Option<UpcomingEvent>,
    next_pickup: Option<UpcomingEvent>,
    new_bookings: usize,
    events: Vec<AdminEvent>,
}

pub async fn get_overview(state: web::Data<AppState>) -> HttpResponse {
    let today = state.today();
    let bookings = state.bookings.read().await;

    let overview = Overview {
        today,
        active_rentals: AvailabilityService::active_count(&bookings, today),
        next_delivery: AvailabilityService::next_event_by_kind(&bookings, today, EventKind::Delivery)
            .map(UpcomingEvent::from),
        next_pickup: AvailabilityService::next_event_by_kind(&bookings, today, EventKind::Pickup)
            .map(UpcomingEvent::from),
        new_bookings: AvailabilityService::new_bookings_count(&bookings, today),
        events: BookingService::admin_events(&bookings, today),
    };

    HttpResponse::Ok().json(overview)
}
