use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::errors::ApiError;
use crate::models::bookings::BookingStatus;
use crate::services::booking_service::BookingService;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct BookingQuery {
    status: Option<String>,
}

pub async fn get_all_bookings(
    state: web::Data<AppState>,
    query: web::Query<BookingQuery>,
) -> Result<HttpResponse, ApiError> {
    // "alla" is what the console sends for no filter
    let status = match query.status.as_deref() {
        None | Some("") | Some("alla") => None,
        Some(raw) => Some(raw.parse::<BookingStatus>().map_err(ApiError::BadRequest)?),
    };

    let bookings = state.bookings.read().await;
    Ok(HttpResponse::Ok().json(BookingService::filter_by_status(&bookings, status)))
}

pub async fn get_booking_by_id(
    state: web::Data<AppState>,
    path: web::Path<(String,)>,
) -> Result<HttpResponse, ApiError> {
    let (booking_id,) = path.into_inner();
    let bookings = state.bookings.read().await;
    let booking = BookingService::find(&bookings, &booking_id)?;
    Ok(HttpResponse::Ok().json(booking))
}

pub async fn confirm_booking(
    state: web::Data<AppState>,
    path: web::Path<(String,)>,
) -> Result<HttpResponse, ApiError> {
    let (booking_id,) = path.into_inner();
    let mut bookings = state.bookings.write().await;
    let confirmation = BookingService::confirm_by_id(&mut bookings, &booking_id)?;
    Ok(HttpResponse::Ok().json(confirmation))
}
