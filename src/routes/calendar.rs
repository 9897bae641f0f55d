use actix_web::{web, HttpResponse};
use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::errors::ApiError;
use crate::services::availability_service::{AvailabilityService, CalendarGrid};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CalendarParams {
    year: Option<i32>,
    month: Option<u32>,
    /// Lookahead window of this many days from today, instead of a month
    ahead: Option<usize>,
}

const MAX_LOOKAHEAD_DAYS: usize = 62;

#[derive(Serialize)]
struct CalendarView {
    year: i32,
    month: u32,
    previous: (i32, u32),
    next: (i32, u32),
    years: Vec<i32>,
    today: chrono::NaiveDate,
    #[serde(flatten)]
    grid: CalendarGrid,
}

pub async fn get_calendar(
    state: web::Data<AppState>,
    params: web::Query<CalendarParams>,
) -> Result<HttpResponse, ApiError> {
    let today = state.today();
    let year = params.year.unwrap_or(today.year());
    let month = params.month.unwrap_or(today.month());
    if !(1..=12).contains(&month) {
        return Err(ApiError::BadRequest(format!("invalid month {}", month)));
    }

    let days = match params.ahead {
        Some(count) if count == 0 || count > MAX_LOOKAHEAD_DAYS => {
            return Err(ApiError::BadRequest(format!(
                "lookahead must be between 1 and {} days",
                MAX_LOOKAHEAD_DAYS
            )))
        }
        Some(count) => AvailabilityService::next_days(today, count),
        None => AvailabilityService::days_in_month(year, month),
    };
    if days.is_empty() {
        return Err(ApiError::BadRequest(format!("invalid year {}", year)));
    }

    let bookings = state.bookings.read().await;
    let map = AvailabilityService::build_occupancy(&bookings);
    let grid = AvailabilityService::calendar_grid(state.resources.as_slice(), &map, days);

    Ok(HttpResponse::Ok().json(CalendarView {
        year,
        month,
        previous: AvailabilityService::previous_month(year, month),
        next: AvailabilityService::next_month(year, month),
        years: AvailabilityService::year_options(today),
        today,
        grid,
    }))
}
