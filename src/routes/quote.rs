use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::errors::ApiError;
use crate::models::product::find_product;
use crate::services::pricing_service::PricingService;
use crate::state::AppState;

const DEFAULT_WEEKEND_COUNT: usize = 12;
const MAX_WEEKEND_COUNT: usize = 52;

#[derive(Deserialize)]
pub struct QuoteParams {
    product: Option<String>,
    rate: Option<f64>,
    start: String,
    end: String,
}

#[derive(Deserialize)]
pub struct WeekendParams {
    count: Option<usize>,
}

pub fn parse_date(field: &str, raw: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| ApiError::BadRequest(format!("invalid {} date '{}': {}", field, raw, e)))
}

pub async fn get_quote(
    state: web::Data<AppState>,
    params: web::Query<QuoteParams>,
) -> Result<HttpResponse, ApiError> {
    let params = params.into_inner();
    let start = parse_date("start", &params.start)?;
    let end = parse_date("end", &params.end)?;

    let product = match &params.product {
        Some(query) => Some(
            find_product(&state.catalog, query)
                .ok_or_else(|| ApiError::NotFound(format!("product '{}'", query)))?,
        ),
        None => None,
    };

    if let Some(product) = product.filter(|p| p.weekend_only) {
        if !PricingService::weekend_rental_allowed(start, end) {
            return Err(ApiError::BadRequest(format!(
                "{} can only be rented Friday to Sunday within one weekend",
                product.name
            )));
        }
    }

    // An explicit rate wins over the catalog price
    let daily_rate = match (params.rate, product) {
        (Some(rate), _) => rate,
        (None, Some(product)) => product.price_per_day,
        (None, None) => {
            return Err(ApiError::BadRequest(
                "either product or rate must be provided".to_string(),
            ))
        }
    };

    Ok(HttpResponse::Ok().json(PricingService::compute_quote(daily_rate, start, end)))
}

pub async fn get_weekends(
    state: web::Data<AppState>,
    params: web::Query<WeekendParams>,
) -> HttpResponse {
    let count = params
        .count
        .unwrap_or(DEFAULT_WEEKEND_COUNT)
        .min(MAX_WEEKEND_COUNT);
    HttpResponse::Ok().json(PricingService::upcoming_weekends(state.today(), count))
}
