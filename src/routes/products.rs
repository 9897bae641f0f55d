use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::models::product::ProductCategory;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct QueryParams {
    category: Option<ProductCategory>,
}

pub async fn get_products(
    state: web::Data<AppState>,
    params: web::Query<QueryParams>,
) -> impl Responder {
    let products: Vec<_> = state
        .catalog
        .iter()
        .filter(|p| params.category.map_or(true, |c| p.category == c))
        .collect();
    HttpResponse::Ok().json(products)
}
