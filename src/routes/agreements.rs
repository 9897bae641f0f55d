use actix_web::{web, HttpResponse};

use crate::errors::ApiError;
use crate::models::agreement::AgreementUpload;
use crate::state::AppState;

pub async fn get_agreements(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(state.agreements.list()?))
}

pub async fn upload_agreement(
    state: web::Data<AppState>,
    input: web::Json<AgreementUpload>,
) -> Result<HttpResponse, ApiError> {
    let input = input.into_inner();
    let agreement = state.agreements.upload(input.kind, &input.file_name)?;
    Ok(HttpResponse::Ok().json(agreement))
}
