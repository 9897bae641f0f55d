use actix_web::{web, HttpResponse};

use crate::errors::ApiError;
use crate::models::note::NoteInput;
use crate::state::AppState;

pub async fn get_notes(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(state.notes.list()?))
}

pub async fn add_note(
    state: web::Data<AppState>,
    input: web::Json<NoteInput>,
) -> Result<HttpResponse, ApiError> {
    match state.notes.add(&input.text)? {
        Some(note) => Ok(HttpResponse::Created().json(note)),
        None => Err(ApiError::BadRequest("note text is empty".to_string())),
    }
}

pub async fn remove_note(
    state: web::Data<AppState>,
    path: web::Path<(String,)>,
) -> Result<HttpResponse, ApiError> {
    let (note_id,) = path.into_inner();
    if state.notes.remove(&note_id)? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(ApiError::NotFound(format!("note '{}'", note_id)))
    }
}

pub async fn clear_notes(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    state.notes.clear()?;
    Ok(HttpResponse::NoContent().finish())
}
