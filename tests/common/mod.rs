use actix_web::{body::MessageBody, middleware::Logger, web, App};
use actix_cors::Cors;
use chrono::NaiveDate;
use std::sync::Arc;

use rental_api::db::MemoryStore;
use rental_api::models::bookings::{demo_seeds, resolve_seeds, Booking};
use rental_api::routes;
use rental_api::state::{AppState, SharedStore};

/// Friday 10 January 2025
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
}

pub struct TestApp {
    pub state: web::Data<AppState>,
}

impl TestApp {
    /// Demo bookings resolved against [`test_today`], in-memory storage.
    pub fn new() -> Self {
        Self::with_bookings(resolve_seeds(&demo_seeds(), test_today()))
    }

    pub fn with_bookings(bookings: Vec<Booking>) -> Self {
        Self::with_store(Arc::new(MemoryStore::new()), bookings)
    }

    pub fn with_store(store: SharedStore, bookings: Vec<Booking>) -> Self {
        let state = AppState::new(store, bookings, Some(test_today()));
        Self {
            state: web::Data::new(state),
        }
    }

    pub fn create_app(&self) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(self.state.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .route("/health", web::get().to(routes::health::health_check))
            .configure(routes::config)
    }
}
