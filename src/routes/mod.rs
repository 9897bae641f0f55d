pub mod agreements;
pub mod bookings;
pub mod calendar;
pub mod health;
pub mod notes;
pub mod overview;
pub mod products;
pub mod quote;

use actix_web::web;

/// Storefront and admin console API, mounted under `/api`.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Storefront
            .route("/products", web::get().to(products::get_products))
            .route("/quote", web::get().to(quote::get_quote))
            .route("/weekends", web::get().to(quote::get_weekends))
            // Admin console
            .route("/calendar", web::get().to(calendar::get_calendar))
            .route("/overview", web::get().to(overview::get_overview))
            .service(
                web::scope("/bookings")
                    .route("", web::get().to(bookings::get_all_bookings))
                    .route("/{id}", web::get().to(bookings::get_booking_by_id))
                    .route("/{id}/confirm", web::post().to(bookings::confirm_booking)),
            )
            .service(
                web::scope("/notes")
                    .route("", web::get().to(notes::get_notes))
                    .route("", web::post().to(notes::add_note))
                    .route("", web::delete().to(notes::clear_notes))
                    .route("/{id}", web::delete().to(notes::remove_note)),
            )
            .service(
                web::scope("/agreements")
                    .route("", web::get().to(agreements::get_agreements))
                    .route("/upload", web::post().to(agreements::upload_agreement)),
            ),
    );
}
