pub mod agreement_service;
pub mod availability_service;
pub mod booking_service;
pub mod notes_service;
pub mod pricing_service;
