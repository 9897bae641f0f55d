pub mod agreement;
pub mod bookings;
pub mod note;
pub mod pricing;
pub mod product;
