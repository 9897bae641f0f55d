use serde::{Deserialize, Serialize};

/// Derived price for a rental. Never persisted, recomputed on every input change.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PricingQuote {
    pub billable_days: i64,
    pub subtotal: f64,
    pub discount_applied: bool,
    pub discount_amount: f64,
    pub total: f64,
}

/// A Friday to Sunday rental slot offered for weekend-only products.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WeekendOption {
    pub label: String,
    /// ISO date of the Friday
    pub start: String,
    /// ISO date of the Sunday
    pub end: String,
}
