use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::models::bookings::DateRange;
use crate::models::pricing::{PricingQuote, WeekendOption};

const DISCOUNT_DAYS_THRESHOLD: i64 = 3;
const DISCOUNT_PERCENT: f64 = 15.0;

#[derive(Debug, Clone)]
pub struct PricingConfig {
    /// Discount applies when billable days is strictly greater than this.
    pub discount_days_threshold: i64,
    pub discount_percent: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            discount_days_threshold: DISCOUNT_DAYS_THRESHOLD,
            discount_percent: DISCOUNT_PERCENT,
        }
    }
}

pub struct PricingService;

impl PricingService {
    /// Inclusive day count for a rental. An inverted range counts as zero
    /// elapsed days, i.e. one billable day.
    pub fn billable_days(start: NaiveDate, end: NaiveDate) -> i64 {
        (end - start).num_days().max(0) + 1
    }

    /// Quote with the standard volume discount (15% above 3 days)
    pub fn compute_quote(daily_rate: f64, start: NaiveDate, end: NaiveDate) -> PricingQuote {
        Self::compute_quote_with(&PricingConfig::default(), daily_rate, start, end)
    }

    /// Total for any inputs: negative rates and inverted ranges are priced as-is
    /// and rounding is left to the caller.
    pub fn compute_quote_with(
        config: &PricingConfig,
        daily_rate: f64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> PricingQuote {
        let billable_days = Self::billable_days(start, end);
        let subtotal = billable_days as f64 * daily_rate;
        let discount_applied = billable_days > config.discount_days_threshold;
        let discount_amount = if discount_applied {
            subtotal * (config.discount_percent / 100.0)
        } else {
            0.0
        };

        PricingQuote {
            billable_days,
            subtotal,
            discount_applied,
            discount_amount,
            total: subtotal - discount_amount,
        }
    }

    /// Friday, Saturday and Sunday count as weekend for sauna rentals
    pub fn is_weekend_day(date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Fri | Weekday::Sat | Weekday::Sun)
    }

    pub fn range_includes_weekday(start: NaiveDate, end: NaiveDate) -> bool {
        DateRange::new(start, end)
            .days()
            .any(|d| !Self::is_weekend_day(d))
    }

    /// Next Friday on or after `from`, `None` past the end of the calendar.
    pub fn next_friday(from: NaiveDate) -> Option<NaiveDate> {
        let from_monday = from.weekday().num_days_from_monday() as u64;
        let days_to_add = (4 + 7 - from_monday) % 7;
        from.checked_add_days(Days::new(days_to_add))
    }

    /// The Friday to Sunday slot starting on `friday`.
    pub fn weekend_option(friday: NaiveDate) -> Option<WeekendOption> {
        let sunday = friday.checked_add_days(Days::new(2))?;
        Some(WeekendOption {
            label: Self::weekend_label(friday, sunday),
            start: friday.format("%Y-%m-%d").to_string(),
            end: sunday.format("%Y-%m-%d").to_string(),
        })
    }

    pub fn upcoming_weekends(today: NaiveDate, count: usize) -> Vec<WeekendOption> {
        let Some(first) = Self::next_friday(today) else {
            return Vec::new();
        };
        (0..count as u64)
            .map_while(|week| {
                first
                    .checked_add_days(Days::new(week * 7))
                    .and_then(Self::weekend_option)
            })
            .collect()
    }

    fn weekend_label(friday: NaiveDate, sunday: NaiveDate) -> String {
        format!(
            "{} {} {} – {} {} {}",
            friday.day(),
            Self::short_month(friday.month()),
            friday.year(),
            sunday.day(),
            Self::short_month(sunday.month()),
            sunday.year()
        )
    }

    fn short_month(month: u32) -> &'static str {
        const MONTHS: [&str; 12] = [
            "jan", "feb", "mars", "apr", "maj", "juni", "juli", "aug", "sep", "okt", "nov", "dec",
        ];
        MONTHS[(month as usize - 1) % 12]
    }

    /// Whether `start..=end` lies inside the chosen weekend.
    pub fn weekend_selection_valid(weekend: &WeekendOption, start: NaiveDate, end: NaiveDate) -> bool {
        let (Ok(w_start), Ok(w_end)) = (
            NaiveDate::parse_from_str(&weekend.start, "%Y-%m-%d"),
            NaiveDate::parse_from_str(&weekend.end, "%Y-%m-%d"),
        ) else {
            return false;
        };
        w_start <= start && start <= end && end <= w_end
    }

    /// Whether a weekend-only product can be rented for `start..=end`: no
    /// weekday in the range and both ends inside the same Friday to Sunday.
    pub fn weekend_rental_allowed(start: NaiveDate, end: NaiveDate) -> bool {
        if start > end || Self::range_includes_weekday(start, end) {
            return false;
        }
        let since_friday = (start.weekday().num_days_from_monday() as u64 + 7 - 4) % 7;
        start
            .checked_sub_days(Days::new(since_friday))
            .and_then(Self::weekend_option)
            .map_or(false, |weekend| Self::weekend_selection_valid(&weekend, start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_single_day_quote() {
        let quote = PricingService::compute_quote(100.0, date(2025, 1, 10), date(2025, 1, 10));
        assert_eq!(quote.billable_days, 1);
        assert_eq!(quote.subtotal, 100.0);
        assert!(!quote.discount_applied);
        assert_eq!(quote.discount_amount, 0.0);
        assert_eq!(quote.total, 100.0);
    }

    #[test]
    fn test_four_days_gets_volume_discount() {
        let quote = PricingService::compute_quote(100.0, date(2025, 1, 10), date(2025, 1, 13));
        assert_eq!(quote.billable_days, 4);
        assert_eq!(quote.subtotal, 400.0);
        assert!(quote.discount_applied);
        assert_eq!(quote.discount_amount, 60.0);
        assert_eq!(quote.total, 340.0);
    }

    #[test]
    fn test_three_days_is_below_threshold() {
        let quote = PricingService::compute_quote(1500.0, date(2025, 1, 10), date(2025, 1, 12));
        assert_eq!(quote.billable_days, 3);
        assert!(!quote.discount_applied);
        assert_eq!(quote.total, 4500.0);
    }

    #[test]
    fn test_discount_is_exactly_fifteen_percent() {
        for rate in [1.0, 600.0, 750.0, 900.0, 1200.0, 1499.5] {
            let quote = PricingService::compute_quote(rate, date(2025, 2, 27), date(2025, 3, 2));
            assert_eq!(quote.billable_days, 4);
            assert_eq!(quote.discount_amount, quote.subtotal * 0.15);
            assert_eq!(quote.total, quote.subtotal - quote.discount_amount);
        }
    }

    #[test]
    fn test_inverted_range_bills_one_day() {
        // end before start counts as zero elapsed days
        let quote = PricingService::compute_quote(900.0, date(2025, 1, 13), date(2025, 1, 10));
        assert_eq!(quote.billable_days, 1);
        assert_eq!(quote.total, 900.0);
    }

    #[test]
    fn test_negative_rate_is_not_rejected() {
        let quote = PricingService::compute_quote(-10.0, date(2025, 1, 1), date(2025, 1, 5));
        assert_eq!(quote.subtotal, -50.0);
        assert!(quote.discount_applied);
        assert_eq!(quote.total, -50.0 - (-50.0 * 0.15));
    }

    #[test]
    fn test_custom_config() {
        let config = PricingConfig {
            discount_days_threshold: 1,
            discount_percent: 10.0,
        };
        let quote =
            PricingService::compute_quote_with(&config, 200.0, date(2025, 1, 1), date(2025, 1, 2));
        assert!(quote.discount_applied);
        assert_eq!(quote.total, 360.0);
    }

    #[test]
    fn test_next_friday() {
        // 2025-01-10 is a Friday
        assert_eq!(PricingService::next_friday(date(2025, 1, 10)), Some(date(2025, 1, 10)));
        assert_eq!(PricingService::next_friday(date(2025, 1, 11)), Some(date(2025, 1, 17)));
        assert_eq!(PricingService::next_friday(date(2025, 1, 6)), Some(date(2025, 1, 10)));
        assert_eq!(PricingService::next_friday(date(2025, 1, 12)), Some(date(2025, 1, 17)));
    }

    #[test]
    fn test_weekends_near_end_of_calendar_do_not_panic() {
        assert!(PricingService::weekend_option(NaiveDate::MAX).is_none());
        assert!(PricingService::upcoming_weekends(NaiveDate::MAX, 3).is_empty());
        let weekends = PricingService::upcoming_weekends(NaiveDate::MAX - Days::new(10), 5);
        assert!(weekends.len() < 5);
    }

    #[test]
    fn test_weekend_rental_rules() {
        // Fri 10 Jan to Sun 12 Jan 2025
        assert!(PricingService::weekend_rental_allowed(date(2025, 1, 10), date(2025, 1, 12)));
        assert!(PricingService::weekend_rental_allowed(date(2025, 1, 11), date(2025, 1, 11)));
        assert!(PricingService::weekend_rental_allowed(date(2025, 1, 12), date(2025, 1, 12)));
        // Mon to Tue
        assert!(!PricingService::weekend_rental_allowed(date(2025, 1, 13), date(2025, 1, 14)));
        // Sun into Monday
        assert!(!PricingService::weekend_rental_allowed(date(2025, 1, 12), date(2025, 1, 13)));
        assert!(!PricingService::weekend_rental_allowed(date(2025, 1, 12), date(2025, 1, 10)));
    }

    #[test]
    fn test_weekday_detection() {
        assert!(!PricingService::range_includes_weekday(date(2025, 1, 10), date(2025, 1, 12)));
        assert!(PricingService::range_includes_weekday(date(2025, 1, 12), date(2025, 1, 13)));
        assert!(!PricingService::range_includes_weekday(date(2025, 1, 13), date(2025, 1, 12)));
    }

    #[test]
    fn test_upcoming_weekends() {
        let weekends = PricingService::upcoming_weekends(date(2025, 1, 28), 3);
        assert_eq!(weekends.len(), 3);
        assert_eq!(weekends[0].start, "2025-01-31");
        assert_eq!(weekends[0].end, "2025-02-02");
        assert_eq!(weekends[0].label, "31 jan 2025 – 2 feb 2025");
        assert_eq!(weekends[2].start, "2025-02-14");

        assert!(PricingService::weekend_selection_valid(
            &weekends[0],
            date(2025, 1, 31),
            date(2025, 2, 1)
        ));
        assert!(!PricingService::weekend_selection_valid(
            &weekends[0],
            date(2025, 2, 1),
            date(2025, 2, 3)
        ));
    }
}
