use chrono::NaiveDate;
use std::env;
use std::path::PathBuf;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// When set, admin state is persisted as JSON files in this directory.
    pub data_dir: Option<PathBuf>,
    /// Pins "today" for demos and tests. Unset means the local calendar date.
    pub fixed_today: Option<NaiveDate>,
    pub seed_demo_bookings: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            data_dir: None,
            fixed_today: None,
            seed_demo_bookings: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = env::var("HOST").unwrap_or(defaults.host);
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);
        let data_dir = env::var("RENTAL_DATA_DIR")
            .ok()
            .filter(|d| !d.trim().is_empty())
            .map(PathBuf::from);
        let fixed_today = env::var("RENTAL_TODAY").ok().and_then(|raw| {
            match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(e) => {
                    log::warn!("Ignoring RENTAL_TODAY={:?}: {}", raw, e);
                    None
                }
            }
        });
        let seed_demo_bookings = env::var("RENTAL_SEED_DEMO")
            .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no"))
            .unwrap_or(defaults.seed_demo_bookings);

        Self {
            host,
            port,
            data_dir,
            fixed_today,
            seed_demo_bookings,
        }
    }
}
