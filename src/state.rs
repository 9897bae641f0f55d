use chrono::{Local, NaiveDate};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::AppConfig;
use crate::db::{FileStore, MemoryStore, Storage};
use crate::errors::StorageError;
use crate::models::bookings::{demo_seeds, resolve_seeds, Booking, DEMO_RESOURCES};
use crate::models::product::{default_catalog, Product};
use crate::services::agreement_service::AgreementService;
use crate::services::notes_service::NotesService;

pub type SharedStore = Arc<dyn Storage>;

/// Shared application state handed to every handler through `web::Data`.
pub struct AppState {
    pub bookings: RwLock<Vec<Booking>>,
    pub resources: Vec<String>,
    pub catalog: Vec<Product>,
    pub notes: NotesService<SharedStore>,
    pub agreements: AgreementService<SharedStore>,
    fixed_today: Option<NaiveDate>,
}

impl AppState {
    pub fn new(store: SharedStore, bookings: Vec<Booking>, fixed_today: Option<NaiveDate>) -> Self {
        Self {
            bookings: RwLock::new(bookings),
            resources: DEMO_RESOURCES.iter().map(|s| s.to_string()).collect(),
            catalog: default_catalog(),
            notes: NotesService::new(store.clone()),
            agreements: AgreementService::new(store),
            fixed_today,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, StorageError> {
        let store: SharedStore = match &config.data_dir {
            Some(dir) => Arc::new(FileStore::open(dir)?),
            None => {
                log::info!("RENTAL_DATA_DIR not set, admin state is kept in memory");
                Arc::new(MemoryStore::new())
            }
        };

        // Demo bookings are offsets from one captured date, so the console
        // keeps that date as today instead of drifting past midnight.
        let (bookings, fixed_today) = if config.seed_demo_bookings {
            let today = config.fixed_today.unwrap_or_else(|| Local::now().date_naive());
            log::info!("Seeding demo bookings relative to {}", today);
            (resolve_seeds(&demo_seeds(), today), Some(today))
        } else {
            (Vec::new(), config.fixed_today)
        };

        Ok(Self::new(store, bookings, fixed_today))
    }

    /// Today's calendar date. Capture once per request and pass it down.
    /// Pinned when `RENTAL_TODAY` is set or demo bookings were seeded.
    pub fn today(&self) -> NaiveDate {
        self.fixed_today
            .unwrap_or_else(|| Local::now().date_naive())
    }
}
