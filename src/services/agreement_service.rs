use uuid::Uuid;

use crate::db::{load_json, save_json, Storage};
use crate::errors::{StorageError, UploadError};
use crate::models::agreement::{default_agreements, Agreement, AgreementType};

const AGREEMENTS_STORAGE_KEY: &str = "admin-avtal";

pub struct AgreementService<S: Storage> {
    store: S,
}

impl<S: Storage> AgreementService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored agreements, or the two defaults when nothing usable is stored.
    pub fn list(&self) -> Result<Vec<Agreement>, StorageError> {
        let stored: Option<Vec<Agreement>> = load_json(&self.store, AGREEMENTS_STORAGE_KEY)?;
        Ok(stored.unwrap_or_else(default_agreements))
    }

    /// Attach a PDF to the agreement of `kind`, creating one if that type has
    /// none yet.
    pub fn upload(&self, kind: AgreementType, file_name: &str) -> Result<Agreement, UploadError> {
        if !file_name.to_ascii_lowercase().ends_with(".pdf") {
            return Err(UploadError::NotPdf(file_name.to_string()));
        }

        let mut agreements = self.list()?;
        let updated = match agreements.iter_mut().find(|a| a.kind == kind) {
            Some(existing) => {
                existing.file_name = Some(file_name.to_string());
                existing.clone()
            }
            None => {
                let created = Agreement {
                    id: Uuid::new_v4().to_string(),
                    title: format!("{} – uppladdad", kind.label()),
                    kind,
                    file_name: Some(file_name.to_string()),
                };
                agreements.push(created.clone());
                created
            }
        };

        save_json(&self.store, AGREEMENTS_STORAGE_KEY, &agreements)?;
        log::info!("Agreement {} now uses {}", updated.id, file_name);
        Ok(updated)
    }
}
