//! [`ReviewStore`] backed by a directory of JSON files.
//!
//! Layout:
//!
//! ```text
//! <dir>/businesses.json     { "<business id>": { name, description?, image?, gmb_url } }
//! <dir>/interactions.json   [ Interaction, ... ]
//! <dir>/submissions.json    [ FeedbackSubmission, ... ]
//! ```
//!
//! Businesses are read once at open. Log appends are read-modify-write of the
//! whole file, serialized behind a mutex and written via a temp file + rename.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use reviewgate_core::feedback::ValidFeedback;
use reviewgate_core::types::{BusinessId, DbId};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::models::business::Business;
use crate::models::feedback::FeedbackSubmission;
use crate::models::interaction::{Interaction, NewInteraction};
use crate::store::ReviewStore;

pub const BUSINESSES_FILE: &str = "businesses.json";
pub const INTERACTIONS_FILE: &str = "interactions.json";
pub const SUBMISSIONS_FILE: &str = "submissions.json";

#[derive(Debug)]
pub struct JsonStore {
    dir: PathBuf,
    businesses: HashMap<BusinessId, Business>,
    write_lock: Mutex<()>,
}

impl JsonStore {
    /// Open (creating if needed) a data directory and load its businesses.
    ///
    /// A missing `businesses.json` yields an empty catalogue; a malformed one
    /// is an error.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await.map_err(|source| StoreError::Io {
            path: dir.clone(),
            source,
        })?;

        let businesses = load_businesses(&dir.join(BUSINESSES_FILE)).await?;
        tracing::info!(
            dir = %dir.display(),
            businesses = businesses.len(),
            "Opened JSON store",
        );

        Ok(Self {
            dir,
            businesses,
            write_lock: Mutex::new(()),
        })
    }

    /// Append one record to a log file, building it from the next sequence id.
    async fn append<T, F>(&self, file: &str, build: F) -> Result<T, StoreError>
    where
        T: Serialize + DeserializeOwned + Clone,
        F: FnOnce(DbId) -> T,
    {
        let path = self.dir.join(file);
        let _guard = self.write_lock.lock().await;

        let mut records: Vec<T> = read_log(&path).await?;
        let record = build(records.len() as DbId + 1);
        records.push(record.clone());
        write_log(&path, &records).await?;

        Ok(record)
    }

    async fn read<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, StoreError> {
        let _guard = self.write_lock.lock().await;
        read_log(&self.dir.join(file)).await
    }
}

#[async_trait]
impl ReviewStore for JsonStore {
    fn backend(&self) -> &'static str {
        "json"
    }

    async fn find_business(&self, id: &str) -> Result<Option<Business>, StoreError> {
        Ok(self.businesses.get(id).cloned())
    }

    async fn record_interaction(&self, input: &NewInteraction) -> Result<Interaction, StoreError> {
        self.append(INTERACTIONS_FILE, |id| Interaction {
            id,
            business_id: input.business_id.clone(),
            rating: i16::from(input.rating.value()),
            action: input.action.as_str().to_string(),
            timestamp: Utc::now(),
        })
        .await
    }

    async fn record_feedback(
        &self,
        input: &ValidFeedback,
    ) -> Result<FeedbackSubmission, StoreError> {
        self.append(SUBMISSIONS_FILE, |id| FeedbackSubmission {
            id,
            business_id: input.business_id.clone(),
            rating: i16::from(input.rating.value()),
            feedback: input.feedback.clone(),
            category: input.category.clone(),
            customer_name: input.customer_name.clone(),
            email: input.email.clone(),
            phone: input.phone.clone(),
            timestamp: Utc::now(),
        })
        .await
    }

    async fn list_interactions(
        &self,
        business_id: Option<&str>,
    ) -> Result<Vec<Interaction>, StoreError> {
        let mut records: Vec<Interaction> = self.read(INTERACTIONS_FILE).await?;
        if let Some(id) = business_id {
            records.retain(|r| r.business_id == id);
        }
        Ok(records)
    }

    async fn list_feedback(
        &self,
        business_id: Option<&str>,
    ) -> Result<Vec<FeedbackSubmission>, StoreError> {
        let mut records: Vec<FeedbackSubmission> = self.read(SUBMISSIONS_FILE).await?;
        if let Some(id) = business_id {
            records.retain(|r| r.business_id == id);
        }
        Ok(records)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        let meta = fs::metadata(&self.dir).await.map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;
        if meta.is_dir() {
            Ok(())
        } else {
            Err(StoreError::Io {
                path: self.dir.clone(),
                source: std::io::Error::other("data path is not a directory"),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// File helpers
// ---------------------------------------------------------------------------

async fn load_businesses(path: &Path) -> Result<HashMap<BusinessId, Business>, StoreError> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "No businesses file, starting with none");
            return Ok(HashMap::new());
        }
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let mut businesses: HashMap<BusinessId, Business> =
        serde_json::from_slice(&bytes).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    for (id, business) in businesses.iter_mut() {
        business.id = id.clone();
    }

    Ok(businesses)
}

/// Read a JSON array log. A missing file is an empty log.
async fn read_log<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    match fs::read(path).await {
        Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Vec::new()),
        Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
        Err(source) => Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

async fn write_log<T: Serialize>(path: &Path, records: &[T]) -> Result<(), StoreError> {
    let json = serde_json::to_vec_pretty(records).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let tmp = path.with_extension("json.tmp");
    let io_err = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };
    fs::write(&tmp, json).await.map_err(io_err)?;
    fs::rename(&tmp, path).await.map_err(io_err)?;
    Ok(())
}
