//! Record store adapter over an external key-value blob store.
//!
//! Collections are stored as whole JSON arrays under the names the mobile
//! app has always used (`"rides"`, `"abholungen"`). Every mutation rewrites
//! the whole collection; there is no partial update. A missing blob reads as
//! an empty collection — first run is not an error.

use std::path::PathBuf;

use serde::{Serialize, de::DeserializeOwned};
use tokio::fs;

use crate::{DeliveryRecord, PickupRecord, ResultEngine};

pub const DELIVERIES_KEY: &str = "rides";
pub const PICKUPS_KEY: &str = "abholungen";
pub const REPORT_EMAIL_KEY: &str = "reportEmail";

/// External key-value persistence: named blobs, read and written whole.
#[allow(async_fn_in_trait)]
pub trait BlobStore {
    async fn read(&self, key: &str) -> ResultEngine<Option<String>>;
    async fn write(&self, key: &str, value: &str) -> ResultEngine<()>;
    async fn remove(&self, key: &str) -> ResultEngine<()>;
}

/// File-per-key blob store, the stand-in for the device key-value storage.
#[derive(Clone, Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl BlobStore for FileStore {
    async fn read(&self, key: &str) -> ResultEngine<Option<String>> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn write(&self, key: &str, value: &str) -> ResultEngine<()> {
        fs::create_dir_all(&self.root).await?;
        fs::write(self.path_for(key), value).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> ResultEngine<()> {
        match fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Typed access to the two ride collections and the report address.
#[derive(Clone, Debug)]
pub struct RideStore<S> {
    blobs: S,
}

impl<S: BlobStore> RideStore<S> {
    pub fn new(blobs: S) -> Self {
        Self { blobs }
    }

    /// All persisted deliveries, most recent first.
    pub async fn deliveries(&self) -> ResultEngine<Vec<DeliveryRecord>> {
        self.collection(DELIVERIES_KEY).await
    }

    /// All persisted pickups, most recent first.
    pub async fn pickups(&self) -> ResultEngine<Vec<PickupRecord>> {
        self.collection(PICKUPS_KEY).await
    }

    /// Prepends the record and rewrites the collection.
    pub async fn add_delivery(&self, record: DeliveryRecord) -> ResultEngine<()> {
        let mut records = self.deliveries().await?;
        records.insert(0, record);
        self.save(DELIVERIES_KEY, &records).await
    }

    pub async fn add_pickup(&self, record: PickupRecord) -> ResultEngine<()> {
        let mut records = self.pickups().await?;
        records.insert(0, record);
        self.save(PICKUPS_KEY, &records).await
    }

    /// Removes by id; an unknown id leaves the collection as it was.
    pub async fn remove_delivery(&self, id: &str) -> ResultEngine<()> {
        let mut records = self.deliveries().await?;
        records.retain(|record| record.id != id);
        self.save(DELIVERIES_KEY, &records).await
    }

    pub async fn remove_pickup(&self, id: &str) -> ResultEngine<()> {
        let mut records = self.pickups().await?;
        records.retain(|record| record.id != id);
        self.save(PICKUPS_KEY, &records).await
    }

    /// Address monthly reports are mailed to, if one was configured.
    pub async fn report_email(&self) -> ResultEngine<Option<String>> {
        self.blobs.read(REPORT_EMAIL_KEY).await
    }

    pub async fn set_report_email(&self, address: &str) -> ResultEngine<()> {
        self.blobs.write(REPORT_EMAIL_KEY, address).await
    }

    pub async fn clear_report_email(&self) -> ResultEngine<()> {
        self.blobs.remove(REPORT_EMAIL_KEY).await
    }

    async fn collection<T: DeserializeOwned>(&self, key: &str) -> ResultEngine<Vec<T>> {
        match self.blobs.read(key).await? {
            Some(raw) => {
                let records: Vec<T> = serde_json::from_str(&raw)?;
                tracing::debug!(key, count = records.len(), "loaded collection");
                Ok(records)
            }
            None => Ok(Vec::new()),
        }
    }

    async fn save<T: Serialize>(&self, key: &str, records: &[T]) -> ResultEngine<()> {
        let raw = serde_json::to_string(records)?;
        self.blobs.write(key, &raw).await?;
        tracing::debug!(key, count = records.len(), "saved collection");
        Ok(())
    }
}
