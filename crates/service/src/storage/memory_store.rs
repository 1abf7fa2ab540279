use std::{collections::{hash_map::Entry, HashMap}, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::booking::{Booking, BookingRepository, FieldUpdate};
use crate::errors::ServiceError;

/// In-memory booking store.
///
/// One map behind one `RwLock`. Every mutation takes the write lock, so
/// create and update are atomic per id. Nothing survives a restart.
#[derive(Clone, Default)]
pub struct BookingStore {
    inner: Arc<RwLock<HashMap<String, Booking>>>,
}

impl BookingStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Insert a booking under its id; an existing record is left untouched.
    pub async fn create(&self, booking: Booking) -> Result<Booking, ServiceError> {
        let mut map = self.inner.write().await;
        match map.entry(booking.id.clone()) {
            Entry::Occupied(_) => Err(ServiceError::conflict("booking")),
            Entry::Vacant(slot) => {
                debug!(id = %slot.key(), "booking created");
                Ok(slot.insert(booking).clone())
            }
        }
    }

    /// Mutate one field of an existing booking and return the new state.
    pub async fn update(&self, id: &str, update: FieldUpdate) -> Result<Booking, ServiceError> {
        let mut map = self.inner.write().await;
        let existing = map.get_mut(id).ok_or_else(|| ServiceError::not_found("booking"))?;
        update.apply(existing);
        debug!(%id, "booking updated");
        Ok(existing.clone())
    }

    pub async fn get(&self, id: &str) -> Option<Booking> {
        let map = self.inner.read().await;
        map.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[async_trait]
impl BookingRepository for BookingStore {
    async fn create(&self, booking: Booking) -> Result<Booking, ServiceError> { self.create(booking).await }
    async fn update(&self, id: &str, update: FieldUpdate) -> Result<Booking, ServiceError> { self.update(id, update).await }
    async fn get(&self, id: &str) -> Option<Booking> { self.get(id).await }
}
