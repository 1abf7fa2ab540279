use async_trait::async_trait;

use super::domain::{Booking, FieldUpdate};
use crate::errors::ServiceError;

/// Repository abstraction for booking records.
/// The HTTP layer only sees this trait, so the single-lock map can be
/// replaced by a sharded or actor-owned store without touching handlers.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Insert a new booking; `ServiceError::Conflict` if the id is taken.
    async fn create(&self, booking: Booking) -> Result<Booking, ServiceError>;
    /// Apply one field update in place; `ServiceError::NotFound` if the id is unknown.
    async fn update(&self, id: &str, update: FieldUpdate) -> Result<Booking, ServiceError>;
    async fn get(&self, id: &str) -> Option<Booking>;
}
