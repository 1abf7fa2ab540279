//! Service layer for the booking store.
//! - `booking` holds the domain types and the repository abstraction.
//! - `storage` holds the in-memory implementation handlers are wired to.

pub mod errors;
pub mod booking;
pub mod storage;
