//! Storage implementations for the service layer.
//!
//! Only an in-memory map exists; state lives for the process lifetime.

pub mod memory_store;

pub use memory_store::BookingStore;
