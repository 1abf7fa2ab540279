//! Booking module: domain types plus the repository seam handlers depend on.

pub mod domain;
pub mod repository;

pub use domain::{Booking, FieldUpdate, FoodPreference};
pub use repository::BookingRepository;
