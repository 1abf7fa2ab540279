use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Meal choice attached to a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodPreference {
    #[serde(rename = "veg")]
    Veg,
    #[serde(rename = "non-veg")]
    NonVeg,
}

impl FoodPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Veg => "veg",
            Self::NonVeg => "non-veg",
        }
    }
}

impl fmt::Display for FoodPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FoodPreference {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "veg" => Ok(Self::Veg),
            "non-veg" => Ok(Self::NonVeg),
            _ => Err(ServiceError::Validation("meal must be veg|non-veg".into())),
        }
    }
}

/// A travel reservation keyed by a client-supplied id.
///
/// Every field is a plain string. Create stores whatever it was given;
/// only a meal update goes through [`FoodPreference`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub seat_number: String,
    pub booking_date: String,
    pub food_preference: String,
}

/// A partial mutation of one booking attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Seat(String),
    Date(String),
    Meal(FoodPreference),
}

impl FieldUpdate {
    /// Overwrite the single field this update targets.
    pub fn apply(self, booking: &mut Booking) {
        match self {
            Self::Seat(seat) => booking.seat_number = seat,
            Self::Date(date) => booking.booking_date = date,
            Self::Meal(meal) => booking.food_preference = meal.to_string(),
        }
    }
}
