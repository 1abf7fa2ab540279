use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{de::DeserializeOwned, Deserialize};
use service::booking::{Booking, FieldUpdate, FoodPreference};

use crate::errors::ApiError;
use crate::routes::ServerState;

// Absent and `null` fields both decode to an empty string.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct BookingInput {
    id: Option<String>,
    seat_number: Option<String>,
    booking_date: Option<String>,
    food_preference: Option<String>,
}

impl From<BookingInput> for Booking {
    fn from(input: BookingInput) -> Self {
        Booking {
            id: input.id.unwrap_or_default(),
            seat_number: input.seat_number.unwrap_or_default(),
            booking_date: input.booking_date.unwrap_or_default(),
            food_preference: input.food_preference.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SeatInput {
    seat_number: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DateInput {
    booking_date: Option<String>,
}

// Kept as a raw string so an unknown meal is told apart from broken JSON.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MealInput {
    food_preference: Option<String>,
}

/// Bodies are decoded whatever the Content-Type header says.
fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|_| ApiError::MalformedPayload)
}

/// The id is the whole path remainder after the route prefix, so it may
/// contain `/` or be empty (`PUT /seat/`).
fn booking_id(id: Option<Path<String>>) -> String {
    id.map(|Path(id)| id).unwrap_or_default()
}

/// POST /book
///
/// No field is checked here; only a duplicate id is refused.
pub async fn create_booking(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Booking>), ApiError> {
    let input: BookingInput = decode(&body)?;
    let created = state.bookings.create(input.into()).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /seat/*id
pub async fn update_seat(
    State(state): State<ServerState>,
    id: Option<Path<String>>,
    body: Bytes,
) -> Result<Json<Booking>, ApiError> {
    let input: SeatInput = decode(&body)?;
    let seat = input.seat_number.unwrap_or_default();
    let updated = state.bookings.update(&booking_id(id), FieldUpdate::Seat(seat)).await?;
    Ok(Json(updated))
}

/// PUT /date/*id
pub async fn update_date(
    State(state): State<ServerState>,
    id: Option<Path<String>>,
    body: Bytes,
) -> Result<Json<Booking>, ApiError> {
    let input: DateInput = decode(&body)?;
    let date = input.booking_date.unwrap_or_default();
    let updated = state.bookings.update(&booking_id(id), FieldUpdate::Date(date)).await?;
    Ok(Json(updated))
}

/// PUT /meal/*id
///
/// The meal is validated before the store is consulted, so a bad value
/// for an unknown id is still a 400.
pub async fn update_meal(
    State(state): State<ServerState>,
    id: Option<Path<String>>,
    body: Bytes,
) -> Result<Json<Booking>, ApiError> {
    let input: MealInput = decode(&body)?;
    let meal: FoodPreference = input.food_preference.unwrap_or_default().parse()?;
    let updated = state.bookings.update(&booking_id(id), FieldUpdate::Meal(meal)).await?;
    Ok(Json(updated))
}
