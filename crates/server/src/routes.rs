use std::sync::Arc;

use axum::{
    routing::{post, put},
    Router,
};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use service::booking::BookingRepository;

pub mod bookings;

/// Shared handler state. The store is injected here; there is no global.
#[derive(Clone)]
pub struct ServerState {
    pub bookings: Arc<dyn BookingRepository>,
}

impl ServerState {
    pub fn new(bookings: Arc<dyn BookingRepository>) -> Self {
        Self { bookings }
    }
}

/// Build the booking router.
///
/// Each update route is registered twice: `/seat/` for the empty id and
/// `/seat/*id` for everything else, since a wildcard needs at least one byte.
pub fn build_router(state: ServerState) -> Router {
    Router::new()
        .route("/book", post(bookings::create_booking))
        .route("/seat/", put(bookings::update_seat))
        .route("/seat/*id", put(bookings::update_seat))
        .route("/date/", put(bookings::update_date))
        .route("/date/*id", put(bookings::update_date))
        .route("/meal/", put(bookings::update_meal))
        .route("/meal/*id", put(bookings::update_meal))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // only 5xx count as failures
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
