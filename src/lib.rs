//! Room Reservation Portal Service
//!
//! This library bridges a "my reservations" page with the upstream booking
//! API: it fetches a user's room reservations, normalizes and groups them
//! by date for display, and forwards single and batch slot deletions.
//!
//! # Modules
//!
//! - `client`: `BookingApiClient` and the `ReservationApi` trait
//! - `models`: wire types, normalized schedule types, status alerts
//! - `services`: the normalization/grouping core and the page controller
//! - `handlers`: axum handlers for the HTTP surface
//! - `routes`: router assembly

pub mod client;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(test)]
pub mod client_mock;

#[cfg(test)]
mod tests;

// Re-export the main API types for ease of use
pub use client::{BookingApiClient, ReservationApi};
pub use error::ApiClientError;
pub use handlers::api::AppState;
pub use models::alert::{Alert, AlertKind};
pub use models::reservation::{SlotId, UserSchedulesResponse};
pub use models::schedule::{Period, PeriodOption, Reservation};
pub use routes::create_router;
pub use services::page::{ReservationsPage, UserSession};
