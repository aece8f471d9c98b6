use axum::{
    extract::{Json as ExtractJson, Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::client::ReservationApi;
use crate::error::ApiClientError;
use crate::models::alert::{Alert, MSG_NO_PERIODS_SELECTED, MSG_PERIODS_DELETED, MSG_RESERVATION_DELETED};
use crate::models::reservation::{DeletePeriodsRequest, SlotId};
use crate::models::schedule::{ErrorBody, UserReservationsResponse};
use crate::services::schedule::{build_day_schedules, group_by_date, normalize_schedules};

// AppState struct containing shared resources
pub struct AppState {
    pub client: Arc<dyn ReservationApi>,
}

type ApiError = (StatusCode, Json<ErrorBody>);

// Map an upstream failure onto our own error response, keeping the
// upstream status when it is a valid one
fn upstream_error(err: ApiClientError) -> ApiError {
    let status = err
        .status()
        .and_then(|code| StatusCode::from_u16(code).ok())
        .unwrap_or(StatusCode::BAD_GATEWAY);

    (status, Json(ErrorBody { error: err.to_string() }))
}

// List a user's reservations grouped by date
pub async fn list_user_reservations(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<UserReservationsResponse>, ApiError> {
    info!("Received request to list reservations for user {}", user_id);

    match state.client.get_schedules_by_user_id(&user_id).await {
        Ok(response) => {
            let reservations = normalize_schedules(&response.schedules);
            let reservation_count = reservations.len();
            let days = build_day_schedules(group_by_date(reservations));

            info!(
                "Returning {} reservations across {} dates",
                reservation_count,
                days.len()
            );
            Ok(Json(UserReservationsResponse {
                days,
                reservation_count,
            }))
        }
        Err(err) => {
            error!("Failed to fetch reservations for user {}: {}", user_id, err);
            Err(upstream_error(err))
        }
    }
}

// Delete a single reservation slot
pub async fn delete_reservation(
    State(state): State<Arc<AppState>>,
    Path(slot_id): Path<String>,
) -> Result<Json<Alert>, ApiError> {
    let slot_id = SlotId::parse(&slot_id);
    info!("Received request to delete reservation slot {}", slot_id);

    match state.client.delete_schedule(&slot_id).await {
        Ok(()) => {
            info!("Successfully deleted reservation slot {}", slot_id);
            Ok(Json(Alert::success(MSG_RESERVATION_DELETED)))
        }
        Err(err) => {
            error!("Failed to delete reservation slot {}: {}", slot_id, err);
            Err(upstream_error(err))
        }
    }
}

// Batch-delete reservation periods
pub async fn delete_periods(
    State(state): State<Arc<AppState>>,
    ExtractJson(request): ExtractJson<DeletePeriodsRequest>,
) -> Result<(StatusCode, Json<Alert>), ApiError> {
    info!(
        "Received request to delete {} reservation periods",
        request.ids.len()
    );

    // An empty selection never reaches the upstream
    if request.ids.is_empty() {
        warn!("Rejecting batch delete with no period ids");
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(Alert::warning(MSG_NO_PERIODS_SELECTED)),
        ));
    }

    match state.client.delete_periods(&request.ids).await {
        Ok(()) => {
            info!("Successfully deleted {} reservation periods", request.ids.len());
            Ok((StatusCode::OK, Json(Alert::success(MSG_PERIODS_DELETED))))
        }
        Err(err) => {
            error!("Failed to delete reservation periods: {}", err);
            Err(upstream_error(err))
        }
    }
}
