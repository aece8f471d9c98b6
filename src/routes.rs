use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tracing::info;

use crate::handlers::api::{delete_periods, delete_reservation, list_user_reservations, AppState};
use crate::handlers::test::{health_check, test_schedules};

pub fn create_router(app_state: Arc<AppState>, is_production: bool) -> Router {
    let mut router = Router::new();

    // Health check is always available
    let health_route = Router::new().route("/health", get(health_check));
    router = router.merge(health_route);

    // Reservation API routes
    let api_routes = Router::new()
        .route("/users/:user_id/reservations", get(list_user_reservations))
        .route("/reservations/:slot_id", delete(delete_reservation))
        .route("/delete-periods", post(delete_periods));
    router = router.merge(api_routes);

    // Only add sample-data routes if not in production mode
    if !is_production {
        let test_routes = Router::new().route("/test/schedules", get(test_schedules));
        router = router.merge(test_routes);

        info!("Test data routes enabled - server running in development mode");
    } else {
        info!("Running in production mode - test endpoints disabled");
    }

    router.with_state(app_state)
}
