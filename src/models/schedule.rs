use serde::{Deserialize, Serialize};

use crate::models::reservation::SlotId;

// Placeholder literals shown when the upstream omits a field
pub const ROOM_NAME_FALLBACK: &str = "Sala não informada";
pub const ROOM_DESCRIPTION_FALLBACK: &str = "Sem descrição";
pub const UNDATED_LABEL: &str = "Data não informada";
pub const PERIOD_LABEL_FALLBACK: &str = "Horário: não informado";

/// A time slot after normalization.
///
/// `display_time` is precomputed from the raw start/end times with seconds
/// dropped ("HH:MM - HH:MM"); it is empty when neither end is usable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Period {
    pub slot_id: Option<SlotId>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub display_time: String,
}

/// A reservation after normalization: one room on one date, with its
/// periods and the coalesced display fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reservation {
    pub date: String,
    pub weekday: Option<String>,
    pub room_name: String,
    pub room_description: String,
    pub reservation_id: Option<SlotId>,
    /// Rendering key only; collisions between identical room/description
    /// pairs on the same date are an accepted display limitation.
    pub display_key: String,
    pub periods: Vec<Period>,
}

/// One selectable entry in the multi-delete dialog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodOption {
    pub slot_id: Option<SlotId>,
    pub label: String,
    pub room_name: String,
}

/// Per-date group in the reservations list response.
#[derive(Debug, Serialize)]
pub struct DaySchedule {
    pub date: String,
    pub date_display: String,
    pub weekday: String,
    pub reservations: Vec<Reservation>,
    /// Flattened periods of the whole date, offered to the multi-delete
    /// dialog.
    pub periods: Vec<PeriodOption>,
}

/// Response body for the user reservations endpoint.
#[derive(Debug, Serialize)]
pub struct UserReservationsResponse {
    pub days: Vec<DaySchedule>,
    pub reservation_count: usize,
}

/// Error body, mirroring the upstream's `{"error": ...}` convention.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
