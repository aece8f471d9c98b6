use axum::response::Json;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::reservation::{RawPeriod, RawReservationDay, SlotId, UserSchedulesResponse};
use crate::models::schedule::DaySchedule;
use crate::services::schedule::{build_day_schedules, group_by_date, normalize_schedules};

// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

// Test data structure showing a raw upstream payload next to its
// normalized view
#[derive(Debug, Serialize)]
pub struct TestSchedulesResponse {
    pub raw: UserSchedulesResponse,
    pub days: Vec<DaySchedule>,
}

// Test endpoint that returns a sample payload and how it renders
pub async fn test_schedules() -> Json<TestSchedulesResponse> {
    let mut schedules: BTreeMap<String, Vec<RawReservationDay>> = BTreeMap::new();

    schedules.insert(
        "2024-06-01".to_string(),
        vec![
            RawReservationDay {
                room_name: Some("Sala A".to_string()),
                room_description: Some("Laboratório de Informática".to_string()),
                weekday: Some("Sábado".to_string()),
                periods: vec![
                    RawPeriod {
                        reservation_id: Some(SlotId::Number(101)),
                        start_time: Some("08:00:00".to_string()),
                        end_time: Some("09:00:00".to_string()),
                        ..Default::default()
                    },
                    RawPeriod {
                        period_id: Some(SlotId::Number(102)),
                        start_time: Some("09:00:00".to_string()),
                        end_time: Some("10:00:00".to_string()),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            // A record using the alternate field spellings
            RawReservationDay {
                room_name_display: Some("Sala B".to_string()),
                description_detail: Some("Sala de reuniões".to_string()),
                periods: vec![RawPeriod {
                    reservation_id: Some(SlotId::Number(103)),
                    start_time: Some("10:00:00".to_string()),
                    end_time: Some("11:00:00".to_string()),
                    ..Default::default()
                }],
                ..Default::default()
            },
        ],
    );

    schedules.insert(
        "2024-06-03".to_string(),
        vec![RawReservationDay {
            room_name: Some("Auditório".to_string()),
            periods: vec![RawPeriod {
                period_id: Some(SlotId::Number(201)),
                start_time: Some("14:00:00".to_string()),
                end_time: Some("16:00:00".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        }],
    );

    let raw = UserSchedulesResponse { schedules };
    let days = build_day_schedules(group_by_date(normalize_schedules(&raw.schedules)));

    Json(TestSchedulesResponse { raw, days })
}
