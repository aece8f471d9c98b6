use async_trait::async_trait;
use mockall::mock;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::client::ReservationApi;
use crate::error::ApiClientError;
use crate::models::reservation::{RawPeriod, RawReservationDay, SlotId, UserSchedulesResponse};

// Define a mock client for the booking API
mock! {
    pub BookingApiClient {}

    #[async_trait]
    impl ReservationApi for BookingApiClient {
        async fn get_schedules_by_user_id(
            &self,
            user_id: &str,
        ) -> Result<UserSchedulesResponse, ApiClientError>;

        async fn delete_schedule(&self, slot_id: &SlotId) -> Result<(), ApiClientError>;

        async fn delete_periods(&self, ids: &[SlotId]) -> Result<(), ApiClientError>;
    }
}

// A simple in-memory schedule store for our mock client
pub struct MockDataStore {
    schedules: Mutex<BTreeMap<String, Vec<RawReservationDay>>>,
}

fn period_matches(period: &RawPeriod, target: &SlotId) -> bool {
    period.reservation_id.as_ref() == Some(target) || period.period_id.as_ref() == Some(target)
}

impl MockDataStore {
    pub fn new() -> Self {
        let mut schedules: BTreeMap<String, Vec<RawReservationDay>> = BTreeMap::new();

        // Two rooms on a Saturday, one using the alternate field spellings
        schedules.insert(
            "2024-06-01".to_string(),
            vec![
                RawReservationDay {
                    room_name: Some("Sala A".to_string()),
                    room_description: Some("Laboratório 3".to_string()),
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

        // A single booking on the following Monday, no weekday label
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

        Self {
            schedules: Mutex::new(schedules),
        }
    }

    /// Current store contents as an upstream response body.
    pub fn snapshot(&self) -> UserSchedulesResponse {
        let schedules = self.schedules.lock().unwrap();
        UserSchedulesResponse {
            schedules: schedules.clone(),
        }
    }

    /// Remove the period carrying the given id. Reservations and dates
    /// left without periods disappear, like the real backend.
    pub fn remove_slot(&self, slot_id: &SlotId) -> bool {
        self.remove_slots(std::slice::from_ref(slot_id)) > 0
    }

    /// Remove every period whose id is in `ids`, returning how many were
    /// removed.
    pub fn remove_slots(&self, ids: &[SlotId]) -> usize {
        let mut schedules = self.schedules.lock().unwrap();
        let mut removed = 0;

        for reservations in schedules.values_mut() {
            for reservation in reservations.iter_mut() {
                let before = reservation.periods.len();
                reservation
                    .periods
                    .retain(|period| !ids.iter().any(|id| period_matches(period, id)));
                removed += before - reservation.periods.len();
            }
            reservations.retain(|reservation| !reservation.periods.is_empty());
        }
        schedules.retain(|_, reservations| !reservations.is_empty());

        removed
    }

    pub fn period_count(&self) -> usize {
        let schedules = self.schedules.lock().unwrap();
        schedules
            .values()
            .flat_map(|reservations| reservations.iter())
            .map(|reservation| reservation.periods.len())
            .sum()
    }
}

// Helper function to set up a mock client backed by the shared store
pub fn setup_mock_client() -> (MockBookingApiClient, Arc<MockDataStore>) {
    let data_store = Arc::new(MockDataStore::new());
    let mut mock_client = MockBookingApiClient::new();

    // Mock get_schedules_by_user_id
    let store = Arc::clone(&data_store);
    mock_client
        .expect_get_schedules_by_user_id()
        .returning(move |_| Ok(store.snapshot()));

    // Mock delete_schedule
    let store = Arc::clone(&data_store);
    mock_client
        .expect_delete_schedule()
        .returning(move |slot_id| {
            store.remove_slot(slot_id);
            Ok(())
        });

    // Mock delete_periods
    let store = Arc::clone(&data_store);
    mock_client.expect_delete_periods().returning(move |ids| {
        store.remove_slots(ids);
        Ok(())
    });

    (mock_client, data_store)
}
