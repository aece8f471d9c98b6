use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::client::ReservationApi;
use crate::error::ApiClientError;
use crate::models::alert::{
    Alert, MSG_MISSING_SLOT_ID, MSG_MISSING_USER, MSG_NO_PERIODS_SELECTED, MSG_PERIODS_DELETED,
    MSG_RESERVATION_DELETED,
};
use crate::models::reservation::{SlotId, UserSchedulesResponse};
use crate::models::schedule::{Period, PeriodOption, Reservation};
use crate::services::schedule::{day_period_options, group_by_date, normalize_schedules};

/// Identity of the user whose reservations the page shows, injected at
/// construction instead of read from ambient storage.
#[derive(Debug, Clone)]
pub struct UserSession {
    pub user_id: String,
}

impl UserSession {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

/// The slot the single-delete dialog is confirming.
#[derive(Debug, Clone)]
pub struct SelectedSlot {
    pub reservation: Reservation,
    pub period: Period,
}

/// View state behind the "my reservations" page: the grouped schedule,
/// the loading flag, the status alert, and the deletion dialog state.
pub struct ReservationsPage {
    client: Arc<dyn ReservationApi>,
    session: Option<UserSession>,
    schedule: BTreeMap<String, Vec<Reservation>>,
    loading: bool,
    alert: Alert,
    selected: Option<SelectedSlot>,
    single_dialog_open: bool,
    day_periods: Vec<PeriodOption>,
    multi_dialog_open: bool,
    fetch_seq: u64,
}

impl ReservationsPage {
    pub fn new(client: Arc<dyn ReservationApi>, session: Option<UserSession>) -> Self {
        Self {
            client,
            session,
            schedule: BTreeMap::new(),
            loading: true,
            alert: Alert::hidden(),
            selected: None,
            single_dialog_open: false,
            day_periods: Vec::new(),
            multi_dialog_open: false,
            fetch_seq: 0,
        }
    }

    /// Fetch the user's reservations and replace the displayed schedule.
    ///
    /// Fails fast with an error alert when no session is available; a
    /// failed fetch leaves the previous schedule untouched.
    pub async fn load_reservations(&mut self) {
        let Some(user_id) = self.session.as_ref().map(|session| session.user_id.clone()) else {
            warn!("Reservation fetch attempted without a user session");
            self.alert = Alert::error(MSG_MISSING_USER);
            self.loading = false;
            return;
        };

        let seq = self.begin_fetch();
        let result = self.client.get_schedules_by_user_id(&user_id).await;
        self.finish_fetch(seq, result);
    }

    /// Stamp a new fetch. Completions carrying an older stamp are
    /// discarded by `finish_fetch`, so the newest request always wins.
    pub(crate) fn begin_fetch(&mut self) -> u64 {
        self.loading = true;
        self.fetch_seq += 1;
        self.fetch_seq
    }

    pub(crate) fn finish_fetch(
        &mut self,
        seq: u64,
        result: Result<UserSchedulesResponse, ApiClientError>,
    ) {
        self.loading = false;
        if seq != self.fetch_seq {
            debug!("Discarding superseded reservation fetch (seq {})", seq);
            return;
        }

        match result {
            Ok(response) => {
                let reservations = normalize_schedules(&response.schedules);
                info!("Loaded {} reservations", reservations.len());
                self.schedule = group_by_date(reservations);
            }
            Err(err) => {
                error!("Failed to load reservations: {}", err);
                self.alert = Alert::error(err.to_string());
            }
        }
    }

    /// Select one period and open the single-delete confirmation dialog.
    /// Returns false when the key/index no longer addresses a visible slot.
    pub fn open_delete_dialog(&mut self, display_key: &str, period_index: usize) -> bool {
        let found = self
            .schedule
            .values()
            .flat_map(|day| day.iter())
            .find(|reservation| reservation.display_key == display_key)
            .and_then(|reservation| {
                reservation.periods.get(period_index).map(|period| SelectedSlot {
                    reservation: reservation.clone(),
                    period: period.clone(),
                })
            });

        match found {
            Some(slot) => {
                self.selected = Some(slot);
                self.single_dialog_open = true;
                true
            }
            None => false,
        }
    }

    pub fn close_delete_dialog(&mut self) {
        self.single_dialog_open = false;
    }

    /// Delete the slot the single-delete dialog is confirming.
    ///
    /// A period without a resolvable id fails locally, before any network
    /// call. Success closes the dialog and re-fetches the whole schedule;
    /// there is no optimistic local removal.
    pub async fn confirm_delete_selected(&mut self) {
        let Some(selected) = self.selected.clone() else {
            return;
        };

        let Some(slot_id) = selected.period.slot_id.clone().filter(|id| !id.is_empty()) else {
            error!("Selected period has no resolvable id");
            self.alert = Alert::error(MSG_MISSING_SLOT_ID);
            return;
        };

        match self.client.delete_schedule(&slot_id).await {
            Ok(()) => {
                info!("Deleted reservation slot {}", slot_id);
                self.alert = Alert::success(MSG_RESERVATION_DELETED);
                self.single_dialog_open = false;
                self.load_reservations().await;
            }
            Err(err) => {
                error!("Failed to delete reservation slot {}: {}", slot_id, err);
                self.alert = Alert::error(err.to_string());
            }
        }
    }

    /// Collect the selected date's periods and open the multi-delete
    /// dialog. Returns false when the date has no visible reservations.
    pub fn open_multi_delete_dialog(&mut self, date: &str) -> bool {
        match self.schedule.get(date) {
            Some(day) => {
                self.day_periods = day_period_options(day);
                self.multi_dialog_open = true;
                true
            }
            None => false,
        }
    }

    pub fn close_multi_delete_dialog(&mut self) {
        self.multi_dialog_open = false;
    }

    /// Batch-delete the slots picked in the multi-delete dialog.
    ///
    /// An empty selection warns and issues no network call.
    pub async fn confirm_delete_periods(&mut self, ids: Vec<SlotId>) {
        if ids.is_empty() {
            self.alert = Alert::warning(MSG_NO_PERIODS_SELECTED);
            return;
        }

        match self.client.delete_periods(&ids).await {
            Ok(()) => {
                info!("Deleted {} reservation periods", ids.len());
                self.alert = Alert::success(MSG_PERIODS_DELETED);
                self.multi_dialog_open = false;
                self.load_reservations().await;
            }
            Err(err) => {
                error!("Failed to delete reservation periods: {}", err);
                self.alert = Alert::error(err.to_string());
            }
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert.dismiss();
    }

    pub fn schedule(&self) -> &BTreeMap<String, Vec<Reservation>> {
        &self.schedule
    }

    pub fn is_empty(&self) -> bool {
        self.schedule.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn alert(&self) -> &Alert {
        &self.alert
    }

    pub fn selected(&self) -> Option<&SelectedSlot> {
        self.selected.as_ref()
    }

    pub fn day_periods(&self) -> &[PeriodOption] {
        &self.day_periods
    }

    pub fn is_single_dialog_open(&self) -> bool {
        self.single_dialog_open
    }

    pub fn is_multi_dialog_open(&self) -> bool {
        self.multi_dialog_open
    }
}
