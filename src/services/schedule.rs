use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeMap;
use tracing::debug;

use crate::models::reservation::{RawPeriod, RawReservationDay, SlotId};
use crate::models::schedule::{
    DaySchedule, Period, PeriodOption, Reservation, PERIOD_LABEL_FALLBACK,
    ROOM_DESCRIPTION_FALLBACK, ROOM_NAME_FALLBACK, UNDATED_LABEL,
};

// First candidate that is present and not the empty string
fn first_non_empty<'a>(candidates: [Option<&'a str>; 2]) -> Option<&'a str> {
    candidates.into_iter().flatten().find(|text| !text.is_empty())
}

fn coalesce_id(primary: Option<&SlotId>, fallback: Option<&SlotId>) -> Option<SlotId> {
    primary
        .filter(|id| !id.is_empty())
        .or_else(|| fallback.filter(|id| !id.is_empty()))
        .cloned()
}

/// Drop the seconds from an "HH:MM:SS" time. Shorter values pass through.
fn clip_minutes(time: &str) -> &str {
    time.get(..5).unwrap_or(time)
}

/// Build the "HH:MM - HH:MM" display time. A missing start still yields
/// the " - HH:MM" tail; nothing usable yields an empty string.
pub fn format_display_time(start: Option<&str>, end: Option<&str>) -> String {
    let start = start.filter(|time| !time.is_empty());
    let end = end.filter(|time| !time.is_empty());

    let mut label = start.map(|time| clip_minutes(time).to_string()).unwrap_or_default();
    if let Some(end) = end {
        label.push_str(" - ");
        label.push_str(clip_minutes(end));
    }
    label
}

fn normalize_period(raw: &RawPeriod) -> Period {
    Period {
        slot_id: coalesce_id(raw.reservation_id.as_ref(), raw.period_id.as_ref()),
        display_time: format_display_time(raw.start_time.as_deref(), raw.end_time.as_deref()),
        start_time: raw.start_time.clone(),
        end_time: raw.end_time.clone(),
    }
}

fn normalize_reservation(date: &str, index: usize, raw: &RawReservationDay) -> Reservation {
    let room_name = first_non_empty([raw.room_name.as_deref(), raw.room_name_display.as_deref()])
        .unwrap_or(ROOM_NAME_FALLBACK)
        .to_string();
    let room_description = first_non_empty([
        raw.room_description.as_deref(),
        raw.description_detail.as_deref(),
    ])
    .unwrap_or(ROOM_DESCRIPTION_FALLBACK)
    .to_string();

    let periods: Vec<Period> = raw.periods.iter().map(normalize_period).collect();

    // The record's own id when present, else the first period's
    let reservation_id = raw
        .reservation_id
        .as_ref()
        .filter(|id| !id.is_empty())
        .cloned()
        .or_else(|| periods.first().and_then(|period| period.slot_id.clone()));

    // The display key prefers the display-name spellings; the index keeps
    // it usable when a record carries neither
    let index_label = index.to_string();
    let key_room = first_non_empty([raw.room_name_display.as_deref(), raw.room_name.as_deref()])
        .unwrap_or(&index_label);
    let key_description = first_non_empty([
        raw.description_detail.as_deref(),
        raw.room_description.as_deref(),
    ])
    .unwrap_or(&index_label);
    let display_key = format!("{}-{}-{}", date, key_room, key_description);

    Reservation {
        date: date.to_string(),
        weekday: raw.weekday.clone(),
        room_name,
        room_description,
        reservation_id,
        display_key,
        periods,
    }
}

/// Flatten the per-date mapping into normalized reservations, one per raw
/// record, preserving within-date order.
pub fn normalize_schedules(
    schedules: &BTreeMap<String, Vec<RawReservationDay>>,
) -> Vec<Reservation> {
    let reservations: Vec<Reservation> = schedules
        .iter()
        .flat_map(|(date, days)| {
            days.iter()
                .enumerate()
                .map(move |(index, raw)| normalize_reservation(date, index, raw))
        })
        .collect();

    debug!(
        "Normalized {} reservations from {} dates",
        reservations.len(),
        schedules.len()
    );
    reservations
}

/// Partition reservations by date for display. Iteration order is
/// lexicographic, hence chronological for ISO dates. Records without a
/// date bucket under a placeholder label instead of being dropped.
pub fn group_by_date(reservations: Vec<Reservation>) -> BTreeMap<String, Vec<Reservation>> {
    let mut grouped: BTreeMap<String, Vec<Reservation>> = BTreeMap::new();
    for reservation in reservations {
        let bucket = if reservation.date.is_empty() {
            UNDATED_LABEL.to_string()
        } else {
            reservation.date.clone()
        };
        grouped.entry(bucket).or_default().push(reservation);
    }
    grouped
}

/// Label for one period on a reservation card.
pub fn period_label(period: &Period) -> String {
    let start = period.start_time.as_deref().filter(|time| !time.is_empty());
    let end = period.end_time.as_deref().filter(|time| !time.is_empty());

    match (start, end) {
        (Some(start), Some(end)) => format!("{} - {}", clip_minutes(start), clip_minutes(end)),
        _ if !period.display_time.is_empty() => period.display_time.clone(),
        _ => PERIOD_LABEL_FALLBACK.to_string(),
    }
}

/// Flatten every period of one date's reservations into the sequence the
/// multi-delete dialog offers for selection.
pub fn day_period_options(day: &[Reservation]) -> Vec<PeriodOption> {
    day.iter()
        .flat_map(|reservation| {
            reservation.periods.iter().map(|period| PeriodOption {
                slot_id: period.slot_id.clone(),
                label: if period.display_time.is_empty() {
                    format_display_time(period.start_time.as_deref(), period.end_time.as_deref())
                } else {
                    period.display_time.clone()
                },
                room_name: reservation.room_name.clone(),
            })
        })
        .collect()
}

/// Format an ISO date as dd/mm/yyyy. Unparseable dates pass through.
pub fn format_date_br(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%d/%m/%Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Weekday header label: the record's own label when the upstream sent
/// one, else derived from the date.
pub fn weekday_label(date: &str, provided: Option<&str>) -> String {
    if let Some(weekday) = provided.filter(|label| !label.is_empty()) {
        return weekday.to_string();
    }
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => weekday_name_pt(parsed.weekday()).to_string(),
        Err(_) => String::new(),
    }
}

fn weekday_name_pt(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Segunda-feira",
        Weekday::Tue => "Terça-feira",
        Weekday::Wed => "Quarta-feira",
        Weekday::Thu => "Quinta-feira",
        Weekday::Fri => "Sexta-feira",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}

/// Assemble the per-date view groups the page renders, in date order.
pub fn build_day_schedules(grouped: BTreeMap<String, Vec<Reservation>>) -> Vec<DaySchedule> {
    grouped
        .into_iter()
        .map(|(date, reservations)| {
            let weekday = weekday_label(
                &date,
                reservations.first().and_then(|first| first.weekday.as_deref()),
            );
            DaySchedule {
                date_display: format_date_br(&date),
                weekday,
                periods: day_period_options(&reservations),
                reservations,
                date,
            }
        })
        .collect()
}
