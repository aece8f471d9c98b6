use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of a deletable reservation slot.
///
/// The upstream emits ids either as JSON numbers or strings depending on
/// which backend produced the record, so both shapes are preserved as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotId {
    Number(i64),
    Text(String),
}

impl SlotId {
    /// Empty strings count as "not informed" when coalescing ids.
    pub fn is_empty(&self) -> bool {
        matches!(self, SlotId::Text(text) if text.is_empty())
    }

    /// Parse a path segment back into the numeric form when possible, so
    /// the upstream sees the same type it handed out.
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<i64>() {
            Ok(number) => SlotId::Number(number),
            Err(_) => SlotId::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotId::Number(number) => write!(f, "{}", number),
            SlotId::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for SlotId {
    fn from(number: i64) -> Self {
        SlotId::Number(number)
    }
}

impl From<&str> for SlotId {
    fn from(text: &str) -> Self {
        SlotId::Text(text.to_string())
    }
}

/// One time slot inside a reservation day, as the upstream sends it.
///
/// Some backend versions fill `id_reserva` on the period, others
/// `id_periodo`; both are kept and coalesced during normalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPeriod {
    #[serde(rename = "id_reserva", default, skip_serializing_if = "Option::is_none")]
    pub reservation_id: Option<SlotId>,
    #[serde(rename = "id_periodo", default, skip_serializing_if = "Option::is_none")]
    pub period_id: Option<SlotId>,
    #[serde(rename = "horario_inicio", default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(rename = "horario_fim", default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

/// One room's booking on one date, as the upstream sends it.
///
/// The `nomeSala`/`nomeSalaDisplay` and `descricaoSala`/`descricaoDetalhe`
/// pairs are alternate spellings from different backend versions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawReservationDay {
    #[serde(rename = "nomeSala", default, skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,
    #[serde(rename = "nomeSalaDisplay", default, skip_serializing_if = "Option::is_none")]
    pub room_name_display: Option<String>,
    #[serde(rename = "descricaoSala", default, skip_serializing_if = "Option::is_none")]
    pub room_description: Option<String>,
    #[serde(rename = "descricaoDetalhe", default, skip_serializing_if = "Option::is_none")]
    pub description_detail: Option<String>,
    #[serde(rename = "diaDaSemana", default, skip_serializing_if = "Option::is_none")]
    pub weekday: Option<String>,
    #[serde(rename = "id_reserva", default, skip_serializing_if = "Option::is_none")]
    pub reservation_id: Option<SlotId>,
    #[serde(rename = "periodos", default)]
    pub periods: Vec<RawPeriod>,
}

/// Body of `GET /reservas/usuario/{user_id}`: reservation days keyed by
/// ISO date. A missing `reservas` field deserializes as an empty mapping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserSchedulesResponse {
    #[serde(rename = "reservas", default)]
    pub schedules: BTreeMap<String, Vec<RawReservationDay>>,
}

/// Body of `POST /deletarPeriodos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePeriodsRequest {
    pub ids: Vec<SlotId>,
}
