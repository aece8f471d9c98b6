use serde::Serialize;

// User-facing operation messages
pub const MSG_MISSING_USER: &str = "ID do usuário não encontrado.";
pub const MSG_MISSING_SLOT_ID: &str = "ID da reserva não encontrado no período selecionado.";
pub const MSG_NO_PERIODS_SELECTED: &str = "Nenhum período selecionado.";
pub const MSG_RESERVATION_DELETED: &str = "Reserva excluída com sucesso!";
pub const MSG_PERIODS_DELETED: &str = "Períodos deletados com sucesso!";

/// Severity of a status message on the reservations page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Success,
    Error,
    Warning,
    Info,
}

impl AlertKind {
    /// Localized title shown above the message.
    pub fn title(self) -> &'static str {
        match self {
            AlertKind::Success => "Sucesso",
            AlertKind::Error => "Erro",
            AlertKind::Warning => "Atenção",
            AlertKind::Info => "Informação",
        }
    }
}

/// The single status-message slot of the page.
///
/// Dismissal happens only through the explicit close affordance; outside
/// clicks never hide the alert.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
    pub visible: bool,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Self::shown(AlertKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::shown(AlertKind::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::shown(AlertKind::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::shown(AlertKind::Info, message)
    }

    fn shown(kind: AlertKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            visible: true,
        }
    }

    /// Hidden initial state.
    pub fn hidden() -> Self {
        Self {
            kind: AlertKind::Info,
            message: String::new(),
            visible: false,
        }
    }

    /// Hide the alert, keeping the last message.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}
