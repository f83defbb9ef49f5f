use chrono::{DateTime, Utc};
use contracts::domain::a001_tender::TenderDetail;

use crate::shared::api_utils::ApiError;
use crate::shared::config::ClientConfig;
use crate::shared::date_utils::is_past;
use crate::shared::request_seq::{RequestSeq, RequestTicket};

pub const MSG_LOAD_ERROR: &str = "Ошибка при загрузке данных тендера";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Сервер ответил `null`
    NotFound,
    /// Сообщение для пользователя; причина только в логе
    Error(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailTab {
    #[default]
    Info,
    Documents,
    History,
}

impl DetailTab {
    pub const ALL: [DetailTab; 3] = [Self::Info, Self::Documents, Self::History];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "Информация",
            Self::Documents => "Документы",
            Self::History => "История изменений",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "tag",
            Self::Documents => "file-text",
            Self::History => "clock",
        }
    }
}

/// Напоминание о сроке подачи заявок для активного тендера
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadlineBanner {
    pub text: String,
    pub expired: bool,
}

impl DeadlineBanner {
    pub const EXPIRED_TEXT: &'static str = "Срок подачи заявок истёк.";
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TenderDetailState {
    pub id: Option<String>,
    pub tender: Option<TenderDetail>,
    pub phase: DetailPhase,
    /// Сохраняется при переходе к другому тендеру
    pub active_tab: DetailTab,
    seq: RequestSeq,
}

impl TenderDetailState {
    pub fn load(&mut self, id: String) -> RequestTicket {
        self.id = Some(id);
        self.tender = None;
        self.phase = DetailPhase::Loading;
        self.seq.issue()
    }

    /// Returns false when the response was stale and dropped
    pub fn apply(
        &mut self,
        ticket: RequestTicket,
        result: Result<Option<TenderDetail>, ApiError>,
    ) -> bool {
        if !self.seq.is_current(ticket) {
            log::debug!("Dropping stale tender response {:?}", ticket);
            return false;
        }
        match result {
            Ok(Some(tender)) => {
                self.tender = Some(tender);
                self.phase = DetailPhase::Loaded;
            }
            Ok(None) => {
                self.tender = None;
                self.phase = DetailPhase::NotFound;
            }
            Err(e) => {
                log::error!("Error fetching tender details: {}", e);
                self.tender = None;
                self.phase = DetailPhase::Error(MSG_LOAD_ERROR.to_string());
            }
        }
        true
    }

    pub fn cancel_pending(&mut self) {
        self.seq.invalidate();
    }

    pub fn select_tab(&mut self, tab: DetailTab) {
        self.active_tab = tab;
    }

    /// Число записей на вкладке; у «Информации» счётчика нет
    pub fn tab_count(&self, tab: DetailTab) -> Option<usize> {
        let tender = self.tender.as_ref()?;
        match tab {
            DetailTab::Info => None,
            DetailTab::Documents => Some(tender.documents.len()),
            DetailTab::History => Some(tender.history.len()),
        }
    }

    pub fn deadline_banner(&self, config: &ClientConfig, now: DateTime<Utc>) -> Option<DeadlineBanner> {
        let tender = self.tender.as_ref()?;
        if !tender.status().is_active() {
            return None;
        }
        let deadline = &tender.summary.submission_deadline;
        Some(DeadlineBanner {
            text: format!(
                "Тендер активен. У вас есть время до {} для подачи заявки.",
                config.format_datetime(deadline)
            ),
            expired: is_past(deadline, now),
        })
    }
}
