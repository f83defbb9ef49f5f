use contracts::domain::a001_tender::{FilterField, TenderFilters, TenderListQuery, TenderSummary};
use contracts::shared::pagination::PagedResponse;

use crate::shared::api_utils::ApiError;
use crate::shared::request_seq::{RequestSeq, RequestTicket};

pub const MSG_LOAD_ERROR: &str = "Ошибка при загрузке тендеров";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Сообщение для пользователя; причина только в логе
    Error(String),
}

/// Запрос, который страница должна отправить
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub ticket: RequestTicket,
    pub query: TenderListQuery,
}

/// Состояние списка тендеров: фильтры, пагинация и текущая выборка.
///
/// Любое изменение фильтров или страницы возвращает ровно один
/// `FetchRequest`; ответ применяется, только если его билет последний.
#[derive(Debug, Clone, PartialEq)]
pub struct TenderListState {
    pub filters: TenderFilters,
    /// Номер страницы, с 1
    pub page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub tenders: Vec<TenderSummary>,
    pub phase: LoadPhase,
    seq: RequestSeq,
}

impl Default for TenderListState {
    fn default() -> Self {
        Self {
            filters: TenderFilters::default(),
            page: 1,
            total_pages: 1,
            total_items: 0,
            tenders: Vec::new(),
            phase: LoadPhase::Idle,
            seq: RequestSeq::new(),
        }
    }
}

impl TenderListState {
    pub fn start_fetch(&mut self) -> FetchRequest {
        self.phase = LoadPhase::Loading;
        FetchRequest {
            ticket: self.seq.issue(),
            query: TenderListQuery::new(self.page, &self.filters),
        }
    }

    /// Изменение фильтра всегда возвращает на первую страницу
    pub fn set_filter(&mut self, field: FilterField, value: String) -> FetchRequest {
        self.filters.set(field, value);
        self.page = 1;
        self.start_fetch()
    }

    pub fn reset_filters(&mut self) -> FetchRequest {
        self.filters = TenderFilters::default();
        self.page = 1;
        self.start_fetch()
    }

    /// Переход на страницу; вне диапазона и на текущую ничего не делает
    pub fn go_to_page(&mut self, page: u32) -> Option<FetchRequest> {
        if page < 1 || page > self.total_pages || page == self.page {
            return None;
        }
        self.page = page;
        Some(self.start_fetch())
    }

    /// Returns false when the response was stale and dropped
    pub fn apply_response(
        &mut self,
        ticket: RequestTicket,
        result: Result<PagedResponse<TenderSummary>, ApiError>,
    ) -> bool {
        if !self.seq.is_current(ticket) {
            log::debug!("Dropping stale tender list response {:?}", ticket);
            return false;
        }
        match result {
            Ok(response) => {
                self.tenders = response.items;
                self.total_pages = response.total_pages;
                self.total_items = response.total_items;
                self.phase = LoadPhase::Loaded;
            }
            Err(e) => {
                log::error!("Error fetching tenders: {}", e);
                self.phase = LoadPhase::Error(MSG_LOAD_ERROR.to_string());
            }
        }
        true
    }

    /// Страница закрывается: всё, что ещё в полёте, будет отброшено
    pub fn cancel_pending(&mut self) {
        self.seq.invalidate();
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.phase == LoadPhase::Loaded && self.tenders.is_empty()
    }

    /// Диапазон показанных записей `(с, по, всего)`
    pub fn shown_range(&self, page_size: u32) -> (u64, u64, u64) {
        if self.total_items == 0 {
            return (0, 0, 0);
        }
        let size = u64::from(page_size.max(1));
        let page = u64::from(self.page.max(1));
        let from = (page - 1) * size + 1;
        let to = (page * size).min(self.total_items);
        (from, to, self.total_items)
    }

    pub fn shown_label(&self, page_size: u32) -> String {
        let (from, to, total) = self.shown_range(page_size);
        format!("Показано {} - {} из {} результатов", from, to, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_tender::TenderStatus;

    fn tender(id: i64) -> TenderSummary {
        TenderSummary {
            id,
            title: format!("Тендер {}", id),
            description: String::new(),
            category: "it".to_string(),
            status: TenderStatus::Active,
            price: 1000.0,
            submission_deadline: "2025-01-01T12:00:00Z".to_string(),
            created_at: None,
        }
    }

    fn page_of(items: Vec<TenderSummary>, total_pages: u32, total_items: u64) -> PagedResponse<TenderSummary> {
        PagedResponse {
            items,
            total_pages,
            total_items,
        }
    }

    /// State with a loaded first page of `total_pages`
    fn loaded(total_pages: u32, total_items: u64) -> TenderListState {
        let mut state = TenderListState::default();
        let request = state.start_fetch();
        state.apply_response(request.ticket, Ok(page_of(vec![tender(1)], total_pages, total_items)));
        state
    }

    #[test]
    fn test_initial_fetch_requests_first_page() {
        let mut state = TenderListState::default();
        let request = state.start_fetch();
        assert_eq!(request.query.page, 1);
        assert_eq!(request.query.search, "");
        assert_eq!(state.phase, LoadPhase::Loading);
    }

    #[test]
    fn test_filter_change_resets_page_and_fetches_once() {
        let mut state = loaded(5, 42);
        let request = state.go_to_page(3).expect("page 3 exists");
        assert_eq!(request.query.page, 3);
        state.apply_response(request.ticket, Ok(page_of(vec![tender(21)], 5, 42)));

        let request = state.set_filter(FilterField::Status, "active".to_string());
        assert_eq!(state.page, 1);
        assert_eq!(request.query.page, 1);
        assert_eq!(request.query.status, "active");
        assert_eq!(state.phase, LoadPhase::Loading);
    }

    #[test]
    fn test_reset_clears_every_filter() {
        let mut state = loaded(3, 30);
        state.set_filter(FilterField::Search, "мост".to_string());
        state.set_filter(FilterField::MaxPrice, "500".to_string());
        let request = state.reset_filters();
        assert_eq!(request.query, TenderListQuery::new(1, &TenderFilters::default()));
        assert_eq!(state.filters.active_count(), 0);
    }

    #[test]
    fn test_page_change_out_of_range_is_noop() {
        let mut state = loaded(3, 30);
        assert!(state.go_to_page(0).is_none());
        assert!(state.go_to_page(4).is_none());
        assert!(state.go_to_page(1).is_none(), "current page");
        assert!(!state.has_prev());
        assert_eq!(state.phase, LoadPhase::Loaded);

        let request = state.go_to_page(2).expect("page 2 exists");
        assert_eq!(request.query.page, 2);
    }

    #[test]
    fn test_empty_response_disables_both_buttons() {
        let mut state = TenderListState::default();
        let request = state.start_fetch();
        state.apply_response(request.ticket, Ok(page_of(Vec::new(), 0, 0)));
        assert!(!state.has_prev());
        assert!(!state.has_next());
        assert!(state.is_empty());
        assert_eq!(state.shown_label(10), "Показано 0 - 0 из 0 результатов");
    }

    #[test]
    fn test_missing_counters_decode_as_zero() {
        let response: PagedResponse<TenderSummary> = serde_json::from_str(r#"{"items": []}"#).unwrap();
        let mut state = TenderListState::default();
        let request = state.start_fetch();
        state.apply_response(request.ticket, Ok(response));
        assert_eq!(state.total_pages, 0);
        assert!(!state.has_next());
    }

    #[test]
    fn test_shown_range() {
        let mut state = loaded(3, 25);
        assert_eq!(state.shown_label(10), "Показано 1 - 10 из 25 результатов");
        let request = state.go_to_page(3).unwrap();
        state.apply_response(request.ticket, Ok(page_of(vec![tender(21)], 3, 25)));
        assert_eq!(state.shown_range(10), (21, 25, 25));
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = loaded(5, 50);
        let slow = state.go_to_page(2).unwrap();
        let fast = state.set_filter(FilterField::Category, "it".to_string());

        assert!(state.apply_response(fast.ticket, Ok(page_of(vec![tender(7)], 1, 1))));
        assert!(!state.apply_response(slow.ticket, Ok(page_of(vec![tender(11)], 5, 50))));
        assert_eq!(state.tenders, vec![tender(7)]);
        assert_eq!(state.total_pages, 1);
    }

    #[test]
    fn test_cancel_pending_drops_late_response() {
        let mut state = TenderListState::default();
        let request = state.start_fetch();
        state.cancel_pending();
        assert!(!state.apply_response(request.ticket, Ok(page_of(vec![tender(1)], 1, 1))));
        assert!(state.tenders.is_empty());
    }

    #[test]
    fn test_error_replaces_list_until_next_fetch() {
        let mut state = TenderListState::default();
        let request = state.start_fetch();
        state.apply_response(request.ticket, Err(ApiError::Status(500)));
        assert_eq!(state.phase, LoadPhase::Error(MSG_LOAD_ERROR.to_string()));

        state.set_filter(FilterField::Search, "x".to_string());
        assert_eq!(state.phase, LoadPhase::Loading);
    }
}
