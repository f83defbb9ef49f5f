use contracts::domain::a001_tender::TenderDetail;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::state::{DetailPhase, DetailTab, TenderDetailState};
use crate::domain::a001_tender::api;
use crate::shared::config::ClientConfig;
use crate::system::auth::context::Session;

/// Signals of the tender card page on top of `TenderDetailState`
#[derive(Clone, Copy)]
pub struct TenderDetailsVm {
    pub state: RwSignal<TenderDetailState>,
    pub phase: Memo<DetailPhase>,
    pub active_tab: Memo<DetailTab>,
    pub tender: Memo<Option<TenderDetail>>,
    session: Session,
}

impl TenderDetailsVm {
    pub fn new(session: Session) -> Self {
        let state = RwSignal::new(TenderDetailState::default());
        Self {
            state,
            phase: Memo::new(move |_| state.with(|s| s.phase.clone())),
            active_tab: Memo::new(move |_| state.with(|s| s.active_tab)),
            tender: Memo::new(move |_| state.with(|s| s.tender.clone())),
            session,
        }
    }

    pub fn config(&self) -> ClientConfig {
        self.session.config()
    }

    pub fn load(&self, id: String) {
        let Some(ticket) = self.state.try_update(|s| s.load(id.clone())) else {
            return;
        };
        let state = self.state;
        let client = self.session.api();
        spawn_local(async move {
            let result = api::fetch_tender(&client, &id).await;
            let _ = state.try_update(|s| s.apply(ticket, result));
        });
    }

    pub fn set_tab(&self, tab: DetailTab) {
        self.state.update(|s| s.select_tab(tab));
    }

    pub fn tab_count(&self, tab: DetailTab) -> Signal<Option<usize>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.tab_count(tab)))
    }

    pub fn cancel(&self) {
        let _ = self.state.try_update_untracked(|s| s.cancel_pending());
    }
}
