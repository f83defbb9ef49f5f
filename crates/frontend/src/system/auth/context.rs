use contracts::system::profile::UserProfile;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::api_utils::ApiClient;
use crate::shared::config::ClientConfig;
use crate::shared::request_seq::{RequestSeq, RequestTicket};

/// Signed-in user plus the sequence guarding the start-up restore.
///
/// Any explicit replacement makes a restore still in flight stale, so a slow
/// `GET /api/profile` never overwrites a freshly saved profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionUser {
    user: Option<UserProfile>,
    restore: RequestSeq,
}

impl SessionUser {
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn begin_restore(&mut self) -> RequestTicket {
        self.restore.issue()
    }

    /// Returns false when the user was replaced after the restore started
    pub fn apply_restored(&mut self, ticket: RequestTicket, user: UserProfile) -> bool {
        if !self.restore.is_current(ticket) {
            log::debug!("Dropping stale session restore {:?}", ticket);
            return false;
        }
        self.user = Some(user);
        true
    }

    pub fn replace(&mut self, user: UserProfile) {
        self.restore.invalidate();
        self.user = Some(user);
    }
}

/// Session handle passed explicitly to every page.
///
/// Holds the signed-in user (if any), the client configuration and hands out
/// API clients that carry the session credentials.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionUser>,
    user: Memo<Option<UserProfile>>,
    config: StoredValue<ClientConfig>,
}

impl Session {
    pub fn new(config: ClientConfig) -> Self {
        let state = RwSignal::new(SessionUser::default());
        Self {
            state,
            user: Memo::new(move |_| state.with(|s| s.user().cloned())),
            config: StoredValue::new(config),
        }
    }

    /// Reactive view of the current user
    pub fn user(&self) -> Memo<Option<UserProfile>> {
        self.user
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.state.with_untracked(|s| s.user().cloned())
    }

    /// Replace the session user, e.g. with the response of a profile save
    pub fn update_user(&self, user: UserProfile) {
        self.state.update(|s| s.replace(user));
    }

    pub fn config(&self) -> ClientConfig {
        self.config.get_value()
    }

    pub fn api(&self) -> ApiClient {
        ApiClient::new(self.config.with_value(|c| c.resolved_api_base()))
    }

    /// Load the signed-in user from the server. A failure leaves the session
    /// anonymous.
    pub fn restore(&self) {
        let state = self.state;
        let Some(ticket) = state.try_update(|s| s.begin_restore()) else {
            return;
        };
        let client = self.api();
        spawn_local(async move {
            match api::fetch_current_user(&client).await {
                Ok(user) => {
                    log::debug!("Session restored for {}", user.display_name());
                    let _ = state.try_update(|s| s.apply_restored(ticket, user));
                }
                Err(e) => log::warn!("Session not restored: {}", e),
            }
        });
    }
}
