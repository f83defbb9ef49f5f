pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

use crate::system::auth::context::Session;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |              routed page                  |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(session: Session, children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader session=session />
            <main class="app-main">{children()}</main>
        </div>
    }
}
