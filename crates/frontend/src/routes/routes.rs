use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_tender::{TenderDetailsPage, TenderList};
use crate::layout::Shell;
use crate::system::auth::context::Session;
use crate::system::profile::ui::ProfilePage;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <h1 class="page__title">"Страница не найдена"</h1>
        </div>
    }
}

#[component]
pub fn AppRoutes(session: Session) -> impl IntoView {
    view! {
        <Router>
            <Shell session=session>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=move || view! { <TenderList session=session /> } />
                    <Route path=path!("/tenders") view=move || view! { <TenderList session=session /> } />
                    <Route path=path!("/tenders/:id") view=move || view! { <TenderDetailsPage session=session /> } />
                    <Route path=path!("/profile") view=move || view! { <ProfilePage session=session /> } />
                </Routes>
            </Shell>
        </Router>
    }
}
