use crate::routes::routes::AppRoutes;
use crate::shared::config::ClientConfig;
use crate::system::auth::context::Session;
use leptos::prelude::*;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    // Одна сессия на всё приложение, страницы получают её параметром
    let session = Session::new(config);
    session.restore();

    view! {
        <AppRoutes session=session />
    }
}
