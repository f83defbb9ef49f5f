//! TopHeader: brand, navigation links and the signed-in organisation.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;
use crate::system::auth::context::Session;

#[component]
pub fn TopHeader(session: Session) -> impl IntoView {
    let user = session.user();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Тендерная площадка"</span>
            </div>

            <nav class="top-header__nav">
                <A href="/tenders" attr:class="top-header__link">
                    {icon("file-text")}
                    <span>"Тендеры"</span>
                </A>
                <A href="/profile" attr:class="top-header__link">
                    {icon("building")}
                    <span>"Профиль"</span>
                </A>
            </nav>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || user.with(|u| {
                            u.as_ref()
                                .map(|u| u.display_name())
                                .unwrap_or_else(|| "Гость".to_string())
                        })}
                    </span>
                </div>
            </div>
        </div>
    }
}
