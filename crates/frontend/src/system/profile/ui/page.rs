use contracts::system::profile::NotificationKind;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::state::{ProfileEditorState, ProfileField, ProfileTab};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::status_message::StatusBanner;
use crate::system::auth::context::Session;
use crate::system::profile::api;

/// Профиль организации: реквизиты, уведомления и смена пароля
#[component]
pub fn ProfilePage(session: Session) -> impl IntoView {
    let state = RwSignal::new(ProfileEditorState::new(session.current_user().as_ref()));

    // Сессия может восстановиться уже после открытия страницы
    let user = session.user();
    Effect::new(move |_| {
        if let Some(user) = user.get() {
            state.update(|s| s.sync_from_user(&user));
        }
    });

    // Отдельная мемо, чтобы формы не пересоздавались на каждый ввод
    let active_tab = Memo::new(move |_| state.with(|s| s.active_tab));
    let message = Signal::derive(move || state.with(|s| s.message.clone()));

    let save_profile = move |ev: SubmitEvent| {
        ev.prevent_default();
        let request = state
            .try_update(|s| match s.active_tab {
                ProfileTab::Notifications => s.submit_notifications(),
                _ => s.submit_profile(),
            })
            .flatten();
        let Some(request) = request else {
            return;
        };
        let client = session.api();
        spawn_local(async move {
            let result = api::update_profile(&client, &request).await;
            if let Ok(user) = &result {
                session.update_user(user.clone());
            }
            let _ = state.try_update(|s| s.finish_update(&result));
        });
    };

    let change_password = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(request) = state.try_update(|s| s.submit_password()).flatten() else {
            return;
        };
        let client = session.api();
        spawn_local(async move {
            let result = api::change_password(&client, &request).await;
            let _ = state.try_update(|s| s.finish_password_change(result));
        });
    };

    let submit_button = move || {
        view! {
            <div class="form__actions">
                <button
                    type="submit"
                    class="button button--primary"
                    disabled=move || state.with(|s| s.loading)
                >
                    {move || state.with(|s| s.submit_label())}
                </button>
            </div>
        }
    };

    view! {
        <PageFrame page_id="profile--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Настройки профиля"</h1>
                </div>
            </div>

            <div class="page__content">
                <nav class="tabs-nav">
                    {ProfileTab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if active_tab.get() == tab {
                                            "tabs-nav__item tabs-nav__item--active"
                                        } else {
                                            "tabs-nav__item"
                                        }
                                    }
                                    on:click=move |_| state.update(|s| s.select_tab(tab))
                                >
                                    {icon(tab.icon())}
                                    <span>{tab.label()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>

                <StatusBanner message=message />

                {move || match active_tab.get() {
                    ProfileTab::Profile => view! {
                        <form class="form" on:submit=save_profile>
                            <TextInput state=state field=ProfileField::CompanyName label="Название компании" icon_name="building" />
                            <TextInput state=state field=ProfileField::Email label="Email" input_type="email" icon_name="mail" />
                            <TextInput state=state field=ProfileField::Phone label="Телефон" input_type="tel" icon_name="phone" />
                            <div class="form__group">
                                <label class="form__label" for=ProfileField::Address.key()>"Адрес"</label>
                                <textarea
                                    id=ProfileField::Address.key()
                                    class="form__textarea"
                                    rows="3"
                                    prop:value=move || state.with(|s| s.form.address.clone())
                                    on:input=move |ev| {
                                        state.update(|s| s.set_field(ProfileField::Address, event_target_value(&ev)))
                                    }
                                ></textarea>
                            </div>
                            {submit_button()}
                        </form>
                    }
                    .into_any(),
                    ProfileTab::Notifications => view! {
                        <form class="form" on:submit=save_profile>
                            {NotificationKind::ALL
                                .into_iter()
                                .map(|kind| {
                                    let id = format!("pref-{}", kind.key());
                                    view! {
                                        <div class="form__checkbox-row">
                                            <input
                                                id=id.clone()
                                                type="checkbox"
                                                class="form__checkbox"
                                                prop:checked=move || {
                                                    state.with(|s| s.form.notification_preferences.get(kind))
                                                }
                                                on:change=move |ev| {
                                                    state.update(|s| s.set_notification(kind, event_target_checked(&ev)))
                                                }
                                            />
                                            <div>
                                                <label class="form__label" for=id>{kind.label()}</label>
                                                <p class="form__hint">{kind.hint()}</p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                            {submit_button()}
                        </form>
                    }
                    .into_any(),
                    ProfileTab::Security => view! {
                        <form class="form" on:submit=change_password>
                            <TextInput state=state field=ProfileField::CurrentPassword label="Текущий пароль" input_type="password" icon_name="key" />
                            <TextInput state=state field=ProfileField::NewPassword label="Новый пароль" input_type="password" icon_name="key" />
                            <TextInput state=state field=ProfileField::ConfirmPassword label="Подтвердите новый пароль" input_type="password" icon_name="key" />
                            {submit_button()}
                        </form>
                    }
                    .into_any(),
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn TextInput(
    state: RwSignal<ProfileEditorState>,
    field: ProfileField,
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] icon_name: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=field.key()>{label}</label>
            <div class="form__input-wrapper">
                {icon_name.map(icon)}
                <input
                    id=field.key()
                    type=input_type.unwrap_or("text")
                    class="form__input"
                    prop:value=move || state.with(|s| s.form.get(field).to_string())
                    on:input=move |ev| state.update(|s| s.set_field(field, event_target_value(&ev)))
                />
            </div>
        </div>
    }
}
