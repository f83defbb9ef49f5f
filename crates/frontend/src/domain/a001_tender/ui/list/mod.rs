pub mod state;

use contracts::domain::a001_tender::{
    category_label, FilterField, TenderStatus, TenderSummary, TENDER_CATEGORIES,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use self::state::{FetchRequest, LoadPhase, TenderListState};
use crate::domain::a001_tender::api;
use crate::domain::a001_tender::ui::status_badge::TenderStatusBadge;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::ClientConfig;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::Session;

#[component]
pub fn TenderList(session: Session) -> impl IntoView {
    let state = RwSignal::new(TenderListState::default());
    let config = StoredValue::new(session.config());
    let client = StoredValue::new(session.api());

    let run = move |request: Option<FetchRequest>| {
        let Some(FetchRequest { ticket, query }) = request else {
            return;
        };
        let client = client.get_value();
        spawn_local(async move {
            let result = api::fetch_tenders(&client, &query).await;
            let _ = state.try_update(|s| s.apply_response(ticket, result));
        });
    };

    run(state.try_update(|s| s.start_fetch()));

    on_cleanup(move || {
        let _ = state.try_update_untracked(|s| s.cancel_pending());
    });

    let set_filter = move |field: FilterField, value: String| {
        run(state.try_update(|s| s.set_filter(field, value)));
    };

    let phase = Memo::new(move |_| state.with(|s| s.phase.clone()));
    let page_size = config.with_value(|c| c.page_size);

    view! {
        <PageFrame page_id="a001_tender--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Тендеры"</h1>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel__header">
                        {icon("filter")}
                        <span>"Фильтры"</span>
                        {move || {
                            let count = state.with(|s| s.filters.active_count());
                            (count > 0).then(|| view! { <span class="filter-panel__count">{count}</span> })
                        }}
                        <button
                            type="button"
                            class="button button--ghost"
                            on:click=move |_| run(state.try_update(|s| s.reset_filters()))
                        >
                            "Сбросить"
                        </button>
                    </div>

                    <div class="filter-panel__grid">
                        <div class="form__input-wrapper">
                            {icon("search")}
                            <input
                                type="text"
                                class="form__input"
                                placeholder="Поиск тендеров..."
                                prop:value=move || state.with(|s| s.filters.search.clone())
                                on:input=move |ev| set_filter(FilterField::Search, event_target_value(&ev))
                            />
                        </div>

                        <select
                            class="form__select"
                            prop:value=move || state.with(|s| s.filters.category.clone())
                            on:change=move |ev| set_filter(FilterField::Category, event_target_value(&ev))
                        >
                            <option value="">"Все категории"</option>
                            {TENDER_CATEGORIES
                                .iter()
                                .map(|&(code, label)| view! { <option value=code>{label}</option> })
                                .collect_view()}
                        </select>

                        <select
                            class="form__select"
                            prop:value=move || state.with(|s| s.filters.status.clone())
                            on:change=move |ev| set_filter(FilterField::Status, event_target_value(&ev))
                        >
                            <option value="">"Все статусы"</option>
                            {TenderStatus::ALL
                                .into_iter()
                                .map(|status| {
                                    view! { <option value=status.code()>{status.filter_label()}</option> }
                                })
                                .collect_view()}
                        </select>

                        <div class="filter-panel__range">
                            <FilterInput state=state field=FilterField::MinPrice input_type="number" placeholder="Мин. цена" on_change=set_filter />
                            <FilterInput state=state field=FilterField::MaxPrice input_type="number" placeholder="Макс. цена" on_change=set_filter />
                        </div>

                        <div class="filter-panel__range">
                            <FilterInput state=state field=FilterField::DateFrom input_type="date" placeholder="Дата с" on_change=set_filter />
                            <FilterInput state=state field=FilterField::DateTo input_type="date" placeholder="Дата по" on_change=set_filter />
                        </div>
                    </div>
                </div>

                {move || match phase.get() {
                    LoadPhase::Idle | LoadPhase::Loading => view! {
                        <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-4xl);">
                            <Spinner />
                        </Flex>
                    }
                    .into_any(),
                    LoadPhase::Error(message) => view! {
                        <div class="alert alert--error" role="alert">{message}</div>
                    }
                    .into_any(),
                    LoadPhase::Loaded => view! {
                        <TenderRows state=state config=config />
                        <PaginationControls
                            current_page=Signal::derive(move || state.with(|s| s.page))
                            total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                            has_prev=Signal::derive(move || state.with(|s| s.has_prev()))
                            has_next=Signal::derive(move || state.with(|s| s.has_next()))
                            summary=Signal::derive(move || state.with(|s| s.shown_label(page_size)))
                            on_page_change=Callback::new(move |page: u32| {
                                run(state.try_update(|s| s.go_to_page(page)).flatten())
                            })
                        />
                    }
                    .into_any(),
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn FilterInput<F>(
    state: RwSignal<TenderListState>,
    field: FilterField,
    input_type: &'static str,
    placeholder: &'static str,
    on_change: F,
) -> impl IntoView
where
    F: Fn(FilterField, String) + Copy + 'static,
{
    view! {
        <input
            type=input_type
            class="form__input"
            placeholder=placeholder
            prop:value=move || state.with(|s| s.filters.get(field).to_string())
            on:input=move |ev| on_change(field, event_target_value(&ev))
        />
    }
}

#[component]
fn TenderRows(state: RwSignal<TenderListState>, config: StoredValue<ClientConfig>) -> impl IntoView {
    move || {
        if state.with(|s| s.is_empty()) {
            return view! { <div class="list-empty">"Тендеры не найдены"</div> }.into_any();
        }
        let tenders = state.with(|s| s.tenders.clone());
        view! {
            <ul class="tender-list">
                {tenders
                    .into_iter()
                    .map(|tender| config.with_value(|c| tender_row(tender, c)))
                    .collect_view()}
            </ul>
        }
        .into_any()
    }
}

fn tender_row(tender: TenderSummary, config: &ClientConfig) -> impl IntoView {
    let href = format!("/tenders/{}", tender.id);
    let price = config.format_price(tender.price);
    let deadline = config.format_date(&tender.submission_deadline);
    let category = category_label(&tender.category).to_string();

    view! {
        <li class="tender-list__item">
            <A href=href attr:class="tender-list__link">
                <div class="tender-list__row">
                    <div class="tender-list__main">
                        <p class="tender-list__title">{tender.title}</p>
                        <p class="tender-list__description">{tender.description}</p>
                    </div>
                    <TenderStatusBadge status=tender.status />
                </div>
                <div class="tender-list__row tender-list__row--meta">
                    <div class="tender-list__meta">
                        <span>{category}</span>
                        <span>{price}</span>
                    </div>
                    <span>"Срок подачи: " {deadline}</span>
                </div>
            </A>
        </li>
    }
}
