use chrono::Utc;
use contracts::domain::a001_tender::category_label;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::*;

use super::state::{DeadlineBanner, DetailPhase, DetailTab};
use super::tabs::{DocumentsTab, HistoryTab, InfoTab};
use super::view_model::TenderDetailsVm;
use crate::domain::a001_tender::ui::status_badge::TenderStatusBadge;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::system::auth::context::Session;

/// Карточка тендера `/tenders/:id`
#[component]
pub fn TenderDetailsPage(session: Session) -> impl IntoView {
    let vm = TenderDetailsVm::new(session);
    let params = use_params_map();
    let id = Memo::new(move |_| params.with(|p| p.get("id")).unwrap_or_default());

    Effect::new(move |_| vm.load(id.get()));
    on_cleanup(move || vm.cancel());

    view! {
        <PageFrame page_id="a001_tender--detail" category=PAGE_CAT_DETAIL>
            <div class="page__toolbar">
                <A href="/tenders" attr:class="page__back-link">"← К списку тендеров"</A>
            </div>

            {move || match vm.phase.get() {
                DetailPhase::Idle | DetailPhase::Loading => view! {
                    <Flex gap=FlexGap::Small style="align-items: center; padding: var(--spacing-4xl); justify-content: center;">
                        <Spinner />
                        <span>"Загрузка..."</span>
                    </Flex>
                }
                .into_any(),
                DetailPhase::Error(message) => view! {
                    <div class="alert alert--error" role="alert">{message}</div>
                }
                .into_any(),
                DetailPhase::NotFound => view! {
                    <div class="page__empty">"Тендер не найден"</div>
                }
                .into_any(),
                DetailPhase::Loaded => view! {
                    <Header vm=vm />
                    <div class="page__content">
                        <TabBar vm=vm />
                        <TabContent vm=vm />
                    </div>
                    <DeadlineNotice vm=vm />
                }
                .into_any(),
            }}
        </PageFrame>
    }
}

#[component]
fn Header(vm: TenderDetailsVm) -> impl IntoView {
    let config = vm.config();

    move || {
        let Some(tender) = vm.tender.get() else {
            return view! { <></> }.into_any();
        };
        let summary = tender.summary;
        let published = summary.created_at.as_deref().map(|at| config.format_datetime(at));

        view! {
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{summary.title}</h1>
                </div>
                <div class="page__header-right">
                    <TenderStatusBadge status=summary.status />
                </div>
            </div>
            <div class="detail-facts">
                <Fact icon_name="currency" label="Начальная цена" value=config.format_price(summary.price) />
                <Fact icon_name="calendar" label="Срок подачи" value=config.format_datetime(&summary.submission_deadline) />
                <Fact icon_name="tag" label="Категория" value=category_label(&summary.category).to_string() />
                {published.map(|at| view! { <Fact icon_name="clock" label="Опубликован" value=at /> })}
            </div>
        }
        .into_any()
    }
}

#[component]
fn Fact(icon_name: &'static str, label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="detail-facts__item">
            {icon(icon_name)}
            <div>
                <p class="detail-facts__label">{label}</p>
                <p class="detail-facts__value">{value}</p>
            </div>
        </div>
    }
}

#[component]
fn TabBar(vm: TenderDetailsVm) -> impl IntoView {
    let active_tab = vm.active_tab;
    let tab_icon = |name: &str| view! { <span class="tab-icon">{icon(name)}</span> };

    view! {
        <Flex
            gap=FlexGap::Small
            align=FlexAlign::Center
            style="margin-bottom: var(--spacing-md); padding: var(--spacing-sm); background: var(--color-bg-secondary); border-radius: var(--radius-lg); border: 1px solid var(--color-border);"
        >
            {DetailTab::ALL
                .into_iter()
                .map(|tab| {
                    let count = vm.tab_count(tab);
                    view! {
                        <Button
                            appearance=Signal::derive(move || {
                                if active_tab.get() == tab { ButtonAppearance::Primary } else { ButtonAppearance::Subtle }
                            })
                            size=ButtonSize::Small
                            on_click=move |_| vm.set_tab(tab)
                        >
                            {tab_icon(tab.icon())}
                            {tab.title()}
                            {move || count.get().map(|n| view! {
                                <Badge
                                    appearance=BadgeAppearance::Tint
                                    color=Signal::derive(move || {
                                        if active_tab.get() == tab { BadgeColor::Brand } else { BadgeColor::Informative }
                                    })
                                    attr:style="margin-left: 6px;"
                                >
                                    {n.to_string()}
                                </Badge>
                            })}
                        </Button>
                    }
                })
                .collect_view()}
        </Flex>
    }
}

#[component]
fn TabContent(vm: TenderDetailsVm) -> impl IntoView {
    let config = vm.config();

    move || {
        let Some(tender) = vm.tender.get() else {
            return view! { <></> }.into_any();
        };
        match vm.active_tab.get() {
            DetailTab::Info => view! { <InfoTab tender=tender /> }.into_any(),
            DetailTab::Documents => view! { <DocumentsTab documents=tender.documents /> }.into_any(),
            DetailTab::History => {
                view! { <HistoryTab history=tender.history config=config.clone() /> }.into_any()
            }
        }
    }
}

/// Напоминание о сроке подачи, только для активных тендеров
#[component]
fn DeadlineNotice(vm: TenderDetailsVm) -> impl IntoView {
    let config = vm.config();

    move || {
        vm.tender.track();
        let banner = vm.state.with_untracked(|s| s.deadline_banner(&config, Utc::now()));
        banner.map(|DeadlineBanner { text, expired }| {
            view! {
                <div class="alert alert--warning" role="status">
                    {icon("alert-triangle")}
                    <div>
                        <p>{text}</p>
                        {expired.then(|| view! { <p class="alert__note">{DeadlineBanner::EXPIRED_TEXT}</p> })}
                    </div>
                </div>
            }
        })
    }
}
