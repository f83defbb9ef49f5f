use contracts::domain::a001_tender::TenderDetail;
use leptos::prelude::*;

#[component]
pub fn InfoTab(tender: TenderDetail) -> impl IntoView {
    let TenderDetail {
        summary,
        requirements,
        customer,
        ..
    } = tender;

    view! {
        <div class="detail-section-list">
            <section class="detail-section">
                <h3 class="detail-section__title">"Описание"</h3>
                <p class="detail-section__text">{summary.description}</p>
            </section>

            <section class="detail-section">
                <h3 class="detail-section__title">"Требования"</h3>
                {if requirements.is_empty() {
                    view! { <p class="detail-section__empty">"Требования не указаны"</p> }.into_any()
                } else {
                    view! {
                        <ul class="detail-section__list">
                            {requirements.into_iter().map(|req| view! { <li>{req}</li> }).collect_view()}
                        </ul>
                    }
                    .into_any()
                }}
            </section>

            <section class="detail-section">
                <h3 class="detail-section__title">"Заказчик"</h3>
                <div class="detail-section__text">
                    <p>{customer.name}</p>
                    <p>"ИНН: " {customer.inn}</p>
                    <p>{customer.address}</p>
                </div>
            </section>
        </div>
    }
}
