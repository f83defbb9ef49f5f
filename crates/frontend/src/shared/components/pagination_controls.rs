use crate::shared::icons::icon;
use leptos::prelude::*;

/// Prev / numbered pages / next, 1-indexed.
///
/// The component only reports clicks; range checks belong to the caller.
/// Prev/next are disabled from `has_prev` / `has_next`.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<u32>,

    #[prop(into)]
    total_pages: Signal<u32>,

    #[prop(into)]
    has_prev: Signal<bool>,

    #[prop(into)]
    has_next: Signal<bool>,

    /// "Показано X - Y из Z результатов"
    #[prop(into)]
    summary: Signal<String>,

    on_page_change: Callback<u32>,
) -> impl IntoView {
    let prev_disabled = move || !has_prev.get();
    let next_disabled = move || !has_next.get();

    view! {
        <div class="pagination-controls">
            <p class="pagination-info">{move || summary.get()}</p>
            <nav class="pagination-pages" aria-label="Pagination">
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1))
                    disabled=prev_disabled
                    title="Предыдущая страница"
                >
                    {icon("chevron-left")}
                    <span>"Назад"</span>
                </button>
                {move || {
                    let current = current_page.get();
                    (1..=total_pages.get())
                        .map(|page| {
                            let class = if page == current {
                                "pagination-btn pagination-btn--active"
                            } else {
                                "pagination-btn"
                            };
                            view! {
                                <button class=class on:click=move |_| on_page_change.run(page)>
                                    {page.to_string()}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(current_page.get() + 1)
                    disabled=next_disabled
                    title="Следующая страница"
                >
                    <span>"Вперед"</span>
                    {icon("chevron-right")}
                </button>
            </nav>
        </div>
    }
}
