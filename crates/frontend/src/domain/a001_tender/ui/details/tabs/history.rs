use contracts::domain::a001_tender::{HistoryEventKind, TenderHistoryEvent};
use leptos::prelude::*;

use crate::shared::config::ClientConfig;
use crate::shared::icons::icon;

/// Marker colour of a timeline event
pub fn marker_class(kind: HistoryEventKind) -> &'static str {
    match kind {
        HistoryEventKind::Status => "timeline__marker timeline__marker--status",
        HistoryEventKind::Price => "timeline__marker timeline__marker--price",
        HistoryEventKind::Other => "timeline__marker",
    }
}

/// События выводятся в порядке получения; соединительная линия рисуется
/// между событиями, после последнего её нет.
#[component]
pub fn HistoryTab(history: Vec<TenderHistoryEvent>, config: ClientConfig) -> impl IntoView {
    if history.is_empty() {
        return view! { <p class="detail-section__empty">"История изменений пуста"</p> }.into_any();
    }

    let last = history.len() - 1;
    view! {
        <ul class="timeline">
            {history
                .into_iter()
                .enumerate()
                .map(|(index, event)| {
                    let date = config.format_datetime(&event.date);
                    view! {
                        <li class="timeline__item">
                            {(index != last).then(|| view! { <span class="timeline__connector" aria-hidden="true"></span> })}
                            <span class=marker_class(event.kind)>{icon("clock")}</span>
                            <div class="timeline__body">
                                <p class="timeline__description">{event.description}</p>
                                <time class="timeline__date" datetime=event.date>{date}</time>
                            </div>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_per_kind() {
        assert_ne!(marker_class(HistoryEventKind::Status), marker_class(HistoryEventKind::Price));
        assert_eq!(marker_class(HistoryEventKind::Other), "timeline__marker");
    }
}
