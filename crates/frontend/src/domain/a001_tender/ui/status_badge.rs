use contracts::domain::a001_tender::TenderStatus;
use leptos::prelude::*;

use crate::shared::components::badge::{Badge, BadgeVariant};

pub fn status_variant(status: TenderStatus) -> BadgeVariant {
    match status {
        TenderStatus::Active => BadgeVariant::Success,
        TenderStatus::Completed => BadgeVariant::Neutral,
        TenderStatus::Cancelled => BadgeVariant::Error,
    }
}

#[component]
pub fn TenderStatusBadge(status: TenderStatus) -> impl IntoView {
    view! { <Badge variant=status_variant(status)>{status.label()}</Badge> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_status_has_distinct_variant() {
        let classes: Vec<_> = TenderStatus::ALL
            .into_iter()
            .map(|s| status_variant(s).class())
            .collect();
        assert_eq!(classes, ["badge badge--success", "badge badge--neutral", "badge badge--error"]);
    }
}
