use leptos::prelude::*;

/// Badge variant, mapped to the `badge--*` modifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    Success,
    Error,
    #[default]
    Neutral,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Success => "badge badge--success",
            Self::Error => "badge badge--error",
            Self::Neutral => "badge badge--neutral",
        }
    }
}

#[component]
pub fn Badge(#[prop(optional)] variant: BadgeVariant, children: Children) -> impl IntoView {
    view! { <span class=variant.class()>{children()}</span> }
}
