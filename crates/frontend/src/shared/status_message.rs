//! Single-slot success/error banner shared by the pages.

use leptos::prelude::*;

/// The most recent outcome shown to the user. Success and error are
/// mutually exclusive; a new operation resets it to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusMessage {
    #[default]
    None,
    Success(String),
    Error(String),
}

impl StatusMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success(message.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }
}

/// Renders the banner for a status message, nothing for `None`
#[component]
pub fn StatusBanner(#[prop(into)] message: Signal<StatusMessage>) -> impl IntoView {
    move || match message.get() {
        StatusMessage::None => view! { <></> }.into_any(),
        StatusMessage::Success(text) => view! {
            <div class="alert alert--success" role="status">{text}</div>
        }
        .into_any(),
        StatusMessage::Error(text) => view! {
            <div class="alert alert--error" role="alert">{text}</div>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(StatusMessage::success("Готово"), StatusMessage::Success("Готово".to_string()));
        assert_eq!(StatusMessage::error("Ошибка"), StatusMessage::Error("Ошибка".to_string()));
        assert_eq!(StatusMessage::default(), StatusMessage::None);
    }
}
