use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "page {class}",
            {children}
        }
    )
}

#[component]
pub fn LoadingIndicator() -> Element {
    rsx!(
        div {
            class: "text-center py-8",
            span { class: "loading loading-spinner loading-lg" }
        }
    )
}

/// Inline error banner used by tables and form modals
#[component]
pub fn ErrorAlert(message: String) -> Element {
    rsx!(
        div {
            class: "alert alert-error",
            role: "alert",
            span { "{message}" }
        }
    )
}
