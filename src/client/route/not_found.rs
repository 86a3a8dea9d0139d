use dioxus::prelude::*;

use crate::client::{component::Page, constant::SITE_NAME, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        Title { "Not Found | {SITE_NAME}" }
        Page {
            class: "centered",
            h1 { "404" }
            p { "Nothing lives at {path}" }
            Link {
                to: Route::Students {},
                class: "btn btn-primary",
                "Back to students"
            }
        }
    }
}
