pub mod confirmation_modal;

use dioxus::prelude::*;

pub use confirmation_modal::ConfirmationModal;

/// Dialog shown while `show` is true. Escape, the close button and the backdrop close it
/// unless `prevent_close` is set, which forms use while a request is in flight.
#[component]
pub fn Modal(
    show: Signal<bool>,
    title: String,
    prevent_close: bool,
    children: Element,
) -> Element {
    // Focus modal when it opens
    #[cfg(feature = "web")]
    use_effect(move || {
        if show() {
            document::eval(r#"document.querySelector('.modal-open')?.focus()"#);
        }
    });

    rsx!(
        div {
            class: if show() { "modal modal-open" } else { "modal" },
            tabindex: "-1",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape && !prevent_close {
                    show.set(false);
                }
            },
            div {
                class: "modal-box",
                div {
                    class: "modal-header",
                    h3 { "{title}" }
                    if !prevent_close {
                        button {
                            class: "btn btn-sm btn-ghost",
                            onclick: move |_| show.set(false),
                            "✕"
                        }
                    }
                }
                {children}
            }
            div {
                class: "modal-backdrop",
                onclick: move |_| {
                    if !prevent_close {
                        show.set(false);
                    }
                },
            }
        }
    )
}
