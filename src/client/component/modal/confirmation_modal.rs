use dioxus::prelude::*;

use super::Modal;
use crate::client::component::ErrorAlert;

/// Delete confirmation dialog. A failed deletion is reported through `error`.
#[component]
pub fn ConfirmationModal(
    show: Signal<bool>,
    title: String,
    message: String,
    is_processing: bool,
    error: Option<String>,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx!(
        Modal {
            show,
            title,
            prevent_close: is_processing,
            p { "{message}" }
            if let Some(err) = error {
                ErrorAlert { message: err }
            }
            div {
                class: "modal-action",
                button {
                    r#type: "button",
                    class: "btn",
                    onclick: move |_| {
                        show.set(false);
                    },
                    disabled: is_processing,
                    "Cancel"
                }
                button {
                    r#type: "button",
                    class: "btn btn-error",
                    onclick: move |_| {
                        on_confirm.call(());
                    },
                    disabled: is_processing,
                    if is_processing {
                        span { class: "loading loading-spinner loading-sm" }
                        "Deleting..."
                    } else {
                        "Delete"
                    }
                }
            }
        }
    )
}
