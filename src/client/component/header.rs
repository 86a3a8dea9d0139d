use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaGraduationCap, Icon};

use crate::client::{constant::SITE_NAME, router::Route};

#[component]
pub fn Header() -> Element {
    rsx!(div {
        class: "header",
        Link {
            to: Route::Students {},
            class: "header-brand",
            Icon {
                width: 26,
                height: 26,
                icon: FaGraduationCap
            }
            p { {SITE_NAME} }
        }
        nav {
            class: "tabs",
            Link {
                to: Route::Students {},
                class: "tab",
                active_class: "tab-active",
                "Students"
            }
            Link {
                to: Route::Courses {},
                class: "tab",
                active_class: "tab-active",
                "Courses"
            }
            Link {
                to: Route::Enrollments {},
                class: "tab",
                active_class: "tab-active",
                "Enrollments"
            }
        }
    })
}
