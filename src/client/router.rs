use dioxus::prelude::*;

use crate::client::component::Layout;
use crate::client::route::{Courses, Enrollments, NotFound, Students};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Students {},

    #[route("/courses")]
    Courses {},

    #[route("/enrollments")]
    Enrollments {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
