//! Application routing configuration.

use dioxus::prelude::*;

use crate::views::{ConsoleLayout, Groups, PageNotFound};

// Router configuration
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(ConsoleLayout)]
        #[route("/")]
        Groups {},
    #[end_layout]

    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}
