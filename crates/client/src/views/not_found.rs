use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "max-w-md mx-auto mt-16 text-center space-y-3",
            h1 { class: "text-xl font-semibold text-gray-900", "Page not found" }
            p { class: "text-sm text-gray-500", "Nothing lives at /{path}" }
            Link { to: Route::Groups {}, class: "text-sm text-[#081c42] underline", "Back to groups" }
        }
    }
}
