use dioxus::prelude::*;

use crate::console_session::ConsoleContext;
use crate::routes::Route;

/// Page chrome: top bar with the backend in use, routed content below.
#[component]
pub fn ConsoleLayout() -> Element {
    let console = use_context::<ConsoleContext>();
    let api_base = console.api_base.read().clone();
    let backend = if api_base.is_empty() {
        "same origin".to_string()
    } else {
        api_base
    };

    rsx! {
        div { class: "min-h-screen bg-gray-50 flex flex-col",
            header { class: "h-14 px-6 flex items-center justify-between bg-[#081c42] text-white shadow",
                Link { to: Route::Groups {}, class: "text-lg font-semibold tracking-tight", "Console" }
                span { class: "text-xs text-white/70", "API: {backend}" }
            }
            main { class: "flex-1 p-6", Outlet::<Route> {} }
        }
    }
}
