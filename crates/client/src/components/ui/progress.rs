use dioxus::prelude::*;

/// Indeterminate progress bar shown under a busy form.
#[component]
pub fn LinearProgress() -> Element {
    rsx! {
        div { class: "relative h-1 w-full overflow-hidden rounded bg-[#081c42]/20",
            div { class: "absolute inset-y-0 left-0 w-1/3 animate-pulse bg-[#081c42]" }
        }
    }
}
