//! Modal dialog shell.

use dioxus::prelude::*;

/// Centered dialog over a dimmed backdrop. Renders nothing while closed.
///
/// Clicking the backdrop or the close button calls `on_close`; clicks inside
/// the panel do not.
#[component]
pub fn Modal(open: bool, title: String, on_close: EventHandler<()>, children: Element) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50",
            role: "presentation",
            onclick: move |_| on_close.call(()),
            div {
                class: "w-full max-w-lg mx-4 bg-white rounded-lg shadow-2xl flex flex-col max-h-[90vh]",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "modal-title",
                onclick: move |e| e.stop_propagation(),
                div { class: "flex items-center justify-between px-6 py-4 border-b border-gray-200",
                    h2 { id: "modal-title", class: "text-lg font-semibold text-gray-900", "{title}" }
                    button {
                        r#type: "button",
                        class: "text-gray-400 hover:text-gray-700 transition-colors",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        svg {
                            class: "w-5 h-5",
                            fill: "none",
                            stroke: "currentColor",
                            view_box: "0 0 24 24",
                            path {
                                stroke_linecap: "round",
                                stroke_linejoin: "round",
                                stroke_width: "2",
                                d: "M6 18L18 6M6 6l12 12",
                            }
                        }
                    }
                }
                div { class: "px-6 py-4 overflow-y-auto", {children} }
            }
        }
    }
}
