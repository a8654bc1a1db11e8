//! Checkbox row used by list pickers.

use dioxus::prelude::*;

/// A full-width clickable row holding a checkbox and its label.
#[component]
pub fn CheckboxRow(label: String, checked: bool, onchange: EventHandler<bool>) -> Element {
    rsx! {
        label { class: "flex items-center gap-3 px-3 py-2 cursor-pointer hover:bg-gray-50 border-b border-gray-100 last:border-b-0",
            input {
                r#type: "checkbox",
                checked,
                onchange: move |e: Event<FormData>| {
                    onchange.call(e.checked());
                },
                class: "w-4 h-4 rounded border-gray-300 text-[#081c42] focus:ring-[#081c42] cursor-pointer",
            }
            span { class: "flex-1 min-w-0 text-sm text-gray-900 truncate", "{label}" }
        }
    }
}
