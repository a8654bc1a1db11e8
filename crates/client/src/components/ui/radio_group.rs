//! Radio button group.

use dioxus::prelude::*;

/// A vertical list of radio buttons sharing one `name`.
///
/// `choices` holds `(value, label)` pairs; `onchange` receives the picked value.
#[component]
pub fn RadioGroup(
    name: String,
    label: String,
    choices: Vec<(String, String)>,
    selected: Option<String>,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        fieldset { class: "space-y-2",
            legend { class: "text-sm font-semibold text-gray-900 mb-1", "{label}" }
            for (value, text) in choices.into_iter() {
                {
                    let checked = selected.as_deref() == Some(value.as_str());
                    rsx! {
                        label {
                            key: "{value}",
                            class: "flex items-center gap-2 cursor-pointer",
                            input {
                                r#type: "radio",
                                name: "{name}",
                                value: "{value}",
                                checked,
                                onchange: {
                                    let value = value.clone();
                                    move |_| onchange.call(value.clone())
                                },
                                class: "w-4 h-4 text-[#081c42] focus:ring-[#081c42] cursor-pointer",
                            }
                            span { class: "text-sm text-gray-800", "{text}" }
                        }
                    }
                }
            }
        }
    }
}
