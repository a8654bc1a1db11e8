use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    #[props(optional)]
    pub id: Option<String>,
    #[props(optional)]
    pub label: Option<String>,
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(optional)]
    pub placeholder: Option<String>,
    #[props(optional)]
    pub disabled: Option<bool>,
}

/// Single-line text field with an optional label above it.
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let id = props.id.unwrap_or_default();

    rsx! {
        div { class: "space-y-1",
            if let Some(label) = &props.label {
                label { class: "block text-sm font-medium text-gray-700", r#for: "{id}", "{label}" }
            }
            input {
                id: "{id}",
                class: "w-full rounded-md border border-gray-300 bg-white px-3 py-2 text-sm text-gray-900 placeholder-gray-400 focus:border-[#081c42] focus:outline-none focus:ring-1 focus:ring-[#081c42] disabled:bg-gray-100",
                r#type: "text",
                autocomplete: "off",
                value: "{props.value}",
                disabled: props.disabled.unwrap_or(false),
                placeholder: props.placeholder.unwrap_or_default(),
                oninput: move |e: FormEvent| props.oninput.call(e.value()),
            }
        }
    }
}
