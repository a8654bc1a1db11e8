use dioxus::prelude::*;

#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(optional)]
    pub class: Option<String>,
    #[props(optional)]
    pub variant: Option<ButtonVariant>,
    /// `"button"` unless set; the dialog's save button is `"submit"`.
    #[props(optional)]
    pub r#type: Option<String>,
    #[props(optional)]
    pub disabled: Option<bool>,
    #[props(optional)]
    pub full_width: Option<bool>,
    #[props(optional)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let disabled = props.disabled.unwrap_or(false);

    let mut class = String::from(
        "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-medium transition-colors focus:outline-none focus:ring-2 focus:ring-offset-1 disabled:opacity-50 disabled:cursor-not-allowed",
    );
    class.push(' ');
    class.push_str(match props.variant.unwrap_or_default() {
        ButtonVariant::Primary => "bg-[#081c42] text-white hover:bg-[#0b2a5f] focus:ring-[#081c42]",
        ButtonVariant::Secondary => "bg-white text-[#081c42] border border-[#081c42] hover:bg-gray-50 focus:ring-[#081c42]",
    });
    if props.full_width.unwrap_or(false) {
        class.push_str(" w-full");
    }
    if let Some(extra) = props.class.filter(|c| !c.is_empty()) {
        class.push(' ');
        class.push_str(&extra);
    }

    rsx! {
        button {
            class,
            r#type: props.r#type.unwrap_or_else(|| "button".to_string()),
            disabled,
            onclick: move |evt| {
                if disabled {
                    return;
                }
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}
