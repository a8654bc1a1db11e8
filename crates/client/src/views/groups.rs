//! Groups screen - list of groups plus the add/edit dialog.

use console_shared::{sort_groups, GroupId};
use dioxus::prelude::*;

use crate::components::groups::AddGroupModal;
use crate::components::ui::{Button, ButtonVariant};
use crate::console_session::ConsoleContext;
use crate::hooks::{use_refresh_resource, use_refreshable_resource};

/// Output of the group list fetch: sorted names, or the message to show.
pub type GroupList = Result<Vec<String>, String>;

/// Names containing `filter`, case-insensitively. Order is preserved.
pub fn filter_groups(groups: &[String], filter: &str) -> Vec<String> {
    let needle = filter.trim().to_lowercase();
    groups
        .iter()
        .filter(|g| needle.is_empty() || g.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[component]
pub fn Groups() -> Element {
    let console = use_context::<ConsoleContext>();
    let mut filter = use_signal(String::new);
    let mut dialog_open = use_signal(|| false);
    let mut selected = use_signal(|| None::<GroupId>);

    let groups = use_refreshable_resource(move || async move {
        match console.client().list_groups().await {
            Ok(resp) => {
                let mut names = resp.groups;
                sort_groups(&mut names);
                Ok(names)
            }
            Err(e) => {
                crate::log_error!("Failed to load groups: {}", e);
                Err(e.user_message())
            }
        }
    });

    let body = match groups.read().as_ref() {
        None => rsx! {
            div { class: "flex justify-center py-10",
                div { class: "animate-spin rounded-full h-6 w-6 border-2 border-[#081c42] border-t-transparent" }
            }
        },
        Some(Err(msg)) => rsx! {
            p { class: "px-4 py-6 text-sm text-red-600", "{msg}" }
        },
        Some(Ok(names)) => {
            let shown = filter_groups(names, &filter.read());
            if shown.is_empty() {
                rsx! {
                    p { class: "px-4 py-6 text-sm text-gray-500", "No groups" }
                }
            } else {
                rsx! {
                    ul { class: "divide-y divide-gray-100",
                        for name in shown {
                            {
                                let id = GroupId::from(name.as_str());
                                rsx! {
                                    li { key: "{name}",
                                        button {
                                            r#type: "button",
                                            class: "w-full text-left px-4 py-3 text-sm text-gray-900 hover:bg-gray-50",
                                            onclick: move |_| {
                                                selected.set(Some(id.clone()));
                                                dialog_open.set(true);
                                            },
                                            "{name}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "max-w-3xl mx-auto space-y-4",
            div { class: "flex items-center justify-between gap-4",
                h1 { class: "text-2xl font-semibold text-gray-900", "Groups" }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        selected.set(None);
                        dialog_open.set(true);
                    },
                    "Create Group"
                }
            }
            input {
                class: "w-full rounded-md border border-gray-300 bg-white px-3 py-2 text-sm focus:border-[#081c42] focus:outline-none",
                r#type: "search",
                placeholder: "Filter groups",
                value: "{filter}",
                oninput: move |e: FormEvent| filter.set(e.value()),
            }
            div { class: "bg-white rounded-lg shadow-sm border border-gray-200", {body} }
            if dialog_open() {
                GroupDialogHost { open: dialog_open, selected }
            }
        }
    }
}

/// Mounts the dialog only while it is open, and reloads the list when the
/// dialog closes.
#[component]
fn GroupDialogHost(mut open: Signal<bool>, mut selected: Signal<Option<GroupId>>) -> Element {
    let mut refresh = use_refresh_resource::<GroupList>();

    rsx! {
        AddGroupModal {
            open: open(),
            selected_group: selected(),
            close_modal_and_refresh: move |_| {
                open.set(false);
                selected.set(None);
                refresh.set(());
            },
        }
    }
}
