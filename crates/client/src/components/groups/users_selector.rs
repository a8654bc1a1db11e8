//! Users picker for group membership.

use dioxus::prelude::*;

use crate::components::ui::CheckboxRow;
use crate::console_session::ConsoleContext;

/// Add or remove `user` from `selected`, keeping the order of everyone else.
pub fn toggle_member(selected: &[String], user: &str, checked: bool) -> Vec<String> {
    let mut next: Vec<String> = selected.iter().filter(|u| *u != user).cloned().collect();
    if checked {
        next.push(user.to_string());
    }
    next
}

/// Users to list: everyone from the server plus selected users the server did
/// not return, narrowed by a case-insensitive filter.
pub fn visible_users(listed: &[String], selected: &[String], filter: &str) -> Vec<String> {
    let needle = filter.trim().to_lowercase();
    let mut users: Vec<String> = listed.to_vec();
    for user in selected {
        if !users.contains(user) {
            users.push(user.clone());
        }
    }
    users.sort();
    users.retain(|u| needle.is_empty() || u.to_lowercase().contains(&needle));
    users
}

#[component]
pub fn UsersSelector(selected_users: Vec<String>, on_change: EventHandler<Vec<String>>) -> Element {
    let console = use_context::<ConsoleContext>();
    let mut filter = use_signal(String::new);

    let users = use_resource(move || async move {
        match console.client().list_users().await {
            Ok(resp) => Ok(resp
                .users
                .into_iter()
                .map(|u| u.access_key)
                .collect::<Vec<_>>()),
            Err(e) => {
                crate::log_warn!("Failed to load users: {}", e);
                Err(e.user_message())
            }
        }
    });

    let body = match users.read().as_ref() {
        None => rsx! {
            p { class: "px-3 py-2 text-sm text-gray-500", "Loading users..." }
        },
        Some(Err(msg)) => rsx! {
            p { class: "px-3 py-2 text-sm text-red-600", "{msg}" }
        },
        Some(Ok(list)) => {
            let shown = visible_users(list, &selected_users, &filter.read());
            if shown.is_empty() {
                rsx! {
                    p { class: "px-3 py-2 text-sm text-gray-500", "No users found" }
                }
            } else {
                rsx! {
                    for user in shown {
                        {
                            let checked = selected_users.contains(&user);
                            let selected = selected_users.clone();
                            let name = user.clone();
                            rsx! {
                                CheckboxRow {
                                    key: "{user}",
                                    label: user.clone(),
                                    checked,
                                    onchange: move |on: bool| {
                                        on_change.call(toggle_member(&selected, &name, on));
                                    },
                                }
                            }
                        }
                    }
                }
            }
        }
    };
    let selected_count = selected_users.len();

    rsx! {
        div { class: "space-y-2",
            div { class: "flex items-center justify-between",
                h3 { class: "text-sm font-semibold text-gray-900", "Members" }
                span { class: "text-xs text-gray-500", "{selected_count} selected" }
            }
            input {
                class: "w-full rounded-md border border-gray-300 px-3 py-1.5 text-sm focus:border-[#081c42] focus:outline-none",
                r#type: "search",
                placeholder: "Filter users",
                value: "{filter}",
                oninput: move |e: FormEvent| filter.set(e.value()),
            }
            div { class: "max-h-60 overflow-y-auto rounded-md border border-gray-200", {body} }
        }
    }
}
