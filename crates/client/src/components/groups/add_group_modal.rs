//! Add/edit group dialog.

use console_shared::{GroupId, GroupStatus};
use dioxus::prelude::*;

use crate::components::groups::UsersSelector;
use crate::components::ui::{Button, ButtonVariant, LinearProgress, Modal, RadioGroup, TextInput};
use crate::console_session::ConsoleContext;
use crate::group_form::{dismiss, load_group, submit_form, FormCell, GroupForm};

impl FormCell for Signal<GroupForm> {
    fn with_form<R>(&mut self, f: impl FnOnce(&mut GroupForm) -> R) -> R {
        f(&mut self.write())
    }
}

/// AddGroupModal - create a group, or edit the status and members of one.
///
/// ```text
/// +---------------------------------------------+
/// |  Group Edit - ops                       [X] |
/// |---------------------------------------------|
/// |  (error message, if any)         [Retry]    |
/// |  Status  (o) Enabled  ( ) Disabled          |  <- edit mode
/// |  Name    [____________]                     |  <- create mode
/// |  Members [filter] [x] alice [ ] bob ...     |
/// |  [               Save                ]      |
/// |  ======== progress ========                 |
/// +---------------------------------------------+
/// ```
///
/// `selected_group = None` creates a group, `Some(id)` loads and edits it.
/// `close_modal_and_refresh` fires once after a successful save, and when the
/// user dismisses the dialog while no save is in flight.
#[component]
pub fn AddGroupModal(
    open: bool,
    selected_group: Option<GroupId>,
    close_modal_and_refresh: EventHandler<()>,
) -> Element {
    let console = use_context::<ConsoleContext>();
    let initial = selected_group.clone();
    let mut state = use_signal(move || GroupForm::new(initial));

    use_effect(use_reactive(
        (&open, &selected_group),
        move |(open, selected_group)| {
            let fetch = state.write().sync(open, selected_group);
            if let Some((id, ticket)) = fetch {
                spawn(async move {
                    load_group(&console.client(), state, id, ticket).await;
                });
            }
        },
    ));

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        spawn(async move {
            submit_form(&console.client(), state, move || close_modal_and_refresh.call(())).await;
        });
    };

    let handle_retry = move |_: MouseEvent| {
        let fetch = state.write().retry_fetch();
        if let Some((id, ticket)) = fetch {
            spawn(async move {
                load_group(&console.client(), state, id, ticket).await;
            });
        }
    };

    let (title, error, can_retry, is_edit, name, status, members, can_submit, saving, busy) = {
        let f = state.read();
        (
            f.title(),
            f.error().map(str::to_string),
            f.can_retry_fetch(),
            f.is_edit(),
            f.name().to_string(),
            f.status(),
            f.members().to_vec(),
            f.can_submit(),
            f.is_saving(),
            f.is_saving() || f.is_loading(),
        )
    };

    let status_choices: Vec<(String, String)> = [GroupStatus::Enabled, GroupStatus::Disabled]
        .into_iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect();

    rsx! {
        Modal {
            open,
            title,
            on_close: move |_| {
                dismiss(state, || close_modal_and_refresh.call(()));
            },
            form {
                autocomplete: "off",
                novalidate: true,
                onsubmit: handle_submit,
                div { class: "space-y-5",
                    if let Some(err) = error {
                        div { class: "flex items-start justify-between gap-3",
                            p { class: "text-sm text-red-600 break-words", "{err}" }
                            if can_retry {
                                Button {
                                    variant: ButtonVariant::Secondary,
                                    onclick: handle_retry,
                                    "Retry"
                                }
                            }
                        }
                    }
                    if is_edit {
                        RadioGroup {
                            name: "status",
                            label: "Status",
                            choices: status_choices,
                            selected: status.map(|s| s.as_str().to_string()),
                            onchange: move |value: String| {
                                if let Some(status) = GroupStatus::parse(&value) {
                                    state.write().set_status(status);
                                }
                            },
                        }
                    } else {
                        TextInput {
                            id: "group-name",
                            label: "Name",
                            value: name,
                            placeholder: "e.g. developers",
                            disabled: saving,
                            oninput: move |value: String| state.write().set_name(value),
                        }
                    }
                    UsersSelector {
                        selected_users: members,
                        on_change: move |selected: Vec<String>| state.write().set_members(selected),
                    }
                    Button {
                        r#type: "submit",
                        variant: ButtonVariant::Primary,
                        full_width: true,
                        disabled: !can_submit,
                        "Save"
                    }
                    if busy {
                        LinearProgress {}
                    }
                }
            }
        }
    }
}
