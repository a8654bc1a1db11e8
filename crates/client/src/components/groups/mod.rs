//! Group management components.

mod add_group_modal;
mod users_selector;

pub use add_group_modal::AddGroupModal;
pub use users_selector::{toggle_member, visible_users, UsersSelector};
