//! Console client - group administration UI built with Dioxus.
//!
//! The add/edit group dialog lives in `components::groups`; its request and
//! state logic is in `group_form` so it can be exercised without a renderer.

pub mod logging;

pub mod api_client;
pub mod config;
pub mod console_session;
pub mod group_form;

pub mod components;
pub mod hooks;
pub mod routes;
pub mod views;

pub use api_client::{ApiClient, GroupService};
pub use config::ConsoleConfig;
pub use console_session::{ConsoleContext, ConsoleProvider};
pub use routes::Route;
