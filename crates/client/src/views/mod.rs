//! View components for the application.

pub mod groups;
pub mod layouts;
pub mod not_found;

pub use groups::Groups;
pub use layouts::ConsoleLayout;
pub use not_found::PageNotFound;
