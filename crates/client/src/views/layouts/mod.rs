mod console_layout;

pub use console_layout::ConsoleLayout;
