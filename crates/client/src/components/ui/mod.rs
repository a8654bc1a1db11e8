//! UI primitives (Button, Modal, inputs)

pub mod button;
pub mod checkbox;
pub mod input;
pub mod modal;
pub mod progress;
pub mod radio_group;

pub use button::*;
pub use checkbox::*;
pub use input::*;
pub use modal::*;
pub use progress::*;
pub use radio_group::*;
