pub mod controls;
pub mod hover;
pub mod pointer;

pub use controls::{wire_debug_toggle, wire_max_overflow_input};
pub use hover::wire_hover_handlers;
pub use pointer::{wire_input_handlers, InputWiring};
