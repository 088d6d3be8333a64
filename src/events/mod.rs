pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_fill_shortcut;
pub use pointer::{wire_field_input, FieldWiring};
