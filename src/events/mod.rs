mod pointer;

pub use pointer::{wire_pointer_handlers, PointerWiring};
