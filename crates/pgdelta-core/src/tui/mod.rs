//! Terminal user interface.
//!
//! One screen: a header with the view tabs and capture times, the active
//! view's table, and a status line. A help popup lists the key bindings.

mod app;
mod input;
mod render;
pub(crate) mod style;
mod widgets;

pub use app::App;
pub use input::{key_to_event, spawn_input_reader, translate};
