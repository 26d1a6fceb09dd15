//! TUI widgets.

mod header;
mod help;
mod status;
mod table;

pub use header::render_header;
pub use help::render_help;
pub use status::render_status;
pub use table::render_table;
