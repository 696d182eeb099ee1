//! Display formatting for terminal output

pub mod table;

pub use table::render_table;
