//! Display formatting for command output

pub mod entry;

pub use entry::{format_entry_details, format_entry_list, format_entry_row};
