//! Output module for console messages.

pub mod console;

pub use console::{print_banner, print_error, print_info, print_warning};
