//! Pure display-format transforms for card metadata.
//!
//! No I/O, no shared state; every function here yields the same output for
//! the same input on every call.

mod duration;
mod relative;
mod views;

pub use duration::format_duration;
pub use relative::{format_relative_time, format_relative_time_at};
pub use views::format_view_count;
