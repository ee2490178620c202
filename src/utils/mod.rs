// Utility functions

pub mod link_format;
pub mod timings;
pub mod toast_timer;

pub use link_format::{display_address, display_params};
pub use timings::WidgetTimings;
pub use toast_timer::{ToastTimer, ToastVisibility};
