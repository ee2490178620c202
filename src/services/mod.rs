// Host access and widget logic

pub mod browser_host;
pub mod host;
pub mod link_widget;
