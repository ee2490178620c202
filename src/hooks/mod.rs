pub mod use_shareable_link;

pub use use_shareable_link::use_shareable_link;
