// UI Components

pub mod icons;
pub mod shareable_link;

pub use shareable_link::ShareableLink;
