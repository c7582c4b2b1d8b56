pub mod detector;
pub mod registry;
pub mod status;
pub mod tracker;
