pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TrackerConfig;

pub use crate::app::build_tracker;
pub use crate::core::detector::{detect, normalize};
pub use crate::core::status::{classify, translate_status};
pub use crate::core::tracker::Tracker;
pub use crate::domain::model::{CarrierId, StatusCategory, TrackingEvent, TrackingResult};
pub use crate::utils::error::{Result, TrackerError};
