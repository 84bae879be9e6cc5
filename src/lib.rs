//! Channel rating for a WiFi analyzer.
//!
//! Aggregates scanned access points by channel, counts how many occupy each
//! channel, reports the strongest interfering signal, and ranks channels from
//! least to most congested.

pub mod band;
pub mod config;
pub mod model;
pub mod rating;
pub mod report;
pub mod scanner;
pub mod signal;

pub use band::{BandPlan, WifiBand, WifiChannel, WifiWidth};
pub use config::{AddressMatch, RatingConfig};
pub use model::{ChannelApCount, ChannelScore, WifiAdditional, WifiConnection, WifiDetail};
pub use rating::ChannelRating;
pub use signal::{Strength, StrengthThresholds, WifiSignal};
