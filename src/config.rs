use crate::band::BandPlan;
use crate::signal::{Strength, StrengthThresholds};
use std::fmt;

/// How hardware addresses are grouped when collapsing duplicate observations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressMatch {
    /// Whole address, ignoring case
    #[default]
    Exact,
    /// Ignore the whole first octet and the last digit, so the virtual
    /// access points one radio broadcasts count once
    SameRadio,
}

const BSSID_LENGTH: usize = 17;

impl AddressMatch {
    /// Normalized grouping key for `bssid`
    pub fn key(&self, bssid: &str) -> String {
        let lower = bssid.to_lowercase();
        match self {
            AddressMatch::SameRadio if lower.len() == BSSID_LENGTH && lower.is_ascii() => {
                lower[2..BSSID_LENGTH - 1].to_string()
            }
            _ => lower,
        }
    }
}

impl fmt::Display for AddressMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressMatch::Exact => write!(f, "exact"),
            AddressMatch::SameRadio => write!(f, "same-radio"),
        }
    }
}

/// Static tables and policies a [`ChannelRating`](crate::rating::ChannelRating) runs with.
///
/// Built once and moved into the rating; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingConfig {
    pub band_plan: BandPlan,
    pub thresholds: StrengthThresholds,
    pub address_match: AddressMatch,
    /// Strongest interference a channel may show and still be recommended
    pub max_interference: Strength,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            band_plan: BandPlan::default(),
            thresholds: StrengthThresholds::default(),
            address_match: AddressMatch::default(),
            max_interference: Strength::One,
        }
    }
}

impl RatingConfig {
    pub fn with_address_match(mut self, address_match: AddressMatch) -> Self {
        self.address_match = address_match;
        self
    }

    pub fn with_max_interference(mut self, max_interference: Strength) -> Self {
        self.max_interference = max_interference;
        self
    }

    pub fn with_thresholds(mut self, thresholds: StrengthThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }
}
