mod dedup;

pub use dedup::collapse_duplicates;

use crate::band::WifiChannel;
use crate::config::RatingConfig;
use crate::model::{ChannelApCount, ChannelScore, WifiDetail};
use crate::signal::Strength;
use std::sync::{PoisonError, RwLock, RwLockReadGuard};
use tracing::debug;

/// Per-channel occupancy and interference over the latest scan snapshot.
///
/// Every [`set_observations`](Self::set_observations) replaces the stored set
/// wholesale. Counts and strengths are computed from it on each query.
#[derive(Debug)]
pub struct ChannelRating {
    config: RatingConfig,
    details: RwLock<Vec<WifiDetail>>,
}

impl Default for ChannelRating {
    fn default() -> Self {
        Self::new(RatingConfig::default())
    }
}

impl ChannelRating {
    pub fn new(config: RatingConfig) -> Self {
        Self {
            config,
            details: RwLock::new(Vec::new()),
        }
    }

    pub fn config(&self) -> &RatingConfig {
        &self.config
    }

    /// Replace the stored observations with a deduplicated copy of `details`
    pub fn set_observations(&self, details: impl IntoIterator<Item = WifiDetail>) {
        let incoming: Vec<WifiDetail> = details.into_iter().collect();
        let total = incoming.len();
        let kept = collapse_duplicates(incoming, self.config.address_match);
        debug!(
            total,
            kept = kept.len(),
            collapsed = total - kept.len(),
            "Replaced channel rating observations"
        );

        *self.details.write().unwrap_or_else(PoisonError::into_inner) = kept;
    }

    /// Snapshot of the stored, deduplicated observations
    pub fn observations(&self) -> Vec<WifiDetail> {
        self.snapshot().clone()
    }

    /// Number of stored access points occupying `channel`
    pub fn count(&self, channel: &WifiChannel) -> usize {
        self.count_in(&self.snapshot(), channel)
    }

    /// Strongest signal on `channel` from networks other than the connected one
    pub fn strength(&self, channel: &WifiChannel) -> Strength {
        self.strength_in(&self.snapshot(), channel)
    }

    /// Every candidate with its count, least congested first.
    ///
    /// Channels with equal counts keep their order from `candidates`.
    pub fn best_channels(&self, candidates: &[WifiChannel]) -> Vec<ChannelApCount> {
        let mut counts: Vec<ChannelApCount> = {
            let details = self.snapshot();
            candidates
                .iter()
                .map(|channel| ChannelApCount {
                    channel: *channel,
                    count: self.count_in(&details, channel),
                })
                .collect()
        };
        counts.sort_by_key(|c| c.count);
        counts
    }

    /// Candidates quiet enough to switch to, least congested first.
    ///
    /// Drops every channel whose interference is above
    /// [`RatingConfig::max_interference`].
    pub fn recommended_channels(&self, candidates: &[WifiChannel]) -> Vec<ChannelApCount> {
        let mut counts: Vec<ChannelApCount> = {
            let details = self.snapshot();
            candidates
                .iter()
                .filter(|channel| self.strength_in(&details, channel) <= self.config.max_interference)
                .map(|channel| ChannelApCount {
                    channel: *channel,
                    count: self.count_in(&details, channel),
                })
                .collect()
        };
        counts.sort_by_key(|c| c.count);
        counts
    }

    /// Count and strength for each candidate, in candidate order
    pub fn channel_scores(&self, candidates: &[WifiChannel]) -> Vec<ChannelScore> {
        let details = self.snapshot();
        candidates
            .iter()
            .map(|channel| ChannelScore {
                channel: *channel,
                count: self.count_in(&details, channel),
                strength: self.strength_in(&details, channel),
            })
            .collect()
    }

    fn snapshot(&self) -> RwLockReadGuard<'_, Vec<WifiDetail>> {
        self.details.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn occupying<'a>(
        &'a self,
        details: &'a [WifiDetail],
        channel: &'a WifiChannel,
    ) -> impl Iterator<Item = &'a WifiDetail> + 'a {
        let frequency = self.nominal_frequency(channel);
        details.iter().filter(move |d| {
            d.channel(&self.config.band_plan).is_some() && d.signal.in_range(frequency)
        })
    }

    /// Frequency the plan assigns to `channel`'s number, falling back to the
    /// one carried by the value for numbers outside the plan
    fn nominal_frequency(&self, channel: &WifiChannel) -> u32 {
        self.config
            .band_plan
            .channel_by_number_any(channel.number)
            .map_or(channel.frequency, |c| c.frequency)
    }

    fn count_in(&self, details: &[WifiDetail], channel: &WifiChannel) -> usize {
        self.occupying(details, channel).count()
    }

    fn strength_in(&self, details: &[WifiDetail], channel: &WifiChannel) -> Strength {
        self.occupying(details, channel)
            .filter(|d| !d.is_connected())
            .map(|d| d.strength(&self.config.thresholds))
            .max()
            .unwrap_or(Strength::Zero)
    }
}
