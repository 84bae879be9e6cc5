use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Spacing between adjacent channel numbers, in MHz
const CHANNEL_SPACING_MHZ: u32 = 5;
/// How far a reported frequency may sit outside a segment and still map to it
const FREQUENCY_OFFSET_MHZ: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WifiBand {
    Ghz2,
    Ghz5,
}

impl fmt::Display for WifiBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WifiBand::Ghz2 => write!(f, "2.4 GHz"),
            WifiBand::Ghz5 => write!(f, "5 GHz"),
        }
    }
}

/// Channel width reported for an access point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WifiWidth {
    #[default]
    Mhz20,
    Mhz40,
    Mhz80,
    Mhz160,
    /// 80+80 MHz, two non-contiguous 80 MHz segments
    Mhz80Plus,
}

impl WifiWidth {
    /// Distance from the center frequency to either edge of the occupied span
    pub fn half(&self) -> u32 {
        match self {
            WifiWidth::Mhz20 => 10,
            WifiWidth::Mhz40 => 20,
            WifiWidth::Mhz80 => 40,
            WifiWidth::Mhz160 => 80,
            WifiWidth::Mhz80Plus => 40,
        }
    }
}

impl fmt::Display for WifiWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WifiWidth::Mhz20 => write!(f, "20 MHz"),
            WifiWidth::Mhz40 => write!(f, "40 MHz"),
            WifiWidth::Mhz80 => write!(f, "80 MHz"),
            WifiWidth::Mhz160 => write!(f, "160 MHz"),
            WifiWidth::Mhz80Plus => write!(f, "80+80 MHz"),
        }
    }
}

/// A numbered channel and its nominal frequency.
///
/// Two channels are equal when their numbers are equal; the frequency is
/// informational and never part of the comparison.
#[derive(Debug, Clone, Copy)]
pub struct WifiChannel {
    pub number: u16,
    pub frequency: u32,
}

impl WifiChannel {
    pub const fn new(number: u16, frequency: u32) -> Self {
        Self { number, frequency }
    }
}

impl PartialEq for WifiChannel {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for WifiChannel {}

impl Hash for WifiChannel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.number.hash(state);
    }
}

impl PartialOrd for WifiChannel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WifiChannel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.number.cmp(&other.number)
    }
}

impl fmt::Display for WifiChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} MHz)", self.number, self.frequency)
    }
}

/// A run of evenly spaced channels, e.g. 2.4 GHz channels 1 through 13
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelSegment {
    pub first: WifiChannel,
    pub last: WifiChannel,
    /// Channel-number increment when listing the segment's channels
    pub step: u16,
}

impl ChannelSegment {
    pub const fn new(first: WifiChannel, last: WifiChannel, step: u16) -> Self {
        Self { first, last, step }
    }

    fn contains_frequency(&self, frequency: u32) -> bool {
        frequency.saturating_add(FREQUENCY_OFFSET_MHZ) >= self.first.frequency
            && frequency <= self.last.frequency.saturating_add(FREQUENCY_OFFSET_MHZ)
    }

    fn contains_number(&self, number: u16) -> bool {
        (self.first.number..=self.last.number).contains(&number)
    }

    fn channel_at(&self, number: u16) -> WifiChannel {
        let offset = u32::from(number - self.first.number) * CHANNEL_SPACING_MHZ;
        WifiChannel::new(number, self.first.frequency + offset)
    }

    /// Nearest channel to `frequency`, clamped to the segment
    fn nearest(&self, frequency: u32) -> WifiChannel {
        let delta = i64::from(frequency) - i64::from(self.first.frequency);
        let spacing = i64::from(CHANNEL_SPACING_MHZ);
        let steps = (delta + spacing / 2).div_euclid(spacing);
        let number = (i64::from(self.first.number) + steps)
            .clamp(i64::from(self.first.number), i64::from(self.last.number));
        self.channel_at(number as u16)
    }

    fn channels(&self) -> impl Iterator<Item = WifiChannel> + '_ {
        (self.first.number..=self.last.number)
            .step_by(usize::from(self.step.max(1)))
            .map(|number| self.channel_at(number))
    }
}

/// Channel plan of a single band
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandChannels {
    pub band: WifiBand,
    pub segments: Vec<ChannelSegment>,
}

/// Mapping between frequencies and channel numbers for every supported band.
///
/// Built once at start-up and handed to the rating through
/// [`RatingConfig`](crate::config::RatingConfig).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandPlan {
    bands: Vec<BandChannels>,
}

impl BandPlan {
    pub fn new(bands: Vec<BandChannels>) -> Self {
        Self { bands }
    }

    /// Map a frequency in MHz to its channel, or None when no band covers it
    pub fn channel_by_frequency(&self, frequency: u32) -> Option<WifiChannel> {
        self.bands
            .iter()
            .flat_map(|b| b.segments.iter())
            .find(|s| s.contains_frequency(frequency))
            .map(|s| s.nearest(frequency))
    }

    pub fn channel_by_number(&self, band: WifiBand, number: u16) -> Option<WifiChannel> {
        self.band(band)?
            .segments
            .iter()
            .find(|s| s.contains_number(number))
            .map(|s| s.channel_at(number))
    }

    /// Look a channel number up in every band, lowest band first
    pub fn channel_by_number_any(&self, number: u16) -> Option<WifiChannel> {
        self.bands
            .iter()
            .find_map(|b| self.channel_by_number(b.band, number))
    }

    pub fn band_of(&self, frequency: u32) -> Option<WifiBand> {
        self.bands
            .iter()
            .find(|b| b.segments.iter().any(|s| s.contains_frequency(frequency)))
            .map(|b| b.band)
    }

    /// All channels of a band in plan order
    pub fn channels(&self, band: WifiBand) -> Vec<WifiChannel> {
        self.band(band)
            .map(|b| b.segments.iter().flat_map(|s| s.channels()).collect())
            .unwrap_or_default()
    }

    fn band(&self, band: WifiBand) -> Option<&BandChannels> {
        self.bands.iter().find(|b| b.band == band)
    }
}

impl Default for BandPlan {
    fn default() -> Self {
        Self::new(vec![
            BandChannels {
                band: WifiBand::Ghz2,
                segments: vec![
                    ChannelSegment::new(WifiChannel::new(1, 2412), WifiChannel::new(13, 2472), 1),
                    ChannelSegment::new(WifiChannel::new(14, 2484), WifiChannel::new(14, 2484), 1),
                ],
            },
            BandChannels {
                band: WifiBand::Ghz5,
                segments: vec![
                    ChannelSegment::new(WifiChannel::new(36, 5180), WifiChannel::new(64, 5320), 4),
                    ChannelSegment::new(WifiChannel::new(100, 5500), WifiChannel::new(144, 5720), 4),
                    ChannelSegment::new(WifiChannel::new(149, 5745), WifiChannel::new(165, 5825), 4),
                ],
            },
        ])
    }
}
