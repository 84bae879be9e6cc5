use crate::band::{BandPlan, WifiChannel, WifiWidth};
use color_eyre::Result;
use std::fmt;

/// Coarse signal category, weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Strength {
    #[default]
    Zero,
    One,
    Two,
    Three,
    Four,
}

impl Strength {
    pub const ALL: [Strength; 5] = [
        Strength::Zero,
        Strength::One,
        Strength::Two,
        Strength::Three,
        Strength::Four,
    ];

    pub fn level(&self) -> u8 {
        *self as u8
    }

    pub fn from_level(level: u8) -> Option<Self> {
        Self::ALL.get(usize::from(level)).copied()
    }

    pub fn bars(&self) -> String {
        let filled = usize::from(self.level());
        let empty = Self::ALL.len() - 1 - filled;
        format!("{}{}", "\u{2593}".repeat(filled), "\u{2591}".repeat(empty))
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strength::Zero => write!(f, "None"),
            Strength::One => write!(f, "Weak"),
            Strength::Two => write!(f, "Fair"),
            Strength::Three => write!(f, "Good"),
            Strength::Four => write!(f, "Excellent"),
        }
    }
}

/// dBm cut points mapping a raw level to a [`Strength`].
///
/// Cuts are held strongest first. A level takes the strength of the first cut
/// it reaches and falls back to [`Strength::Zero`] below the last one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthThresholds {
    cuts: Vec<(i32, Strength)>,
}

impl StrengthThresholds {
    pub fn new(cuts: Vec<(i32, Strength)>) -> Result<Self> {
        for pair in cuts.windows(2) {
            let (level_a, strength_a) = pair[0];
            let (level_b, strength_b) = pair[1];
            if level_a <= level_b || strength_a <= strength_b {
                return Err(color_eyre::eyre::eyre!(
                    "Strength cuts must descend: ({} dBm, {:?}) before ({} dBm, {:?})",
                    level_a,
                    strength_a,
                    level_b,
                    strength_b
                ));
            }
        }
        Ok(Self { cuts })
    }

    pub fn strength(&self, level: i32) -> Strength {
        self.cuts
            .iter()
            .find(|(min, _)| level >= *min)
            .map(|(_, strength)| *strength)
            .unwrap_or(Strength::Zero)
    }

    /// Parse `dbm:level` pairs such as `-55:4,-66:3,-77:2,-88:1`
    pub fn parse(text: &str) -> Result<Self> {
        let cuts = text
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| -> Result<(i32, Strength)> {
                let (dbm, level) = part
                    .split_once(':')
                    .ok_or_else(|| color_eyre::eyre::eyre!("Expected dbm:level, got {:?}", part))?;
                let dbm = dbm
                    .trim()
                    .parse::<i32>()
                    .map_err(|e| color_eyre::eyre::eyre!("Invalid dBm in {:?}: {}", part, e))?;
                let strength = level
                    .trim()
                    .parse::<u8>()
                    .ok()
                    .and_then(Strength::from_level)
                    .ok_or_else(|| color_eyre::eyre::eyre!("Invalid strength level in {:?}", part))?;
                Ok((dbm, strength))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(cuts)
    }
}

impl Default for StrengthThresholds {
    /// Five levels spread over -100..-55 dBm, the usual RSSI bucketing on Android
    fn default() -> Self {
        Self {
            cuts: vec![
                (-55, Strength::Four),
                (-66, Strength::Three),
                (-77, Strength::Two),
                (-88, Strength::One),
            ],
        }
    }
}

/// Radio-level facts about one observed access point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifiSignal {
    pub primary_frequency: u32,
    pub center_frequency: u32,
    pub width: WifiWidth,
    /// dBm, more negative is weaker
    pub level: i32,
    pub is_80211mc: bool,
}

impl WifiSignal {
    pub fn new(
        primary_frequency: u32,
        center_frequency: u32,
        width: WifiWidth,
        level: i32,
        is_80211mc: bool,
    ) -> Self {
        Self {
            primary_frequency,
            center_frequency,
            width,
            level,
            is_80211mc,
        }
    }

    pub fn center_channel(&self, plan: &BandPlan) -> Option<WifiChannel> {
        plan.channel_by_frequency(self.center_frequency)
    }

    pub fn primary_channel(&self, plan: &BandPlan) -> Option<WifiChannel> {
        plan.channel_by_frequency(self.primary_frequency)
    }

    pub fn frequency_start(&self) -> u32 {
        self.center_frequency.saturating_sub(self.width.half())
    }

    pub fn frequency_end(&self) -> u32 {
        self.center_frequency.saturating_add(self.width.half())
    }

    /// Whether `frequency` falls inside the span this signal occupies
    pub fn in_range(&self, frequency: u32) -> bool {
        (self.frequency_start()..=self.frequency_end()).contains(&frequency)
    }

    pub fn strength(&self, thresholds: &StrengthThresholds) -> Strength {
        thresholds.strength(self.level)
    }
}
