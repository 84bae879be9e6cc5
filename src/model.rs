use crate::band::{BandPlan, WifiChannel};
use crate::signal::{Strength, StrengthThresholds, WifiSignal};
use chrono::{DateTime, Utc};

/// The network the device is currently associated with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifiConnection {
    pub ssid: String,
    pub bssid: String,
    pub ip_address: Option<String>,
    /// Mbps
    pub link_speed: Option<u32>,
}

impl WifiConnection {
    pub fn new(ssid: impl Into<String>, bssid: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            bssid: bssid.into(),
            ip_address: None,
            link_speed: None,
        }
    }
}

/// Metadata attached to an observation beyond what the radio reports
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WifiAdditional {
    pub vendor_name: String,
    pub connection: Option<WifiConnection>,
}

impl WifiAdditional {
    pub fn connected(connection: WifiConnection) -> Self {
        Self {
            vendor_name: String::new(),
            connection: Some(connection),
        }
    }
}

/// One access point seen in a scan
#[derive(Debug, Clone, PartialEq)]
pub struct WifiDetail {
    pub ssid: String,
    /// Hardware address, `xx:xx:xx:xx:xx:xx` in either case
    pub bssid: String,
    /// Raw security/capabilities string as reported by the scanner
    pub capabilities: String,
    pub signal: WifiSignal,
    pub additional: WifiAdditional,
    pub last_seen: DateTime<Utc>,
}

impl WifiDetail {
    pub fn new(
        ssid: impl Into<String>,
        bssid: impl Into<String>,
        signal: WifiSignal,
        additional: WifiAdditional,
    ) -> Self {
        Self {
            ssid: ssid.into(),
            bssid: bssid.into(),
            capabilities: String::new(),
            signal,
            additional,
            last_seen: Utc::now(),
        }
    }

    pub fn with_capabilities(mut self, capabilities: impl Into<String>) -> Self {
        self.capabilities = capabilities.into();
        self
    }

    pub fn is_connected(&self) -> bool {
        self.additional.connection.is_some()
    }

    pub fn channel(&self, plan: &BandPlan) -> Option<WifiChannel> {
        self.signal.center_channel(plan)
    }

    pub fn strength(&self, thresholds: &StrengthThresholds) -> Strength {
        self.signal.strength(thresholds)
    }
}

/// How many access points occupy a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelApCount {
    pub channel: WifiChannel,
    pub count: usize,
}

/// One row of the per-channel table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelScore {
    pub channel: WifiChannel,
    pub count: usize,
    pub strength: Strength,
}
