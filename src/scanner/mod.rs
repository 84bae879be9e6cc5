mod platform;

pub use platform::{enable_demo_mode, is_demo_mode, scan_networks};

use crate::band::{BandPlan, WifiWidth};
use crate::model::{WifiAdditional, WifiConnection, WifiDetail};
use crate::signal::WifiSignal;

/// One access point as the platform scanner reports it, before mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawNetwork {
    pub ssid: String,
    pub mac: String,
    pub channel: u16,
    pub signal_dbm: i32,
    pub security: String,
}

impl RawNetwork {
    /// Map onto the band plan and flag it if it is the connected network.
    ///
    /// Scanners report channels, not frequencies, so both frequencies are the
    /// channel's nominal one and the width is assumed to be 20 MHz. An unknown
    /// channel becomes frequency 0, which occupies no channel of the plan.
    pub fn into_detail(self, plan: &BandPlan, connected_bssid: Option<&str>) -> WifiDetail {
        let frequency = plan
            .channel_by_number_any(self.channel)
            .map(|c| c.frequency)
            .unwrap_or(0);
        let signal = WifiSignal::new(frequency, frequency, WifiWidth::Mhz20, self.signal_dbm, false);

        let is_connected = connected_bssid.is_some_and(|b| b.eq_ignore_ascii_case(&self.mac));
        let additional = if is_connected {
            WifiAdditional::connected(WifiConnection::new(self.ssid.clone(), self.mac.clone()))
        } else {
            WifiAdditional::default()
        };

        WifiDetail::new(self.ssid, self.mac, signal, additional).with_capabilities(self.security)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(channel: u16, mac: &str) -> RawNetwork {
        RawNetwork {
            ssid: "Cafe".to_string(),
            mac: mac.to_string(),
            channel,
            signal_dbm: -62,
            security: "WPA2".to_string(),
        }
    }

    #[test]
    fn test_into_detail_maps_channel() {
        let plan = BandPlan::default();
        let detail = raw(6, "aa:bb:cc:dd:ee:ff").into_detail(&plan, None);
        assert_eq!(detail.signal.center_frequency, 2437);
        assert_eq!(detail.signal.primary_frequency, 2437);
        assert_eq!(detail.signal.level, -62);
        assert_eq!(detail.capabilities, "WPA2");
        assert!(!detail.is_connected());

        let detail = raw(149, "aa:bb:cc:dd:ee:ff").into_detail(&plan, None);
        assert_eq!(detail.signal.center_frequency, 5745);
    }

    #[test]
    fn test_unknown_channel_is_unmapped() {
        let plan = BandPlan::default();
        let detail = raw(0, "aa:bb:cc:dd:ee:ff").into_detail(&plan, None);
        assert_eq!(detail.signal.center_frequency, 0);
        assert_eq!(detail.channel(&plan), None);
    }

    #[test]
    fn test_connected_match_ignores_case() {
        let plan = BandPlan::default();
        let detail = raw(1, "aa:bb:cc:dd:ee:ff").into_detail(&plan, Some("AA:BB:CC:DD:EE:FF"));
        assert!(detail.is_connected());
        let detail = raw(1, "aa:bb:cc:dd:ee:00").into_detail(&plan, Some("AA:BB:CC:DD:EE:FF"));
        assert!(!detail.is_connected());
    }
}
