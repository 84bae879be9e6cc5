use crate::band::BandPlan;
use crate::model::WifiDetail;
use crate::scanner::RawNetwork;
use color_eyre::Result;
#[cfg(target_os = "macos")]
use std::process::Command;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info};

static DEMO_MODE: AtomicBool = AtomicBool::new(false);

/// Enable demo mode with simulated networks
pub fn enable_demo_mode() {
    DEMO_MODE.store(true, Ordering::SeqCst);
}

/// Check if demo mode is enabled
pub fn is_demo_mode() -> bool {
    DEMO_MODE.load(Ordering::SeqCst)
}

/// Scan WiFi networks using Swift CoreWLAN helper (works on modern macOS)
#[cfg(target_os = "macos")]
async fn scan_macos_swift() -> Result<Vec<RawNetwork>> {
    let script_paths = [
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.join("../scripts/wifi_scan.swift")))
            .unwrap_or_default(),
        std::path::PathBuf::from("scripts/wifi_scan.swift"),
        std::path::PathBuf::from("./scripts/wifi_scan.swift"),
    ];

    let script_path = script_paths
        .iter()
        .find(|p| p.exists())
        .ok_or_else(|| color_eyre::eyre::eyre!("Swift scanner script not found"))?
        .clone();

    let output = tokio::task::spawn_blocking(move || Command::new("swift").arg(&script_path).output())
        .await??;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(color_eyre::eyre::eyre!("Swift scanner failed: {}", stderr));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(parse_swift_scanner_output(&stdout))
}

/// Parse Swift scanner output: SSID|BSSID|CHANNEL|RSSI|SECURITY
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn parse_swift_scanner_output(output: &str) -> Vec<RawNetwork> {
    output
        .lines()
        .filter_map(|line| {
            let parts: Vec<&str> = line.split('|').collect();
            if parts.len() < 5 {
                return None;
            }
            let ssid = if parts[0] == "<Hidden>" { "" } else { parts[0] };
            Some(RawNetwork {
                ssid: ssid.to_string(),
                mac: parts[1].to_string(),
                channel: parts[2].trim().parse::<u16>().unwrap_or(0),
                signal_dbm: parts[3].trim().parse::<i32>().unwrap_or(-100),
                security: parts[4].trim().to_string(),
            })
        })
        .collect()
}

/// Take one scan snapshot and turn it into observations.
///
/// `connected_bssid` marks the network the device is associated with.
pub async fn scan_networks(plan: &BandPlan, connected_bssid: Option<&str>) -> Result<Vec<WifiDetail>> {
    let raw = scan_raw().await?;
    debug!(count = raw.len(), "Scan returned networks");
    Ok(raw
        .into_iter()
        .map(|network| network.into_detail(plan, connected_bssid))
        .collect())
}

async fn scan_raw() -> Result<Vec<RawNetwork>> {
    if is_demo_mode() {
        return Ok(generate_demo_networks());
    }

    // Try Swift CoreWLAN scanner first (works on Sonoma/Sequoia/Tahoe)
    #[cfg(target_os = "macos")]
    {
        match scan_macos_swift().await {
            Ok(networks) if !networks.is_empty() => return Ok(networks),
            Ok(_) => debug!("Swift scanner returned no networks"),
            Err(e) => debug!(error = %e, "Swift scanner unavailable"),
        }
    }

    info!("Scanning with wifiscanner");
    let result = tokio::task::spawn_blocking(wifiscanner::scan).await?;

    match result {
        Ok(wifi_networks) => Ok(wifi_networks
            .into_iter()
            .map(|wifi| RawNetwork {
                channel: wifi.channel.trim().parse::<u16>().unwrap_or(0),
                signal_dbm: parse_signal(&wifi.signal_level),
                ssid: wifi.ssid,
                mac: wifi.mac,
                security: wifi.security,
            })
            .collect()),
        Err(e) => Err(color_eyre::eyre::eyre!(
            "WiFi scan failed: {:?}\n\nTry running with --demo flag for simulated data.",
            e
        )),
    }
}

/// Generate simulated networks for demo mode
fn generate_demo_networks() -> Vec<RawNetwork> {
    use std::time::{SystemTime, UNIX_EPOCH};

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();

    let base_networks = [
        ("CoffeeShop_Free", "Open", 36, -42, "A1:B2:C3:D4:E5:F6"),
        ("Airport_WiFi", "Open", 6, -55, "11:22:33:44:55:66"),
        ("Starbucks_WiFi", "WPA2", 11, -62, "AA:BB:CC:DD:EE:FF"),
        ("Hotel_Guest", "Open", 1, -48, "12:34:56:78:9A:BC"),
        ("Library_Public", "Open", 149, -58, "DE:AD:BE:EF:CA:FE"),
        ("FastFood_Free", "Open", 6, -70, "FE:ED:FA:CE:00:11"),
        ("Mall_WiFi", "WPA2", 44, -65, "22:33:44:55:66:77"),
        ("Neighbor_5G", "WPA3", 36, -78, "88:99:AA:BB:CC:DD"),
        ("xfinitywifi", "Open", 1, -72, "EE:FF:00:11:22:33"),
        ("ATT_WiFi", "WPA2", 11, -80, "44:55:66:77:88:99"),
        ("", "WPA2", 6, -85, "00:11:22:33:44:55"),
        // Guest network on the same radio as Hotel_Guest
        ("Hotel_Staff", "WPA2", 1, -50, "16:34:56:78:9A:BD"),
    ];

    base_networks
        .into_iter()
        .enumerate()
        .map(|(idx, (ssid, security, channel, base_signal, mac))| {
            let variance = ((seed.wrapping_add(idx as u64) % 7) as i32) - 3;
            RawNetwork {
                ssid: ssid.to_string(),
                mac: mac.to_string(),
                channel,
                signal_dbm: base_signal + variance,
                security: security.to_string(),
            }
        })
        .collect()
}

fn parse_signal(signal: &str) -> i32 {
    signal
        .trim()
        .trim_end_matches(" dBm")
        .trim_end_matches('%')
        .split_whitespace()
        .next()
        .unwrap_or("-100")
        .parse::<i32>()
        .unwrap_or(-100)
}
