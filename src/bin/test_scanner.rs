//! Quick test for the real WiFi scanner feeding the channel rating

use wifi_channel_rating::scanner::scan_networks;
use wifi_channel_rating::{ChannelRating, WifiBand};

#[tokio::main]
async fn main() {
    println!("Testing real WiFi scanner (no demo mode)...\n");

    let rating = ChannelRating::default();
    let plan = &rating.config().band_plan;

    match scan_networks(plan, None).await {
        Ok(details) => {
            println!("SUCCESS! Found {} networks:\n", details.len());
            for (i, detail) in details.iter().enumerate() {
                let channel = detail
                    .channel(plan)
                    .map(|c| c.number.to_string())
                    .unwrap_or_else(|| "?".to_string());
                println!(
                    "{}. {} ({})\n   Channel: {} | Signal: {} dBm | Security: {}",
                    i + 1,
                    detail.ssid,
                    detail.bssid,
                    channel,
                    detail.signal.level,
                    detail.capabilities
                );
            }

            rating.set_observations(details);
            println!("\nAfter dedup: {} access points", rating.observations().len());
            for band in [WifiBand::Ghz2, WifiBand::Ghz5] {
                let channels = plan.channels(band);
                let best: Vec<String> = rating
                    .best_channels(&channels)
                    .iter()
                    .take(3)
                    .map(|c| format!("{}:{}", c.channel.number, c.count))
                    .collect();
                println!("{} least congested: {}", band, best.join(" "));
            }
        }
        Err(e) => {
            println!("FAILED: {}", e);
        }
    }
}
