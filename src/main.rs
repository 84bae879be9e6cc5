use clap::{Parser, ValueEnum};
use color_eyre::Result;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wifi_channel_rating::report::{render_recommendations, render_scores};
use wifi_channel_rating::scanner::{enable_demo_mode, scan_networks};
use wifi_channel_rating::{AddressMatch, ChannelRating, RatingConfig, Strength, StrengthThresholds, WifiBand};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BandArg {
    #[value(name = "2.4")]
    Ghz2,
    #[value(name = "5")]
    Ghz5,
}

impl From<BandArg> for WifiBand {
    fn from(band: BandArg) -> Self {
        match band {
            BandArg::Ghz2 => WifiBand::Ghz2,
            BandArg::Ghz5 => WifiBand::Ghz5,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AddressMatchArg {
    Exact,
    SameRadio,
}

impl From<AddressMatchArg> for AddressMatch {
    fn from(arg: AddressMatchArg) -> Self {
        match arg {
            AddressMatchArg::Exact => AddressMatch::Exact,
            AddressMatchArg::SameRadio => AddressMatch::SameRadio,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "wifi-channel-rating")]
#[command(author = "Aviv E")]
#[command(version = "0.1.0")]
#[command(about = "Rate WiFi channels by congestion and suggest the quietest ones")]
struct Args {
    /// Refresh interval in seconds
    #[arg(short, long, default_value = "5")]
    interval: u64,

    /// Scan once, print the ratings and exit
    #[arg(long)]
    once: bool,

    /// Run with simulated WiFi networks (for testing/demo)
    #[arg(short, long)]
    demo: bool,

    /// Band whose channels are rated
    #[arg(short, long, value_enum, default_value = "2.4")]
    band: BandArg,

    /// BSSID of the network this device is connected to
    #[arg(short, long)]
    connected: Option<String>,

    /// How access points with similar addresses are grouped
    #[arg(long, value_enum, default_value = "exact")]
    address_match: AddressMatchArg,

    /// Highest interference level (0-4) a recommended channel may show
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u8).range(0..=4))]
    max_interference: u8,

    /// Strength cut points as dbm:level pairs, strongest first
    #[arg(long, allow_hyphen_values = true, default_value = "-55:4,-66:3,-77:2,-88:1")]
    thresholds: String,

    /// Number of recommended channels to print
    #[arg(short, long, default_value = "5")]
    top: usize,
}

impl Args {
    fn rating_config(&self) -> Result<RatingConfig> {
        let max_interference = Strength::from_level(self.max_interference).ok_or_else(|| {
            color_eyre::eyre::eyre!("Invalid interference level {}", self.max_interference)
        })?;
        let thresholds = StrengthThresholds::parse(&self.thresholds)?;
        Ok(RatingConfig::default()
            .with_thresholds(thresholds)
            .with_address_match(self.address_match.into())
            .with_max_interference(max_interference))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let args = Args::parse();

    if args.demo {
        enable_demo_mode();
    }

    let rating = ChannelRating::new(args.rating_config()?);
    let band: WifiBand = args.band.into();
    let candidates = rating.config().band_plan.channels(band);
    info!(
        %band,
        channels = candidates.len(),
        address_match = %rating.config().address_match,
        "Starting channel rating"
    );

    let mut ticker = tokio::time::interval(Duration::from_secs(args.interval.max(1)));

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, exiting");
                break;
            }
        }

        match scan_networks(&rating.config().band_plan, args.connected.as_deref()).await {
            Ok(details) => rating.set_observations(details),
            Err(e) => {
                if args.once {
                    return Err(e);
                }
                warn!(error = %e, "Scan failed, keeping previous ratings");
                continue;
            }
        }

        println!("{}", render_scores(&rating.channel_scores(&candidates)));
        println!(
            "{}\n",
            render_recommendations(&rating.recommended_channels(&candidates), args.top)
        );

        if args.once {
            break;
        }
    }

    Ok(())
}
