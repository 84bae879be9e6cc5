//! End-to-end scenarios over the public API

use wifi_channel_rating::{
    AddressMatch, BandPlan, ChannelRating, RatingConfig, Strength, WifiAdditional, WifiBand,
    WifiConnection, WifiDetail, WifiSignal, WifiWidth,
};

fn ap(ssid: &str, bssid: &str, frequency: u32, level: i32) -> WifiDetail {
    WifiDetail::new(
        ssid,
        bssid,
        WifiSignal::new(frequency, frequency, WifiWidth::Mhz20, level, true),
        WifiAdditional::default(),
    )
}

#[test]
fn four_access_points_on_three_channels() {
    let connected = WifiDetail::new(
        "SSID1",
        "20:cf:30:ce:1d:71",
        WifiSignal::new(2432, 2432, WifiWidth::Mhz20, -50, true),
        WifiAdditional::connected(WifiConnection::new("SSID1", "20:cf:30:ce:1d:71")),
    );
    let rating = ChannelRating::default();
    rating.set_observations(vec![
        connected,
        ap("SSID2", "58:6d:8f:fa:ae:c0", 2442, -70),
        ap("SSID3", "84:94:8c:9d:40:68", 2452, -60),
        ap("SSID3", "64:A4:8c:90:10:12", 2452, -80),
    ]);

    let plan = &rating.config().band_plan;
    let ch = |n| plan.channel_by_number(WifiBand::Ghz2, n).unwrap();
    assert_eq!(rating.count(&ch(5)), 2);
    assert_eq!(rating.count(&ch(7)), 4);
    assert_eq!(rating.count(&ch(9)), 3);

    let best = rating.best_channels(&plan.channels(WifiBand::Ghz2));
    let zero: Vec<u16> = best
        .iter()
        .take_while(|c| c.count == 0)
        .map(|c| c.channel.number)
        .collect();
    assert_eq!(zero, vec![1, 2, 12, 13, 14]);
    assert_eq!(best.last().map(|c| (c.channel.number, c.count)), Some((7, 4)));
}

#[test]
fn same_address_keeps_stronger_observation() {
    let rating = ChannelRating::default();
    rating.set_observations(vec![
        ap("Weak", "aa:bb:cc:dd:ee:ff", 2437, -80),
        ap("Strong", "AA:BB:CC:DD:EE:FF", 2437, -50),
    ]);

    let stored = rating.observations();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].signal.level, -50);
    assert_eq!(stored[0].ssid, "Strong");
}

#[test]
fn empty_input_rates_every_channel_zero() {
    let rating = ChannelRating::default();
    rating.set_observations(Vec::new());

    let plan = BandPlan::default();
    for band in [WifiBand::Ghz2, WifiBand::Ghz5] {
        for channel in plan.channels(band) {
            assert_eq!(rating.count(&channel), 0);
            assert_eq!(rating.strength(&channel), Strength::Zero);
        }
    }
}

#[test]
fn five_ghz_channels_do_not_see_two_ghz_access_points() {
    let rating = ChannelRating::default();
    rating.set_observations(vec![
        ap("Upstairs", "aa:aa:aa:aa:aa:01", 2437, -40),
        ap("Office", "aa:aa:aa:aa:aa:02", 5180, -60),
        ap("Office-5G", "aa:aa:aa:aa:aa:03", 5200, -65),
    ]);

    let plan = &rating.config().band_plan;
    let channels = plan.channels(WifiBand::Ghz5);
    let best = rating.best_channels(&channels);
    assert_eq!(best.len(), channels.len());
    assert_eq!(best.iter().map(|c| c.count).sum::<usize>(), 2);

    let ch36 = plan.channel_by_number(WifiBand::Ghz5, 36).unwrap();
    assert_eq!(rating.count(&ch36), 1);
    assert_eq!(rating.strength(&ch36), Strength::Three);
}

#[test]
fn same_radio_matching_collapses_virtual_access_points() {
    let rating = ChannelRating::new(RatingConfig::default().with_address_match(AddressMatch::SameRadio));
    rating.set_observations(vec![
        ap("Hotel_Guest", "12:34:56:78:9a:bc", 2412, -48),
        ap("Hotel_Staff", "16:34:56:78:9A:BD", 2412, -45),
        ap("Cafe", "aa:bb:cc:dd:ee:ff", 2462, -70),
    ]);

    let stored = rating.observations();
    let ssids: Vec<&str> = stored.iter().map(|d| d.ssid.as_str()).collect();
    assert_eq!(ssids, vec!["Hotel_Staff", "Cafe"]);
}
