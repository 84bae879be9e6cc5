use crate::model::{ChannelApCount, ChannelScore};

/// Render the per-channel table: channel, frequency, AP count, interference
pub fn render_scores(scores: &[ChannelScore]) -> String {
    let header = format!("{:>7}  {:>9}  {:>3}  Interference\n", "Channel", "Freq", "APs");
    scores.iter().fold(header, |mut out, score| {
        out.push_str(&format!(
            "{:>7}  {:>5} MHz  {:>3}  {} {}\n",
            score.channel.number,
            score.channel.frequency,
            score.count,
            score.strength.bars(),
            score.strength
        ));
        out
    })
}

/// Render up to `limit` recommended channels on one line
pub fn render_recommendations(counts: &[ChannelApCount], limit: usize) -> String {
    if counts.is_empty() {
        return "No quiet channels found".to_string();
    }
    let channels: Vec<String> = counts
        .iter()
        .take(limit)
        .map(|c| format!("{} ({} AP)", c.channel.number, c.count))
        .collect();
    format!("Best channels: {}", channels.join(", "))
}
