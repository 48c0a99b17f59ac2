//! Small numeric and formatting helpers shared by the simulator and the reports

/// Safely calculates the win rate from wins and games
///
/// Returns 0.0 if no games were played.
pub fn win_rate(wins: u64, games: u64) -> f64 {
    if games == 0 {
        return 0.0;
    }
    wins as f64 / games as f64
}

/// Formats a count with comma thousands separators, e.g. `10000` as `10,000`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats a fraction as a percentage with one decimal, e.g. `0.6667` as `66.7%`
pub fn percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Chunk size giving roughly one hundred progress updates over `num_games`
pub fn default_chunk_size(num_games: usize) -> usize {
    (num_games / 100).max(1)
}
