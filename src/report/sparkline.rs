//! Trend glyph rendering.

/// Intensity glyphs, lowest to highest.
const LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Glyph used for a flat series (no range to map onto the levels).
const FLAT: char = '▄';

/// Default glyph width in characters.
pub const DEFAULT_WIDTH: usize = 12;

/// Render a price series as a trend glyph of at most `width` characters.
///
/// Series longer than `width` are downsampled by uniform stride; shorter
/// series render one glyph per point. Each sampled value maps linearly
/// onto the 8 intensity levels, so a strictly higher price never gets a
/// lower glyph than a strictly lower one. An empty series renders as an
/// empty string.
pub fn render(prices: &[f64], width: usize) -> String {
    if prices.is_empty() || width == 0 {
        return String::new();
    }

    let sampled: Vec<f64> = if prices.len() > width {
        (0..width).map(|i| prices[i * prices.len() / width]).collect()
    } else {
        prices.to_vec()
    };

    let lo = sampled.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = sampled.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if hi == lo {
        return std::iter::repeat(FLAT).take(sampled.len()).collect();
    }

    sampled
        .iter()
        .map(|v| {
            let index = ((v - lo) / (hi - lo) * 7.0).round() as usize;
            LEVELS[index.min(LEVELS.len() - 1)]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn level_of(glyph: char) -> usize {
        LEVELS.iter().position(|&c| c == glyph).unwrap()
    }

    #[test]
    fn test_empty_series_renders_empty() {
        assert_eq!(render(&[], DEFAULT_WIDTH), "");
    }

    #[test]
    fn test_flat_series_renders_uniform_run() {
        assert_eq!(render(&[42.0; 5], DEFAULT_WIDTH), "▄▄▄▄▄");
        assert_eq!(render(&[42.0; 30], DEFAULT_WIDTH), "▄".repeat(DEFAULT_WIDTH));
    }

    #[test]
    fn test_extremes_map_to_first_and_last_level() {
        let glyph = render(&[1.0, 8.0], DEFAULT_WIDTH);
        assert_eq!(glyph, "▁█");
    }

    #[test]
    fn test_increasing_series_is_non_decreasing() {
        let prices: Vec<f64> = (0..30).map(|i| 100.0 + f64::from(i) * 1.7).collect();
        let glyph = render(&prices, DEFAULT_WIDTH);
        let levels: Vec<usize> = glyph.chars().map(level_of).collect();
        assert!(levels.windows(2).all(|w| w[0] <= w[1]), "levels: {levels:?}");
    }

    #[test]
    fn test_long_series_downsampled_to_width() {
        let prices: Vec<f64> = (0..100).map(f64::from).collect();
        assert_eq!(render(&prices, DEFAULT_WIDTH).chars().count(), DEFAULT_WIDTH);
    }

    #[test]
    fn test_short_series_keeps_own_length() {
        assert_eq!(render(&[1.0, 2.0, 3.0], DEFAULT_WIDTH).chars().count(), 3);
    }

    #[test]
    fn test_downsample_takes_stride_indices() {
        // 24 points into width 12: every other point, starting at index 0.
        // Only even indices are sampled, so the odd-index spikes vanish and
        // the sampled series is flat.
        let mut prices = vec![0.0; 24];
        for (i, p) in prices.iter_mut().enumerate() {
            *p = if i % 2 == 0 { 10.0 } else { 99.0 };
        }
        assert_eq!(render(&prices, 12), "▄".repeat(12));
    }
}
