//! Fixed-width screener report formatting.

use crate::state::InstrumentRecord;
use chrono::Local;
use rust_decimal::Decimal;

/// Placeholder for any value the provider did not supply.
const NA: &str = "N/A";

/// Inner width of the bordered header block.
const HEADER_WIDTH: usize = 78;

/// Company names longer than this are truncated.
const NAME_LIMIT: usize = 30;

/// Base table columns: title and content width.
const COLUMNS: [(&str, usize); 10] = [
    ("Symbol", 11),
    ("Company Name", 36),
    ("Bid", 8),
    ("Ask", 8),
    ("Exchange", 8),
    ("52Wk High", 12),
    ("52Wk Low", 12),
    ("Analyst Rating", 14),
    ("Dividend Yield", 14),
    ("Volume", 9),
];

/// Trend column, appended only when glyphs were requested.
const SPARKLINE_COLUMN: (&str, usize) = ("Sparkline", 13);

/// Renders normalized records into the fixed-width screener report.
pub struct ReportFormatter;

impl ReportFormatter {
    /// Render the full report: bordered header, table, narrative summary.
    ///
    /// `trends` carries one glyph per record (possibly empty, rendered as a
    /// blank cell); passing `None` omits the Sparkline column entirely.
    pub fn render(
        records: &[InstrumentRecord],
        trends: Option<&[String]>,
        label: &str,
    ) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let mut out = String::new();
        out.push_str(&Self::header(label, records.len(), &timestamp));
        out.push_str(&Self::table(records, trends));
        out.push_str(&Self::summary(label, records.len(), &timestamp));
        out
    }

    fn header(label: &str, count: usize, timestamp: &str) -> String {
        let bar = "═".repeat(HEADER_WIDTH);
        let mut out = String::new();
        out.push('\n');
        out.push_str(&format!("╔{bar}╗\n"));
        out.push_str(&Self::header_line_centered("STOCK SCREENER RESULTS"));
        out.push_str(&format!("╠{bar}╣\n"));
        out.push_str(&Self::header_line(&format!(
            "Screen Type: {}",
            title_case(label)
        )));
        out.push_str(&Self::header_line(&format!("Generated: {timestamp}")));
        out.push_str(&Self::header_line(&format!(
            "Results: {count} stocks found"
        )));
        out.push_str(&format!("╚{bar}╝\n"));
        out
    }

    fn header_line(text: &str) -> String {
        format!("║ {:<width$} ║\n", text, width = HEADER_WIDTH - 2)
    }

    fn header_line_centered(text: &str) -> String {
        format!("║ {:^width$} ║\n", text, width = HEADER_WIDTH - 2)
    }

    fn table(records: &[InstrumentRecord], trends: Option<&[String]>) -> String {
        let mut columns: Vec<(&str, usize)> = COLUMNS.to_vec();
        if trends.is_some() {
            columns.push(SPARKLINE_COLUMN);
        }

        let titles: Vec<String> = columns.iter().map(|(title, _)| title.to_string()).collect();

        let mut out = String::new();
        out.push_str(&Self::border(&columns, '┌', '┬', '┐'));
        out.push_str(&Self::row(&columns, &titles));
        out.push_str(&Self::border(&columns, '├', '┼', '┤'));
        for (i, record) in records.iter().enumerate() {
            let trend = trends.map(|t| t.get(i).cloned().unwrap_or_default());
            out.push_str(&Self::row(&columns, &Self::cells(record, trend)));
        }
        out.push_str(&Self::border(&columns, '└', '┴', '┘'));
        out
    }

    fn border(columns: &[(&str, usize)], left: char, mid: char, right: char) -> String {
        let spans: Vec<String> = columns
            .iter()
            .map(|(_, width)| "─".repeat(width + 2))
            .collect();
        format!("{left}{}{right}\n", spans.join(&mid.to_string()))
    }

    fn row(columns: &[(&str, usize)], cells: &[String]) -> String {
        let mut out = String::from("│");
        for ((_, width), cell) in columns.iter().zip(cells) {
            out.push_str(&format!(" {:<width$} │", cell, width = width));
        }
        out.push('\n');
        out
    }

    fn cells(record: &InstrumentRecord, trend: Option<String>) -> Vec<String> {
        let mut cells = vec![
            text(record.symbol.as_deref()),
            company_name(record.display_name.as_deref()),
            quote_price(record.bid),
            quote_price(record.ask),
            text(record.exchange.as_deref()),
            currency(record.fifty_two_week_high),
            currency(record.fifty_two_week_low),
            text(record.analyst_rating.as_deref()),
            percent(record.dividend_yield),
            volume(record.volume),
        ];
        if let Some(trend) = trend {
            // An absent trend is an empty cell, not "N/A".
            cells.push(trend);
        }
        cells
    }

    fn summary(label: &str, count: usize, timestamp: &str) -> String {
        let lower = label.to_lowercase();
        if lower.contains("london") || lower.contains("tomorrow") {
            Self::london_summary(count, timestamp)
        } else {
            Self::generic_summary(label, count, timestamp)
        }
    }

    fn generic_summary(label: &str, count: usize, timestamp: &str) -> String {
        format!(
            "\nSUMMARY:\n\
             • Total stocks analyzed: {count}\n\
             • Screen criteria: {}\n\
             • Data source: Yahoo Finance\n\
             • Last updated: {timestamp}\n\
             \n\
             TIPS:\n\
             • Bid/Ask prices show current market liquidity\n\
             • 52-week range indicates stock volatility\n\
             • Analyst ratings: 1.0 = Strong Buy, 5.0 = Strong Sell\n\
             • Dividend yield shows income potential\n",
            title_case(label)
        )
    }

    fn london_summary(count: usize, timestamp: &str) -> String {
        format!(
            "\nLONDON SESSION ANALYSIS:\n\
             • Total stocks analyzed: {count}\n\
             • Session focus: London trading hours (08:00-16:30 GMT)\n\
             • Data source: Yahoo Finance\n\
             • Last updated: {timestamp}\n\
             \n\
             LONDON SESSION TIPS:\n\
             • London session: 08:00-16:30 GMT (03:00-11:30 EST)\n\
             • Key markets: FTSE 100, European stocks, ADRs\n\
             • High volatility during London open (08:00 GMT)\n\
             • Watch for European economic data releases\n"
        )
    }
}

fn text(value: Option<&str>) -> String {
    value.unwrap_or(NA).to_string()
}

fn company_name(value: Option<&str>) -> String {
    let Some(name) = value else {
        return NA.to_string();
    };
    if name.chars().count() > NAME_LIMIT {
        let head: String = name.chars().take(NAME_LIMIT - 3).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}

/// Bid/ask: a zero quote means "no current quote" and renders "N/A".
fn quote_price(value: Option<Decimal>) -> String {
    match value {
        Some(v) if !v.is_zero() => format!("${v:.2}"),
        _ => NA.to_string(),
    }
}

fn currency(value: Option<Decimal>) -> String {
    match value {
        Some(v) => format!("${v:.2}"),
        None => NA.to_string(),
    }
}

fn percent(value: Option<Decimal>) -> String {
    match value {
        Some(v) => format!("{v:.2}%"),
        None => NA.to_string(),
    }
}

fn volume(value: Option<u64>) -> String {
    match value {
        Some(v) => abbreviate(v),
        None => NA.to_string(),
    }
}

/// Abbreviate a large count: 1e9 → "B", 1e6 → "M", 1e3 → "K".
fn abbreviate(value: u64) -> String {
    let v = value as f64;
    if v >= 1e9 {
        format!("{:.1}B", v / 1e9)
    } else if v >= 1e6 {
        format!("{:.1}M", v / 1e6)
    } else if v >= 1e3 {
        format!("{:.1}K", v / 1e3)
    } else {
        value.to_string()
    }
}

/// Underscores to spaces, each word capitalized.
fn title_case(label: &str) -> String {
    label
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn create_test_record(symbol: &str) -> InstrumentRecord {
        InstrumentRecord {
            symbol: Some(symbol.to_string()),
            display_name: Some("Apple Inc.".to_string()),
            bid: Some(dec!(185.50)),
            ask: Some(dec!(185.75)),
            exchange: Some("NMS".to_string()),
            fifty_two_week_high: Some(dec!(198.23)),
            fifty_two_week_low: Some(dec!(124.17)),
            analyst_rating: Some("1.8 - Buy".to_string()),
            dividend_yield: Some(dec!(0.52)),
            volume: Some(52_164_000),
            market_cap: Some(2_890_000_000_000),
        }
    }

    fn data_rows(report: &str) -> Vec<&str> {
        // Skip the first │-row (column titles).
        report
            .lines()
            .filter(|line| line.starts_with('│'))
            .skip(1)
            .collect()
    }

    #[test]
    fn test_header_states_result_count() {
        let records = vec![create_test_record("AAPL"); 3];
        let report = ReportFormatter::render(&records, None, "day_gainers");
        assert!(report.contains("Results: 3 stocks found"));
    }

    #[test]
    fn test_label_is_title_cased() {
        let report = ReportFormatter::render(&[], None, "day_gainers");
        assert!(report.contains("Screen Type: Day Gainers"));

        let report = ReportFormatter::render(&[], None, "fallback");
        assert!(report.contains("Screen Type: Fallback"));
    }

    #[test]
    fn test_one_data_row_per_record() {
        let records = vec![
            create_test_record("AAPL"),
            create_test_record("MSFT"),
            create_test_record("GOOGL"),
        ];
        let report = ReportFormatter::render(&records, None, "day_gainers");
        assert_eq!(data_rows(&report).len(), 3);
    }

    #[test]
    fn test_sparkline_column_only_when_trends_supplied() {
        let records = vec![create_test_record("AAPL")];
        let without = ReportFormatter::render(&records, None, "day_gainers");
        assert!(!without.contains("Sparkline"));

        let trends = vec!["▁▃▅█".to_string()];
        let with = ReportFormatter::render(&records, Some(&trends), "day_gainers");
        assert!(with.contains("Sparkline"));
        assert!(with.contains("▁▃▅█"));
    }

    #[test]
    fn test_empty_trend_renders_blank_cell_not_na() {
        let records = vec![create_test_record("AAPL")];
        let trends = vec![String::new()];
        let report = ReportFormatter::render(&records, Some(&trends), "day_gainers");
        // Every field is populated, so a blank trend cell must not
        // introduce an "N/A" anywhere in the data row.
        let row = data_rows(&report)[0];
        assert!(!row.contains(NA), "row: {row}");
    }

    #[test]
    fn test_sparse_record_renders_na_everywhere() {
        let report = ReportFormatter::render(
            &[InstrumentRecord::default()],
            None,
            "most_actives",
        );
        let row = data_rows(&report)[0];
        assert_eq!(row.matches(NA).count(), 10);
    }

    #[test]
    fn test_zero_bid_ask_render_na() {
        let mut record = create_test_record("AAPL");
        record.bid = Some(dec!(0));
        record.ask = Some(dec!(0.00));
        let report = ReportFormatter::render(&[record], None, "day_gainers");
        let row = data_rows(&report)[0];
        assert_eq!(row.matches(NA).count(), 2);
        assert!(!row.contains("$0.00"));
    }

    #[test]
    fn test_zero_52wk_bound_renders_as_currency() {
        let mut record = create_test_record("AAPL");
        record.fifty_two_week_low = Some(dec!(0));
        let report = ReportFormatter::render(&[record], None, "day_gainers");
        assert!(data_rows(&report)[0].contains("$0.00"));
    }

    #[test]
    fn test_prices_render_with_two_decimals() {
        let report = ReportFormatter::render(
            &[create_test_record("AAPL")],
            None,
            "day_gainers",
        );
        let row = data_rows(&report)[0];
        assert!(row.contains("$185.50"));
        assert!(row.contains("$185.75"));
        assert!(row.contains("$198.23"));
        assert!(row.contains("0.52%"));
        assert!(row.contains("52.2M"));
    }

    #[test]
    fn test_long_company_name_truncated() {
        let mut record = create_test_record("TMC");
        record.display_name =
            Some("The Massively Conglomerated Holdings Corporation".to_string());
        let report = ReportFormatter::render(&[record], None, "day_gainers");
        assert!(data_rows(&report)[0].contains("The Massively Conglomerated..."));
    }

    #[test]
    fn test_london_label_selects_session_narrative() {
        let report = ReportFormatter::render(&[], None, "london_session_actives");
        assert!(report.contains("LONDON SESSION ANALYSIS:"));
        assert!(!report.contains("\nSUMMARY:"));
    }

    #[test]
    fn test_tomorrow_label_selects_session_narrative() {
        let report = ReportFormatter::render(&[], None, "most_actives_tomorrow");
        assert!(report.contains("LONDON SESSION ANALYSIS:"));
    }

    #[test]
    fn test_generic_label_selects_generic_narrative() {
        let report = ReportFormatter::render(&[], None, "day_losers");
        assert!(report.contains("SUMMARY:"));
        assert!(report.contains("Screen criteria: Day Losers"));
        assert!(!report.contains("LONDON SESSION ANALYSIS:"));
    }

    #[test]
    fn test_volume_abbreviations() {
        assert_eq!(abbreviate(1_500_000_000), "1.5B");
        assert_eq!(abbreviate(2_300_000), "2.3M");
        assert_eq!(abbreviate(1_200), "1.2K");
        assert_eq!(abbreviate(950), "950");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("undervalued_large_caps"), "Undervalued Large Caps");
        assert_eq!(title_case("fallback"), "Fallback");
    }
}
