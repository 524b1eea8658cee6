//! Built-in fallback dataset served when the provider is unreachable.

use crate::state::InstrumentRecord;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Label attached to fallback results, whatever criterion was requested.
pub const FALLBACK_LABEL: &str = "fallback";

/// The literal fallback dataset: five well-known large caps, in this order.
pub fn fallback_records() -> Vec<InstrumentRecord> {
    vec![
        record(
            "AAPL",
            "Apple Inc.",
            dec!(185.50),
            dec!(185.75),
            dec!(198.23),
            dec!(124.17),
            "1.8 - Buy",
            dec!(0.52),
        ),
        record(
            "MSFT",
            "Microsoft Corporation",
            dec!(415.20),
            dec!(415.45),
            dec!(420.82),
            dec!(213.43),
            "1.6 - Buy",
            dec!(0.73),
        ),
        record(
            "GOOGL",
            "Alphabet Inc.",
            dec!(165.80),
            dec!(166.05),
            dec!(173.56),
            dec!(83.34),
            "1.7 - Buy",
            dec!(0.00),
        ),
        record(
            "AMZN",
            "Amazon.com Inc.",
            dec!(178.90),
            dec!(179.15),
            dec!(189.77),
            dec!(101.15),
            "1.5 - Strong Buy",
            dec!(0.00),
        ),
        record(
            "TSLA",
            "Tesla Inc.",
            dec!(245.30),
            dec!(245.55),
            dec!(299.29),
            dec!(138.80),
            "2.4 - Hold",
            dec!(0.00),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn record(
    symbol: &str,
    name: &str,
    bid: Decimal,
    ask: Decimal,
    high: Decimal,
    low: Decimal,
    rating: &str,
    dividend_yield: Decimal,
) -> InstrumentRecord {
    InstrumentRecord {
        symbol: Some(symbol.to_string()),
        display_name: Some(name.to_string()),
        bid: Some(bid),
        ask: Some(ask),
        exchange: Some("NASDAQ".to_string()),
        fifty_two_week_high: Some(high),
        fifty_two_week_low: Some(low),
        analyst_rating: Some(rating.to_string()),
        dividend_yield: Some(dividend_yield),
        volume: None,
        market_cap: None,
    }
}
