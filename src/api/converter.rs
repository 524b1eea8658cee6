//! Field normalization for provider quotes.

use crate::state::InstrumentRecord;

use super::RawQuote;

/// Projects raw provider quotes onto the fixed report schema.
pub struct QuoteConverter;

impl QuoteConverter {
    /// Convert a raw provider quote to a normalized [`InstrumentRecord`].
    ///
    /// No unit conversion or validation happens here; absent fields stay
    /// absent. The canonical `volume` field wins over the alternate
    /// regular-market volume whenever it is present.
    pub fn convert_quote(quote: RawQuote) -> InstrumentRecord {
        let volume = quote.volume.or(quote.regular_market_volume);

        InstrumentRecord {
            symbol: quote.symbol,
            display_name: quote.short_name,
            bid: quote.bid,
            ask: quote.ask,
            exchange: quote.exchange,
            fifty_two_week_high: quote.fifty_two_week_high,
            fifty_two_week_low: quote.fifty_two_week_low,
            analyst_rating: quote.average_analyst_rating,
            dividend_yield: quote.dividend_yield,
            volume,
            market_cap: quote.market_cap,
        }
    }

    /// Convert a whole batch of raw quotes.
    pub fn convert_quotes(quotes: Vec<RawQuote>) -> Vec<InstrumentRecord> {
        quotes.into_iter().map(Self::convert_quote).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_full_quote_projection() {
        let quote: RawQuote = serde_json::from_value(json!({
            "symbol": "AAPL",
            "shortName": "Apple Inc.",
            "bid": 185.50,
            "ask": 185.75,
            "exchange": "NMS",
            "fiftyTwoWeekHigh": 198.23,
            "fiftyTwoWeekLow": 124.17,
            "averageAnalystRating": "1.8 - Buy",
            "dividendYield": 0.52,
            "volume": 52_164_000u64,
            "marketCap": 2_890_000_000_000u64
        }))
        .unwrap();

        let record = QuoteConverter::convert_quote(quote);
        assert_eq!(record.symbol.as_deref(), Some("AAPL"));
        assert_eq!(record.display_name.as_deref(), Some("Apple Inc."));
        assert_eq!(record.bid, Some(dec!(185.50)));
        assert_eq!(record.analyst_rating.as_deref(), Some("1.8 - Buy"));
        assert_eq!(record.volume, Some(52_164_000));
        assert_eq!(record.market_cap, Some(2_890_000_000_000));
    }

    #[test]
    fn test_unknown_provider_fields_dropped() {
        let quote: RawQuote = serde_json::from_value(json!({
            "symbol": "MSFT",
            "trailingPE": 34.2,
            "quoteSourceName": "Nasdaq Real Time Price",
            "priceHint": 2
        }))
        .unwrap();

        let record = QuoteConverter::convert_quote(quote);
        assert_eq!(record.symbol.as_deref(), Some("MSFT"));
        assert!(record.bid.is_none());
        assert!(record.dividend_yield.is_none());
    }

    #[test]
    fn test_canonical_volume_wins() {
        let quote: RawQuote = serde_json::from_value(json!({
            "symbol": "TSLA",
            "volume": 100,
            "regularMarketVolume": 999
        }))
        .unwrap();

        let record = QuoteConverter::convert_quote(quote);
        assert_eq!(record.volume, Some(100));
    }

    #[test]
    fn test_alternate_volume_fills_gap() {
        let quote: RawQuote = serde_json::from_value(json!({
            "symbol": "TSLA",
            "regularMarketVolume": 999
        }))
        .unwrap();

        let record = QuoteConverter::convert_quote(quote);
        assert_eq!(record.volume, Some(999));
    }

    #[test]
    fn test_no_volume_stays_absent() {
        let quote: RawQuote = serde_json::from_value(json!({ "symbol": "TSLA" })).unwrap();
        let record = QuoteConverter::convert_quote(quote);
        assert_eq!(record.volume, None);
    }

    #[test]
    fn test_empty_quote_normalizes_to_empty_record() {
        let record = QuoteConverter::convert_quote(RawQuote::default());
        assert_eq!(record, InstrumentRecord::default());
    }
}
