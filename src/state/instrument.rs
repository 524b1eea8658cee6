//! Normalized instrument records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A screened instrument, projected onto the fixed report schema.
///
/// Every field except `symbol` is presentation data; any field the provider
/// did not supply is `None` (rendered later as "N/A"), never zero. Records
/// are built fresh per screen call and not mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstrumentRecord {
    /// Ticker symbol. The schema key, but provider rows can be malformed,
    /// so absence is representable and renders "N/A".
    pub symbol: Option<String>,
    /// Short display name of the company or fund.
    pub display_name: Option<String>,
    /// Current best bid.
    pub bid: Option<Decimal>,
    /// Current best ask.
    pub ask: Option<Decimal>,
    /// Listing exchange code.
    pub exchange: Option<String>,
    /// 52-week high price.
    pub fifty_two_week_high: Option<Decimal>,
    /// 52-week low price.
    pub fifty_two_week_low: Option<Decimal>,
    /// Average analyst rating (e.g. "1.8 - Buy").
    pub analyst_rating: Option<String>,
    /// Dividend yield as provided (fraction, not scaled).
    pub dividend_yield: Option<Decimal>,
    /// Trading volume.
    pub volume: Option<u64>,
    /// Market capitalization.
    pub market_cap: Option<u64>,
}
