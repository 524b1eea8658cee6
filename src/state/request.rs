//! Screen criteria and request types.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Smallest result page a request may ask for.
pub const MIN_SCREEN_SIZE: u32 = 1;
/// Largest result page a request may ask for.
pub const MAX_SCREEN_SIZE: u32 = 20;

/// A named screening criterion.
///
/// Closed set owned by this crate; each variant maps 1:1 to a predefined
/// provider screen. Unknown tags are rejected at parse time rather than
/// being passed through to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenCriterion {
    AggressiveSmallCaps,
    DayGainers,
    DayLosers,
    GrowthTechnologyStocks,
    MostActives,
    MostShortedStocks,
    SmallCapGainers,
    UndervaluedGrowthStocks,
    UndervaluedLargeCaps,
    ConservativeForeignFunds,
    HighYieldBond,
    PortfolioAnchors,
    SolidLargeGrowthFunds,
    SolidMidcapGrowthFunds,
    TopMutualFunds,
}

impl ScreenCriterion {
    /// Every supported criterion, in tag order.
    pub const ALL: [ScreenCriterion; 15] = [
        Self::AggressiveSmallCaps,
        Self::DayGainers,
        Self::DayLosers,
        Self::GrowthTechnologyStocks,
        Self::MostActives,
        Self::MostShortedStocks,
        Self::SmallCapGainers,
        Self::UndervaluedGrowthStocks,
        Self::UndervaluedLargeCaps,
        Self::ConservativeForeignFunds,
        Self::HighYieldBond,
        Self::PortfolioAnchors,
        Self::SolidLargeGrowthFunds,
        Self::SolidMidcapGrowthFunds,
        Self::TopMutualFunds,
    ];

    /// The public snake_case tag for this criterion.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::AggressiveSmallCaps => "aggressive_small_caps",
            Self::DayGainers => "day_gainers",
            Self::DayLosers => "day_losers",
            Self::GrowthTechnologyStocks => "growth_technology_stocks",
            Self::MostActives => "most_actives",
            Self::MostShortedStocks => "most_shorted_stocks",
            Self::SmallCapGainers => "small_cap_gainers",
            Self::UndervaluedGrowthStocks => "undervalued_growth_stocks",
            Self::UndervaluedLargeCaps => "undervalued_large_caps",
            Self::ConservativeForeignFunds => "conservative_foreign_funds",
            Self::HighYieldBond => "high_yield_bond",
            Self::PortfolioAnchors => "portfolio_anchors",
            Self::SolidLargeGrowthFunds => "solid_large_growth_funds",
            Self::SolidMidcapGrowthFunds => "solid_midcap_growth_funds",
            Self::TopMutualFunds => "top_mutual_funds",
        }
    }

    /// The provider-side screen id for this criterion.
    ///
    /// The provider's predefined screen ids currently coincide with our
    /// public tags; this is the one place to adjust if that ever diverges.
    pub fn provider_query(&self) -> &'static str {
        self.tag()
    }
}

impl std::fmt::Display for ScreenCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for ScreenCriterion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.tag() == s)
            .ok_or_else(|| Error::unknown_criterion(s))
    }
}

/// A single screening request.
///
/// Immutable after construction; `size` is clamped into
/// [`MIN_SCREEN_SIZE`, `MAX_SCREEN_SIZE`] before it can reach the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRequest {
    /// The criterion to screen by.
    pub criterion: ScreenCriterion,
    /// Pagination start point.
    pub offset: u32,
    /// Number of results to request (clamped).
    pub size: u32,
    /// Whether to augment each record with a recent-price trend glyph.
    pub include_trend: bool,
}

impl ScreenRequest {
    /// Create a new request, clamping `size` into the supported range.
    pub fn new(criterion: ScreenCriterion, offset: u32, size: u32, include_trend: bool) -> Self {
        Self {
            criterion,
            offset,
            size: size.clamp(MIN_SCREEN_SIZE, MAX_SCREEN_SIZE),
            include_trend,
        }
    }
}
