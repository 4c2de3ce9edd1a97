use core::fmt;
use serde::{Deserialize, Serialize};

/// Tickers followed by the comparison views, in display order.
const TRACKED: [&str; 8] = ["btc", "eth", "xrp", "bnb", "sol", "doge", "trx", "ada"];

/// Pegged assets excluded from trend comparison and correlation.
const STABLECOINS: [&str; 2] = ["usdt", "usdc"];

/// Canonical lowercase cryptocurrency ticker.
///
/// Construction normalizes case so that `"BTC"` and `"btc"` compare equal and
/// hash identically regardless of how the upstream API spells them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Build a symbol from any casing of a ticker string.
    pub fn new(ticker: impl AsRef<str>) -> Self {
        Self(ticker.as_ref().trim().to_ascii_lowercase())
    }

    /// The canonical lowercase ticker.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The fixed symbol list tracked by the dashboard, stablecoins excluded.
    #[must_use]
    pub fn tracked() -> Vec<Self> {
        TRACKED.iter().map(Self::new).collect()
    }

    /// Whether this symbol is a known stablecoin.
    #[must_use]
    pub fn is_stablecoin(&self) -> bool {
        STABLECOINS.contains(&self.0.as_str())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn casing_is_normalized() {
        assert_eq!(Symbol::new("BTC"), Symbol::new(" btc "));
        assert_eq!(Symbol::new("Eth").as_str(), "eth");
    }

    #[test]
    fn tracked_excludes_stablecoins() {
        let tracked = Symbol::tracked();
        assert_eq!(tracked.len(), 8);
        assert!(tracked.iter().all(|s| !s.is_stablecoin()));
        assert!(Symbol::new("USDT").is_stablecoin());
    }
}
