//! Shared query infrastructure: the [`Query`] trait and [`AssetClass`].

use std::fmt;

use url::Url;

/// Trait implemented by query builders. Provides URL serialization.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}

/// Asset class understood by the quote API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AssetClass {
    /// Listed equities. This is the default.
    #[default]
    Stocks,
    Etf,
    Index,
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AssetClass::Stocks => "stocks",
            AssetClass::Etf => "etf",
            AssetClass::Index => "index",
        };
        write!(f, "{}", s)
    }
}
