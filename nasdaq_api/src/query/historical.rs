use chrono::NaiveDate;
use rand::Rng;
use url::Url;

use super::common::{AssetClass, Query};

/// Row cap sent with every request. Larger than any trailing window we ask for.
pub const DEFAULT_LIMIT: u32 = 9999;

/// Query for the `/api/quote/{ticker}/historical` endpoint.
///
/// Parameters are serialized in the order the endpoint documents them:
/// `assetclass`, `fromdate`, `limit`, `todate`, `random`.
#[derive(Clone, Debug)]
pub struct HistoricalQuery {
    pub asset_class: AssetClass,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub limit: u32,
    /// Cache-busting value, drawn from `1..=99` when the query is built.
    pub random: u8,
}

impl HistoricalQuery {
    pub fn new(from_date: NaiveDate, to_date: NaiveDate) -> Self {
        Self {
            asset_class: AssetClass::default(),
            from_date,
            to_date,
            limit: DEFAULT_LIMIT,
            random: rand::thread_rng().gen_range(1..=99),
        }
    }

    pub fn with_asset_class(mut self, asset_class: AssetClass) -> Self {
        self.asset_class = asset_class;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_random(mut self, random: u8) -> Self {
        self.random = random;
        self
    }
}

impl Query for HistoricalQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("assetclass", &self.asset_class.to_string())
            .append_pair("fromdate", &self.from_date.format("%Y-%m-%d").to_string())
            .append_pair("limit", &self.limit.to_string())
            .append_pair("todate", &self.to_date.format("%Y-%m-%d").to_string())
            .append_pair("random", &self.random.to_string());
        url
    }
}
