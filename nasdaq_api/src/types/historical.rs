use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Response;
use crate::Error;

/// One row record: field key to value. Key order follows the response body.
pub type Row = Map<String, Value>;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalData {
    pub symbol: Option<String>,
    pub total_records: Option<i64>,
    pub trades_table: Option<RawTradesTable>,
}

/// The `tradesTable` section exactly as delivered. Either half may be
/// missing or `null`.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RawTradesTable {
    #[serde(default)]
    pub headers: Option<Map<String, Value>>,
    #[serde(default)]
    pub rows: Option<Vec<Row>>,
}

impl RawTradesTable {
    fn is_empty(&self) -> bool {
        self.headers.is_none() && self.rows.is_none()
    }
}

/// A column of the trades table: the field key used in row records and the
/// display label shown in the header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub key: String,
    pub label: String,
}

/// A trades table that is known to have at least one column and one row.
///
/// Rows are kept in the order the API delivered them, newest first.
#[derive(Clone, Debug)]
pub struct TradesTable {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

impl TradesTable {
    /// Header labels in column order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.label.as_str())
    }
}

impl Response<HistoricalData> {
    /// Extracts the trades table, checking `tradesTable`, then `headers`,
    /// then `rows` for presence.
    pub fn into_trades_table(self) -> Result<TradesTable, Error> {
        let raw = self
            .data
            .and_then(|d| d.trades_table)
            .filter(|t| !t.is_empty())
            .ok_or(Error::MissingField("tradesTable"))?;

        let headers = raw
            .headers
            .filter(|h| !h.is_empty())
            .ok_or(Error::MissingField("headers"))?;
        let rows = raw
            .rows
            .filter(|r| !r.is_empty())
            .ok_or(Error::MissingField("rows"))?;

        let columns = headers
            .into_iter()
            .map(|(key, label)| Column {
                key,
                label: match label {
                    Value::String(s) => s,
                    other => other.to_string(),
                },
            })
            .collect();

        Ok(TradesTable { columns, rows })
    }
}
