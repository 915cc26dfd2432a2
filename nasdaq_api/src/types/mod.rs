mod meta;
pub use self::meta::Response;

mod historical;
pub use self::historical::{Column, HistoricalData, RawTradesTable, Row, TradesTable};
