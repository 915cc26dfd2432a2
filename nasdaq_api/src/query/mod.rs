mod common;
pub use self::common::{AssetClass, Query};

mod historical;
pub use self::historical::HistoricalQuery;
