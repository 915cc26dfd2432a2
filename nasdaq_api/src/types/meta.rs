use serde::{Deserialize, Serialize};

/// Envelope shared by the quote endpoints. `data` is `null` when the API
/// does not recognise the symbol.
#[derive(Serialize, Deserialize, Debug)]
pub struct Response<T> {
    pub data: Option<T>,
}
