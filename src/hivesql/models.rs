// Row types returned by the HiveSQL endpoint.
//
// Only the columns the summary needs are declared; serde ignores the rest,
// so the queries can select extra columns without breaking deserialization.
// A NULL column (e.g. a payout that hasn't been converted yet) reads as the
// zero value, so one odd row doesn't sink the whole summary.

use serde::{Deserialize, Deserializer, Serialize};

/// One vote cast by the tracked account on another author's content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
    /// Value of the vote in HBD at payout time
    #[serde(deserialize_with = "null_as_default")]
    pub vote_value: f64,
}

/// One curation reward event, denominated in HP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurationRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub hp: f64,
}

/// Read a nullable column, mapping `null` to `T::default()`.
/// The column itself must still be present.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
