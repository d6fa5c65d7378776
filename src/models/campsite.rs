use serde::{Deserialize, Serialize};

/// A campsite record as supplied by the data source. Read-only from the
/// point of view of every component in this crate.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Campsite {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Image path relative to the configured asset base URL.
    pub image: String,
}
