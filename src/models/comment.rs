use serde::{Deserialize, Serialize};

/// A user comment on a campsite. Ordering is whatever the data source
/// supplied; nothing in this crate re-sorts comments.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i32,
    pub campsite_id: i32,
    /// Star rating, constrained to 1..=5 by the submission form.
    pub rating: u8,
    pub text: String,
    pub author: String,
    /// ISO-8601 date string, e.g. "2023-05-07" or a full RFC 3339 timestamp.
    pub date: String,
}
