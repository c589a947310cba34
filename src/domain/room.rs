use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A room posting as returned by the remote search API.
///
/// Every descriptive field may be absent. Display code substitutes
/// placeholders instead of assuming presence; see [`crate::dto::home::RoomCard`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Room {
    pub id: i32,
    pub title: Option<String>,
    /// Monthly rent in VND.
    pub price: Option<u64>,
    /// Floor area in square meters.
    pub area: Option<u32>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub authorname: Option<String>,
    pub phone: Option<String>,
    /// Image file reference relative to the picture store.
    pub actual_file: Option<String>,
    pub is_vip: bool,
    pub date_approved: Option<NaiveDateTime>,
}
