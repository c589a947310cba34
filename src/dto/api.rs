//! Wire shapes of the remote room search API.

use serde::{Deserialize, Serialize};

use crate::DEFAULT_ITEMS_PER_PAGE;
use crate::domain::room::Room;
use crate::domain::types::{ApprovalState, HireState, RoomTier, SortField};
use crate::repository::RoomListQuery;
use crate::repository::errors::RepositoryResult;

/// Query parameters the search endpoint accepts, in its own naming.
///
/// `None` fields are omitted from the query string entirely; the endpoint
/// distinguishes an absent bound from an explicit 0.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListingRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hire_state: Option<HireState>,
    /// The endpoint calls the approval filter `statusState`.
    #[serde(rename = "statusState", skip_serializing_if = "Option::is_none")]
    pub approval_state: Option<ApprovalState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_area: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_area: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_vip: Option<RoomTier>,
    pub sort_by: SortField,
    pub is_ascending: bool,
    pub page: usize,
    #[serde(rename = "pagesize")]
    pub page_size: usize,
}

impl ListingRequest {
    /// Encodes the request as the endpoint's query string.
    pub fn to_query_string(&self) -> RepositoryResult<String> {
        Ok(serde_html_form::to_string(self)?)
    }
}

impl From<&RoomListQuery> for ListingRequest {
    fn from(query: &RoomListQuery) -> Self {
        let (page, page_size) = match query.pagination {
            Some(p) => (p.page, p.per_page),
            None => (1, DEFAULT_ITEMS_PER_PAGE),
        };

        Self {
            hire_state: query.hire_state,
            approval_state: query.approval_state,
            min_price: query.min_price,
            max_price: query.max_price,
            min_area: query.min_area,
            max_area: query.max_area,
            category: query.category.clone(),
            is_vip: query.tier,
            sort_by: query.sort_by,
            is_ascending: query.sort_order.is_ascending(),
            page,
            page_size,
        }
    }
}

/// Top-level response wrapper: `{ "data": { "post": [...], "total": n } }`.
#[derive(Debug, Deserialize)]
pub struct ListingEnvelope {
    #[serde(default)]
    pub data: ListingData,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListingData {
    #[serde(default)]
    pub post: Vec<Room>,
    #[serde(default)]
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::SortOrder;

    #[test]
    fn absent_filters_are_omitted_from_the_query_string() {
        let query = RoomListQuery::new()
            .hire_state(HireState::Available)
            .approval_state(ApprovalState::Approved)
            .paginate(1, 4);
        let request = ListingRequest::from(&query);

        let encoded = request.to_query_string().unwrap();

        assert!(encoded.contains("hireState="));
        assert!(encoded.contains("statusState="));
        assert!(!encoded.contains("minPrice"));
        assert!(!encoded.contains("category"));
        assert!(!encoded.contains("isVip"));
        assert!(encoded.contains("sortBy=dateCreated"));
        assert!(encoded.contains("isAscending=false"));
        assert!(encoded.contains("page=1"));
        assert!(encoded.contains("pagesize=4"));
    }

    #[test]
    fn zero_bounds_survive_encoding() {
        let query = RoomListQuery::new().price_range(Some(0), Some(2_000_000));
        let request = ListingRequest::from(&query);

        let encoded = request.to_query_string().unwrap();

        assert!(encoded.contains("minPrice=0"));
        assert!(encoded.contains("maxPrice=2000000"));
    }

    #[test]
    fn contract_literals_are_carried_in_the_request() {
        let query = RoomListQuery::new()
            .hire_state(HireState::Available)
            .tier(RoomTier::Vip)
            .sort(SortField::Price, SortOrder::Asc)
            .category("Phòng trọ")
            .paginate(2, 10);
        let request = ListingRequest::from(&query);

        // Decode the encoded form back to plain pairs to sidestep
        // percent-encoding in the assertions.
        let encoded = request.to_query_string().unwrap();
        let pairs: Vec<(String, String)> = serde_html_form::from_str(&encoded).unwrap();

        let get = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };

        assert_eq!(get("hireState"), Some("Chưa Được Thuê"));
        assert_eq!(get("isVip"), Some("Hạng Vip"));
        assert_eq!(get("category"), Some("Phòng trọ"));
        assert_eq!(get("sortBy"), Some("price"));
        assert_eq!(get("isAscending"), Some("true"));
        assert_eq!(get("page"), Some("2"));
    }

    #[test]
    fn envelope_tolerates_missing_fields() {
        let envelope: ListingEnvelope = serde_json::from_str("{}").unwrap();
        assert_eq!(envelope.data.total, 0);
        assert!(envelope.data.post.is_empty());

        let envelope: ListingEnvelope = serde_json::from_str(
            r#"{"data":{"post":[{"id":7,"title":"Phòng gác lửng","isVip":true}],"total":42}}"#,
        )
        .unwrap();
        assert_eq!(envelope.data.total, 42);
        assert_eq!(envelope.data.post.len(), 1);

        let room = &envelope.data.post[0];
        assert_eq!(room.id, 7);
        assert!(room.is_vip);
        assert_eq!(room.price, None);
        assert_eq!(room.actual_file, None);
    }
}
