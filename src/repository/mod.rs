use crate::domain::room::Room;
use crate::domain::types::{ApprovalState, HireState, RoomTier, SortField, SortOrder};
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Normalized filter set understood by the remote room search.
///
/// Absent fields are not sent at all; the backend treats them as
/// unconstrained. The search takes a single category even though the
/// sidebar is a multi-select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomListQuery {
    pub hire_state: Option<HireState>,
    pub approval_state: Option<ApprovalState>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub min_area: Option<u32>,
    pub max_area: Option<u32>,
    pub category: Option<String>,
    pub tier: Option<RoomTier>,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
    pub pagination: Option<Pagination>,
}

impl RoomListQuery {
    pub fn new() -> Self {
        Self {
            hire_state: None,
            approval_state: None,
            min_price: None,
            max_price: None,
            min_area: None,
            max_area: None,
            category: None,
            tier: None,
            sort_by: SortField::default(),
            sort_order: SortOrder::default(),
            pagination: None,
        }
    }

    pub fn hire_state(mut self, state: HireState) -> Self {
        self.hire_state = Some(state);
        self
    }

    pub fn approval_state(mut self, state: ApprovalState) -> Self {
        self.approval_state = Some(state);
        self
    }

    pub fn price_range(mut self, min: Option<u64>, max: Option<u64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn area_range(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.min_area = min;
        self.max_area = max;
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn tier(mut self, tier: RoomTier) -> Self {
        self.tier = Some(tier);
        self
    }

    pub fn sort(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort_by = field;
        self.sort_order = order;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

impl Default for RoomListQuery {
    fn default() -> Self {
        Self::new()
    }
}

/// Read access to the remote room search.
pub trait RoomReader {
    /// Returns the total match count and the requested page of rooms.
    fn list_rooms(&self, query: &RoomListQuery) -> RepositoryResult<(usize, Vec<Room>)>;
}
