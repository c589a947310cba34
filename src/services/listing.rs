//! Normalizing filter state into listing queries and loading one section.

use std::str::FromStr;

use validator::Validate;

use crate::VIP_ITEMS_PER_PAGE;
use crate::domain::filter::FilterState;
use crate::domain::types::{ApprovalState, HireState, RoomTier, SortField, SortOrder};
use crate::dto::home::RoomCard;
use crate::forms::filter::FilterForm;
use crate::pagination::{PageInfo, Paginated};
use crate::repository::{RoomListQuery, RoomReader};
use crate::services::{ServiceError, ServiceResult};

/// Which listing section a query is built for.
///
/// The VIP strip is a bounded highlight, not a full paginated list: it pins
/// the page size to [`VIP_ITEMS_PER_PAGE`] and always shows page 1,
/// whatever `page_size` the caller configured for the general section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionView {
    pub vip_only: bool,
    pub page_size: usize,
}

impl SectionView {
    pub fn general(page_size: usize) -> Self {
        Self {
            vip_only: false,
            page_size,
        }
    }

    pub fn vip() -> Self {
        Self {
            vip_only: true,
            page_size: VIP_ITEMS_PER_PAGE,
        }
    }

    fn effective_page_size(&self) -> usize {
        if self.vip_only {
            VIP_ITEMS_PER_PAGE
        } else {
            self.page_size
        }
    }

    fn effective_page(&self, filters: &FilterState) -> usize {
        if self.vip_only { 1 } else { filters.page }
    }
}

/// Normalizes filter state into the query the search endpoint understands.
///
/// Hire and approval states are fixed by the listing contract: the public
/// site only ever shows approved, still-available rooms.
pub fn build_listing_query(
    filters: &FilterState,
    view: &SectionView,
) -> ServiceResult<RoomListQuery> {
    if view.page_size == 0 {
        return Err(ServiceError::Validation(
            "page size must be greater than zero".to_string(),
        ));
    }

    let mut query = RoomListQuery::new()
        .hire_state(HireState::Available)
        .approval_state(ApprovalState::Approved)
        .price_range(filters.min_price, filters.max_price)
        .area_range(filters.min_area, filters.max_area)
        .sort(filters.sort_by, filters.sort_order)
        .paginate(view.effective_page(filters), view.effective_page_size());

    // The search endpoint takes a single category, so only the first
    // selection is forwarded even when the sidebar has more checked.
    if let Some(category) = filters.categories.first() {
        query = query.category(category.clone());
    }

    if view.vip_only {
        query = query.tier(RoomTier::Vip);
    }

    Ok(query)
}

/// Validates raw sidebar input and folds it into filter state.
pub fn apply_filter_form(form: FilterForm) -> ServiceResult<FilterState> {
    form.validate().map_err(|err| {
        log::error!("Failed to validate filter form: {err}");
        ServiceError::Validation(err.to_string())
    })?;

    if let (Some(min), Some(max)) = (form.min_price, form.max_price) {
        if min > max {
            return Err(ServiceError::Validation(
                "minimum price exceeds maximum price".to_string(),
            ));
        }
    }
    if let (Some(min), Some(max)) = (form.min_area, form.max_area) {
        if min > max {
            return Err(ServiceError::Validation(
                "minimum area exceeds maximum area".to_string(),
            ));
        }
    }

    let sort_by = match form.sort_by.as_deref() {
        Some(raw) => {
            SortField::from_str(raw).map_err(|err| ServiceError::Validation(err.to_string()))?
        }
        None => SortField::default(),
    };
    let sort_order = match form.sort_order.as_deref() {
        Some(raw) => {
            SortOrder::from_str(raw).map_err(|err| ServiceError::Validation(err.to_string()))?
        }
        None => SortOrder::default(),
    };

    Ok(FilterState {
        min_price: form.min_price,
        max_price: form.max_price,
        min_area: form.min_area,
        max_area: form.max_area,
        categories: form.category,
        sort_by,
        sort_order,
        page: form.page.unwrap_or(1),
    })
}

/// One rendered listing section with its pager state.
#[derive(Debug)]
pub struct ListingSection {
    pub rooms: Paginated<RoomCard>,
    pub page_info: PageInfo,
}

/// Fetches one listing section and prepares its pager.
pub fn load_listing_section<R>(
    repo: &R,
    filters: &FilterState,
    view: &SectionView,
) -> ServiceResult<ListingSection>
where
    R: RoomReader + ?Sized,
{
    let query = build_listing_query(filters, view)?;

    let (total, rooms) = repo.list_rooms(&query).map_err(|err| {
        log::error!("Failed to list rooms: {err}");
        err
    })?;

    let page = view.effective_page(filters);
    let page_size = view.effective_page_size();
    let cards: Vec<RoomCard> = rooms.into_iter().map(RoomCard::from).collect();

    Ok(ListingSection {
        rooms: Paginated::new(cards, page, total.div_ceil(page_size)),
        page_info: PageInfo::new(page, page_size, total)?,
    })
}
