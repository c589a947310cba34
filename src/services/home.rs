//! Home page composition: hero statistics, the VIP strip, and the main
//! paginated listing, all against the [`RoomReader`] collaborator.

use crate::domain::filter::FilterState;
use crate::domain::types::{ApprovalState, HireState, RoomTier};
use crate::dto::home::{HomePageData, ListingStats};
use crate::models::config::ListingConfig;
use crate::repository::{RoomListQuery, RoomReader};
use crate::services::ServiceResult;
use crate::services::listing::{self, SectionView};

/// Counts rooms matching the query by fetching the smallest page the
/// endpoint allows and keeping only the total.
fn count_rooms<R>(repo: &R, query: RoomListQuery) -> ServiceResult<usize>
where
    R: RoomReader + ?Sized,
{
    let (total, _) = repo.list_rooms(&query.paginate(1, 1)).map_err(|err| {
        log::error!("Failed to count rooms: {err}");
        err
    })?;

    Ok(total)
}

/// Loads the hero counters: all approved postings, available ones, and
/// available VIP ones. Three independent reads; each is a plain idempotent
/// count and their relative order does not matter.
pub fn load_stats<R>(repo: &R) -> ServiceResult<ListingStats>
where
    R: RoomReader + ?Sized,
{
    let approved = RoomListQuery::new().approval_state(ApprovalState::Approved);
    let available = approved.clone().hire_state(HireState::Available);
    let vip = available.clone().tier(RoomTier::Vip);

    Ok(ListingStats {
        total_rooms: count_rooms(repo, approved)?,
        available_rooms: count_rooms(repo, available)?,
        vip_rooms: count_rooms(repo, vip)?,
    })
}

/// Assembles everything the home page renders in one pass.
pub fn load_home_page<R>(
    repo: &R,
    filters: &FilterState,
    config: &ListingConfig,
) -> ServiceResult<HomePageData>
where
    R: RoomReader + ?Sized,
{
    let stats = load_stats(repo)?;

    let vip_section = listing::load_listing_section(repo, filters, &SectionView::vip())?;
    let main_section =
        listing::load_listing_section(repo, filters, &SectionView::general(config.items_per_page))?;

    Ok(HomePageData {
        stats,
        vip_rooms: vip_section.rooms.items,
        rooms: main_section.rooms,
        page_info: main_section.page_info,
    })
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::room::Room;
    use crate::repository::mock::MockRepository;

    /// Mimics a small backend: totals depend on the hire/tier filters.
    fn wired_repo() -> MockRepository {
        let mut repo = MockRepository::new();
        repo.expect_list_rooms().returning(|query| {
            let total = match (query.hire_state, query.tier) {
                (None, _) => 120,
                (Some(_), None) => 80,
                (Some(_), Some(_)) => 12,
            };
            let page_len = query
                .pagination
                .map(|p| p.per_page.min(total))
                .unwrap_or(total);
            let rooms = (0..page_len as i32)
                .map(|id| Room {
                    id,
                    is_vip: query.tier.is_some(),
                    ..Room::default()
                })
                .collect();
            Ok((total, rooms))
        });
        repo
    }

    #[test]
    fn stats_come_from_three_independent_counts() {
        let repo = wired_repo();

        let stats = load_stats(&repo).unwrap();

        assert_eq!(stats.total_rooms, 120);
        assert_eq!(stats.available_rooms, 80);
        assert_eq!(stats.vip_rooms, 12);
    }

    #[test]
    fn home_page_combines_stats_strip_and_listing() {
        let repo = wired_repo();
        let config = ListingConfig::default();

        let page = load_home_page(&repo, &FilterState::default(), &config).unwrap();

        assert_eq!(page.stats.vip_rooms, 12);
        assert_eq!(page.vip_rooms.len(), 4);
        assert!(page.vip_rooms.iter().all(|card| card.is_vip));
        assert_eq!(page.rooms.items.len(), 10);
        assert_eq!(page.page_info.total_items, 80);
        assert_eq!(page.page_info.total_pages, 8);
    }
}
