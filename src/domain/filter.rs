//! User-selected search constraints and the reducer that evolves them.

use serde::Serialize;

use crate::domain::types::{SortField, SortOrder};

/// The full set of sidebar selections plus sort configuration and page.
///
/// Mutated only through [`FilterState::apply`]. Every filter or sort change
/// resets `page` to 1 so a stale page never outlives a changed result set.
/// Absent numeric bounds stay `None`; 0 is a legitimate price or area
/// boundary and must remain distinguishable from "no filter".
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub min_area: Option<u32>,
    pub max_area: Option<u32>,
    /// Selected categories in selection order.
    pub categories: Vec<String>,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
    pub page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            min_price: None,
            max_price: None,
            min_area: None,
            max_area: None,
            categories: Vec::new(),
            sort_by: SortField::default(),
            sort_order: SortOrder::default(),
            page: 1,
        }
    }
}

/// Discrete state transitions issued by the filter sidebar and pager.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterAction {
    SetPriceRange {
        min: Option<u64>,
        max: Option<u64>,
    },
    SetAreaRange {
        min: Option<u32>,
        max: Option<u32>,
    },
    SetCategories(Vec<String>),
    /// Adds the category when absent, removes it otherwise.
    ToggleCategory(String),
    /// Selecting the active field flips the direction; a new field starts
    /// descending.
    SelectSort(SortField),
    /// Requests outside `[1, total_pages]` are silent no-ops.
    GoToPage {
        page: usize,
        total_pages: usize,
    },
    /// Drops all filters and returns to page 1, keeping the sort.
    ClearFilters,
}

impl FilterState {
    /// Applies one action, returning the next state.
    #[must_use]
    pub fn apply(mut self, action: FilterAction) -> Self {
        match action {
            FilterAction::SetPriceRange { min, max } => {
                self.min_price = min;
                self.max_price = max;
                self.page = 1;
            }
            FilterAction::SetAreaRange { min, max } => {
                self.min_area = min;
                self.max_area = max;
                self.page = 1;
            }
            FilterAction::SetCategories(categories) => {
                self.categories = categories;
                self.page = 1;
            }
            FilterAction::ToggleCategory(category) => {
                match self.categories.iter().position(|c| c == &category) {
                    Some(idx) => {
                        self.categories.remove(idx);
                    }
                    None => self.categories.push(category),
                }
                self.page = 1;
            }
            FilterAction::SelectSort(field) => {
                if self.sort_by == field {
                    self.sort_order = self.sort_order.flipped();
                } else {
                    self.sort_by = field;
                    self.sort_order = SortOrder::Desc;
                }
                self.page = 1;
            }
            FilterAction::GoToPage { page, total_pages } => {
                if (1..=total_pages).contains(&page) {
                    self.page = page;
                }
            }
            FilterAction::ClearFilters => {
                self = Self {
                    sort_by: self.sort_by,
                    sort_order: self.sort_order,
                    ..Self::default()
                };
            }
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_changes_reset_the_page() {
        let state = FilterState {
            page: 7,
            ..FilterState::default()
        };

        let state = state.apply(FilterAction::SetPriceRange {
            min: Some(0),
            max: Some(2_000_000),
        });

        assert_eq!(state.page, 1);
        assert_eq!(state.min_price, Some(0));
        assert_eq!(state.max_price, Some(2_000_000));
    }

    #[test]
    fn selecting_a_new_sort_field_starts_descending() {
        let state = FilterState {
            page: 3,
            ..FilterState::default()
        };
        assert_eq!(state.sort_by, SortField::DateCreated);

        let state = state.apply(FilterAction::SelectSort(SortField::Price));

        assert_eq!(state.sort_by, SortField::Price);
        assert_eq!(state.sort_order, SortOrder::Desc);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn reselecting_the_active_field_flips_the_order() {
        let state = FilterState::default()
            .apply(FilterAction::SelectSort(SortField::Price))
            .apply(FilterAction::SelectSort(SortField::Price));

        assert_eq!(state.sort_by, SortField::Price);
        assert_eq!(state.sort_order, SortOrder::Asc);

        let state = state.apply(FilterAction::SelectSort(SortField::Price));
        assert_eq!(state.sort_order, SortOrder::Desc);
    }

    #[test]
    fn toggling_categories_keeps_selection_order() {
        let state = FilterState::default()
            .apply(FilterAction::ToggleCategory("Căn hộ".into()))
            .apply(FilterAction::ToggleCategory("Phòng trọ".into()))
            .apply(FilterAction::ToggleCategory("Homestay".into()))
            .apply(FilterAction::ToggleCategory("Phòng trọ".into()));

        assert_eq!(state.categories, vec!["Căn hộ", "Homestay"]);
    }

    #[test]
    fn out_of_range_navigation_is_ignored() {
        let state = FilterState {
            page: 2,
            ..FilterState::default()
        };

        let state = state.apply(FilterAction::GoToPage {
            page: 0,
            total_pages: 5,
        });
        assert_eq!(state.page, 2);

        let state = state.apply(FilterAction::GoToPage {
            page: 6,
            total_pages: 5,
        });
        assert_eq!(state.page, 2);

        let state = state.apply(FilterAction::GoToPage {
            page: 5,
            total_pages: 5,
        });
        assert_eq!(state.page, 5);
    }

    #[test]
    fn clearing_filters_keeps_the_sort() {
        let state = FilterState::default()
            .apply(FilterAction::SelectSort(SortField::Area))
            .apply(FilterAction::SetAreaRange {
                min: Some(20),
                max: Some(30),
            })
            .apply(FilterAction::ToggleCategory("Chung cư mini".into()))
            .apply(FilterAction::ClearFilters);

        assert_eq!(state.min_area, None);
        assert_eq!(state.max_area, None);
        assert!(state.categories.is_empty());
        assert_eq!(state.page, 1);
        assert_eq!(state.sort_by, SortField::Area);
        assert_eq!(state.sort_order, SortOrder::Desc);
    }
}
