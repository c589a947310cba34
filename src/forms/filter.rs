use serde::Deserialize;
use validator::Validate;

/// Raw sidebar selections as they arrive from the browser query string.
///
/// Repeated `category` keys collect into the vector in arrival order. The
/// form is folded into [`crate::domain::filter::FilterState`] by
/// [`crate::services::listing::apply_filter_form`], which also checks the
/// cross-field range constraints.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct FilterForm {
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub min_area: Option<u32>,
    pub max_area: Option<u32>,
    pub category: Vec<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    #[validate(range(min = 1))]
    pub page: Option<usize>,
}
