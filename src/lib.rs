//! Core logic of the room-rental listing front end: filter state and its
//! reducer, normalized queries for the remote room search, pager window
//! computation, and the page-composition services that tie them together.
//!
//! Rendering and HTTP transport are left to the embedding application; the
//! search backend is abstracted behind [`repository::RoomReader`].

pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod services;

/// Page size of the general paginated listing section.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Page size of the VIP highlight strip. The strip is a bounded teaser,
/// not a full paginated list, hence the smaller fixed size.
pub const VIP_ITEMS_PER_PAGE: usize = 4;

/// Number of page buttons the pager shows before truncating with ellipses.
pub const MAX_VISIBLE_PAGES: usize = 5;
