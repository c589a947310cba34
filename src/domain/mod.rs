//! Domain records and value types of the room listing.

pub mod filter;
pub mod room;
pub mod types;
