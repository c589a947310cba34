//! DTO modules bridging services with the wire contract and templates.

pub mod api;
pub mod home;
