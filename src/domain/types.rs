//! Enumerations fixed by the remote search API contract.
//!
//! The Vietnamese literals are the exact values the backend stores and
//! filters on. They are constants of the wire contract, not user input, so
//! each enum serializes to its literal verbatim.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when parsing user-supplied sort selections.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseSortError {
    #[error("unknown sort field: {0}")]
    UnknownField(String),

    #[error("unknown sort order: {0}")]
    UnknownOrder(String),
}

/// Rental status of a posting.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HireState {
    /// Listed and still available.
    #[serde(rename = "Chưa Được Thuê")]
    Available,
    /// Already rented out.
    #[serde(rename = "Đã Được Thuê")]
    Rented,
}

impl Display for HireState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HireState::Available => write!(f, "Chưa Được Thuê"),
            HireState::Rented => write!(f, "Đã Được Thuê"),
        }
    }
}

/// Moderation status of a posting.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ApprovalState {
    #[serde(rename = "Đã Duyệt")]
    Approved,
    #[serde(rename = "Chưa Duyệt")]
    Pending,
}

impl Display for ApprovalState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ApprovalState::Approved => write!(f, "Đã Duyệt"),
            ApprovalState::Pending => write!(f, "Chưa Duyệt"),
        }
    }
}

/// Listing tier of a posting.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RoomTier {
    #[serde(rename = "Hạng Vip")]
    Vip,
    #[serde(rename = "Hạng Thường")]
    Standard,
}

impl Display for RoomTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RoomTier::Vip => write!(f, "Hạng Vip"),
            RoomTier::Standard => write!(f, "Hạng Thường"),
        }
    }
}

/// Field the room list is ordered by.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SortField {
    #[default]
    #[serde(rename = "dateCreated")]
    DateCreated,
    #[serde(rename = "price")]
    Price,
    #[serde(rename = "area")]
    Area,
}

impl Display for SortField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SortField::DateCreated => write!(f, "dateCreated"),
            SortField::Price => write!(f, "price"),
            SortField::Area => write!(f, "area"),
        }
    }
}

impl FromStr for SortField {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dateCreated" => Ok(SortField::DateCreated),
            "price" => Ok(SortField::Price),
            "area" => Ok(SortField::Area),
            other => Err(ParseSortError::UnknownField(other.to_string())),
        }
    }
}

/// Direction the sort field is applied in.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SortOrder {
    #[serde(rename = "asc")]
    Asc,
    /// Lists sort descending by default: newest, priciest, or largest first.
    #[default]
    #[serde(rename = "desc")]
    Desc,
}

impl SortOrder {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn is_ascending(self) -> bool {
        matches!(self, SortOrder::Asc)
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(ParseSortError::UnknownOrder(other.to_string())),
        }
    }
}
