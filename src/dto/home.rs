//! Data shaped for the home page: hero counters, the VIP strip, and the
//! paginated room grid with card-level placeholder handling.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::room::Room;
use crate::pagination::{PageInfo, Paginated};

/// Fallback asset shown when a posting has no photo.
pub const FALLBACK_IMAGE: &str = "/assets/images/not_found.png";
/// Price label shown when a posting does not state a price.
pub const PRICE_PLACEHOLDER: &str = "Liên hệ";
/// Title shown when a posting has none.
pub const TITLE_PLACEHOLDER: &str = "Phòng trọ";
/// Age badge shown when the approval date is missing.
pub const AGE_PLACEHOLDER: &str = "Mới đăng";

/// Headline counters for the hero section.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListingStats {
    /// All approved postings, rented ones included.
    pub total_rooms: usize,
    pub available_rooms: usize,
    pub vip_rooms: usize,
}

/// A room flattened for card rendering, with placeholders filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomCard {
    pub id: i32,
    pub title: String,
    pub price_label: String,
    pub area: Option<u32>,
    /// Address shortened to the part before the first comma.
    pub short_address: Option<String>,
    pub description: Option<String>,
    pub authorname: Option<String>,
    pub phone: Option<String>,
    pub image: String,
    pub is_vip: bool,
    pub date_approved: Option<NaiveDateTime>,
}

impl RoomCard {
    /// Human age of the posting relative to `now`, matching the card badge.
    pub fn age_label(&self, now: NaiveDateTime) -> String {
        let Some(approved) = self.date_approved else {
            return AGE_PLACEHOLDER.to_string();
        };

        let minutes = (now - approved).num_minutes().max(0);
        let hours = minutes / 60;
        let days = hours / 24;

        if days > 0 {
            format!("{days} ngày trước")
        } else if hours > 0 {
            format!("{hours} giờ {} phút trước", minutes % 60)
        } else {
            format!("{minutes} phút trước")
        }
    }
}

impl From<Room> for RoomCard {
    fn from(room: Room) -> Self {
        Self {
            id: room.id,
            title: room.title.unwrap_or_else(|| TITLE_PLACEHOLDER.to_string()),
            price_label: room
                .price
                .map(format_vnd)
                .unwrap_or_else(|| PRICE_PLACEHOLDER.to_string()),
            area: room.area,
            short_address: room.address.as_deref().map(short_address),
            description: room.description,
            authorname: room.authorname,
            phone: room.phone,
            image: room
                .actual_file
                .unwrap_or_else(|| FALLBACK_IMAGE.to_string()),
            is_vip: room.is_vip,
            date_approved: room.date_approved,
        }
    }
}

/// Everything the home page needs in one load.
#[derive(Debug, Serialize)]
pub struct HomePageData {
    pub stats: ListingStats,
    pub vip_rooms: Vec<RoomCard>,
    pub rooms: Paginated<RoomCard>,
    pub page_info: PageInfo,
}

/// Formats a VND amount with dot thousand separators, e.g. `2.500.000 ₫`.
fn format_vnd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 4);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }

    out.push_str(" ₫");
    out
}

fn short_address(address: &str) -> String {
    match address.find(',') {
        Some(idx) => address[..idx].trim().to_string(),
        None => address.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};

    use super::*;

    fn sample_room() -> Room {
        Room {
            id: 1,
            title: Some("Phòng đầy đủ nội thất".to_string()),
            price: Some(2_500_000),
            area: Some(25),
            address: Some("12 Nguyễn Trãi, Thanh Xuân, Hà Nội".to_string()),
            actual_file: Some("room-1.jpg".to_string()),
            ..Room::default()
        }
    }

    #[test]
    fn card_carries_the_room_data() {
        let card = RoomCard::from(sample_room());

        assert_eq!(card.title, "Phòng đầy đủ nội thất");
        assert_eq!(card.price_label, "2.500.000 ₫");
        assert_eq!(card.short_address.as_deref(), Some("12 Nguyễn Trãi"));
        assert_eq!(card.image, "room-1.jpg");
    }

    #[test]
    fn missing_fields_degrade_to_placeholders() {
        let card = RoomCard::from(Room::default());

        assert_eq!(card.title, TITLE_PLACEHOLDER);
        assert_eq!(card.price_label, PRICE_PLACEHOLDER);
        assert_eq!(card.short_address, None);
        assert_eq!(card.image, FALLBACK_IMAGE);
    }

    #[test]
    fn vnd_formatting_groups_thousands() {
        assert_eq!(format_vnd(0), "0 ₫");
        assert_eq!(format_vnd(950), "950 ₫");
        assert_eq!(format_vnd(2_500_000), "2.500.000 ₫");
        assert_eq!(format_vnd(999_999_999), "999.999.999 ₫");
    }

    #[test]
    fn address_without_a_comma_is_kept_whole() {
        assert_eq!(short_address(" Quận 1 "), "Quận 1");
        assert_eq!(short_address("12 Lê Lợi, Huế"), "12 Lê Lợi");
    }

    #[test]
    fn age_label_steps_through_units() {
        let approved = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let card = RoomCard::from(Room {
            date_approved: Some(approved),
            ..Room::default()
        });

        assert_eq!(card.age_label(approved + Duration::minutes(5)), "5 phút trước");
        assert_eq!(
            card.age_label(approved + Duration::minutes(125)),
            "2 giờ 5 phút trước"
        );
        assert_eq!(card.age_label(approved + Duration::days(3)), "3 ngày trước");

        let undated = RoomCard::from(Room::default());
        assert_eq!(undated.age_label(approved), AGE_PLACEHOLDER);
    }
}
