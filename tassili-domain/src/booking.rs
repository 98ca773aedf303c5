use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::DomainError;

/// What kind of catalog item a booking reserves. Determines the pricing
/// formula and whether `nights` is present.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Flight,
    Hotel,
    Trip,
    Activity,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Flight => "flight",
            ItemType::Hotel => "hotel",
            ItemType::Trip => "trip",
            ItemType::Activity => "activity",
        }
    }
}

impl std::str::FromStr for ItemType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flight" => Ok(ItemType::Flight),
            "hotel" => Ok(ItemType::Hotel),
            "trip" => Ok(ItemType::Trip),
            "activity" => Ok(ItemType::Activity),
            other => Err(DomainError::UnknownItemType(other.to_string())),
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contact information gathered at booking time. Opaque to pricing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A persisted intent to reserve a flight, hotel, trip, or activity.
///
/// `title`, `price`, and `image` are snapshots copied from the source item at
/// booking time; later catalog edits never alter historical bookings. The
/// serialized layout uses the camelCase key names of the stored
/// `travel_bookings` blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub id: String,
    pub item_type: ItemType,
    pub title: String,
    /// Unit price snapshot, not a live catalog reference.
    pub price: f64,
    pub date: NaiveDate,
    pub guests: u32,
    /// Present only for hotel bookings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nights: Option<u32>,
    /// Computed at write time by the caller. Contract: `price * guests`
    /// for flight/trip/activity, `price * guests * nights` for hotel.
    pub total_price: f64,
    pub extra_details: ContactDetails,
    #[serde(default)]
    pub image: Option<String>,
    /// Full source item, retained for later use.
    #[serde(default)]
    pub item_data: serde_json::Value,
    #[serde(default)]
    pub confirmed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed_at: Option<DateTime<Utc>>,
}

impl BookingRecord {
    /// Build a fresh record from caller-supplied fields. Assigns the id and
    /// `created_at`; new records are never confirmed.
    pub fn from_draft(draft: BookingDraft) -> Self {
        Self {
            id: generate_booking_id(),
            item_type: draft.item_type,
            title: draft.title,
            price: draft.price,
            date: draft.date,
            guests: draft.guests,
            nights: draft.nights,
            total_price: draft.total_price,
            extra_details: draft.extra_details,
            image: draft.image,
            item_data: draft.item_data,
            confirmed: false,
            created_at: Utc::now(),
            updated_at: None,
            confirmed_at: None,
        }
    }
}

/// Caller-supplied fields for creating a booking. The store assigns the
/// remaining record fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub item_type: ItemType,
    pub title: String,
    pub price: f64,
    pub date: NaiveDate,
    pub guests: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nights: Option<u32>,
    pub total_price: f64,
    pub extra_details: ContactDetails,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub item_data: serde_json::Value,
}

/// Field-by-field patch merged over an existing record on update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingPatch {
    pub title: Option<String>,
    pub price: Option<f64>,
    pub date: Option<NaiveDate>,
    pub guests: Option<u32>,
    pub nights: Option<u32>,
    pub total_price: Option<f64>,
    pub extra_details: Option<ContactDetails>,
    pub image: Option<String>,
    pub confirmed: Option<bool>,
    pub confirmed_at: Option<DateTime<Utc>>,
}

impl BookingPatch {
    /// Patch that marks a record confirmed and stamps `confirmed_at`.
    pub fn confirm() -> Self {
        Self {
            confirmed: Some(true),
            confirmed_at: Some(Utc::now()),
            ..Default::default()
        }
    }

    /// Merge the set fields over `record`. The caller stamps `updated_at`.
    pub fn apply(&self, record: &mut BookingRecord) {
        if let Some(title) = &self.title {
            record.title = title.clone();
        }
        if let Some(price) = self.price {
            record.price = price;
        }
        if let Some(date) = self.date {
            record.date = date;
        }
        if let Some(guests) = self.guests {
            record.guests = guests;
        }
        if let Some(nights) = self.nights {
            record.nights = Some(nights);
        }
        if let Some(total_price) = self.total_price {
            record.total_price = total_price;
        }
        if let Some(details) = &self.extra_details {
            record.extra_details = details.clone();
        }
        if let Some(image) = &self.image {
            record.image = Some(image.clone());
        }
        if let Some(confirmed) = self.confirmed {
            record.confirmed = confirmed;
        }
        if let Some(confirmed_at) = self.confirmed_at {
            record.confirmed_at = Some(confirmed_at);
        }
    }
}

/// Opaque booking id: millisecond timestamp plus a random suffix.
/// Collision-improbable, not cryptographically unique.
pub fn generate_booking_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}", Utc::now().timestamp_millis(), &suffix[..9])
}
