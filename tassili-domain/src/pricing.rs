use crate::booking::ItemType;

/// Input-layer bound on passengers / rooms / guests.
pub const MAX_GUESTS: u32 = 20;

/// Input-layer bound on hotel nights.
pub const MAX_NIGHTS: u32 = 30;

/// Clamp a requested guest count to the form bounds. Boundary policy: the
/// store trusts its callers and never validates ranges itself.
pub fn clamp_guests(requested: u32) -> u32 {
    requested.clamp(1, MAX_GUESTS)
}

/// Clamp a requested night count to the form bounds.
pub fn clamp_nights(requested: u32) -> u32 {
    requested.clamp(1, MAX_NIGHTS)
}

/// Total price a booking must carry at write time.
///
/// Hotels price per night per room, everything else per guest:
/// `unit_price * nights * guests` vs `unit_price * guests`. Missing nights
/// on a hotel count as one night, matching the booking form default.
pub fn booking_total(item_type: ItemType, unit_price: f64, guests: u32, nights: Option<u32>) -> f64 {
    match item_type {
        ItemType::Hotel => unit_price * f64::from(nights.unwrap_or(1)) * f64::from(guests),
        ItemType::Flight | ItemType::Trip | ItemType::Activity => {
            unit_price * f64::from(guests)
        }
    }
}
