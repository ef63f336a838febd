//! Read-only hotel catalogue entries.
//!
//! Catalogue entries are display data for the booking UI. The booking ledger
//! never consults them; a booking's `itemId` is opaque to the lifecycle.

use serde::{Deserialize, Serialize};

/// Validation failures raised when constructing a [`Hotel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HotelValidationError {
    /// The catalogue identifier was empty.
    #[error("hotel id must not be empty")]
    EmptyId,
    /// The city was empty.
    #[error("hotel city must not be empty")]
    EmptyCity,
    /// The display name was empty.
    #[error("hotel name must not be empty")]
    EmptyName,
    /// The rating fell outside the 0–5 scale.
    #[error("hotel rating must be between 0 and 5")]
    RatingOutOfRange,
    /// The nightly rate was zero, negative, or not finite.
    #[error("hotel price must be a positive amount")]
    NonPositivePrice,
}

/// Input payload for [`Hotel::new`].
#[derive(Debug, Clone)]
pub struct HotelDraft {
    /// Catalogue identifier, referenced by bookings as `itemId`.
    pub id: String,
    /// City used for exact-match filtering.
    pub city: String,
    /// Display name.
    pub name: String,
    /// Human-readable address line.
    pub location: String,
    /// Whether the listing passed the (external) verification flow.
    pub verified: bool,
    /// Review rating on a 0–5 scale.
    pub rating: f64,
    /// Nightly rate in the payment network's unit.
    pub price: f64,
    /// Number of reviews behind the rating.
    pub reviews: u32,
    /// Cover image location.
    pub image_url: String,
}

/// A bookable hotel listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    id: String,
    city: String,
    name: String,
    location: String,
    verified: bool,
    rating: f64,
    price: f64,
    reviews: u32,
    image_url: String,
}

impl Hotel {
    /// Validate a draft and construct a catalogue entry.
    pub fn new(draft: HotelDraft) -> Result<Self, HotelValidationError> {
        if draft.id.trim().is_empty() {
            return Err(HotelValidationError::EmptyId);
        }
        if draft.city.trim().is_empty() {
            return Err(HotelValidationError::EmptyCity);
        }
        if draft.name.trim().is_empty() {
            return Err(HotelValidationError::EmptyName);
        }
        if !draft.rating.is_finite() || !(0.0..=5.0).contains(&draft.rating) {
            return Err(HotelValidationError::RatingOutOfRange);
        }
        if !draft.price.is_finite() || draft.price <= 0.0 {
            return Err(HotelValidationError::NonPositivePrice);
        }

        Ok(Self {
            id: draft.id,
            city: draft.city,
            name: draft.name,
            location: draft.location,
            verified: draft.verified,
            rating: draft.rating,
            price: draft.price,
            reviews: draft.reviews,
            image_url: draft.image_url,
        })
    }

    /// Returns the catalogue identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Returns the city.
    #[must_use]
    pub fn city(&self) -> &str {
        self.city.as_str()
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the address line.
    #[must_use]
    pub fn location(&self) -> &str {
        self.location.as_str()
    }

    /// Whether the listing is verified.
    #[must_use]
    pub fn verified(&self) -> bool {
        self.verified
    }

    /// Returns the review rating.
    #[must_use]
    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// Returns the nightly rate.
    #[must_use]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Returns the review count.
    #[must_use]
    pub fn reviews(&self) -> u32 {
        self.reviews
    }

    /// Returns the cover image location.
    #[must_use]
    pub fn image_url(&self) -> &str {
        self.image_url.as_str()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    fn sample_draft() -> HotelDraft {
        HotelDraft {
            id: "mum_001".into(),
            city: "Mumbai".into(),
            name: "Taj Mahal Palace".into(),
            location: "Colaba, Mumbai".into(),
            verified: true,
            rating: 4.8,
            price: 0.1,
            reviews: 1247,
            image_url: "https://example.com/taj.jpg".into(),
        }
    }

    #[test]
    fn accepts_a_valid_draft() {
        let hotel = Hotel::new(sample_draft()).expect("valid draft");
        assert_eq!(hotel.id(), "mum_001");
        assert_eq!(hotel.city(), "Mumbai");
        assert!(hotel.verified());
    }

    #[rstest]
    #[case::empty_id(HotelDraft { id: String::new(), ..sample_draft() }, HotelValidationError::EmptyId)]
    #[case::empty_city(HotelDraft { city: "  ".into(), ..sample_draft() }, HotelValidationError::EmptyCity)]
    #[case::empty_name(HotelDraft { name: String::new(), ..sample_draft() }, HotelValidationError::EmptyName)]
    #[case::rating_too_high(HotelDraft { rating: 5.5, ..sample_draft() }, HotelValidationError::RatingOutOfRange)]
    #[case::negative_rating(HotelDraft { rating: -0.1, ..sample_draft() }, HotelValidationError::RatingOutOfRange)]
    #[case::zero_price(HotelDraft { price: 0.0, ..sample_draft() }, HotelValidationError::NonPositivePrice)]
    fn rejects_invalid_drafts(#[case] draft: HotelDraft, #[case] expected: HotelValidationError) {
        assert_eq!(Hotel::new(draft), Err(expected));
    }
}
