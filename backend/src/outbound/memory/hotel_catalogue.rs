//! Statically seeded hotel catalogue.

use async_trait::async_trait;

use crate::domain::ports::{CityFilter, HotelCatalogue, HotelCatalogueError};
use crate::domain::{Hotel, HotelDraft, HotelValidationError};

/// Catalogue adapter over a fixed list of hotels.
#[derive(Debug, Clone)]
pub struct StaticHotelCatalogue {
    hotels: Vec<Hotel>,
}

impl StaticHotelCatalogue {
    /// Wrap an explicit hotel list.
    #[must_use]
    pub fn new(hotels: Vec<Hotel>) -> Self {
        Self { hotels }
    }

    /// Catalogue seeded with the demo's fixture listings.
    pub fn seeded() -> Result<Self, HotelValidationError> {
        let hotels = seed_drafts()
            .into_iter()
            .map(Hotel::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(hotels))
    }
}

#[async_trait]
impl HotelCatalogue for StaticHotelCatalogue {
    async fn list_hotels(&self, filter: &CityFilter) -> Result<Vec<Hotel>, HotelCatalogueError> {
        Ok(self
            .hotels
            .iter()
            .filter(|hotel| filter.matches(hotel.city()))
            .cloned()
            .collect())
    }
}

fn seed_draft(
    id: &str,
    city: &str,
    name: &str,
    location: &str,
    rating: f64,
    price: f64,
    reviews: u32,
    image_url: &str,
) -> HotelDraft {
    HotelDraft {
        id: id.to_owned(),
        city: city.to_owned(),
        name: name.to_owned(),
        location: location.to_owned(),
        verified: true,
        rating,
        price,
        reviews,
        image_url: image_url.to_owned(),
    }
}

fn seed_drafts() -> Vec<HotelDraft> {
    vec![
        seed_draft(
            "mum_001",
            "Mumbai",
            "Taj Mahal Palace",
            "Colaba, Mumbai",
            4.8,
            0.1,
            1247,
            "https://images.unsplash.com/photo-1566073771259-6a8506099945?auto=format&fit=crop&w=1000&q=80",
        ),
        seed_draft(
            "mum_002",
            "Mumbai",
            "The Oberoi",
            "Nariman Point, Mumbai",
            4.9,
            0.2,
            892,
            "https://images.unsplash.com/photo-1582719508461-905c673771fd?auto=format&fit=crop&w=1000&q=80",
        ),
        seed_draft(
            "pun_001",
            "Pune",
            "Conrad Pune",
            "Koregaon Park, Pune",
            4.7,
            0.15,
            520,
            "https://images.unsplash.com/photo-1564501049412-61c2a3083791?auto=format&fit=crop&w=1000&q=80",
        ),
        seed_draft(
            "pun_002",
            "Pune",
            "Ritz-Carlton",
            "Yerwada, Pune",
            4.9,
            0.25,
            310,
            "https://images.unsplash.com/photo-1542314831-068cd1dbfeeb?auto=format&fit=crop&w=1000&q=80",
        ),
        seed_draft(
            "nag_001",
            "Nagpur",
            "Radisson Blu",
            "Wardha Road, Nagpur",
            4.5,
            0.12,
            410,
            "https://images.unsplash.com/photo-1571003123894-1f0594d2b5d9?auto=format&fit=crop&w=1000&q=80",
        ),
        seed_draft(
            "nas_001",
            "Nashik",
            "Gateway Hotel",
            "Ambad, Nashik",
            4.6,
            0.11,
            205,
            "https://images.unsplash.com/photo-1520250497591-112f2f40a3f4?auto=format&fit=crop&w=1000&q=80",
        ),
        seed_draft(
            "aur_001",
            "Aurangabad",
            "Vivanta",
            "Rauzabag, Aurangabad",
            4.8,
            0.14,
            180,
            "https://images.unsplash.com/photo-1551882547-ff40c63fe5fa?auto=format&fit=crop&w=1000&q=80",
        ),
        seed_draft(
            "tha_001",
            "Thane",
            "Planet Hollywood",
            "Ghodbunder Rd, Thane",
            4.4,
            0.13,
            150,
            "https://images.unsplash.com/photo-1517840901100-8179e982acb7?auto=format&fit=crop&w=1000&q=80",
        ),
    ]
}
