//! Driven port for the read-only hotel catalogue.

use async_trait::async_trait;

use crate::domain::Hotel;

/// Errors raised by catalogue adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HotelCatalogueError {
    /// Catalogue connection could not be established.
    #[error("hotel catalogue connection failed: {message}")]
    Connection {
        /// Adapter-specific failure description.
        message: String,
    },
    /// Query failed during execution.
    #[error("hotel catalogue query failed: {message}")]
    Query {
        /// Adapter-specific failure description.
        message: String,
    },
}

impl HotelCatalogueError {
    /// Construct a [`HotelCatalogueError::Connection`] error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Construct a [`HotelCatalogueError::Query`] error.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// City restriction applied to catalogue listings.
///
/// The wire protocol uses the sentinel value `All` (or an absent parameter)
/// to request the unfiltered catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CityFilter {
    /// No restriction; list every hotel.
    All,
    /// Exact-match restriction to one city.
    City(String),
}

impl CityFilter {
    /// Build a filter from an optional query-string value.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::ports::CityFilter;
    ///
    /// assert_eq!(CityFilter::from_query(None), CityFilter::All);
    /// assert_eq!(CityFilter::from_query(Some("All".into())), CityFilter::All);
    /// assert_eq!(
    ///     CityFilter::from_query(Some("Pune".into())),
    ///     CityFilter::City("Pune".into())
    /// );
    /// ```
    #[must_use]
    pub fn from_query(value: Option<String>) -> Self {
        match value {
            None => Self::All,
            Some(city) if city == "All" => Self::All,
            Some(city) => Self::City(city),
        }
    }

    /// Whether a hotel in the given city passes the filter.
    #[must_use]
    pub fn matches(&self, city: &str) -> bool {
        match self {
            Self::All => true,
            Self::City(wanted) => wanted == city,
        }
    }
}

/// Port for reading hotel listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelCatalogue: Send + Sync {
    /// List hotels passing the filter, in catalogue order.
    ///
    /// An empty catalogue yields an empty vector rather than an error.
    async fn list_hotels(&self, filter: &CityFilter) -> Result<Vec<Hotel>, HotelCatalogueError>;
}

/// Fixture implementation for tests that do not exercise the catalogue.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureHotelCatalogue;

#[async_trait]
impl HotelCatalogue for FixtureHotelCatalogue {
    async fn list_hotels(&self, _filter: &CityFilter) -> Result<Vec<Hotel>, HotelCatalogueError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::absent(None, CityFilter::All)]
    #[case::sentinel(Some("All".to_owned()), CityFilter::All)]
    #[case::city(Some("Pune".to_owned()), CityFilter::City("Pune".to_owned()))]
    fn from_query_maps_the_sentinel(#[case] value: Option<String>, #[case] expected: CityFilter) {
        assert_eq!(CityFilter::from_query(value), expected);
    }

    #[rstest]
    fn matches_is_exact() {
        let filter = CityFilter::City("Pune".to_owned());
        assert!(filter.matches("Pune"));
        assert!(!filter.matches("pune"));
        assert!(!filter.matches("Mumbai"));
        assert!(CityFilter::All.matches("anywhere"));
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_catalogue_is_empty() {
        let catalogue = FixtureHotelCatalogue;
        let hotels = catalogue
            .list_hotels(&CityFilter::All)
            .await
            .expect("fixture list succeeds");
        assert!(hotels.is_empty());
    }

    #[rstest]
    fn error_constructors_format_messages() {
        let err = HotelCatalogueError::connection("seed missing");
        assert!(err.to_string().contains("seed missing"));
    }
}
