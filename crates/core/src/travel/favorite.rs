//! Favorite destinations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use travelmate_shared::types::FavoriteId;

use super::error::TravelError;

/// A destination the traveller wants to revisit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteDestination {
    /// Favorite ID.
    pub id: FavoriteId,
    /// Destination name.
    pub name: String,
    /// Country, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// When it was added.
    pub added_at: DateTime<Utc>,
}

impl FavoriteDestination {
    /// Creates a favorite. A blank country is stored as `None`.
    ///
    /// # Errors
    ///
    /// Returns `TravelError::EmptyDestinationName` if `name` is blank.
    pub fn new(
        name: &str,
        country: Option<&str>,
        added_at: DateTime<Utc>,
    ) -> Result<Self, TravelError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TravelError::EmptyDestinationName);
        }

        Ok(Self {
            id: FavoriteId::new(),
            name: name.to_string(),
            country: country
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(ToString::to_string),
            added_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_fields() {
        let fav = FavoriteDestination::new(" Kyoto ", Some(" Japan "), Utc::now()).unwrap();
        assert_eq!(fav.name, "Kyoto");
        assert_eq!(fav.country.as_deref(), Some("Japan"));
    }

    #[test]
    fn test_blank_country_is_none() {
        let fav = FavoriteDestination::new("Reykjavik", Some(""), Utc::now()).unwrap();
        assert_eq!(fav.country, None);
    }

    #[test]
    fn test_blank_name_rejected() {
        assert_eq!(
            FavoriteDestination::new(" ", None, Utc::now()),
            Err(TravelError::EmptyDestinationName)
        );
    }
}
