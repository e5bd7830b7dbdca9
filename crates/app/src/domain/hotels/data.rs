//! Hotel Data

use thiserror::Error;

/// Inclusive bounds of a hotel star rating.
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HotelValidationError {
    #[error("name is required")]
    Name,

    #[error("location is required")]
    Location,

    #[error("rating should be between {MIN_RATING} and {MAX_RATING}")]
    Rating,
}

/// New Hotel Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHotel {
    pub name: String,
    pub location: String,
    pub rating: u8,
}

impl NewHotel {
    /// # Errors
    ///
    /// Returns the first field that fails validation.
    pub fn validate(&self) -> Result<(), HotelValidationError> {
        if self.name.trim().is_empty() {
            return Err(HotelValidationError::Name);
        }

        if self.location.trim().is_empty() {
            return Err(HotelValidationError::Location);
        }

        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(HotelValidationError::Rating);
        }

        Ok(())
    }
}

/// Exact-match filters for hotel listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HotelFilter {
    pub rating: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_hotel() -> NewHotel {
        NewHotel {
            name: "Bellucia".to_string(),
            location: "France".to_string(),
            rating: 3,
        }
    }

    #[test]
    fn valid_hotel_passes() {
        assert_eq!(new_hotel().validate(), Ok(()));
    }

    #[test]
    fn blank_name_is_rejected() {
        let hotel = NewHotel {
            name: "  ".to_string(),
            ..new_hotel()
        };

        assert_eq!(hotel.validate(), Err(HotelValidationError::Name));
    }

    #[test]
    fn rating_outside_one_to_five_is_rejected() {
        for rating in [0, 6, u8::MAX] {
            let hotel = NewHotel {
                rating,
                ..new_hotel()
            };

            assert_eq!(
                hotel.validate(),
                Err(HotelValidationError::Rating),
                "rating {rating} should be rejected"
            );
        }
    }
}
