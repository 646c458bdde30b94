//! Room types and rooms.
//!
//! A [`RoomType`] classifies rooms by capacity, amenities, and the cleaning
//! time housekeeping needs between two stays. A [`Room`] carries its type so
//! availability checks never need to look it up.

use serde::{Deserialize, Serialize};

use crate::error::{InnkeepError, ValidationError};
use crate::id::{RoomId, RoomTypeId};

/// Classification shared by a set of rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomType {
    pub id: RoomTypeId,
    pub name: String,
    pub capacity: u32,
    pub amenities: Vec<String>,
    /// Hours of housekeeping kept free on both sides of every stay: before
    /// its check-in and after its check-out.
    pub cleaning_hours: u32,
}

impl RoomType {
    /// Create a builder for constructing a [`RoomType`].
    #[must_use]
    pub fn builder() -> RoomTypeBuilder {
        RoomTypeBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`InnkeepError::Validation`] when `name` is empty or
    /// `capacity` is zero.
    pub fn validate(&self) -> Result<(), InnkeepError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.capacity == 0 {
            return Err(ValidationError::ZeroCapacity.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`RoomType`].
#[derive(Debug, Default)]
pub struct RoomTypeBuilder {
    id: Option<RoomTypeId>,
    name: Option<String>,
    capacity: Option<u32>,
    amenities: Vec<String>,
    cleaning_hours: u32,
}

impl RoomTypeBuilder {
    #[must_use]
    pub fn id(mut self, id: RoomTypeId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    #[must_use]
    pub fn amenity(mut self, amenity: impl Into<String>) -> Self {
        self.amenities.push(amenity.into());
        self
    }

    #[must_use]
    pub fn cleaning_hours(mut self, hours: u32) -> Self {
        self.cleaning_hours = hours;
        self
    }

    /// Consume the builder, validate, and return a [`RoomType`].
    ///
    /// # Errors
    ///
    /// Returns [`InnkeepError::Validation`] if `name` is missing or empty,
    /// or if `capacity` is missing or zero.
    pub fn build(self) -> Result<RoomType, InnkeepError> {
        let room_type = RoomType {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            capacity: self.capacity.unwrap_or_default(),
            amenities: self.amenities,
            cleaning_hours: self.cleaning_hours,
        };
        room_type.validate()?;
        Ok(room_type)
    }
}

/// A bookable room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub number: String,
    pub room_type: RoomType,
}

impl Room {
    /// Create a builder for constructing a [`Room`].
    #[must_use]
    pub fn builder() -> RoomBuilder {
        RoomBuilder::default()
    }

    /// Check domain invariants, including those of the embedded type.
    ///
    /// # Errors
    ///
    /// Returns [`InnkeepError::Validation`] when `number` is empty or the
    /// room type is invalid.
    pub fn validate(&self) -> Result<(), InnkeepError> {
        if self.number.is_empty() {
            return Err(ValidationError::EmptyRoomNumber.into());
        }
        self.room_type.validate()
    }
}

/// Step-by-step builder for [`Room`].
#[derive(Debug, Default)]
pub struct RoomBuilder {
    id: Option<RoomId>,
    number: Option<String>,
    room_type: Option<RoomType>,
}

impl RoomBuilder {
    #[must_use]
    pub fn id(mut self, id: RoomId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    #[must_use]
    pub fn room_type(mut self, room_type: RoomType) -> Self {
        self.room_type = Some(room_type);
        self
    }

    /// Consume the builder, validate, and return a [`Room`].
    ///
    /// # Errors
    ///
    /// Returns [`InnkeepError::Validation`] if `number` is missing or empty,
    /// or if the room type is missing or invalid.
    pub fn build(self) -> Result<Room, InnkeepError> {
        let room_type = self.room_type.ok_or(ValidationError::MissingRoomType)?;
        let room = Room {
            id: self.id.unwrap_or_default(),
            number: self.number.unwrap_or_default(),
            room_type,
        };
        room.validate()?;
        Ok(room)
    }
}
